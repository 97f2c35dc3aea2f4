//! Property tests over random command sequences.
//!
//! Whatever the player does, cards are never created or destroyed,
//! counters only go down, the selection respects its cap, and rejected
//! requests leave the table untouched.

use proptest::prelude::*;

use elemental_battle::battle::{BattleController, BattleStatus};
use elemental_battle::cards::DECK_SIZE;
use elemental_battle::core::{BattleConfig, ReshufflePolicy};

#[derive(Clone, Copy, Debug)]
enum Op {
    /// Toggle the hand card at this index (modulo hand size).
    Toggle(usize),
    Draw,
    Attack,
    Discard,
    Acknowledge,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..8).prop_map(Op::Toggle),
        1 => Just(Op::Draw),
        2 => Just(Op::Attack),
        2 => Just(Op::Discard),
        3 => Just(Op::Acknowledge),
    ]
}

fn apply(battle: &mut BattleController, op: Op) -> bool {
    let outcome = match op {
        Op::Toggle(index) => {
            let cards = battle.state().hand.cards();
            if cards.is_empty() {
                return false;
            }
            let id = cards[index % cards.len()].id;
            battle.toggle_selection(id)
        }
        Op::Draw => battle.request_draw(),
        Op::Attack => battle.request_attack(),
        Op::Discard => battle.request_discard(),
        Op::Acknowledge => battle.acknowledge_animation_complete(),
    };
    outcome.is_accepted()
}

proptest! {
    #[test]
    fn prop_battle_invariants(
        seed in any::<u64>(),
        reshuffle in any::<bool>(),
        ops in proptest::collection::vec(op_strategy(), 0..80),
    ) {
        let policy = if reshuffle { ReshufflePolicy::WhenEmpty } else { ReshufflePolicy::Never };
        let config = BattleConfig::builder().reshuffle_policy(policy).build().unwrap();
        let mut battle = BattleController::new(config.clone()).unwrap();
        battle.start_battle_seeded(seed);

        let mut previous = battle.snapshot();

        for op in ops {
            let before = battle.snapshot();
            let accepted = apply(&mut battle, op);
            let after = battle.snapshot();

            if !accepted {
                prop_assert_eq!(&after, &before);
            }

            let state = battle.state();
            prop_assert_eq!(state.card_count(), DECK_SIZE);
            prop_assert!(state.hand.selection_len() <= config.max_selection);
            prop_assert!(state.hand.len() <= config.cards_per_hand);

            prop_assert!(after.attacks_left <= config.starting_attacks);
            prop_assert!(after.discards_left <= config.starting_discards);
            prop_assert!(after.boss_health <= config.boss_max_health);

            prop_assert!(after.attacks_left <= previous.attacks_left);
            prop_assert!(after.discards_left <= previous.discards_left);
            prop_assert!(after.boss_health <= previous.boss_health);

            if previous.status.is_terminal() {
                prop_assert_eq!(after.status, previous.status);
            }
            if after.status == BattleStatus::Victory {
                prop_assert_eq!(after.boss_health, 0);
            }
            if after.status == BattleStatus::Defeat {
                prop_assert_eq!(after.attacks_left, 0);
                prop_assert!(after.boss_health > 0);
            }

            previous = after;
        }
    }

    #[test]
    fn prop_replay_matches(
        seed in any::<u64>(),
        reshuffle in any::<bool>(),
        discards in 3u32..20,
        ops in proptest::collection::vec(op_strategy(), 0..120),
    ) {
        let policy = if reshuffle { ReshufflePolicy::WhenEmpty } else { ReshufflePolicy::Never };
        let config = BattleConfig::builder()
            .reshuffle_policy(policy)
            .starting_discards(discards)
            .build()
            .unwrap();
        let mut battle = BattleController::new(config.clone()).unwrap();
        battle.start_battle_seeded(seed);
        for op in ops {
            apply(&mut battle, op);
        }

        let commands: Vec<_> = battle.history().iter().map(|r| r.command).collect();
        let replayed = BattleController::replay(config, seed, commands).unwrap();

        prop_assert_eq!(replayed.snapshot(), battle.snapshot());
    }
}
