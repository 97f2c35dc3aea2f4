//! Combo evaluation and full-battle throughput.
//!
//! ```bash
//! cargo bench --bench combo_eval
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elemental_battle::battle::{BattleController, BattleStatus};
use elemental_battle::cards::{CardDefinition, Element};
use elemental_battle::combo::ComboEvaluator;
use elemental_battle::core::BattleConfig;

fn selections() -> Vec<Vec<CardDefinition>> {
    let card = CardDefinition::new;
    vec![
        vec![card(Element::Fire, 7)],
        vec![card(Element::Fire, 7), card(Element::Water, 8)],
        vec![card(Element::Fire, 6), card(Element::Water, 6), card(Element::Wind, 6)],
        vec![
            card(Element::Fire, 3),
            card(Element::Water, 5),
            card(Element::Fire, 9),
            card(Element::Water, 1),
        ],
        vec![
            card(Element::Fire, 4),
            card(Element::Water, 4),
            card(Element::Wind, 4),
            card(Element::Earth, 4),
        ],
    ]
}

fn bench_evaluate(c: &mut Criterion) {
    let selections = selections();
    c.bench_function("evaluate_combo", |b| {
        b.iter(|| {
            for cards in &selections {
                black_box(ComboEvaluator::evaluate(black_box(cards)));
            }
        })
    });
}

/// Attack with the first card of every hand until the battle ends.
fn play_out(seed: u64) -> BattleStatus {
    let Ok(mut battle) = BattleController::new(BattleConfig::default()) else {
        return BattleStatus::NotStarted;
    };
    battle.start_battle_seeded(seed);
    battle.acknowledge_animation_complete();

    while battle.status() == BattleStatus::InProgress {
        let Some(first) = battle.state().hand.cards().first().map(|c| c.id) else {
            break;
        };
        battle.toggle_selection(first);
        battle.request_attack();
        battle.acknowledge_animation_complete();
    }
    battle.take_events();
    battle.status()
}

fn bench_battle(c: &mut Criterion) {
    c.bench_function("full_battle", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(play_out(seed))
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_battle);
criterion_main!(benches);
