//! The battle aggregate: deck, hand, resources, boss, status.
//!
//! Owned by `BattleController` and only mutated through it. Callers get
//! read access via `BattleController::state`.

use serde::{Deserialize, Serialize};

use super::boss::BossState;
use super::events::BattleResult;
use super::resources::ResourceTracker;
use crate::core::{BattleConfig, GameRng};
use crate::zones::{DeckManager, HandSelector};

/// Battle state machine position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleStatus {
    /// No battle has been started yet.
    #[default]
    NotStarted,
    InProgress,
    Victory,
    Defeat,
}

impl BattleStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, BattleStatus::Victory | BattleStatus::Defeat)
    }

    #[must_use]
    pub fn result(self) -> Option<BattleResult> {
        match self {
            BattleStatus::Victory => Some(BattleResult::Victory),
            BattleStatus::Defeat => Some(BattleResult::Defeat),
            _ => None,
        }
    }
}

impl From<BattleResult> for BattleStatus {
    fn from(result: BattleResult) -> Self {
        match result {
            BattleResult::Victory => BattleStatus::Victory,
            BattleResult::Defeat => BattleStatus::Defeat,
        }
    }
}

/// Everything a battle owns.
#[derive(Clone, Debug)]
pub struct BattleState {
    pub status: BattleStatus,
    pub deck: DeckManager,
    pub hand: HandSelector,
    pub resources: ResourceTracker,
    pub boss: BossState,
}

impl BattleState {
    /// Fresh state for `config`, with an uninitialized deck.
    #[must_use]
    pub fn new(config: &BattleConfig, rng: &GameRng) -> Self {
        Self {
            status: BattleStatus::NotStarted,
            deck: DeckManager::new(rng.for_context("deck"), config.reshuffle_policy),
            hand: HandSelector::new(config.max_selection),
            resources: ResourceTracker::new(config.starting_attacks, config.starting_discards),
            boss: BossState::new(config.boss_max_health),
        }
    }

    /// Cards across draw pile, discard pile and hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.remaining_count() + self.deck.discard_count() + self.hand.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        assert!(!BattleStatus::NotStarted.is_terminal());
        assert!(!BattleStatus::InProgress.is_terminal());
        assert!(BattleStatus::Victory.is_terminal());
        assert!(BattleStatus::Defeat.is_terminal());

        assert_eq!(BattleStatus::InProgress.result(), None);
        assert_eq!(BattleStatus::Defeat.result(), Some(BattleResult::Defeat));
        assert_eq!(BattleStatus::from(BattleResult::Victory), BattleStatus::Victory);
    }

    #[test]
    fn test_new_state() {
        let state = BattleState::new(&BattleConfig::default(), &GameRng::new(1));
        assert_eq!(state.status, BattleStatus::NotStarted);
        assert_eq!(state.boss.health(), 100);
        assert_eq!(state.resources.attacks_left(), 4);
        assert_eq!(state.resources.discards_left(), 3);
        assert_eq!(state.card_count(), 0);
    }
}
