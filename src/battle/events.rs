//! Events emitted to the presentation layer.
//!
//! The engine queues events as state changes; the presentation layer
//! drains them with `BattleController::take_events` and renders or
//! animates them. No further game logic is expected of it.

use serde::{Deserialize, Serialize};

use crate::cards::{CardView, Element, HandCardId};
use crate::combo::{ComboKind, ComboPreview};

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    /// The boss reached zero health.
    Victory,
    /// Attacks ran out with the boss still standing.
    Defeat,
}

/// A state change the presentation layer may want to show.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// Cards dealt face-down to their table slots, either a full hand or
    /// replacements for a discarded selection.
    HandDrawn { cards: Vec<CardView> },

    /// A drawn card may now be shown face-up. Emitted once the draw
    /// animation has been acknowledged.
    CardRevealed {
        id: HandCardId,
        element: Element,
        value: u8,
    },

    /// Selected cards left the hand for the discard pile.
    CardsDiscarded { ids: Vec<HandCardId> },

    /// The selection changed; `preview` is `None` when it is empty.
    SelectionChanged {
        selected: Vec<HandCardId>,
        preview: Option<ComboPreview>,
    },

    /// An attack resolved.
    AttackResolved {
        combo: ComboKind,
        base: u32,
        damage: u32,
    },

    BossHealthChanged { current: u32, max: u32 },

    DeckCountChanged { remaining: usize, total: usize },

    /// The discard pile was shuffled back into the draw pile.
    DeckReshuffled { count: usize },

    ResourceChanged { attacks_left: u32, discards_left: u32 },

    BattleEnded { result: BattleResult },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = BattleEvent::BossHealthChanged { current: 67, max: 100 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"BossHealthChanged":{"current":67,"max":100}}"#);

        let back: BattleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_battle_ended_serialization() {
        let event = BattleEvent::BattleEnded { result: BattleResult::Victory };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"BattleEnded":{"result":"Victory"}}"#);
    }
}
