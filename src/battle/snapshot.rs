//! Serializable render snapshot of a battle.

use serde::{Deserialize, Serialize};

use super::state::{BattleState, BattleStatus};
use crate::cards::{CardView, HandCardId, DECK_SIZE};
use crate::combo::ComboPreview;

/// Everything the presentation layer needs to redraw the table from scratch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub status: BattleStatus,
    pub busy: bool,
    /// Hand cards in table order.
    pub hand: Vec<CardView>,
    /// Selected ids in selection order.
    pub selected: Vec<HandCardId>,
    pub preview: Option<ComboPreview>,
    pub boss_health: u32,
    pub boss_max_health: u32,
    pub attacks_left: u32,
    pub discards_left: u32,
    pub deck_remaining: usize,
    pub deck_total: usize,
    pub discard_count: usize,
}

impl BattleSnapshot {
    #[must_use]
    pub fn capture(state: &BattleState, busy: bool) -> Self {
        Self {
            status: state.status,
            busy,
            hand: state.hand.cards().iter().map(|c| c.view()).collect(),
            selected: state.hand.selected_ids().to_vec(),
            preview: ComboPreview::of(&state.hand.selected_definitions()),
            boss_health: state.boss.health(),
            boss_max_health: state.boss.max_health(),
            attacks_left: state.resources.attacks_left(),
            discards_left: state.resources.discards_left(),
            deck_remaining: state.deck.remaining_count(),
            deck_total: DECK_SIZE,
            discard_count: state.deck.discard_count(),
        }
    }
}
