//! Battle bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use serde::Serialize;

use crate::battle::{ActionOutcome, BattleController, Command};
use crate::cards::HandCardId;
use crate::core::{BattleConfig, ReshufflePolicy};

use super::py_cards::{card_tuple, parse_card};

fn to_json<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// `None` when accepted, otherwise the rejection reason.
fn outcome(result: ActionOutcome) -> Option<String> {
    result.rejection().map(|reason| reason.to_string())
}

/// Python wrapper for BattleController.
///
/// Commands return `None` when accepted and a reason string when rejected.
#[pyclass(name = "Battle")]
pub struct PyBattle {
    inner: BattleController,
}

#[pymethods]
impl PyBattle {
    /// Create a battle. Call `start` to deal the first hand.
    ///
    /// # Arguments
    /// - cards_per_hand: Hand size after a full draw
    /// - max_selection: Selection cap (1-4)
    /// - starting_attacks: Attacks available
    /// - starting_discards: Discards available
    /// - boss_max_health: Boss starting health
    /// - reshuffle: Recycle the discard pile when the draw pile runs out
    #[new]
    #[pyo3(signature = (
        cards_per_hand = 6,
        max_selection = 4,
        starting_attacks = 4,
        starting_discards = 3,
        boss_max_health = 100,
        reshuffle = false
    ))]
    fn new(
        cards_per_hand: usize,
        max_selection: usize,
        starting_attacks: u32,
        starting_discards: u32,
        boss_max_health: u32,
        reshuffle: bool,
    ) -> PyResult<Self> {
        let policy = if reshuffle {
            ReshufflePolicy::WhenEmpty
        } else {
            ReshufflePolicy::Never
        };
        let config = BattleConfig::builder()
            .cards_per_hand(cards_per_hand)
            .max_selection(max_selection)
            .starting_attacks(starting_attacks)
            .starting_discards(starting_discards)
            .boss_max_health(boss_max_health)
            .reshuffle_policy(policy)
            .build()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let inner =
            BattleController::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Start (or restart) the battle. A random seed is used when omitted.
    #[pyo3(signature = (seed = None))]
    fn start(&mut self, seed: Option<u64>) {
        match seed {
            Some(seed) => self.inner.start_battle_seeded(seed),
            None => self.inner.start_battle(),
        }
    }

    /// Start with an explicit draw order of all 40 `(element, value)` cards.
    #[pyo3(signature = (order, seed = 0))]
    fn start_with_deck(&mut self, order: Vec<(String, u8)>, seed: u64) -> PyResult<()> {
        let order = order
            .into_iter()
            .map(parse_card)
            .collect::<PyResult<Vec<_>>>()?;
        self.inner
            .start_battle_with_deck(order, seed)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn toggle(&mut self, card_id: u32) -> Option<String> {
        outcome(self.inner.toggle_selection(HandCardId::new(card_id)))
    }

    fn draw(&mut self) -> Option<String> {
        outcome(self.inner.request_draw())
    }

    fn attack(&mut self) -> Option<String> {
        outcome(self.inner.request_attack())
    }

    fn discard(&mut self) -> Option<String> {
        outcome(self.inner.request_discard())
    }

    fn acknowledge(&mut self) -> Option<String> {
        outcome(self.inner.acknowledge_animation_complete())
    }

    /// Apply a JSON-encoded command, e.g. `"RequestAttack"`.
    fn handle(&mut self, command: &str) -> PyResult<Option<String>> {
        let command: Command =
            serde_json::from_str(command).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(outcome(self.inner.handle(command)))
    }

    /// Drain queued events as JSON strings.
    fn take_events(&mut self) -> PyResult<Vec<String>> {
        self.inner.take_events().iter().map(to_json).collect()
    }

    /// Hand cards in table order as `(id, element, value, table_position)`.
    fn hand(&self) -> Vec<(u32, String, u8, usize)> {
        self.inner
            .state()
            .hand
            .cards()
            .iter()
            .map(|c| {
                let (element, value) = card_tuple(c.card);
                (c.id.raw(), element, value, c.table_position)
            })
            .collect()
    }

    /// Selected card ids in selection order.
    fn selected(&self) -> Vec<u32> {
        self.inner
            .state()
            .hand
            .selected_ids()
            .iter()
            .map(|id| id.raw())
            .collect()
    }

    /// Combo preview for the current selection as JSON, or `None`.
    fn preview(&self) -> PyResult<Option<String>> {
        self.inner.combo_preview().as_ref().map(to_json).transpose()
    }

    /// Full table snapshot as JSON.
    fn snapshot(&self) -> PyResult<String> {
        to_json(&self.inner.snapshot())
    }

    /// Accepted commands since the battle started, as JSON.
    fn history(&self) -> PyResult<String> {
        let commands: Vec<Command> = self.inner.history().iter().map(|r| r.command).collect();
        to_json(&commands)
    }

    fn can_attack(&self) -> bool {
        self.inner.can_attack()
    }

    fn can_discard(&self) -> bool {
        self.inner.can_discard()
    }

    fn can_draw(&self) -> bool {
        self.inner.can_draw()
    }

    #[getter]
    fn status(&self) -> String {
        format!("{:?}", self.inner.status())
    }

    #[getter]
    fn busy(&self) -> bool {
        self.inner.is_busy()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    #[getter]
    fn boss_health(&self) -> u32 {
        self.inner.state().boss.health()
    }

    #[getter]
    fn attacks_left(&self) -> u32 {
        self.inner.state().resources.attacks_left()
    }

    #[getter]
    fn discards_left(&self) -> u32 {
        self.inner.state().resources.discards_left()
    }

    #[getter]
    fn deck_remaining(&self) -> usize {
        self.inner.state().deck.remaining_count()
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "Battle(status={:?}, boss={}/{}, attacks={}, discards={})",
            state.status,
            state.boss.health(),
            state.boss.max_health(),
            state.resources.attacks_left(),
            state.resources.discards_left()
        )
    }
}
