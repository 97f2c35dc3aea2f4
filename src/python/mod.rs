//! Python bindings for the elemental battle engine.
//!
//! # Quick Start
//!
//! ```python
//! import elemental_battle as eb
//!
//! battle = eb.Battle(boss_max_health=100)
//! battle.start(seed=42)
//! battle.acknowledge()
//!
//! first = battle.hand()[0][0]
//! battle.toggle(first)
//! print(battle.preview())
//! battle.attack()
//!
//! for event in battle.take_events():
//!     print(event)
//! ```
//!
//! Structured values (events, previews, snapshots) cross the boundary as
//! JSON strings.

use pyo3::prelude::*;

mod py_battle;
mod py_cards;

pub use py_battle::*;
pub use py_cards::*;

/// elemental_battle: Headless rules engine for the elemental card battle.
#[pymodule]
fn elemental_battle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBattle>()?;
    m.add_function(wrap_pyfunction!(evaluate_combo, m)?)?;
    m.add_function(wrap_pyfunction!(catalog, m)?)?;
    m.add("DECK_SIZE", crate::cards::DECK_SIZE)?;
    Ok(())
}
