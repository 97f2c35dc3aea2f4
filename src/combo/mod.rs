//! Combo evaluation for selected cards.
//!
//! Pure and stateless: callable for UI previews without any battle.

pub mod evaluator;

pub use evaluator::{ComboEvaluator, ComboKind, ComboPreview, Multiplier, Reaction};
