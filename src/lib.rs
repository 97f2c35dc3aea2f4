//! # elemental-battle
//!
//! Rules engine for a single-player elemental card battle against a boss.
//!
//! A 40-card deck holds every element (fire, water, wind, earth) at every
//! value 1 through 10. The player draws a hand, selects up to four cards and
//! either attacks (combo damage to the boss) or discards (replacement cards
//! without damage). The boss falls at zero health; running out of attacks
//! first is a defeat.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering or timing. The engine emits
//!    [`BattleEvent`]s and waits for an explicit acknowledgement after each
//!    dealing action.
//!
//! 2. **Rejections, not errors**: Illegal requests return
//!    [`ActionOutcome::Rejected`] and leave the state untouched.
//!
//! 3. **Deterministic**: Every shuffle comes from a seeded [`GameRng`], so
//!    a seed plus the accepted command history reproduces a battle exactly.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, setup errors
//! - `cards`: Elements, card definitions, hand instances
//! - `zones`: Deck piles and the hand selector
//! - `combo`: Combo classification and damage
//! - `battle`: Controller, state, commands and events

pub mod battle;
pub mod cards;
pub mod combo;
pub mod core;
pub mod zones;

#[cfg(feature = "python")]
pub mod python;

pub use crate::core::{
    BattleConfig, BattleConfigBuilder, ConfigError, DeckError, GameRng, ReshufflePolicy,
    SetupError, MAX_COMBO_SIZE,
};

pub use crate::cards::{CardDefinition, CardView, Element, HandCard, HandCardId, DECK_SIZE};

pub use crate::zones::{DeckManager, HandSelector, SelectionChange};

pub use crate::combo::{ComboEvaluator, ComboKind, ComboPreview, Multiplier, Reaction};

pub use crate::battle::{
    ActionOutcome, ActionRecord, BattleController, BattleEvent, BattleResult, BattleSnapshot,
    BattleState, BattleStatus, BossState, Command, RejectReason, ResourceTracker,
};
