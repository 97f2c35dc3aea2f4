//! Setup-time error types.
//!
//! Gameplay requests never fail with an error: illegal requests are
//! rejected with an [`ActionOutcome`](crate::battle::ActionOutcome). These
//! errors only surface while configuring or seeding a battle.

use thiserror::Error;

/// Invalid `BattleConfig` values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cards per hand must be between 1 and {deck_size}, got {value}")]
    CardsPerHand { value: usize, deck_size: usize },

    #[error("max selection must be between 1 and {limit}, got {value}")]
    MaxSelection { value: usize, limit: usize },

    #[error("max selection {max_selection} exceeds cards per hand {cards_per_hand}")]
    SelectionExceedsHand {
        max_selection: usize,
        cards_per_hand: usize,
    },

    #[error("a battle needs at least one attack")]
    NoAttacks,

    #[error("boss max health must be positive")]
    NoBossHealth,
}

/// A caller-supplied draw order that is not a permutation of the card catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck must contain exactly {expected} cards, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("card {0} appears more than once")]
    Duplicate(String),

    #[error("card {0} is not part of the catalog")]
    UnknownCard(String),
}

/// Either setup step failed while rebuilding a battle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Unknown element name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown element: {0:?}")]
pub struct ParseElementError(pub String);
