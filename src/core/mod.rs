//! Core engine types: RNG, configuration, setup errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BattleConfig, BattleConfigBuilder, ReshufflePolicy, MAX_COMBO_SIZE};
pub use error::{ConfigError, DeckError, ParseElementError, SetupError};
pub use rng::GameRng;
