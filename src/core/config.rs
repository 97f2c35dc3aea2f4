//! Battle configuration.
//!
//! `BattleConfig::default()` is the canonical rule set: a 40-card deck,
//! six cards per hand, up to four selected, four attacks, three discards
//! and a boss with 100 health. Hosts can tweak the numbers through
//! [`BattleConfigBuilder`]; the deck composition itself is fixed.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::DECK_SIZE;

/// Largest selection the combo table has entries for.
pub const MAX_COMBO_SIZE: usize = 4;

/// What happens when the draw pile cannot satisfy a draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReshufflePolicy {
    /// Draws come up short; the discard pile is never recycled.
    #[default]
    Never,
    /// Shuffle the discard pile back into the draw pile once it runs dry.
    WhenEmpty,
}

/// Tunable battle parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Hand size after a full draw.
    pub cards_per_hand: usize,

    /// Selection cap.
    pub max_selection: usize,

    /// Attacks available at battle start.
    pub starting_attacks: u32,

    /// Discards available at battle start.
    pub starting_discards: u32,

    /// Boss health at battle start (and its maximum).
    pub boss_max_health: u32,

    /// Discard recycling rule.
    pub reshuffle_policy: ReshufflePolicy,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            cards_per_hand: 6,
            max_selection: 4,
            starting_attacks: 4,
            starting_discards: 3,
            boss_max_health: 100,
            reshuffle_policy: ReshufflePolicy::Never,
        }
    }
}

impl BattleConfig {
    /// Start building a config from the canonical defaults.
    #[must_use]
    pub fn builder() -> BattleConfigBuilder {
        BattleConfigBuilder::default()
    }

    /// Check that the values describe a playable battle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cards_per_hand == 0 || self.cards_per_hand > DECK_SIZE {
            return Err(ConfigError::CardsPerHand {
                value: self.cards_per_hand,
                deck_size: DECK_SIZE,
            });
        }
        if self.max_selection == 0 || self.max_selection > MAX_COMBO_SIZE {
            return Err(ConfigError::MaxSelection {
                value: self.max_selection,
                limit: MAX_COMBO_SIZE,
            });
        }
        if self.max_selection > self.cards_per_hand {
            return Err(ConfigError::SelectionExceedsHand {
                max_selection: self.max_selection,
                cards_per_hand: self.cards_per_hand,
            });
        }
        if self.starting_attacks == 0 {
            return Err(ConfigError::NoAttacks);
        }
        if self.boss_max_health == 0 {
            return Err(ConfigError::NoBossHealth);
        }
        Ok(())
    }
}

/// Builder for [`BattleConfig`].
#[derive(Clone, Debug, Default)]
pub struct BattleConfigBuilder {
    config: BattleConfig,
}

impl BattleConfigBuilder {
    pub fn cards_per_hand(mut self, count: usize) -> Self {
        self.config.cards_per_hand = count;
        self
    }

    pub fn max_selection(mut self, count: usize) -> Self {
        self.config.max_selection = count;
        self
    }

    pub fn starting_attacks(mut self, count: u32) -> Self {
        self.config.starting_attacks = count;
        self
    }

    pub fn starting_discards(mut self, count: u32) -> Self {
        self.config.starting_discards = count;
        self
    }

    pub fn boss_max_health(mut self, health: u32) -> Self {
        self.config.boss_max_health = health;
        self
    }

    pub fn reshuffle_policy(mut self, policy: ReshufflePolicy) -> Self {
        self.config.reshuffle_policy = policy;
        self
    }

    /// Validate and return the config.
    pub fn build(self) -> Result<BattleConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
