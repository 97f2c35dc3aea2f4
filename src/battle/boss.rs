//! The boss health pool.

use serde::{Deserialize, Serialize};

/// Boss health, clamped to `0..=max_health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossState {
    health: u32,
    max_health: u32,
}

impl BossState {
    /// A boss at full health.
    #[must_use]
    pub fn new(max_health: u32) -> Self {
        Self {
            health: max_health,
            max_health,
        }
    }

    /// Subtract damage, never going below zero. Returns the damage actually
    /// absorbed.
    pub fn apply_damage(&mut self, damage: u32) -> u32 {
        let dealt = damage.min(self.health);
        self.health -= dealt;
        dealt
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage() {
        let mut boss = BossState::new(100);
        assert_eq!(boss.apply_damage(33), 33);
        assert_eq!(boss.health(), 67);
        assert!(!boss.is_defeated());
    }

    #[test]
    fn test_overkill_clamps_to_zero() {
        let mut boss = BossState::new(100);
        assert_eq!(boss.apply_damage(125), 100);
        assert_eq!(boss.health(), 0);
        assert_eq!(boss.max_health(), 100);
        assert!(boss.is_defeated());
    }
}
