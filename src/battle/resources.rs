//! Limited attack and discard uses.

use serde::{Deserialize, Serialize};

/// Remaining attacks and discards. Both only ever count down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTracker {
    attacks_left: u32,
    discards_left: u32,
}

impl ResourceTracker {
    #[must_use]
    pub fn new(attacks: u32, discards: u32) -> Self {
        Self {
            attacks_left: attacks,
            discards_left: discards,
        }
    }

    /// Use one attack. Returns `false`, changing nothing, when none are left.
    pub fn spend_attack(&mut self) -> bool {
        spend(&mut self.attacks_left)
    }

    /// Use one discard. Returns `false`, changing nothing, when none are left.
    pub fn spend_discard(&mut self) -> bool {
        spend(&mut self.discards_left)
    }

    #[must_use]
    pub fn attacks_left(&self) -> u32 {
        self.attacks_left
    }

    #[must_use]
    pub fn discards_left(&self) -> u32 {
        self.discards_left
    }

    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.attacks_left > 0
    }

    #[must_use]
    pub fn can_discard(&self) -> bool {
        self.discards_left > 0
    }
}

fn spend(counter: &mut u32) -> bool {
    match counter.checked_sub(1) {
        Some(left) => {
            *counter = left;
            true
        }
        None => false,
    }
}
