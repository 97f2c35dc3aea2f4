//! Commands accepted from the presentation layer, their outcomes, and the
//! action history.
//!
//! Illegal requests are not errors: they are rejected as no-ops with a
//! reason, so the presentation layer can decide whether to give feedback.

use serde::{Deserialize, Serialize};

use crate::cards::HandCardId;

/// A request from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Start (or restart) a battle from a seed.
    StartBattle { seed: u64 },
    ToggleSelection(HandCardId),
    RequestDraw,
    RequestAttack,
    RequestDiscard,
    AcknowledgeAnimationComplete,
}

/// Why a request was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// An earlier action's animations have not been acknowledged yet.
    Busy,
    /// The battle has not started or has already ended.
    NotInProgress,
    EmptySelection,
    NoAttacksLeft,
    NoDiscardsLeft,
    /// Full draws are only allowed with an empty hand.
    HandNotEmpty,
    /// The selection cap is reached.
    SelectionFull,
    UnknownCard,
    /// Nothing is waiting to be acknowledged.
    NotBusy,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RejectReason::Busy => "animations still running",
            RejectReason::NotInProgress => "battle not in progress",
            RejectReason::EmptySelection => "no cards selected",
            RejectReason::NoAttacksLeft => "no attacks left",
            RejectReason::NoDiscardsLeft => "no discards left",
            RejectReason::HandNotEmpty => "hand is not empty",
            RejectReason::SelectionFull => "selection is full",
            RejectReason::UnknownCard => "card is not in the hand",
            RejectReason::NotBusy => "nothing to acknowledge",
        };
        f.write_str(text)
    }
}

/// Result of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    Accepted,
    Rejected(RejectReason),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, ActionOutcome::Accepted)
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn rejection(self) -> Option<RejectReason> {
        match self {
            ActionOutcome::Accepted => None,
            ActionOutcome::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Result<(), RejectReason>> for ActionOutcome {
    fn from(result: Result<(), RejectReason>) -> Self {
        match result {
            Ok(()) => ActionOutcome::Accepted,
            Err(reason) => ActionOutcome::Rejected(reason),
        }
    }
}

/// An accepted command, in acceptance order.
///
/// Replaying the history against the same config, seed and (for stacked
/// battles) starting order reproduces the battle exactly; see
/// `BattleController::rebuild`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub sequence: u32,
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(ActionOutcome::from(Ok(())), ActionOutcome::Accepted);
        assert_eq!(
            ActionOutcome::from(Err(RejectReason::Busy)),
            ActionOutcome::Rejected(RejectReason::Busy)
        );
    }

    #[test]
    fn test_outcome_queries() {
        assert!(ActionOutcome::Accepted.is_accepted());
        assert_eq!(ActionOutcome::Accepted.rejection(), None);

        let rejected = ActionOutcome::Rejected(RejectReason::NoDiscardsLeft);
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.rejection(), Some(RejectReason::NoDiscardsLeft));
    }

    #[test]
    fn test_command_serialization() {
        let command = Command::ToggleSelection(HandCardId::new(4));
        let json = serde_json::to_string(&command).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, command);
    }
}
