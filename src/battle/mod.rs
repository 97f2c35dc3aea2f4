//! Battle orchestration.
//!
//! ## Key Types
//!
//! - `BattleController`: The state machine callers drive with commands
//! - `BattleState`: Deck, hand, resources, boss and status
//! - `BattleEvent`: Notifications for the presentation layer
//! - `ActionOutcome`: Accepted or rejected, with a `RejectReason`
//! - `BattleSnapshot`: Serializable view of the whole table

pub mod boss;
pub mod command;
pub mod controller;
pub mod events;
pub mod resources;
pub mod snapshot;
pub mod state;

pub use boss::BossState;
pub use command::{ActionOutcome, ActionRecord, Command, RejectReason};
pub use controller::BattleController;
pub use events::{BattleEvent, BattleResult};
pub use resources::ResourceTracker;
pub use snapshot::BattleSnapshot;
pub use state::{BattleState, BattleStatus};
