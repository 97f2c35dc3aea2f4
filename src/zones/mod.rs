//! Card locations: the deck piles and the active hand.
//!
//! ## Key Types
//!
//! - `DeckManager`: Draw pile and discard pile
//! - `HandSelector`: Hand cards plus the capped selection
//!
//! Every card is in exactly one place at a time, so
//! `draw pile + discard pile + hand` always totals the deck size.

pub mod deck;
pub mod hand;

pub use deck::DeckManager;
pub use hand::{HandSelector, SelectionChange};
