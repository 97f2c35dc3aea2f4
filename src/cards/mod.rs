//! Card system: elements, definitions, and hand instances.
//!
//! ## Key Types
//!
//! - `Element`: One of fire, water, wind, earth
//! - `CardDefinition`: Immutable (element, value) pair
//! - `HandCard`: A definition bound to an id and a table slot while in hand
//! - `CardView`: Render data handed to the presentation layer

pub mod definition;
pub mod element;
pub mod instance;

pub use definition::{CardDefinition, DECK_SIZE, MAX_VALUE, MIN_VALUE};
pub use element::Element;
pub use instance::{CardView, HandCard, HandCardId};
