//! Hand cards - definitions bound to an identity and a table slot.
//!
//! A `HandCard` exists only while the card is in the active hand. Ids are
//! allocated from a monotonically increasing counter, so an id is never
//! reused within a battle even after its card leaves play.

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;
use super::element::Element;

/// Stable identity of a card while it sits in the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandCardId(pub u32);

impl HandCardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for HandCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HandCard({})", self.0)
    }
}

/// A card in the active hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    pub id: HandCardId,
    pub card: CardDefinition,
    pub selected: bool,
    /// Table slot, `0..cards_per_hand`. Replacements reuse the slot of the
    /// card they replace.
    pub table_position: usize,
}

impl HandCard {
    /// Create an unselected hand card.
    #[must_use]
    pub fn new(id: HandCardId, card: CardDefinition, table_position: usize) -> Self {
        Self {
            id,
            card,
            selected: false,
            table_position,
        }
    }

    #[must_use]
    pub fn element(&self) -> Element {
        self.card.element
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.card.value
    }

    /// What the presentation layer needs to place and render this card.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView {
            id: self.id,
            element: self.card.element,
            value: self.card.value,
            table_position: self.table_position,
        }
    }
}

/// Render data for one hand card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: HandCardId,
    pub element: Element,
    pub value: u8,
    pub table_position: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_unselected() {
        let card = HandCard::new(HandCardId::new(3), CardDefinition::new(Element::Wind, 9), 2);
        assert!(!card.selected);
        assert_eq!(card.element(), Element::Wind);
        assert_eq!(card.value(), 9);
    }

    #[test]
    fn test_view() {
        let card = HandCard::new(HandCardId::new(3), CardDefinition::new(Element::Wind, 9), 2);
        let view = card.view();
        assert_eq!(view.id, HandCardId::new(3));
        assert_eq!(view.element, Element::Wind);
        assert_eq!(view.value, 9);
        assert_eq!(view.table_position, 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", HandCardId::new(12)), "HandCard(12)");
    }
}
