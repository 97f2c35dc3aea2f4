//! Card definitions - the immutable (element, value) pairs.
//!
//! The deck is the full cross product of the four elements and the values
//! `1..=10`, each pair appearing exactly once. Instance data (identity,
//! selection, table position) lives in `HandCard`.

use serde::{Deserialize, Serialize};

use super::element::Element;

/// Lowest card value.
pub const MIN_VALUE: u8 = 1;

/// Highest card value.
pub const MAX_VALUE: u8 = 10;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Element::COUNT * MAX_VALUE as usize;

/// Static card data.
///
/// ```
/// use elemental_battle::cards::{CardDefinition, Element};
///
/// let card = CardDefinition::new(Element::Fire, 7);
/// assert_eq!(card.to_string(), "fire 7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardDefinition {
    pub element: Element,
    pub value: u8,
}

impl CardDefinition {
    #[must_use]
    pub const fn new(element: Element, value: u8) -> Self {
        Self { element, value }
    }

    /// Whether this pair belongs to the deck catalog.
    #[must_use]
    pub const fn is_in_catalog(self) -> bool {
        self.value >= MIN_VALUE && self.value <= MAX_VALUE
    }

    /// Dense index into the catalog (`0..DECK_SIZE`), element-major.
    ///
    /// Only meaningful for catalog cards.
    #[must_use]
    pub const fn catalog_index(self) -> usize {
        self.element.index() * MAX_VALUE as usize + (self.value - MIN_VALUE) as usize
    }

    /// Generate every card in the catalog, element-major, values ascending.
    #[must_use]
    pub fn catalog() -> Vec<CardDefinition> {
        Element::ALL
            .into_iter()
            .flat_map(|element| (MIN_VALUE..=MAX_VALUE).map(move |value| Self::new(element, value)))
            .collect()
    }
}

impl std::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.element, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_full_cross_product() {
        let catalog = CardDefinition::catalog();
        assert_eq!(catalog.len(), DECK_SIZE);
        assert_eq!(DECK_SIZE, 40);

        let unique: HashSet<_> = catalog.iter().copied().collect();
        assert_eq!(unique.len(), 40);

        for element in Element::ALL {
            let values: Vec<u8> = catalog
                .iter()
                .filter(|c| c.element == element)
                .map(|c| c.value)
                .collect();
            assert_eq!(values, (1..=10).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_catalog_index_matches_position() {
        for (i, card) in CardDefinition::catalog().into_iter().enumerate() {
            assert_eq!(card.catalog_index(), i);
        }
    }

    #[test]
    fn test_in_catalog() {
        assert!(CardDefinition::new(Element::Water, 1).is_in_catalog());
        assert!(CardDefinition::new(Element::Water, 10).is_in_catalog());
        assert!(!CardDefinition::new(Element::Water, 0).is_in_catalog());
        assert!(!CardDefinition::new(Element::Water, 11).is_in_catalog());
    }

    #[test]
    fn test_serialization() {
        let card = CardDefinition::new(Element::Earth, 4);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"element":"earth","value":4}"#);

        let back: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
