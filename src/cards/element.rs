//! The four elemental tags carried by every card.

use serde::{Deserialize, Serialize};

use crate::core::ParseElementError;

/// Elemental tag of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Water,
    Wind,
    Earth,
}

impl Element {
    /// All elements in catalog order.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Wind, Element::Earth];

    /// Number of distinct elements.
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index, usable for per-element counters.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, also the asset key the presentation layer uses.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Wind => "wind",
            Element::Earth => "earth",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_dense() {
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("fire".parse::<Element>(), Ok(Element::Fire));
        assert_eq!("Earth".parse::<Element>(), Ok(Element::Earth));
        assert_eq!(
            "lightning".parse::<Element>(),
            Err(ParseElementError("lightning".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for element in Element::ALL {
            assert_eq!(element.to_string().parse::<Element>(), Ok(element));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Element::Wind).unwrap();
        assert_eq!(json, "\"wind\"");
    }
}
