//! Combo evaluation: selected cards to a named damage multiplier.
//!
//! The lookup depends only on how many cards are selected and on the
//! element/value pattern among them:
//!
//! | cards | pattern                                   | combo          | x   |
//! |-------|-------------------------------------------|----------------|-----|
//! | 1     | any                                       | Basic Spell    | 1.0 |
//! | 2     | same value                                | Double Spell   | 1.5 |
//! | 2     | reacting element pair                     | Steam, Heat... | 1.1 / 1.2 |
//! | 3     | one element                               | Triple Spell   | 2.0 |
//! | 3     | distinct elements, same value             | Synergy        | 2.2 |
//! | 4     | one element                               | Quad Spell     | 2.5 |
//! | 4     | distinct elements, same value             | Harmony        | 2.0 |
//! | 4     | two pairs forming a reacting element pair | Double Steam.. | 1.5 / 2.0 |
//!
//! Anything else is a Basic Spell.

use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, Element};

/// Exact damage multiplier, stored in tenths.
///
/// Keeping the factor integral makes `floor(base * multiplier)` exact:
/// `15 * 2.2` is 33, never 32 through float rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Multiplier(u16);

impl Multiplier {
    pub const ONE: Multiplier = Multiplier(10);

    #[must_use]
    pub const fn from_tenths(tenths: u16) -> Self {
        Self(tenths)
    }

    #[must_use]
    pub const fn tenths(self) -> u16 {
        self.0
    }

    /// For display only.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// `floor(base * multiplier)`.
    #[must_use]
    pub const fn apply(self, base: u32) -> u32 {
        base * self.0 as u32 / 10
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}x", self.0 / 10, self.0 % 10)
    }
}

/// Named reaction between two different elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reaction {
    /// fire + water
    Steam,
    /// earth + wind
    Sandstorm,
    /// fire + wind
    Heat,
    /// fire + earth
    Lava,
    /// water + wind
    Storm,
    /// water + earth
    Nature,
}

impl Reaction {
    /// Classify an unordered element pair. Same-element pairs don't react.
    #[must_use]
    pub fn from_pair(a: Element, b: Element) -> Option<Reaction> {
        use Element::*;

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        match (lo, hi) {
            (Fire, Water) => Some(Reaction::Steam),
            (Wind, Earth) => Some(Reaction::Sandstorm),
            (Fire, Wind) => Some(Reaction::Heat),
            (Fire, Earth) => Some(Reaction::Lava),
            (Water, Wind) => Some(Reaction::Storm),
            (Water, Earth) => Some(Reaction::Nature),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Reaction::Steam => "Steam",
            Reaction::Sandstorm => "Sandstorm",
            Reaction::Heat => "Heat",
            Reaction::Lava => "Lava",
            Reaction::Storm => "Storm",
            Reaction::Nature => "Nature",
        }
    }

    /// Multiplier for a single pair of cards.
    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        match self {
            Reaction::Steam | Reaction::Sandstorm => Multiplier(11),
            Reaction::Heat | Reaction::Lava | Reaction::Storm | Reaction::Nature => Multiplier(12),
        }
    }

    /// Multiplier when two pairs of cards form the reaction.
    #[must_use]
    pub const fn doubled_multiplier(self) -> Multiplier {
        match self {
            Reaction::Steam | Reaction::Sandstorm => Multiplier(15),
            Reaction::Heat | Reaction::Lava | Reaction::Storm | Reaction::Nature => Multiplier(20),
        }
    }
}

/// A combo recognised by the evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComboKind {
    BasicSpell,
    DoubleSpell,
    Reaction(Reaction),
    TripleSpell,
    Synergy,
    QuadSpell,
    Harmony,
    DoubleReaction(Reaction),
}

impl ComboKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ComboKind::BasicSpell => "Basic Spell",
            ComboKind::DoubleSpell => "Double Spell",
            ComboKind::Reaction(r) => r.name(),
            ComboKind::TripleSpell => "Triple Spell",
            ComboKind::Synergy => "Synergy",
            ComboKind::QuadSpell => "Quad Spell",
            ComboKind::Harmony => "Harmony",
            ComboKind::DoubleReaction(r) => match r {
                Reaction::Steam => "Double Steam",
                Reaction::Sandstorm => "Double Sandstorm",
                Reaction::Heat => "Double Heat",
                Reaction::Lava => "Double Lava",
                Reaction::Storm => "Double Storm",
                Reaction::Nature => "Double Nature",
            },
        }
    }

    #[must_use]
    pub const fn multiplier(self) -> Multiplier {
        match self {
            ComboKind::BasicSpell => Multiplier::ONE,
            ComboKind::DoubleSpell => Multiplier(15),
            ComboKind::Reaction(r) => r.multiplier(),
            ComboKind::TripleSpell => Multiplier(20),
            ComboKind::Synergy => Multiplier(22),
            ComboKind::QuadSpell => Multiplier(25),
            ComboKind::Harmony => Multiplier(20),
            ComboKind::DoubleReaction(r) => r.doubled_multiplier(),
        }
    }
}

impl std::fmt::Display for ComboKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Element and value statistics of a selection.
struct Pattern {
    element_counts: [u8; Element::COUNT],
    same_value: bool,
}

impl Pattern {
    fn of(cards: &[CardDefinition]) -> Self {
        let mut element_counts = [0u8; Element::COUNT];
        for card in cards {
            element_counts[card.element.index()] += 1;
        }
        let same_value = cards.windows(2).all(|w| w[0].value == w[1].value);

        Self {
            element_counts,
            same_value,
        }
    }

    fn distinct_elements(&self) -> usize {
        self.element_counts.iter().filter(|&&n| n > 0).count()
    }

    fn single_element(&self) -> bool {
        self.distinct_elements() == 1
    }

    /// The two elements when the cards split into exactly two pairs.
    fn two_pairs(&self) -> Option<(Element, Element)> {
        let mut pairs = Element::ALL
            .into_iter()
            .filter(|e| self.element_counts[e.index()] == 2);
        let first = pairs.next()?;
        let second = pairs.next()?;
        (self.distinct_elements() == 2).then_some((first, second))
    }
}

/// Stateless combo lookup.
///
/// ```
/// use elemental_battle::cards::{CardDefinition, Element};
/// use elemental_battle::combo::{ComboEvaluator, ComboKind};
///
/// let combo = ComboEvaluator::evaluate(&[
///     CardDefinition::new(Element::Fire, 6),
///     CardDefinition::new(Element::Water, 6),
///     CardDefinition::new(Element::Wind, 6),
/// ]);
/// assert_eq!(combo, ComboKind::Synergy);
/// assert_eq!(combo.multiplier().apply(18), 39);
/// ```
pub struct ComboEvaluator;

impl ComboEvaluator {
    /// Classify a selection of one to four cards.
    ///
    /// Empty or oversized selections are never produced by a battle; they
    /// evaluate to a Basic Spell.
    #[must_use]
    pub fn evaluate(cards: &[CardDefinition]) -> ComboKind {
        let pattern = Pattern::of(cards);

        match cards.len() {
            2 if pattern.same_value => ComboKind::DoubleSpell,
            2 => Reaction::from_pair(cards[0].element, cards[1].element)
                .map_or(ComboKind::BasicSpell, ComboKind::Reaction),
            3 if pattern.single_element() => ComboKind::TripleSpell,
            3 if pattern.distinct_elements() == 3 && pattern.same_value => ComboKind::Synergy,
            4 if pattern.single_element() => ComboKind::QuadSpell,
            4 if pattern.distinct_elements() == 4 && pattern.same_value => ComboKind::Harmony,
            4 => pattern
                .two_pairs()
                .and_then(|(a, b)| Reaction::from_pair(a, b))
                .map_or(ComboKind::BasicSpell, ComboKind::DoubleReaction),
            _ => ComboKind::BasicSpell,
        }
    }

    /// Sum of the card values.
    #[must_use]
    pub fn base_damage(cards: &[CardDefinition]) -> u32 {
        cards.iter().map(|c| u32::from(c.value)).sum()
    }
}

/// What an attack with the current selection would do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboPreview {
    pub kind: ComboKind,
    pub name: String,
    pub multiplier: f64,
    pub base: u32,
    pub damage: u32,
}

impl ComboPreview {
    /// Preview a selection. `None` when nothing is selected.
    #[must_use]
    pub fn of(cards: &[CardDefinition]) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        let kind = ComboEvaluator::evaluate(cards);
        let base = ComboEvaluator::base_damage(cards);

        Some(Self {
            kind,
            name: kind.name().to_string(),
            multiplier: kind.multiplier().as_f64(),
            base,
            damage: kind.multiplier().apply(base),
        })
    }
}
