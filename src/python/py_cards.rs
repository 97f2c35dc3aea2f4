//! Card and combo bindings for Python.
//!
//! Cards are passed as `(element, value)` tuples, e.g. `("fire", 7)`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{CardDefinition, Element};
use crate::combo::ComboPreview;

/// Convert a Python `(element, value)` tuple into a catalog card.
pub(crate) fn parse_card((element, value): (String, u8)) -> PyResult<CardDefinition> {
    let element: Element = element
        .parse()
        .map_err(|e: crate::core::ParseElementError| PyValueError::new_err(e.to_string()))?;
    let card = CardDefinition::new(element, value);
    if !card.is_in_catalog() {
        return Err(PyValueError::new_err(format!(
            "card value must be between 1 and 10, got {value}"
        )));
    }
    Ok(card)
}

pub(crate) fn card_tuple(card: CardDefinition) -> (String, u8) {
    (card.element.name().to_string(), card.value)
}

/// Classify up to four cards.
///
/// Returns `(name, multiplier, base, damage)`, or `None` for an empty list.
#[pyfunction]
pub fn evaluate_combo(cards: Vec<(String, u8)>) -> PyResult<Option<(String, f64, u32, u32)>> {
    if cards.len() > crate::core::MAX_COMBO_SIZE {
        return Err(PyValueError::new_err(format!(
            "at most {} cards form a combo, got {}",
            crate::core::MAX_COMBO_SIZE,
            cards.len()
        )));
    }
    let cards = cards
        .into_iter()
        .map(parse_card)
        .collect::<PyResult<Vec<_>>>()?;

    Ok(ComboPreview::of(&cards).map(|p| (p.name, p.multiplier, p.base, p.damage)))
}

/// All 40 cards in catalog order.
#[pyfunction]
pub fn catalog() -> Vec<(String, u8)> {
    CardDefinition::catalog().into_iter().map(card_tuple).collect()
}
