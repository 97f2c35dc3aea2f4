//! The active hand and its selection.
//!
//! `HandSelector` owns the face-up cards and tracks which of them are
//! selected, enforcing the selection cap. Selection order is preserved:
//! replacements for a discarded selection fill the freed table slots in
//! the order the cards were selected.

use smallvec::SmallVec;

use crate::cards::{CardDefinition, HandCard, HandCardId};
use crate::core::MAX_COMBO_SIZE;

/// Result of a selection toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Selected,
    Deselected,
    /// Selecting would exceed the cap; nothing changed.
    AtCapacity,
    /// No card with that id is in the hand; nothing changed.
    UnknownCard,
}

/// Hand cards plus the selected subset.
#[derive(Clone, Debug)]
pub struct HandSelector {
    /// Sorted by table position.
    cards: Vec<HandCard>,
    selection: SmallVec<[HandCardId; MAX_COMBO_SIZE]>,
    max_selection: usize,
    next_id: u32,
}

impl HandSelector {
    #[must_use]
    pub fn new(max_selection: usize) -> Self {
        Self {
            cards: Vec::new(),
            selection: SmallVec::new(),
            max_selection,
            next_id: 0,
        }
    }

    /// Place a freshly drawn card at a table slot, giving it a new id.
    pub fn place(&mut self, card: CardDefinition, table_position: usize) -> HandCard {
        let id = HandCardId::new(self.next_id);
        self.next_id += 1;

        let hand_card = HandCard::new(id, card, table_position);
        let idx = self
            .cards
            .partition_point(|c| c.table_position < table_position);
        self.cards.insert(idx, hand_card);
        hand_card
    }

    /// Select or deselect a card.
    ///
    /// Deselecting is always allowed. Selecting is refused once the
    /// selection holds `max_selection` cards.
    pub fn toggle(&mut self, id: HandCardId) -> SelectionChange {
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return SelectionChange::UnknownCard;
        };

        if card.selected {
            card.selected = false;
            self.selection.retain(|s| *s != id);
            SelectionChange::Deselected
        } else if self.selection.len() < self.max_selection {
            card.selected = true;
            self.selection.push(id);
            SelectionChange::Selected
        } else {
            SelectionChange::AtCapacity
        }
    }

    /// Selected cards in selection order.
    #[must_use]
    pub fn selected(&self) -> Vec<HandCard> {
        self.selection
            .iter()
            .filter_map(|id| self.get(*id).copied())
            .collect()
    }

    /// Ids of the selected cards in selection order.
    #[must_use]
    pub fn selected_ids(&self) -> &[HandCardId] {
        &self.selection
    }

    /// Definitions of the selected cards, for combo evaluation.
    #[must_use]
    pub fn selected_definitions(&self) -> SmallVec<[CardDefinition; MAX_COMBO_SIZE]> {
        self.selection
            .iter()
            .filter_map(|id| self.get(*id).map(|c| c.card))
            .collect()
    }

    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Deselect every card.
    pub fn clear(&mut self) {
        for card in &mut self.cards {
            card.selected = false;
        }
        self.selection.clear();
    }

    /// Remove the selected cards from the hand, in selection order, and
    /// clear the selection.
    pub fn take_selected(&mut self) -> Vec<HandCard> {
        let taken = self.selected();
        self.cards.retain(|c| !c.selected);
        self.selection.clear();
        taken
            .into_iter()
            .map(|mut c| {
                c.selected = false;
                c
            })
            .collect()
    }

    /// Cards in table order.
    #[must_use]
    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, id: HandCardId) -> Option<&HandCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn max_selection(&self) -> usize {
        self.max_selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Element;

    fn hand_of(n: u8) -> (HandSelector, Vec<HandCardId>) {
        let mut hand = HandSelector::new(4);
        let ids = (0..n)
            .map(|i| hand.place(CardDefinition::new(Element::Fire, i + 1), i as usize).id)
            .collect();
        (hand, ids)
    }

    #[test]
    fn test_place_assigns_unique_ids() {
        let (hand, ids) = hand_of(6);
        assert_eq!(hand.len(), 6);
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(*id, HandCardId::new(i as u32));
        }
    }

    #[test]
    fn test_place_keeps_table_order() {
        let mut hand = HandSelector::new(4);
        hand.place(CardDefinition::new(Element::Fire, 1), 3);
        hand.place(CardDefinition::new(Element::Fire, 2), 0);
        hand.place(CardDefinition::new(Element::Fire, 3), 1);

        let positions: Vec<_> = hand.cards().iter().map(|c| c.table_position).collect();
        assert_eq!(positions, vec![0, 1, 3]);
    }

    #[test]
    fn test_toggle_select_and_deselect() {
        let (mut hand, ids) = hand_of(6);

        assert_eq!(hand.toggle(ids[2]), SelectionChange::Selected);
        assert!(hand.get(ids[2]).unwrap().selected);
        assert_eq!(hand.selected_ids(), &[ids[2]]);

        assert_eq!(hand.toggle(ids[2]), SelectionChange::Deselected);
        assert!(!hand.get(ids[2]).unwrap().selected);
        assert!(hand.selected_ids().is_empty());
    }

    #[test]
    fn test_selection_cap() {
        let (mut hand, ids) = hand_of(6);
        for id in &ids[..4] {
            assert_eq!(hand.toggle(*id), SelectionChange::Selected);
        }

        assert_eq!(hand.toggle(ids[4]), SelectionChange::AtCapacity);
        assert_eq!(hand.selection_len(), 4);
        assert!(!hand.get(ids[4]).unwrap().selected);

        // Deselecting is always allowed, and frees a slot.
        assert_eq!(hand.toggle(ids[0]), SelectionChange::Deselected);
        assert_eq!(hand.toggle(ids[4]), SelectionChange::Selected);
    }

    #[test]
    fn test_unknown_card() {
        let (mut hand, _) = hand_of(2);
        assert_eq!(hand.toggle(HandCardId::new(99)), SelectionChange::UnknownCard);
        assert_eq!(hand.selection_len(), 0);
    }

    #[test]
    fn test_selection_order_is_preserved() {
        let (mut hand, ids) = hand_of(6);
        hand.toggle(ids[4]);
        hand.toggle(ids[1]);
        hand.toggle(ids[3]);

        let values: Vec<_> = hand.selected().iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![5, 2, 4]);
        assert_eq!(hand.selected_definitions().len(), 3);
    }

    #[test]
    fn test_clear() {
        let (mut hand, ids) = hand_of(6);
        hand.toggle(ids[0]);
        hand.toggle(ids[1]);

        hand.clear();

        assert_eq!(hand.selection_len(), 0);
        assert!(hand.cards().iter().all(|c| !c.selected));
        assert_eq!(hand.len(), 6);
    }

    #[test]
    fn test_take_selected() {
        let (mut hand, ids) = hand_of(6);
        hand.toggle(ids[5]);
        hand.toggle(ids[0]);

        let taken = hand.take_selected();

        let taken_ids: Vec<_> = taken.iter().map(|c| c.id).collect();
        assert_eq!(taken_ids, vec![ids[5], ids[0]]);
        assert!(taken.iter().all(|c| !c.selected));
        assert_eq!(hand.len(), 4);
        assert_eq!(hand.selection_len(), 0);
        assert!(hand.get(ids[0]).is_none());
    }

    #[test]
    fn test_ids_never_reused() {
        let (mut hand, ids) = hand_of(3);
        hand.toggle(ids[0]);
        let freed = hand.take_selected();

        let replacement = hand.place(CardDefinition::new(Element::Water, 1), freed[0].table_position);
        assert!(!ids.contains(&replacement.id));
        assert_eq!(replacement.table_position, 0);
    }
}
