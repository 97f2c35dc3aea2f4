//! Draw pile and discard pile bookkeeping.
//!
//! The `DeckManager` owns every card that is not in the hand. It produces
//! cards on request and receives cards that leave play; it knows nothing
//! about selection or combat.
//!
//! Piles are `im::Vector`s so snapshots of a battle clone in O(1).

use im::Vector;

use crate::cards::{CardDefinition, DECK_SIZE};
use crate::core::{DeckError, GameRng, ReshufflePolicy};

/// Draw pile (consumed from the front) and discard pile (append-only).
#[derive(Clone, Debug)]
pub struct DeckManager {
    draw_pile: Vector<CardDefinition>,
    discard_pile: Vector<CardDefinition>,
    rng: GameRng,
    policy: ReshufflePolicy,
    reshuffles: u32,
}

impl DeckManager {
    /// Create an empty deck manager. Call [`initialize`](Self::initialize)
    /// before drawing.
    #[must_use]
    pub fn new(rng: GameRng, policy: ReshufflePolicy) -> Self {
        Self {
            draw_pile: Vector::new(),
            discard_pile: Vector::new(),
            rng,
            policy,
            reshuffles: 0,
        }
    }

    /// Create a deck manager whose draw pile is exactly `order`.
    ///
    /// `order` must be a permutation of the card catalog.
    pub fn with_order(
        order: Vec<CardDefinition>,
        rng: GameRng,
        policy: ReshufflePolicy,
    ) -> Result<Self, DeckError> {
        validate_order(&order)?;
        let mut deck = Self::new(rng, policy);
        deck.draw_pile = order.into_iter().collect();
        Ok(deck)
    }

    /// Build a full draw order with `front` on top and the rest of the
    /// catalog after it, in catalog order.
    ///
    /// ```
    /// use elemental_battle::cards::{CardDefinition, Element};
    /// use elemental_battle::zones::DeckManager;
    ///
    /// let top = [CardDefinition::new(Element::Fire, 10)];
    /// let order = DeckManager::stacked_order(&top).unwrap();
    /// assert_eq!(order.len(), 40);
    /// assert_eq!(order[0], top[0]);
    /// ```
    pub fn stacked_order(front: &[CardDefinition]) -> Result<Vec<CardDefinition>, DeckError> {
        let mut seen = [false; DECK_SIZE];
        for card in front {
            mark_seen(&mut seen, *card)?;
        }

        let mut order = front.to_vec();
        order.extend(
            CardDefinition::catalog()
                .into_iter()
                .filter(|card| !seen[card.catalog_index()]),
        );
        Ok(order)
    }

    /// Build all 40 definitions, shuffle uniformly and make them the draw
    /// pile. Clears the discard pile.
    pub fn initialize(&mut self) {
        let mut cards = CardDefinition::catalog();
        self.rng.shuffle(&mut cards);

        self.draw_pile = cards.into_iter().collect();
        self.discard_pile.clear();
        self.reshuffles = 0;

        tracing::debug!("Deck initialized with {} cards", self.draw_pile.len());
    }

    /// Remove up to `n` cards from the front of the draw pile.
    ///
    /// Returns fewer cards (possibly none) when the pile runs out, unless the
    /// reshuffle policy recycles the discard pile first.
    pub fn draw(&mut self, n: usize) -> Vec<CardDefinition> {
        let mut drawn = Vec::with_capacity(n);

        while drawn.len() < n {
            if self.draw_pile.is_empty() && !self.reshuffle_discards() {
                break;
            }
            match self.draw_pile.pop_front() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }

        if drawn.len() < n {
            tracing::warn!(
                "Deck is empty: requested {} cards, drew {}",
                n,
                drawn.len()
            );
        }

        drawn
    }

    /// Append cards to the discard pile. Does not replenish the draw pile.
    pub fn send_to_discard(&mut self, cards: impl IntoIterator<Item = CardDefinition>) {
        self.discard_pile.extend(cards);
    }

    /// Shuffle the discard pile into the draw pile if the policy allows it.
    ///
    /// Returns whether any cards were recycled.
    fn reshuffle_discards(&mut self) -> bool {
        if self.policy != ReshufflePolicy::WhenEmpty || self.discard_pile.is_empty() {
            return false;
        }

        let mut recycled: Vec<_> = std::mem::take(&mut self.discard_pile).into_iter().collect();
        self.rng.shuffle(&mut recycled);
        let count = recycled.len();
        self.draw_pile.extend(recycled);
        self.reshuffles += 1;

        tracing::debug!("Reshuffled {} discarded cards into the draw pile", count);
        true
    }

    /// Size of the draw pile.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.draw_pile.len()
    }

    /// Size of the discard pile.
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Draw pile in draw order (front is drawn next).
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<CardDefinition> {
        &self.draw_pile
    }

    /// Discard pile in the order cards left play.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardDefinition> {
        &self.discard_pile
    }

    /// How many times the discard pile has been recycled.
    #[must_use]
    pub fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }

    #[must_use]
    pub fn policy(&self) -> ReshufflePolicy {
        self.policy
    }
}

fn mark_seen(seen: &mut [bool; DECK_SIZE], card: CardDefinition) -> Result<(), DeckError> {
    if !card.is_in_catalog() {
        return Err(DeckError::UnknownCard(card.to_string()));
    }
    let slot = &mut seen[card.catalog_index()];
    if *slot {
        return Err(DeckError::Duplicate(card.to_string()));
    }
    *slot = true;
    Ok(())
}

fn validate_order(order: &[CardDefinition]) -> Result<(), DeckError> {
    if order.len() != DECK_SIZE {
        return Err(DeckError::WrongSize {
            expected: DECK_SIZE,
            actual: order.len(),
        });
    }
    let mut seen = [false; DECK_SIZE];
    for card in order {
        mark_seen(&mut seen, *card)?;
    }
    Ok(())
}
