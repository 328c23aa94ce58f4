//! The 52-card deck.

use core::slice;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A full deck of playing cards.
///
/// The deck holds every rank and suit combination exactly once, in rank-major,
/// suit-minor order. Drawing samples a card without removing it, so the deck
/// never shrinks and repeated draws may return the same card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Creates a full deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = [Card::new(Rank::Ace, Suit::Hearts); DECK_SIZE];
        let pairs = Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)));

        for (slot, card) in cards.iter_mut().zip(pairs) {
            *slot = card;
        }

        Self { cards }
    }

    /// Draws a uniformly random card. The card stays in the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use highlow::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let deck = Deck::new();
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let card = deck.draw_card(&mut rng);
    /// assert!(deck.contains(&card));
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn draw_card<R: Rng + ?Sized>(&self, rng: &mut R) -> Card {
        self.cards[rng.random_range(0..self.cards.len())]
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty. A deck is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck holds the given card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn canonical_order() {
        let deck = Deck::new();
        assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck.cards()[1], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(deck.cards()[4], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(deck.cards()[DECK_SIZE - 1], Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn draws_are_deterministic_per_seed() {
        let deck = Deck::new();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(deck.draw_card(&mut a), deck.draw_card(&mut b));
        }
    }

    #[test]
    fn draw_does_not_remove() {
        let deck = Deck::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let _ = deck.draw_card(&mut rng);
        }
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(!deck.is_empty());
        assert_eq!(deck, Deck::new());
    }
}
