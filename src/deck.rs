//! A standard 52-card deck.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered deck of cards, dealt from the front.
///
/// A new deck holds every (rank, suit) pair once, suit by suit
/// (clubs, diamonds, hearts, spades), each suit from deuce to ace.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; index 0 is the next card dealt.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// ```
    /// use straightsim::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0].to_string(), "2♣");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        if self.cards.is_empty() {
            return Err(DealError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Returns the remaining cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been dealt out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

/// Writes cards as a bracketed, comma separated list.
pub(crate) fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    f.write_str("[")?;
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    f.write_str("]")
}
