//! Five-card hands and their classification.

use core::fmt;

use crate::card::Card;
use crate::deck::{Deck, write_cards};
use crate::error::DealError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Counts ordered pairs of distinct positions holding the same rank.
///
/// Every matching pair is counted twice, so one pair yields 2 and four of a
/// kind yields 12.
fn count_matches(cards: &[Card]) -> u8 {
    let mut matches = 0;

    for (i, a) in cards.iter().enumerate() {
        for (j, b) in cards.iter().enumerate() {
            if i != j && a.rank() == b.rank() {
                matches += 1;
            }
        }
    }

    matches
}

/// Rank shape of a hand, derived from [`Hand::num_matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// All five ranks differ (high card, straight or flush).
    NoPair,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    Trips,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    Quads,
}

impl HandCategory {
    /// Maps a match count to its category.
    ///
    /// Returns `None` for counts no five-card hand can produce.
    #[must_use]
    pub const fn from_matches(matches: u8) -> Option<Self> {
        match matches {
            0 => Some(Self::NoPair),
            2 => Some(Self::Pair),
            4 => Some(Self::TwoPair),
            6 => Some(Self::Trips),
            8 => Some(Self::FullHouse),
            12 => Some(Self::Quads),
            _ => None,
        }
    }
}

/// A five-card hand.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from known cards.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Deals a hand from the front of the deck, one card at a time.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck runs out. Cards dealt
    /// before the deck ran out are not returned to it.
    pub fn deal_from(deck: &mut Deck) -> Result<Self, DealError> {
        let cards = [
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
        ];
        Ok(Self { cards })
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether all cards share one suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards[1..].iter().all(|card| card.suit() == suit)
    }

    /// Returns the number of ordered pairs of cards with equal rank.
    ///
    /// | matches | shape           |
    /// |---------|-----------------|
    /// | 0       | no pair         |
    /// | 2       | one pair        |
    /// | 4       | two pair        |
    /// | 6       | three of a kind |
    /// | 8       | full house      |
    /// | 12      | four of a kind  |
    #[must_use]
    pub fn num_matches(&self) -> u8 {
        count_matches(&self.cards)
    }

    /// Returns the rank shape of the hand.
    #[must_use]
    pub fn category(&self) -> Option<HandCategory> {
        HandCategory::from_matches(self.num_matches())
    }

    /// Returns whether the hand holds exactly one pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.num_matches() == 2
    }

    /// Returns whether the hand holds two pairs.
    #[must_use]
    pub fn is_2_pair(&self) -> bool {
        self.num_matches() == 4
    }

    /// Returns whether the hand holds three of a kind (and no pair).
    #[must_use]
    pub fn is_trips(&self) -> bool {
        self.num_matches() == 6
    }

    /// Returns whether the hand is a full house.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        self.num_matches() == 8
    }

    /// Returns whether the hand holds four of a kind.
    #[must_use]
    pub fn is_quads(&self) -> bool {
        self.num_matches() == 12
    }

    /// Returns whether the five ranks are consecutive.
    ///
    /// Aces are high only: `A 2 3 4 5` is not a straight, `10 J Q K A` is.
    /// Suits are ignored, so a straight flush also counts.
    ///
    /// When every rank is distinct the hand is sorted low to high as a side
    /// effect; otherwise the order is left alone.
    pub fn is_straight(&mut self) -> bool {
        if self.num_matches() != 0 {
            return false;
        }

        self.cards.sort();
        let low = self.cards[0].rank().index();
        let high = self.cards[HAND_SIZE - 1].rank().index();
        high == low + 4
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}
