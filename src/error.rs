//! Error types for card, deck and simulation operations.

use thiserror::Error;

/// Errors that can occur when building a card from its symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank symbol is not one of `2`..`10`, `J`, `Q`, `K`, `A`.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit is not one of the four suit symbols or names.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Error returned when parsing an unknown [`Target`](crate::Target) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown hand classification")]
pub struct ParseTargetError;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while running a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The stopping threshold is zero, so no trial would ever be drawn.
    #[error("target number of matches must be positive")]
    ZeroMatches,
    /// Dealing a hand failed.
    #[error(transparent)]
    Deal(#[from] DealError),
}
