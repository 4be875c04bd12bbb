//! A playing-card deck, five-card hand classification, and a Monte Carlo
//! estimator for hand probabilities, with optional `no_std` support.
//!
//! Cards compare by rank only. Hands are classified by counting rank
//! collisions, and straights are detected by rank index arithmetic, so an
//! ace never plays low.
//!
//! # Example
//!
//! ```
//! use straightsim::{Simulation, SimulationOptions};
//!
//! let mut simulation = Simulation::new(SimulationOptions::default().with_matches(10), 7);
//! let report = simulation.run().unwrap();
//! println!("{report}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod simulation;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, ParseTargetError, SimulationError};
pub use hand::{HAND_SIZE, Hand, HandCategory};
pub use options::{DEFAULT_MATCHES, SimulationOptions, Target};
pub use simulation::{Simulation, SimulationReport};
