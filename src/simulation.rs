//! Monte Carlo estimation of hand probabilities.
//!
//! A run keeps drawing fresh shuffled hands until a fixed number of them
//! match the target classification. The number of hands drawn is therefore
//! the random quantity (inverse, or negative-binomial, sampling).

use core::fmt;

use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::SimulationError;
use crate::hand::Hand;
use crate::options::{SimulationOptions, Target};

/// Outcome of a completed simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    /// Classification that was counted.
    pub target: Target,
    /// Number of matching hands observed. Equal to the stopping threshold.
    pub matches: u32,
    /// Total number of hands drawn.
    pub count: u64,
}

impl SimulationReport {
    /// Returns the estimated probability as a percentage, `100 * matches / count`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "hand counts stay far below 2^52"
    )]
    pub fn probability(&self) -> f64 {
        100.0 * f64::from(self.matches) / self.count as f64
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The probability of {} is {}%",
            self.target,
            self.probability()
        )
    }
}

/// A seeded simulation driver.
///
/// Every trial builds its own [`Deck`] and [`Hand`]; only the random number
/// generator carries over between trials.
///
/// # Example
///
/// ```
/// use straightsim::{Simulation, SimulationOptions};
///
/// let mut simulation = Simulation::new(SimulationOptions::default().with_matches(5), 42);
/// let report = simulation.run().unwrap();
/// assert_eq!(report.matches, 5);
/// assert!(report.count >= 5);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Simulation options.
    pub options: SimulationOptions,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a new simulation with the given seed.
    #[must_use]
    pub fn new(options: SimulationOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws one hand from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand cannot be dealt.
    pub fn draw(&mut self) -> Result<Hand, SimulationError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        Ok(Hand::deal_from(&mut deck)?)
    }

    /// Draws hands until `options.matches` of them match `options.target`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::ZeroMatches`] if the threshold is zero, or
    /// [`SimulationError::Deal`] if a hand cannot be dealt.
    pub fn run(&mut self) -> Result<SimulationReport, SimulationError> {
        let SimulationOptions { target, matches: goal } = self.options;
        if goal == 0 {
            return Err(SimulationError::ZeroMatches);
        }

        debug!("drawing hands until {goal} {target} matches");

        let mut matches = 0;
        let mut count: u64 = 0;
        while matches < goal {
            let mut hand = self.draw()?;
            count += 1;
            if target.holds(&mut hand) {
                matches += 1;
                trace!("match {matches} after {count} hands: {hand}");
            }
        }

        debug!("{matches} {target} matches in {count} hands");

        Ok(SimulationReport {
            target,
            matches,
            count,
        })
    }
}
