//! Simulation configuration options.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseTargetError;
use crate::hand::Hand;

/// Hand classification counted by a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Target {
    /// Five consecutive ranks, aces high only.
    #[default]
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Exactly one pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    Trips,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    Quads,
}

impl Target {
    /// Every target, in the order listed above.
    pub const ALL: [Self; 7] = [
        Self::Straight,
        Self::Flush,
        Self::Pair,
        Self::TwoPair,
        Self::Trips,
        Self::FullHouse,
        Self::Quads,
    ];

    /// Returns whether `hand` belongs to this classification.
    ///
    /// Checking [`Target::Straight`] may reorder the hand.
    pub fn holds(self, hand: &mut Hand) -> bool {
        match self {
            Self::Straight => hand.is_straight(),
            Self::Flush => hand.is_flush(),
            Self::Pair => hand.is_pair(),
            Self::TwoPair => hand.is_2_pair(),
            Self::Trips => hand.is_trips(),
            Self::FullHouse => hand.is_full_house(),
            Self::Quads => hand.is_quads(),
        }
    }

    /// Returns the name used in reports and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::Pair => "pair",
            Self::TwoPair => "two-pair",
            Self::Trips => "trips",
            Self::FullHouse => "full-house",
            Self::Quads => "quads",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.name() == s)
            .ok_or(ParseTargetError)
    }
}

/// Default number of matching hands a simulation waits for.
pub const DEFAULT_MATCHES: u32 = 1000;

/// Configuration options for a simulation.
///
/// The defaults estimate the probability of a straight from 1000 straights:
///
/// ```
/// use straightsim::{SimulationOptions, Target};
///
/// let options = SimulationOptions::default()
///     .with_target(Target::Flush)
///     .with_matches(200);
/// assert_eq!(options.target, Target::Flush);
/// assert_eq!(options.matches, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Classification being counted.
    pub target: Target,
    /// Number of matching hands after which the run stops.
    pub matches: u32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            target: Target::Straight,
            matches: DEFAULT_MATCHES,
        }
    }
}

impl SimulationOptions {
    /// Sets the classification being counted.
    #[must_use]
    pub const fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Sets the number of matching hands after which the run stops.
    ///
    /// # Example
    ///
    /// ```
    /// use straightsim::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_matches(10);
    /// assert_eq!(options.matches, 10);
    /// ```
    #[must_use]
    pub const fn with_matches(mut self, matches: u32) -> Self {
        self.matches = matches;
        self
    }
}
