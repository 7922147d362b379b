//! Typed play outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel label for a possession lost to a turnover.
pub const TURNOVER: &str = "turnover";

/// Sentinel label for a possession cut short by the period ending.
pub const END_OF_PERIOD: &str = "end-of-period";

/// The scoring outcome of a play.
///
/// The wire format is a string: a non-negative integer ("0", "2", "3")
/// or one of the sentinel labels. Anything else is rejected rather than
/// parsed into garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Points(u32),
    Turnover,
    EndOfPeriod,
}

/// Raised when a result string is neither a sentinel nor a
/// non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcomeError(pub String);

impl fmt::Display for ParseOutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized play result: {:?}", self.0)
    }
}

impl std::error::Error for ParseOutcomeError {}

impl Outcome {
    /// Parse a result string from the wire or the store.
    pub fn parse(s: &str) -> Result<Self, ParseOutcomeError> {
        match s {
            TURNOVER => Ok(Outcome::Turnover),
            END_OF_PERIOD => Ok(Outcome::EndOfPeriod),
            other => other
                .parse::<u32>()
                .map(Outcome::Points)
                .map_err(|_| ParseOutcomeError(s.to_string())),
        }
    }

    /// Numeric score contributed to a group. Sentinels score 0.
    pub fn score(&self) -> u32 {
        match self {
            Outcome::Points(n) => *n,
            Outcome::Turnover | Outcome::EndOfPeriod => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Points(n) => write!(f, "{}", n),
            Outcome::Turnover => write!(f, "{}", TURNOVER),
            Outcome::EndOfPeriod => write!(f, "{}", END_OF_PERIOD),
        }
    }
}
