//! Clarity score value object (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Heuristic rating of how well-formed an objective's wording is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClarityScore(u8);

impl ClarityScore {
    /// Lowest possible score.
    pub const MIN: Self = Self(1);

    /// Highest possible score.
    pub const MAX: Self = Self(10);

    /// Creates a score from any raw tally, clamping into 1..=10.
    pub fn clamped(raw: i32) -> Self {
        Self(raw.clamp(Self::MIN.0 as i32, Self::MAX.0 as i32) as u8)
    }

    /// Creates a score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "clarity_score",
                Self::MIN.0 as i32,
                Self::MAX.0 as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ClarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}
