//! Bloom's taxonomy cognitive levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the six cognitive levels of Bloom's revised taxonomy.
///
/// Declaration order is significant: it is the priority order used when
/// several levels match the same text, lowest-order thinking first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloomsLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl BloomsLevel {
    /// All levels in priority order.
    pub const ALL: [BloomsLevel; 6] = [
        BloomsLevel::Remember,
        BloomsLevel::Understand,
        BloomsLevel::Apply,
        BloomsLevel::Analyze,
        BloomsLevel::Evaluate,
        BloomsLevel::Create,
    ];

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Remember => "Remember",
            Self::Understand => "Understand",
            Self::Apply => "Apply",
            Self::Analyze => "Analyze",
            Self::Evaluate => "Evaluate",
            Self::Create => "Create",
        }
    }

    /// Returns the label pairing the classic and revised level names.
    pub fn category_label(&self) -> &'static str {
        match self {
            Self::Remember => "Knowledge/Remember",
            Self::Understand => "Comprehension/Understand",
            Self::Apply => "Application/Apply",
            Self::Analyze => "Analysis/Analyze",
            Self::Evaluate => "Evaluation/Evaluate",
            Self::Create => "Creation/Create",
        }
    }

    /// Returns the verb used when no canonical verb can be found in the text.
    pub fn default_verb(&self) -> &'static str {
        match self {
            Self::Remember => "identify",
            Self::Understand => "explain",
            Self::Apply => "apply",
            Self::Analyze => "analyze",
            Self::Evaluate => "evaluate",
            Self::Create => "create",
        }
    }
}

impl fmt::Display for BloomsLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BloomsLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "blooms_level",
                    format!("'{}' is not a Bloom's taxonomy level", wanted),
                )
            })
    }
}
