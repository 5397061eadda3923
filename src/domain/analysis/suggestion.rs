//! Improvement suggestions produced by objective analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single improvement hint for a learning objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    /// No verb from the taxonomy appears as a whole word.
    UseMeasurableVerb,
    /// Clarity score is below the specificity threshold.
    AddSpecificity,
    /// No Bloom's level could be identified.
    IncludeActionVerb,
    /// A low-clarity objective that only asks for recall.
    ConsiderHigherOrder,
}

impl Suggestion {
    /// Returns the text shown to the user.
    pub fn text(&self) -> &'static str {
        match self {
            Self::UseMeasurableVerb => {
                "Use a specific, measurable action verb from Bloom's Taxonomy that matches your desired learning level."
            }
            Self::AddSpecificity => {
                "Improve clarity by being more specific about what students will be able to do."
            }
            Self::IncludeActionVerb => {
                "Include a clear action verb that aligns with the intended learning level."
            }
            Self::ConsiderHigherOrder => {
                "Consider using higher-order thinking skills beyond recall if appropriate for your learning context."
            }
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
