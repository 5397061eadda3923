//! Follow-up intent detection for the drafting stage.

use serde::{Deserialize, Serialize};

/// What the user asked for once onboarding is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpIntent {
    /// Draft a complete objective from the captured answers.
    Suggest,
    /// Improve the current objective.
    Refine,
    /// Start a new objective for the same subject.
    Another,
    /// Anything else.
    Other,
}

/// Keywords that signal each follow-up intent.
///
/// Groups are tested in order `suggest`, `refine`, `another`; the first
/// group with a keyword contained in the lower-cased input wins. Keywords
/// are expected in lower case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntentKeywords {
    pub suggest: Vec<String>,
    pub refine: Vec<String>,
    pub another: Vec<String>,
}

impl Default for IntentKeywords {
    fn default() -> Self {
        Self {
            suggest: vec!["suggest".to_string()],
            refine: vec![
                "refine".to_string(),
                "improve".to_string(),
                "better".to_string(),
                "change".to_string(),
            ],
            another: vec!["another".to_string(), "different".to_string()],
        }
    }
}

impl IntentKeywords {
    /// Returns true if every group has at least one non-blank keyword.
    pub fn is_complete(&self) -> bool {
        [&self.suggest, &self.refine, &self.another]
            .iter()
            .all(|group| group.iter().any(|k| !k.trim().is_empty()))
    }

    /// Classifies a follow-up message.
    pub fn classify(&self, input: &str) -> FollowUpIntent {
        let lowered = input.to_lowercase();
        let hit = |keywords: &[String]| keywords.iter().any(|k| lowered.contains(k.as_str()));

        if hit(&self.suggest) {
            FollowUpIntent::Suggest
        } else if hit(&self.refine) {
            FollowUpIntent::Refine
        } else if hit(&self.another) {
            FollowUpIntent::Another
        } else {
            FollowUpIntent::Other
        }
    }
}
