//! Conversation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::conversation::{IntentKeywords, GREETING};

/// Conversation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationConfig {
    /// Opening assistant message
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Maximum number of finalized objectives kept per session
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Keywords that route drafting-stage follow-ups
    #[serde(default)]
    pub intent_keywords: IntentKeywords,
}

impl ConversationConfig {
    /// Validate conversation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.greeting.trim().is_empty() {
            return Err(ValidationError::EmptyGreeting);
        }
        if self.max_history == 0 {
            return Err(ValidationError::InvalidHistorySize);
        }
        if !self.intent_keywords.is_complete() {
            return Err(ValidationError::EmptyIntentKeywords);
        }
        Ok(())
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            max_history: default_max_history(),
            intent_keywords: IntentKeywords::default(),
        }
    }
}

fn default_greeting() -> String {
    GREETING.to_string()
}

fn default_max_history() -> usize {
    50
}
