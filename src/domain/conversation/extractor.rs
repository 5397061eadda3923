//! Input sanitization and objective extraction.
//!
//! Cleans user input before it reaches the transcript, and recovers a
//! finalized objective from reply text for collaborators that only see text.

use thiserror::Error;

use super::prompts::OBJECTIVE_MARKER;

/// Maximum accepted user input length (4KB).
pub const MAX_INPUT_LENGTH: usize = 4_000;

/// Errors that can occur during sanitization.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SanitizationError {
    #[error("Input too long: {actual} bytes exceeds maximum of {max} bytes")]
    TooLong { max: usize, actual: usize },
}

/// Sanitizes user input before it is recorded.
#[derive(Debug, Clone)]
pub struct InputSanitizer {
    max_length: usize,
}

impl Default for InputSanitizer {
    fn default() -> Self {
        Self {
            max_length: MAX_INPUT_LENGTH,
        }
    }
}

impl InputSanitizer {
    /// Creates a new sanitizer with the default length limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the length limit.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sanitizes user input.
    ///
    /// # Steps
    /// 1. Validate length
    /// 2. Remove control characters (except newlines/tabs)
    /// 3. Trim surrounding whitespace
    pub fn sanitize(&self, input: &str) -> Result<String, SanitizationError> {
        if input.len() > self.max_length {
            return Err(SanitizationError::TooLong {
                max: self.max_length,
                actual: input.len(),
            });
        }

        let cleaned: String = input
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect();

        Ok(cleaned.trim().to_string())
    }
}

/// Extracts a finalized objective from reply text.
///
/// Returns the paragraph after the first marker, trimmed. The paragraph
/// ends at the first blank line or a second marker. `None` when the marker
/// is absent or nothing follows it.
pub fn extract_objective(reply: &str) -> Option<String> {
    let (_, rest) = reply.split_once(OBJECTIVE_MARKER)?;
    let rest = rest.split(OBJECTIVE_MARKER).next().unwrap_or_default().trim_start();
    let objective = rest.split("\n\n").next().unwrap_or_default().trim();
    if objective.is_empty() {
        None
    } else {
        Some(objective.to_string())
    }
}
