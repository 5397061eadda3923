//! Ordered, append-only record of a conversation.

use serde::{Deserialize, Serialize};

use super::turn::{Role, Turn};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Transcript positions that hold onboarding answers in a linear dialogue.
pub const SUBJECT_POSITION: usize = 1;
pub const LEVEL_POSITION: usize = 3;
pub const MEASUREMENT_POSITION: usize = 5;

/// Ordered sequence of turns.
///
/// # Invariants
///
/// - Index 0 is always the assistant greeting
/// - Turns are only ever appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Turn>", into = "Vec<Turn>")]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Starts a transcript with the assistant greeting.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the greeting is empty
    pub fn new(greeting: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            turns: vec![Turn::assistant(greeting)?],
        })
    }

    /// Rebuilds a transcript from existing turns.
    ///
    /// # Errors
    ///
    /// - `MissingGreeting` if the first turn is absent or not from the assistant
    pub fn from_turns(turns: Vec<Turn>) -> Result<Self, DomainError> {
        match turns.first() {
            Some(first) if first.role() == Role::Assistant => Ok(Self { turns }),
            _ => Err(DomainError::new(
                ErrorCode::MissingGreeting,
                "Transcript must open with an assistant greeting",
            )),
        }
    }

    /// Appends a turn.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Returns all turns in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the number of turns, greeting included.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false; a transcript holds at least its greeting.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns the greeting turn.
    pub fn greeting(&self) -> &Turn {
        &self.turns[0]
    }

    /// Returns the most recent turn.
    pub fn last(&self) -> &Turn {
        &self.turns[self.turns.len() - 1]
    }

    /// Returns the content at a position, if present.
    pub fn content_at(&self, position: usize) -> Option<&str> {
        self.turns.get(position).map(Turn::content)
    }
}

impl TryFrom<Vec<Turn>> for Transcript {
    type Error = DomainError;

    fn try_from(turns: Vec<Turn>) -> Result<Self, Self::Error> {
        Self::from_turns(turns)
    }
}

impl From<Transcript> for Vec<Turn> {
    fn from(transcript: Transcript) -> Self {
        transcript.turns
    }
}
