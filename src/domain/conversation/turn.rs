//! Turn entity for conversations.
//!
//! Turns are immutable records of user/assistant exchanges. Their order in
//! the transcript encodes dialogue position.

use crate::domain::foundation::{DomainError, Timestamp, TurnId};
use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The drafting assistant.
    Assistant,
    /// The person drafting objectives.
    User,
}

/// An immutable turn within a transcript.
///
/// # Invariants
///
/// - `content` is non-empty (validated at construction)
/// - `created_at` is set at construction and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    id: TurnId,
    role: Role,
    content: String,
    created_at: Timestamp,
}

impl Turn {
    /// Creates a new turn with the given role and content.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty or whitespace only
    pub fn new(role: Role, content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::validation("content", "Turn content cannot be empty")
                .with_detail("role", format!("{:?}", role)));
        }

        Ok(Self {
            id: TurnId::new(),
            role,
            content,
            created_at: Timestamp::now(),
        })
    }

    /// Creates a user turn.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty
    pub fn user(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Role::User, content)
    }

    /// Creates an assistant turn.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is empty
    pub fn assistant(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Role::Assistant, content)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the turn ID.
    pub fn id(&self) -> &TurnId {
        &self.id
    }

    /// Returns the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the turn was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    mod role {
        use super::*;

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&Role::Assistant).unwrap();
            assert_eq!(json, "\"assistant\"");
        }

        #[test]
        fn deserializes_from_snake_case() {
            let role: Role = serde_json::from_str("\"user\"").unwrap();
            assert_eq!(role, Role::User);
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn user_creates_user_turn() {
            let turn = Turn::user("Statistics").unwrap();
            assert_eq!(turn.role(), Role::User);
            assert_eq!(turn.content(), "Statistics");
        }

        #[test]
        fn assistant_creates_assistant_turn() {
            let turn = Turn::assistant("Hi!").unwrap();
            assert_eq!(turn.role(), Role::Assistant);
        }

        #[test]
        fn rejects_empty_content() {
            let err = Turn::user("").unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }

        #[test]
        fn rejects_whitespace_only_content() {
            let err = Turn::user(" \t\n").unwrap_err();
            assert_eq!(err.details.get("role"), Some(&"User".to_string()));
        }

        #[test]
        fn turns_get_distinct_ids() {
            let a = Turn::user("a").unwrap();
            let b = Turn::user("a").unwrap();
            assert_ne!(a.id(), b.id());
        }

        #[test]
        fn survives_json_round_trip() {
            let turn = Turn::user("History").unwrap();
            let json = serde_json::to_string(&turn).unwrap();
            let back: Turn = serde_json::from_str(&json).unwrap();
            assert_eq!(back, turn);
        }
    }
}
