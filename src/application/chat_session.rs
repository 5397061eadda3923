//! Chat session - owns one objective-drafting conversation.
//!
//! The session is the only component that mutates conversation state. Each
//! user message is sanitized, appended to the transcript, answered by the
//! resolver, and any finalized objective is recorded.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ConversationConfig;
use crate::domain::analysis::{analyze_objective, ObjectiveAnalysis};
use crate::domain::conversation::{
    AssistantReply, ConversationContext, DialogueStage, DialogueStageResolver, InputSanitizer,
    SanitizationError, Transcript, Turn,
};
use crate::domain::foundation::{DomainError, SessionId, Timestamp, TurnId};

/// Errors that can occur when sending a message.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Message content is empty or whitespace only.
    #[error("Message content cannot be empty")]
    EmptyMessage,

    /// Message content was rejected by the sanitizer.
    #[error(transparent)]
    Sanitization(#[from] SanitizationError),

    /// Domain error.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Result of sending a message.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    /// ID of the user turn that was stored.
    pub user_turn_id: TurnId,
    /// ID of the assistant turn that was stored.
    pub assistant_turn_id: TurnId,
    /// The assistant's reply.
    pub reply: AssistantReply,
    /// Analysis of the objective finalized by this reply, if any.
    pub analysis: Option<ObjectiveAnalysis>,
}

/// Serializable view of a session, for export.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub stage: DialogueStage,
    pub context: ConversationContext,
    pub transcript: Transcript,
    pub current_objective: Option<String>,
    pub current_analysis: Option<ObjectiveAnalysis>,
    pub objective_history: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One objective-drafting conversation.
///
/// # Invariants
///
/// - The transcript always opens with the configured greeting
/// - `objective_history` holds no duplicates and at most `max_history` entries
/// - `current_objective`, when set, is the last entry appended to the history
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: SessionId,
    greeting: String,
    transcript: Transcript,
    context: ConversationContext,
    resolver: DialogueStageResolver,
    sanitizer: InputSanitizer,
    current_objective: Option<String>,
    objective_history: Vec<String>,
    max_history: usize,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ChatSession {
    /// Starts a session from configuration.
    ///
    /// # Errors
    ///
    /// - `Domain` if the greeting is empty
    pub fn new(config: &ConversationConfig) -> Result<Self, ChatError> {
        let transcript = Transcript::new(config.greeting.clone())?;
        let now = Timestamp::now();
        let session = Self {
            id: SessionId::new(),
            greeting: config.greeting.clone(),
            transcript,
            context: ConversationContext::new(),
            resolver: DialogueStageResolver::with_keywords(config.intent_keywords.clone()),
            sanitizer: InputSanitizer::new(),
            current_objective: None,
            objective_history: Vec::new(),
            max_history: config.max_history.max(1),
            created_at: now,
            updated_at: now,
        };
        info!(session_id = %session.id, "Chat session started");
        Ok(session)
    }

    /// Sends a user message and records the assistant's reply.
    ///
    /// # Errors
    ///
    /// - `EmptyMessage` if the message is blank after sanitization
    /// - `Sanitization` if the message is too long
    pub fn send(&mut self, input: &str) -> Result<SendMessageResult, ChatError> {
        let content = self.sanitizer.sanitize(input).map_err(|e| {
            warn!(session_id = %self.id, error = %e, "Rejected user message");
            e
        })?;
        if content.is_empty() {
            warn!(session_id = %self.id, "Rejected empty user message");
            return Err(ChatError::EmptyMessage);
        }

        let user_turn = Turn::user(content.as_str())?;
        let user_turn_id = *user_turn.id();
        self.transcript.push(user_turn);

        let reply = self.resolver.respond(&mut self.context, &content);

        let assistant_turn = Turn::assistant(reply.text.as_str())?;
        let assistant_turn_id = *assistant_turn.id();
        self.transcript.push(assistant_turn);

        let analysis = reply.finalized_objective.as_deref().map(|objective| {
            self.record_objective(objective);
            analyze_objective(objective)
        });

        self.updated_at = Timestamp::now();
        debug!(
            session_id = %self.id,
            stage = reply.stage.label(),
            turns = self.transcript.len(),
            "Assistant replied"
        );

        Ok(SendMessageResult {
            user_turn_id,
            assistant_turn_id,
            reply,
            analysis,
        })
    }

    /// Starts over with a fresh transcript.
    ///
    /// Clears the current objective but keeps the objective history.
    ///
    /// # Errors
    ///
    /// - `Domain` if the greeting cannot be recorded
    pub fn reset(&mut self) -> Result<(), ChatError> {
        self.transcript = Transcript::new(self.greeting.clone())?;
        self.context = ConversationContext::new();
        self.current_objective = None;
        self.updated_at = Timestamp::now();
        info!(session_id = %self.id, kept = self.objective_history.len(), "Chat session reset");
        Ok(())
    }

    /// Analyzes the current objective, if there is one.
    pub fn current_analysis(&self) -> Option<ObjectiveAnalysis> {
        self.current_objective.as_deref().map(analyze_objective)
    }

    /// Captures the session state for export.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            stage: self.context.stage,
            context: self.context.clone(),
            transcript: self.transcript.clone(),
            current_objective: self.current_objective.clone(),
            current_analysis: self.current_analysis(),
            objective_history: self.objective_history.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn record_objective(&mut self, objective: &str) {
        self.current_objective = Some(objective.to_string());
        if self.objective_history.iter().any(|o| o == objective) {
            return;
        }
        self.objective_history.push(objective.to_string());
        if self.objective_history.len() > self.max_history {
            self.objective_history.remove(0);
        }
        info!(
            session_id = %self.id,
            history = self.objective_history.len(),
            "Objective recorded"
        );
    }

    // === Accessors ===

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn stage(&self) -> DialogueStage {
        self.context.stage
    }

    pub fn current_objective(&self) -> Option<&str> {
        self.current_objective.as_deref()
    }

    pub fn objective_history(&self) -> &[String] {
        &self.objective_history
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
