//! Explicit conversation context for objective drafting.
//!
//! Holds the onboarding answers by name instead of by transcript position,
//! so the resolver does not depend on exact turn counts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stage::DialogueStage;
use super::transcript::{LEVEL_POSITION, MEASUREMENT_POSITION, SUBJECT_POSITION};
use super::turn::Turn;
use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

/// Placeholder used when the subject was never captured.
pub const FALLBACK_SUBJECT: &str = "your subject";

/// What the conversation has learned so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub subject: Option<String>,
    pub level_description: Option<String>,
    pub measurement_description: Option<String>,
    pub stage: DialogueStage,
}

impl ConversationContext {
    /// Creates an empty context awaiting the subject.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from a transcript using positional convention.
    ///
    /// Positions 1, 3 and 5 hold subject, level description and measurement
    /// description. The stage comes from the transcript length, which
    /// includes the user turn currently being answered.
    pub fn from_transcript(turns: &[Turn]) -> Self {
        let at = |position: usize| turns.get(position).map(|t| t.content().to_string());
        Self {
            subject: at(SUBJECT_POSITION),
            level_description: at(LEVEL_POSITION),
            measurement_description: at(MEASUREMENT_POSITION),
            stage: DialogueStage::from_transcript_len(turns.len()),
        }
    }

    /// Returns the subject, or a neutral placeholder.
    pub fn subject_or_default(&self) -> &str {
        self.subject.as_deref().unwrap_or(FALLBACK_SUBJECT)
    }

    /// Returns the level description, or an empty string.
    pub fn level_or_default(&self) -> &str {
        self.level_description.as_deref().unwrap_or_default()
    }

    /// Returns the measurement description, or an empty string.
    pub fn measurement_or_default(&self) -> &str {
        self.measurement_description.as_deref().unwrap_or_default()
    }

    /// Records a user answer in the slot the current stage is waiting for.
    ///
    /// Answers in `Drafting` are follow-up requests and are not recorded.
    pub fn record_answer(&mut self, answer: &str) {
        let answer = Some(answer.trim().to_string());
        match self.stage {
            DialogueStage::AwaitingSubject => self.subject = answer,
            DialogueStage::AwaitingLevel => self.level_description = answer,
            DialogueStage::AwaitingMeasurement => self.measurement_description = answer,
            DialogueStage::Drafting => {}
        }
    }

    /// Moves to a new stage along a valid edge.
    ///
    /// # Errors
    ///
    /// - `InvalidStageTransition` if the edge is not allowed
    pub fn advance_to(&mut self, target: DialogueStage) -> Result<(), DomainError> {
        let next = self.stage.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStageTransition, e.to_string())
        })?;
        debug!(from = ?self.stage, to = ?next, "Dialogue stage advanced");
        self.stage = next;
        Ok(())
    }

    /// Starts another objective for the same subject.
    ///
    /// Keeps the subject and clears the level and measurement answers.
    ///
    /// # Errors
    ///
    /// - `InvalidStageTransition` unless the conversation is drafting
    pub fn restart_for_same_subject(&mut self) -> Result<(), DomainError> {
        self.advance_to(DialogueStage::AwaitingLevel)?;
        self.level_description = None;
        self.measurement_description = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_turns(n: usize) -> Vec<Turn> {
        let contents = [
            "What subject?",
            "Statistics",
            "Which level?",
            "apply their knowledge",
            "How will you measure it?",
            "solve regression problems",
            "Here's a template...",
            "suggest",
        ];
        contents
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, c)| {
                if i % 2 == 0 {
                    Turn::assistant(*c).unwrap()
                } else {
                    Turn::user(*c).unwrap()
                }
            })
            .collect()
    }

    mod positional {
        use super::*;

        #[test]
        fn first_answer_is_subject_stage() {
            let ctx = ConversationContext::from_transcript(&linear_turns(2));
            assert_eq!(ctx.stage, DialogueStage::AwaitingSubject);
            assert_eq!(ctx.subject.as_deref(), Some("Statistics"));
            assert_eq!(ctx.level_description, None);
        }

        #[test]
        fn full_transcript_reads_all_positions() {
            let ctx = ConversationContext::from_transcript(&linear_turns(8));
            assert_eq!(ctx.stage, DialogueStage::Drafting);
            assert_eq!(ctx.subject.as_deref(), Some("Statistics"));
            assert_eq!(ctx.level_description.as_deref(), Some("apply their knowledge"));
            assert_eq!(
                ctx.measurement_description.as_deref(),
                Some("solve regression problems")
            );
        }

        #[test]
        fn empty_transcript_awaits_subject() {
            let ctx = ConversationContext::from_transcript(&[]);
            assert_eq!(ctx, ConversationContext::new());
        }
    }

    mod answers {
        use super::*;

        #[test]
        fn record_answer_fills_slot_for_stage() {
            let mut ctx = ConversationContext::new();
            ctx.record_answer("  Art history ");
            assert_eq!(ctx.subject.as_deref(), Some("Art history"));

            ctx.advance_to(DialogueStage::AwaitingLevel).unwrap();
            ctx.record_answer("analyze paintings");
            assert_eq!(ctx.level_description.as_deref(), Some("analyze paintings"));
        }

        #[test]
        fn drafting_answers_are_not_recorded() {
            let mut ctx = ConversationContext {
                subject: Some("Biology".into()),
                stage: DialogueStage::Drafting,
                ..Default::default()
            };
            ctx.record_answer("suggest");
            assert_eq!(ctx.subject.as_deref(), Some("Biology"));
            assert_eq!(ctx.level_description, None);
        }

        #[test]
        fn defaults_cover_missing_fields() {
            let ctx = ConversationContext::new();
            assert_eq!(ctx.subject_or_default(), FALLBACK_SUBJECT);
            assert_eq!(ctx.level_or_default(), "");
            assert_eq!(ctx.measurement_or_default(), "");
        }
    }

    mod stage_changes {
        use super::*;

        #[test]
        fn advance_rejects_skipping() {
            let mut ctx = ConversationContext::new();
            let err = ctx.advance_to(DialogueStage::Drafting).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidStageTransition);
            assert_eq!(ctx.stage, DialogueStage::AwaitingSubject);
        }

        #[test]
        fn restart_keeps_subject_and_clears_answers() {
            let mut ctx = ConversationContext::from_transcript(&linear_turns(8));
            ctx.restart_for_same_subject().unwrap();

            assert_eq!(ctx.stage, DialogueStage::AwaitingLevel);
            assert_eq!(ctx.subject.as_deref(), Some("Statistics"));
            assert_eq!(ctx.level_description, None);
            assert_eq!(ctx.measurement_description, None);
        }

        #[test]
        fn restart_requires_drafting() {
            let mut ctx = ConversationContext::new();
            assert!(ctx.restart_for_same_subject().is_err());
        }
    }
}
