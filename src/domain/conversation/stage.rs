//! Dialogue stages of an objective-drafting conversation.
//!
//! The stage decides which prompt the assistant sends next. Onboarding
//! stages collect one answer each; `Drafting` handles follow-up requests.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a drafting conversation currently stands.
///
/// Stages flow in order but can loop:
/// - `AwaitingSubject` → `AwaitingLevel` → `AwaitingMeasurement` → `Drafting`
/// - `Drafting` → `Drafting` (refine, suggest, nudge)
/// - `Drafting` → `AwaitingLevel` (another objective for the same subject)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStage {
    /// Waiting for the subject or skill.
    #[default]
    AwaitingSubject,

    /// Waiting for a description of the target cognitive level.
    AwaitingLevel,

    /// Waiting for the observable action that shows mastery.
    AwaitingMeasurement,

    /// Onboarding done; answering suggest/refine/another requests.
    Drafting,
}

impl DialogueStage {
    /// Transcript length up to which each onboarding stage applies.
    ///
    /// The transcript includes the greeting and the user turn being answered.
    const SUBJECT_MAX_LEN: usize = 2;
    const LEVEL_MAX_LEN: usize = 4;
    const MEASUREMENT_MAX_LEN: usize = 6;

    /// Infers the stage from a transcript length alone.
    pub fn from_transcript_len(len: usize) -> Self {
        if len <= Self::SUBJECT_MAX_LEN {
            Self::AwaitingSubject
        } else if len <= Self::LEVEL_MAX_LEN {
            Self::AwaitingLevel
        } else if len <= Self::MEASUREMENT_MAX_LEN {
            Self::AwaitingMeasurement
        } else {
            Self::Drafting
        }
    }

    /// Returns the stage reached after answering a user turn in this stage.
    pub fn next(&self) -> Self {
        match self {
            Self::AwaitingSubject => Self::AwaitingLevel,
            Self::AwaitingLevel => Self::AwaitingMeasurement,
            Self::AwaitingMeasurement | Self::Drafting => Self::Drafting,
        }
    }

    /// Returns a short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AwaitingSubject => "Subject",
            Self::AwaitingLevel => "Cognitive level",
            Self::AwaitingMeasurement => "Measurement",
            Self::Drafting => "Drafting",
        }
    }

    /// Returns true while the conversation is still collecting basics.
    pub fn is_onboarding(&self) -> bool {
        !matches!(self, Self::Drafting)
    }
}

impl StateMachine for DialogueStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogueStage::*;
        matches!(
            (self, target),
            (AwaitingSubject, AwaitingLevel)
                | (AwaitingLevel, AwaitingMeasurement)
                | (AwaitingMeasurement, Drafting)
                | (Drafting, Drafting)
                | (Drafting, AwaitingLevel)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueStage::*;
        match self {
            AwaitingSubject => vec![AwaitingLevel],
            AwaitingLevel => vec![AwaitingMeasurement],
            AwaitingMeasurement => vec![Drafting],
            Drafting => vec![Drafting, AwaitingLevel],
        }
    }
}
