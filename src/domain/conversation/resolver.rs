//! Dialogue stage resolver.
//!
//! Decides the assistant's next reply from the conversation context and the
//! latest user input. Pure apart from updating the context it is handed.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::composer::compose_objective;
use super::context::ConversationContext;
use super::intent::{FollowUpIntent, IntentKeywords};
use super::prompts;
use super::stage::DialogueStage;
use super::turn::Turn;
use crate::domain::taxonomy::{pick_action_verb, resolve_blooms_level};

/// The assistant's answer to one user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    /// Text to show the user.
    pub text: String,
    /// The objective this reply finalizes, if any.
    pub finalized_objective: Option<String>,
    /// Stage the conversation is in after this reply.
    pub stage: DialogueStage,
}

impl AssistantReply {
    fn prompt(text: impl Into<String>, stage: DialogueStage) -> Self {
        Self {
            text: text.into(),
            finalized_objective: None,
            stage,
        }
    }
}

/// Resolves replies for an objective-drafting conversation.
#[derive(Debug, Clone, Default)]
pub struct DialogueStageResolver {
    keywords: IntentKeywords,
}

impl DialogueStageResolver {
    /// Creates a resolver with default intent keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with custom intent keywords.
    pub fn with_keywords(keywords: IntentKeywords) -> Self {
        Self { keywords }
    }

    /// Answers a user turn and moves the context forward.
    ///
    /// Onboarding stages record the answer and ask the next question.
    /// The drafting stage classifies the input as a follow-up request.
    pub fn respond(&self, context: &mut ConversationContext, user_input: &str) -> AssistantReply {
        let stage = context.stage;
        context.record_answer(user_input);

        let reply = match stage {
            DialogueStage::AwaitingSubject => {
                prompts::subject_capture(context.subject_or_default())
            }
            DialogueStage::AwaitingLevel => prompts::MEASUREMENT_QUESTION.to_string(),
            DialogueStage::AwaitingMeasurement => {
                let level = resolve_blooms_level(context.level_or_default());
                let verb = pick_action_verb(context.measurement_or_default(), Some(level));
                prompts::template_proposal(context.subject_or_default(), verb)
            }
            DialogueStage::Drafting => return self.follow_up(context, user_input),
        };

        self.advance(context, stage.next());
        AssistantReply::prompt(reply, context.stage)
    }

    fn follow_up(&self, context: &mut ConversationContext, user_input: &str) -> AssistantReply {
        let intent = self.keywords.classify(user_input);
        debug!(?intent, "Classified follow-up");

        match intent {
            FollowUpIntent::Suggest => {
                let objective = compose_objective(
                    context.subject_or_default(),
                    context.level_or_default(),
                    context.measurement_or_default(),
                );
                AssistantReply {
                    text: prompts::objective_suggestion(&objective, context.subject_or_default()),
                    finalized_objective: Some(objective),
                    stage: context.stage,
                }
            }
            FollowUpIntent::Refine => {
                AssistantReply::prompt(prompts::REFINEMENT_OPTIONS, context.stage)
            }
            FollowUpIntent::Another => {
                let text = prompts::another_objective(context.subject_or_default());
                if let Err(e) = context.restart_for_same_subject() {
                    warn!(error = %e, "Could not restart level capture");
                }
                AssistantReply::prompt(text, context.stage)
            }
            FollowUpIntent::Other => AssistantReply::prompt(prompts::SMART_NUDGE, context.stage),
        }
    }

    fn advance(&self, context: &mut ConversationContext, target: DialogueStage) {
        if let Err(e) = context.advance_to(target) {
            warn!(error = %e, "Stage transition rejected");
        }
    }
}

/// Generates the reply text for a user turn from the transcript alone.
///
/// `transcript` must already contain the user turn being answered; the
/// stage and onboarding answers are inferred from turn positions. Replies
/// that finalize an objective contain [`prompts::OBJECTIVE_MARKER`].
pub fn generate_response(user_input: &str, transcript: &[Turn]) -> String {
    let mut context = ConversationContext::from_transcript(transcript);
    DialogueStageResolver::new().respond(&mut context, user_input).text
}
