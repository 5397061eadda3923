//! Conversation domain module.
//!
//! Guides a user through drafting a learning objective: captures the
//! subject, the target cognitive level and the measurement, then answers
//! follow-up requests with templates, suggestions and refinement prompts.

mod composer;
mod context;
mod extractor;
mod intent;
pub mod prompts;
mod resolver;
mod stage;
mod transcript;
mod turn;

pub use composer::{compose_objective, domain_clause, OBJECTIVE_PREFIX};
pub use context::{ConversationContext, FALLBACK_SUBJECT};
pub use extractor::{extract_objective, InputSanitizer, SanitizationError, MAX_INPUT_LENGTH};
pub use intent::{FollowUpIntent, IntentKeywords};
pub use prompts::{GREETING, OBJECTIVE_MARKER};
pub use resolver::{generate_response, AssistantReply, DialogueStageResolver};
pub use stage::DialogueStage;
pub use transcript::{Transcript, LEVEL_POSITION, MEASUREMENT_POSITION, SUBJECT_POSITION};
pub use turn::{Role, Turn};
