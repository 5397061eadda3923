//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the Objective Sherpa domain.

mod clarity_score;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use clarity_score::ClarityScore;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SessionId, TurnId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
