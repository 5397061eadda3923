//! State machine trait for stage enums.
//!
//! Gives every stage enum the same validated transition surface, so the
//! dialogue resolver can only move a conversation along legal edges.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their legal edges and get a checked `transition_to`.
///
/// # Example
///
/// ```ignore
/// let next = DialogueStage::AwaitingSubject.transition_to(DialogueStage::AwaitingLevel)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
