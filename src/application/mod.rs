//! Application layer - session orchestration.
//!
//! This layer owns conversation state and coordinates the domain services.

mod chat_session;

pub use chat_session::{ChatError, ChatSession, SendMessageResult, SessionSnapshot};
