//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Greeting must not be empty")]
    EmptyGreeting,

    #[error("Objective history size must be at least 1")]
    InvalidHistorySize,

    #[error("Every intent keyword group needs at least one keyword")]
    EmptyIntentKeywords,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
