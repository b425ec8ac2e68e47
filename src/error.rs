//! Error handling for the interest calculator
//!
//! Library functions return [`InterestError`]; the binary wraps them with
//! anyhow for context chaining on the way to the user.

use thiserror::Error;

/// Failures of an interest calculation or of loading its inputs
#[derive(Error, Debug)]
pub enum InterestError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("domain error: {0}")]
    DomainError(String),

    #[error("numeric overflow: {0}")]
    Overflow(String),

    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, InterestError>;
