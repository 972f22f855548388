//! Error types for argument conversion.

use thiserror::Error;

/// Errors raised while converting user input into typed argument values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    /// A fixed-length hex colour had the wrong number of characters
    #[error("Expected {expected} characters but received \"{input}\"")]
    ColorLength { expected: usize, input: String },

    /// A hex colour of the right length contained non-hex characters
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, ArgError>;
