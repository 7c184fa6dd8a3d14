//! Error types for the calculator SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// Input outside the operation's mathematical domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl CalculatorError {
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
