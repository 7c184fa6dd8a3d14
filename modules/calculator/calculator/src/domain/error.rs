use calculator_sdk::{CalculatorError, Operation};

pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";
pub const NEGATIVE_RADICAND: &str = "Cannot take the square root of a negative number";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Operand outside the operation's mathematical domain.
    #[error("{message}")]
    InvalidArgument {
        operation: Operation,
        message: String,
    },

    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },
}

impl DomainError {
    pub(crate) fn divide_by_zero() -> Self {
        Self::InvalidArgument {
            operation: Operation::Divide,
            message: DIVIDE_BY_ZERO.to_owned(),
        }
    }

    pub(crate) fn negative_radicand() -> Self {
        Self::InvalidArgument {
            operation: Operation::SquareRoot,
            message: NEGATIVE_RADICAND.to_owned(),
        }
    }

    pub(crate) fn missing_operand(operation: Operation) -> Self {
        Self::Validation {
            field: "b".to_owned(),
            message: format!("'{operation}' requires a second operand"),
        }
    }
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidArgument { message, .. } => Self::InvalidArgument(message),
            DomainError::Validation { field, message } => Self::Validation { field, message },
        }
    }
}
