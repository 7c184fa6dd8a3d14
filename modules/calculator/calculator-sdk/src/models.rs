//! Calculator models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Arithmetic operation understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    #[serde(alias = "sub")]
    Subtract,
    #[serde(alias = "mul")]
    Multiply,
    #[serde(alias = "div")]
    Divide,
    #[serde(alias = "pow")]
    Power,
    #[serde(rename = "sqrt", alias = "square_root")]
    SquareRoot,
    #[serde(alias = "percent")]
    Percentage,
}

impl Operation {
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::SquareRoot,
        Self::Percentage,
    ];

    /// Number of operands consumed.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::SquareRoot => 1,
            _ => 2,
        }
    }

    #[must_use]
    pub const fn is_unary(self) -> bool {
        self.arity() == 1
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::SquareRoot => "sqrt",
            Self::Percentage => "percentage",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::SquareRoot => "\u{221a}",
            Self::Percentage => "%",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation '{0}'")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts canonical names, short aliases and symbols, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Self::Add,
            "subtract" | "sub" | "minus" | "-" => Self::Subtract,
            "multiply" | "mul" | "times" | "*" | "x" => Self::Multiply,
            "divide" | "div" | "/" => Self::Divide,
            "power" | "pow" | "^" | "**" => Self::Power,
            "sqrt" | "square_root" | "square-root" | "\u{221a}" => Self::SquareRoot,
            "percentage" | "percent" | "%" => Self::Percentage,
            _ => return Err(ParseOperationError(s.to_owned())),
        };
        Ok(op)
    }
}

/// Outcome of a successful `evaluate` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub result: f64,
}
