//! REST DTOs for the calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use calculator_sdk::Operation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operation selector as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OperationDto {
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

impl From<OperationDto> for Operation {
    fn from(dto: OperationDto) -> Self {
        match dto {
            OperationDto::Add => Self::Add,
            OperationDto::Subtract => Self::Subtract,
            OperationDto::Multiply => Self::Multiply,
            OperationDto::Divide => Self::Divide,
            OperationDto::Power => Self::Power,
            OperationDto::SquareRoot => Self::SquareRoot,
            OperationDto::Percentage => Self::Percentage,
        }
    }
}

impl From<Operation> for OperationDto {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Add => Self::Add,
            Operation::Subtract => Self::Subtract,
            Operation::Multiply => Self::Multiply,
            Operation::Divide => Self::Divide,
            Operation::Power => Self::Power,
            Operation::SquareRoot => Self::SquareRoot,
            Operation::Percentage => Self::Percentage,
        }
    }
}

/// Request to evaluate one operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct EvaluateRequest {
    pub operation: OperationDto,
    /// First operand (the radicand for `sqrt`)
    pub a: f64,
    /// Second operand; required for every operation except `sqrt`
    #[serde(default)]
    pub b: Option<f64>,
}

/// Result of an evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluateResponse {
    pub operation: OperationDto,
    /// `null` when the result is NaN or infinite
    pub result: Option<f64>,
}

/// Primality of a single integer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrimeResponse {
    pub n: i64,
    pub is_prime: bool,
}

/// Description of a supported operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationInfo {
    pub name: String,
    pub symbol: String,
    pub arity: usize,
}

impl From<Operation> for OperationInfo {
    fn from(op: Operation) -> Self {
        Self {
            name: op.name().to_owned(),
            symbol: op.symbol().to_owned(),
            arity: op.arity(),
        }
    }
}
