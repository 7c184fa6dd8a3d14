//! `CalculatorClientV1` trait definition.

use async_trait::async_trait;

use crate::errors::CalculatorError;
use crate::models::{Evaluation, Operation};

/// Public API of the calculator module (Version 1).
///
/// Every operation is pure; implementations may be shared freely across tasks.
/// Only `divide`, `square_root` and `evaluate` can fail.
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    async fn add(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    async fn subtract(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    async fn multiply(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Fails with `InvalidArgument` when `b` is zero.
    async fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    async fn power(&self, base: f64, exponent: f64) -> Result<f64, CalculatorError>;

    /// Fails with `InvalidArgument` when `a` is negative.
    async fn square_root(&self, a: f64) -> Result<f64, CalculatorError>;

    /// `number * percent / 100`.
    async fn percentage(&self, number: f64, percent: f64) -> Result<f64, CalculatorError>;

    async fn is_prime(&self, n: i64) -> Result<bool, CalculatorError>;

    /// Run `operation` on `a` and, for binary operations, `b`.
    ///
    /// A binary operation without `b` fails with `Validation`.
    async fn evaluate(
        &self,
        operation: Operation,
        a: f64,
        b: Option<f64>,
    ) -> Result<Evaluation, CalculatorError>;
}
