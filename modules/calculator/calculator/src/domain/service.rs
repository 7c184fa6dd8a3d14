//! Domain service for calculator
//!
//! Core arithmetic. Every operation is a pure function of its operands;
//! the service holds no state and can be shared across threads freely.

use calculator_sdk::Operation;
use tracing::debug;

use super::error::DomainError;

/// Stateless arithmetic service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service;

#[allow(clippy::unused_self)]
impl Service {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// `DomainError::InvalidArgument` when `b` is `0.0` or `-0.0`.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(DomainError::divide_by_zero());
        }
        Ok(a / b)
    }

    /// `base` raised to `exponent`, with `f64::powf` semantics.
    #[must_use]
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        debug!(base, exponent, "performing exponentiation");
        base.powf(exponent)
    }

    /// Non-negative square root of `a`.
    ///
    /// # Errors
    /// `DomainError::InvalidArgument` when `a < 0.0`. NaN is passed through.
    pub fn square_root(&self, a: f64) -> Result<f64, DomainError> {
        debug!(a, "performing square root");
        if a < 0.0 {
            return Err(DomainError::negative_radicand());
        }
        Ok(a.sqrt())
    }

    /// `percent` percent of `number`.
    #[must_use]
    pub fn percentage(&self, number: f64, percent: f64) -> f64 {
        debug!(number, percent, "performing percentage");
        number * percent / 100.0
    }

    /// Trial division by odd divisors up to `floor(sqrt(n))`.
    #[must_use]
    pub fn is_prime(&self, n: i64) -> bool {
        debug!(n, "checking primality");
        if n <= 1 {
            return false;
        }
        if n == 2 {
            return true;
        }
        if n % 2 == 0 {
            return false;
        }

        // i*i <= n without leaving i64 range; i stays below 2^32.
        let mut i: i64 = 3;
        while i.checked_mul(i).is_some_and(|square| square <= n) {
            if n % i == 0 {
                return false;
            }
            i += 2;
        }
        true
    }

    /// Dispatch `operation` over `a` and the optional second operand.
    ///
    /// # Errors
    /// `DomainError::Validation` when a binary operation gets no `b`, and
    /// whatever the selected operation itself returns.
    pub fn evaluate(
        &self,
        operation: Operation,
        a: f64,
        b: Option<f64>,
    ) -> Result<f64, DomainError> {
        if operation == Operation::SquareRoot {
            return self.square_root(a);
        }

        let b = b.ok_or_else(|| DomainError::missing_operand(operation))?;
        match operation {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
            Operation::Power => Ok(self.power(a, b)),
            Operation::Percentage => Ok(self.percentage(a, b)),
            Operation::SquareRoot => self.square_root(a),
        }
    }
}
