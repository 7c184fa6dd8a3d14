use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculatorClientV1, CalculatorError, Evaluation, Operation};

use crate::domain::service::Service;

/// In-process `CalculatorClientV1` backed by the domain `Service`.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClientV1 for LocalClient {
    async fn add(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.add(a, b))
    }

    async fn subtract(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.subtract(a, b))
    }

    async fn multiply(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.multiply(a, b))
    }

    async fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.divide(a, b).map_err(Into::into)
    }

    async fn power(&self, base: f64, exponent: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.power(base, exponent))
    }

    async fn square_root(&self, a: f64) -> Result<f64, CalculatorError> {
        self.service.square_root(a).map_err(Into::into)
    }

    async fn percentage(&self, number: f64, percent: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.percentage(number, percent))
    }

    /// Runs on the blocking pool: trial division near `i64::MAX` takes seconds.
    async fn is_prime(&self, n: i64) -> Result<bool, CalculatorError> {
        let service = Arc::clone(&self.service);
        tokio::task::spawn_blocking(move || service.is_prime(n))
            .await
            .map_err(|e| CalculatorError::Internal(format!("primality task failed: {e}")))
    }

    async fn evaluate(
        &self,
        operation: Operation,
        a: f64,
        b: Option<f64>,
    ) -> Result<Evaluation, CalculatorError> {
        let result = self.service.evaluate(operation, a, b)?;
        Ok(Evaluation { operation, result })
    }
}
