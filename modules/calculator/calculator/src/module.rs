//! Calculator module definition
//!
//! Wires the domain `Service`, the `LocalClient` and the REST router from a
//! single `CalculatorConfig`.

use std::sync::Arc;

use axum::Router;
use calc_bootstrap::{AppConfig, ConfigError};
use calculator_sdk::{CalculatorClientV1, Operation};

use crate::api::rest::routes;
use crate::config::CalculatorConfig;
use crate::domain::input::{self, Outcome};
use crate::domain::local_client::LocalClient;
use crate::domain::service::Service;

/// Key of this module under `modules.*` in the application config.
pub const MODULE_NAME: &str = "calculator";

/// Calculator module.
///
/// Owns one shared `Service` and exposes it through `CalculatorClientV1`,
/// the operand input layer and the REST router.
pub struct CalculatorModule {
    config: CalculatorConfig,
    service: Arc<Service>,
    client: Arc<dyn CalculatorClientV1>,
}

impl Default for CalculatorModule {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl CalculatorModule {
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        tracing::info!("Initializing calculator module");

        let service = Arc::new(Service::new());
        let client: Arc<dyn CalculatorClientV1> =
            Arc::new(LocalClient::new(Arc::clone(&service)));

        tracing::info!(
            result_precision = ?config.result_precision,
            max_body_bytes = config.max_body_bytes,
            "calculator module initialized"
        );
        Self {
            config,
            service,
            client,
        }
    }

    /// Build the module from `modules.calculator.config`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidModuleConfig` if the section is malformed.
    pub fn from_app_config(app: &AppConfig) -> Result<Self, ConfigError> {
        let config: CalculatorConfig = app.module_config_or_default(MODULE_NAME)?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClientV1> {
        Arc::clone(&self.client)
    }

    /// Run one operation over raw text operands.
    #[must_use]
    pub fn perform(&self, operation: Operation, lhs: &str, rhs: &str) -> Outcome {
        input::perform(&self.service, operation, lhs, rhs)
    }

    /// Render an outcome with the configured precision.
    #[must_use]
    pub fn render(&self, outcome: &Outcome) -> String {
        outcome.render(self.config.result_precision)
    }

    /// REST routes of this module, ready to be served or merged.
    #[must_use]
    pub fn router(&self) -> Router {
        tracing::info!("Registering calculator REST routes");
        routes::register_routes(Router::new(), self.client(), &self.config)
    }
}
