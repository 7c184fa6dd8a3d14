//! Route registration for the calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use calculator_sdk::CalculatorClientV1;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::{EVALUATE_PATH, HEALTH_PATH, OPENAPI_PATH, OPERATIONS_PATH, PRIMES_PATH};
use crate::config::CalculatorConfig;

/// Register all REST routes for the calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `client` - API handlers delegate to
/// * `config` - Module configuration (body size limit)
#[must_use]
pub fn register_routes(
    router: Router,
    client: Arc<dyn CalculatorClientV1>,
    config: &CalculatorConfig,
) -> Router {
    router
        .route(EVALUATE_PATH, post(handlers::evaluate))
        .route(PRIMES_PATH, get(handlers::is_prime))
        .route(OPERATIONS_PATH, get(handlers::list_operations))
        .route(OPENAPI_PATH, get(handlers::openapi_json))
        .route(HEALTH_PATH, get(handlers::health))
        .layer(Extension(client))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
