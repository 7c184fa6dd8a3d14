//! REST handlers for the calculator module

use std::sync::Arc;

use axum::extract::Path;
use axum::{Extension, Json};
use calc_errors::Problem;
use calculator_sdk::{CalculatorClientV1, Operation};
use tracing::{debug, instrument};

use super::dto::{EvaluateRequest, EvaluateResponse, OperationInfo, PrimeResponse};
use super::error::calculator_error_to_problem;
use super::openapi::ApiDoc;
use super::{EVALUATE_PATH, PRIMES_PATH};

/// Handler for POST /calculator/v1/evaluate
#[utoipa::path(
    post,
    path = "/calculator/v1/evaluate",
    tag = "calculator",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Operation result", body = EvaluateResponse),
        (status = 400, description = "Missing operand", body = Problem),
        (status = 422, description = "Operand outside the operation's domain", body = Problem),
    )
)]
#[instrument(skip_all)]
pub async fn evaluate(
    Extension(client): Extension<Arc<dyn CalculatorClientV1>>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, Problem> {
    let operation: Operation = req.operation.into();
    debug!(%operation, a = req.a, b = ?req.b, "evaluate request");

    let eval = client
        .evaluate(operation, req.a, req.b)
        .await
        .map_err(|e| calculator_error_to_problem(&e, EVALUATE_PATH))?;

    Ok(Json(EvaluateResponse {
        operation: req.operation,
        result: Some(eval.result).filter(|v| v.is_finite()),
    }))
}

/// Handler for GET /calculator/v1/primes/{n}
#[utoipa::path(
    get,
    path = "/calculator/v1/primes/{n}",
    tag = "calculator",
    params(("n" = i64, Path, description = "Integer to test")),
    responses(
        (status = 200, description = "Primality of n", body = PrimeResponse),
        (status = 500, description = "Primality check failed", body = Problem),
    )
)]
#[instrument(skip_all)]
pub async fn is_prime(
    Extension(client): Extension<Arc<dyn CalculatorClientV1>>,
    Path(n): Path<i64>,
) -> Result<Json<PrimeResponse>, Problem> {
    debug!(n, "primality request");
    let is_prime = client
        .is_prime(n)
        .await
        .map_err(|e| calculator_error_to_problem(&e, PRIMES_PATH))?;

    Ok(Json(PrimeResponse { n, is_prime }))
}

/// Handler for GET /calculator/v1/operations
#[utoipa::path(
    get,
    path = "/calculator/v1/operations",
    tag = "calculator",
    responses((status = 200, description = "Supported operations", body = [OperationInfo]))
)]
#[allow(clippy::unused_async)]
pub async fn list_operations() -> Json<Vec<OperationInfo>> {
    Json(Operation::ALL.into_iter().map(OperationInfo::from).collect())
}

#[allow(clippy::unused_async)]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi as _;
    Json(ApiDoc::openapi())
}

#[allow(clippy::unused_async)]
pub async fn health() -> &'static str {
    "ok"
}
