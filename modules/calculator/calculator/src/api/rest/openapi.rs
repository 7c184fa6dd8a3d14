use calc_errors::Problem;
use utoipa::OpenApi;

use super::dto::{EvaluateRequest, EvaluateResponse, OperationDto, OperationInfo, PrimeResponse};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator API", description = "Arithmetic utility service"),
    paths(handlers::evaluate, handlers::is_prime, handlers::list_operations),
    components(schemas(
        EvaluateRequest,
        EvaluateResponse,
        OperationDto,
        OperationInfo,
        PrimeResponse,
        Problem
    )),
    tags((name = "calculator", description = "Arithmetic operations and primality"))
)]
pub struct ApiDoc;
