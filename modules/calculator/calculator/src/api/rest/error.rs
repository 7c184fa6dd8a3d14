use calc_errors::{Problem, bad_request, internal_error, unprocessable};
use calculator_sdk::CalculatorError;

pub const CODE_INVALID_ARGUMENT: &str = "calculator.invalid_argument";
pub const CODE_VALIDATION: &str = "calculator.validation";
pub const CODE_INTERNAL: &str = "calculator.internal";

/// Map a client error to an RFC 9457 Problem.
#[must_use]
pub fn calculator_error_to_problem(e: &CalculatorError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        CalculatorError::InvalidArgument(message) => {
            unprocessable(message.as_str()).with_code(CODE_INVALID_ARGUMENT)
        }
        CalculatorError::Validation { field, message } => {
            bad_request(format!("Validation error on '{field}': {message}"))
                .with_code(CODE_VALIDATION)
        }
        CalculatorError::Internal(message) => {
            tracing::error!(error = %e, "Internal error: {message}");
            internal_error("An internal error occurred").with_code(CODE_INTERNAL)
        }
    };

    let problem = problem.with_instance(instance);
    match trace_id {
        Some(id) => problem.with_trace_id(id),
        None => problem,
    }
}
