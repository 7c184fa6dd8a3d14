//! Operand input layer.
//!
//! Takes operands the way a form or a command line delivers them (raw text),
//! runs one operation and renders the single line shown back to the user.

use calculator_sdk::Operation;

use super::error::DomainError;
use super::service::Service;

pub const MISSING_INPUT: &str = "Please enter both values";
pub const INVALID_NUMBER: &str = "Please enter valid numbers";

/// What a single calculation attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    /// A required field was empty.
    MissingInput,
    /// A field did not parse as a number.
    InvalidNumber,
    Rejected(DomainError),
}

impl Outcome {
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Line shown to the user, e.g. `Result: 5.0`.
    #[must_use]
    pub fn render(&self, precision: Option<usize>) -> String {
        match self {
            Self::Value(v) => {
                let mut line = String::from("Result: ");
                line.push_str(&format_number(*v, precision));
                line
            }
            Self::MissingInput => MISSING_INPUT.to_owned(),
            Self::InvalidNumber => INVALID_NUMBER.to_owned(),
            Self::Rejected(e) => e.to_string(),
        }
    }
}

/// Parse a text field into an operand. Empty or blank input yields `None`.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

/// Shortest-form magnitudes outside `[1e-3, 1e7)` switch to scientific notation.
const SCIENTIFIC_ABOVE: f64 = 1e7;
const SCIENTIFIC_BELOW: f64 = 1e-3;

/// Render a number: `5.0`, `2.5`, `1.0E300`, `Infinity`, `NaN`, or fixed
/// decimals when `precision` is set.
#[must_use]
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if let Some(digits) = precision {
        return format!("{value:.digits$}");
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_ABOVE || (magnitude > 0.0 && magnitude < SCIENTIFIC_BELOW) {
        return format_scientific(value);
    }

    let mut out = format!("{value}");
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}

/// `1e300` -> `1.0E300`, `-1.25e-5` -> `-1.25E-5`.
fn format_scientific(value: f64) -> String {
    let raw = format!("{value:e}");
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}

/// Run `operation` on two raw text operands.
///
/// `rhs` is ignored for unary operations.
#[must_use]
pub fn perform(service: &Service, operation: Operation, lhs: &str, rhs: &str) -> Outcome {
    let needs_rhs = !operation.is_unary();
    if lhs.trim().is_empty() || (needs_rhs && rhs.trim().is_empty()) {
        return Outcome::MissingInput;
    }

    let Some(a) = parse_operand(lhs) else {
        return Outcome::InvalidNumber;
    };
    let b = if needs_rhs {
        let Some(b) = parse_operand(rhs) else {
            return Outcome::InvalidNumber;
        };
        Some(b)
    } else {
        None
    };

    match service.evaluate(operation, a, b) {
        Ok(v) => Outcome::Value(v),
        Err(e) => {
            tracing::debug!(%operation, error = %e, "calculation rejected");
            Outcome::Rejected(e)
        }
    }
}
