use serde::{Deserialize, Serialize};

const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

/// Configuration for the calculator module, read from
/// `modules.calculator.config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Fixed number of decimals for rendered results; `None` prints the
    /// shortest exact representation.
    pub result_precision: Option<usize>,
    /// Upper bound for REST request bodies.
    pub max_body_bytes: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            result_precision: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
