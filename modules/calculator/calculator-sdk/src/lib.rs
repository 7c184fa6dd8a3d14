//! Calculator SDK
//!
//! Public surface of the calculator module:
//! - API trait (`CalculatorClientV1`)
//! - Models (`Operation`, `Evaluation`)
//! - Error type (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, Operation};
//!
//! let client: Arc<dyn CalculatorClientV1> = module.client();
//! let quotient = client.divide(6.0, 3.0).await?;
//! let eval = client.evaluate(Operation::Power, 2.0, Some(10.0)).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::CalculatorClientV1;
pub use errors::CalculatorError;
pub use models::{Evaluation, Operation, ParseOperationError};
