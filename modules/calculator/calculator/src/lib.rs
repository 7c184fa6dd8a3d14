//! Calculator Module
//!
//! Pure arithmetic utility (add, subtract, multiply, divide, power, square
//! root, percentage, primality) plus the surfaces that drive it.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - core arithmetic, no I/O
//! - `domain/input.rs` - raw text operands in, display line out
//! - `domain/local_client.rs` - `CalculatorClientV1` backed by the service
//! - `api/rest/` - axum routes, DTOs and Problem mapping
//! - `module.rs` - wiring from `CalculatorConfig`
//!
//! External consumers should depend on `calculator-sdk` and talk to the
//! module through `CalculatorClientV1`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODULE DEFINITION ===
mod module;
pub use module::{CalculatorModule, MODULE_NAME};

pub mod config;
pub use config::CalculatorConfig;

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{DomainError, Outcome, Service};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
