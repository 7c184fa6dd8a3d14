//! Host bootstrap for the calculator service.
//!
//! - [`config`] - layered `AppConfig` (defaults, YAML, `CALC__*` env, CLI)
//! - [`logging`] - `tracing-subscriber` setup driven by `LoggingConfig`
//! - [`shutdown`] - future that resolves on Ctrl+C / SIGTERM

#![forbid(unsafe_code)]

pub mod config;
pub mod logging;
pub mod shutdown;

pub use config::{
    AppConfig, CliOverrides, ConfigError, ENV_PREFIX, LogFormat, LoggingConfig, ServerConfig,
};
pub use logging::init_logging;
pub use shutdown::wait_for_shutdown;
