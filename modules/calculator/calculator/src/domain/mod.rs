//! Domain layer for the calculator module.

pub mod error;
pub mod input;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use input::Outcome;
pub use service::Service;

#[cfg(test)]
mod service_test;
