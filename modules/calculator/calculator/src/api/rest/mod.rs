//! REST surface of the calculator module.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;


pub const EVALUATE_PATH: &str = "/calculator/v1/evaluate";
pub const PRIMES_PATH: &str = "/calculator/v1/primes/{n}";
pub const OPERATIONS_PATH: &str = "/calculator/v1/operations";
pub const OPENAPI_PATH: &str = "/openapi.json";
pub const HEALTH_PATH: &str = "/health";
