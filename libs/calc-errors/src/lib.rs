//! Error payloads shared by the calculator HTTP surface.
//!
//! Only the RFC 9457 `Problem` model lives here. Framework glue is behind
//! the `axum` and `utoipa` features so the SDK side never pulls in HTTP crates.

#![forbid(unsafe_code)]

pub mod problem;

pub use problem::{
    APPLICATION_PROBLEM_JSON, Problem, bad_request, internal_error, unprocessable,
};
