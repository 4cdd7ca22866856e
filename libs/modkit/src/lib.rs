//! # ModKit - shared HTTP toolkit
//!
//! Building blocks every REST module of the server uses:
//!
//! - [`api::problem`]: RFC 9457 Problem Details responses
//! - [`api::pagination`]: `skip`/`limit` query parameters
//! - [`http::request_id`]: `x-request-id` generation and propagation
//! - [`http::middleware`]: the standard middleware stack
//! - [`http::web`]: health, OpenAPI and docs handlers
//! - [`runtime::shutdown`]: OS signal handling for graceful shutdown

pub use anyhow::Result;

pub mod api;
pub mod http;
pub mod runtime;

pub use api::pagination::{Page, PageQuery};
pub use api::problem::{
    bad_request, conflict, internal_error, not_found, unprocessable, Problem, ProblemResponse,
    ValidationError,
};
pub use http::middleware::{with_standard_layers, HttpStackConfig};
