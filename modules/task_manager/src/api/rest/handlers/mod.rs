//! Axum handlers, one submodule per resource.
//!
//! Every handler takes the service from `Extension<Arc<Service>>` and renders
//! failures through [`map_domain_error`](crate::api::rest::error::map_domain_error).

pub mod categories;
pub mod projects;
pub mod tasks;
pub mod users;
