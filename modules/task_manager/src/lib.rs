// === PUBLIC CONTRACT ===
// Other crates consume the module through `contract` only
pub mod contract;

pub use contract::{client, error, model};

// === MODULE DEFINITION ===
pub mod module;
pub use module::TaskManager;

// === INTERNAL MODULES ===
// Exposed for tests and wiring; not a stable API.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
