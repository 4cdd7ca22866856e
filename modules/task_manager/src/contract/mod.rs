pub mod client;
pub mod error;
pub mod model;

pub use client::TaskManagerApi;
pub use error::TaskManagerError;
pub use model::*;
