//! SeaORM entities, one per table.

pub mod category;
pub mod project;
pub mod task;
pub mod user;
