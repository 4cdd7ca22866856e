pub mod pagination;
pub mod problem;
