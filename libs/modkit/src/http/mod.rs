pub mod middleware;
pub mod request_id;
pub mod web;
