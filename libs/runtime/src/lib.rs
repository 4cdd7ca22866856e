//! Process-level runtime support: layered configuration and logging.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{
    default_logging_config, ApiConfig, AppConfig, CliArgs, DatabaseConfig, LoggingConfig,
    Section, ServerConfig,
};
