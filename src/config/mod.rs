//! Configuration loading and management for the receipt processor.
//!
//! This module provides functionality to load the service configuration
//! (server binding and logging) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use receipt_processor::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Binding {}:{}", config.server().host, config.server().port);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT, LoggingConfig, ServerConfig, ServiceConfig,
};
