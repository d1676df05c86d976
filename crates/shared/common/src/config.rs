//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level (used when RUST_LOG is not set)
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env(default_name: &str) -> Self {
        Self {
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| default_name.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}
