//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling for service callers
//! - Configuration structures
//! - Tracing initialisation

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::init_tracing;
