//! Domain-level errors.
//!
//! These errors represent business rule violations.
//! They are independent of infrastructure concerns (storage, mail delivery).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input rejected by a registration rule; the message is shown as-is
    #[error("{0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DomainError::InvalidArgument(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
