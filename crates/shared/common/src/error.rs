//! Unified error handling for service callers.
//!
//! Every failure a use case can surface is one of the variants below.
//! Collaborator-specific errors are normalised into these before they
//! leave a service.

use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
///
/// Display is the carried message verbatim, so callers can compare
/// messages without stripping a prefix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    InvalidArgument(String),

    // Collaborator failures (storage, notification)
    #[error("{0}")]
    UserServiceFailure(String),
}

/// Error response body, as printed by front ends
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::UserServiceFailure(_) => "USER_SERVICE_FAILURE",
        }
    }

    /// True for errors caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidArgument(_))
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: ErrorBody {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument(msg) => AppError::InvalidArgument(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn service_failure(msg: impl Into<String>) -> Self {
        AppError::UserServiceFailure(msg.into())
    }
}
