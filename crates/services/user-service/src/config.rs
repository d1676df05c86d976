//! User service configuration.

use std::env;

use common::ServiceConfig;

/// Default sender for confirmation emails
const DEFAULT_EMAIL_FROM: &str = "noreply@example.com";

/// Default link target for confirmation emails
const DEFAULT_CONFIRMATION_URL: &str = "http://localhost:3000/confirm-email";

/// Default number of confirmation emails that may wait in the queue
const DEFAULT_EMAIL_QUEUE_CAPACITY: usize = 128;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Shared service settings (name, log level)
    pub service: ServiceConfig,
    /// Sender address for confirmation emails
    pub email_from: String,
    /// Base URL the confirmation link points at
    pub confirmation_url: String,
    /// Bounded size of the confirmation email queue (at least 1)
    pub email_queue_capacity: usize,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env("user-service"),
            email_from: env::var("USER_SERVICE_EMAIL_FROM")
                .or_else(|_| env::var("SMTP_FROM"))
                .unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_string()),
            confirmation_url: env::var("USER_SERVICE_CONFIRMATION_URL")
                .unwrap_or_else(|_| DEFAULT_CONFIRMATION_URL.to_string()),
            email_queue_capacity: env::var("USER_SERVICE_EMAIL_QUEUE_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(DEFAULT_EMAIL_QUEUE_CAPACITY)
                .max(1),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                ..ServiceConfig::default()
            },
            email_from: DEFAULT_EMAIL_FROM.to_string(),
            confirmation_url: DEFAULT_CONFIRMATION_URL.to_string(),
            email_queue_capacity: DEFAULT_EMAIL_QUEUE_CAPACITY,
        }
    }
}
