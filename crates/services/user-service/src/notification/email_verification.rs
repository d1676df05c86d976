//! Email verification contract and queued implementation.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc::{self, error::TrySendError};

use domain::User;

use super::email_job::{EmailJob, EmailWorker, MailerSettings};
use crate::config::UserServiceConfig;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Failures while scheduling a confirmation email.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// Delivery backend failure; the message is passed through untouched
    #[error("{0}")]
    Delivery(String),

    #[error("Email confirmation queue is full")]
    QueueFull,

    #[error("Email confirmation queue is closed")]
    QueueClosed,
}

impl NotificationError {
    pub fn delivery(msg: impl Into<String>) -> Self {
        NotificationError::Delivery(msg.into())
    }
}

/// Email verification trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmailVerificationService: Send + Sync {
    /// Schedule the confirmation email for a newly created user.
    ///
    /// Returning `Ok` means the email was accepted for delivery, not that
    /// it was sent.
    async fn schedule_email_confirmation(&self, user: &User) -> Result<(), NotificationError>;
}

/// Queue-backed EmailVerificationService.
///
/// Scheduling never waits: a full queue is reported as an error.
pub struct EmailVerificationQueue {
    sender: mpsc::Sender<EmailJob>,
    settings: MailerSettings,
}

impl EmailVerificationQueue {
    /// Create the queue and the worker that drains it
    pub fn new(config: &UserServiceConfig) -> (Self, EmailWorker) {
        let (sender, receiver) = mpsc::channel(config.email_queue_capacity.max(1));
        let queue = Self {
            sender,
            settings: MailerSettings::from(config),
        };

        (queue, EmailWorker::new(receiver))
    }
}

#[async_trait]
impl EmailVerificationService for EmailVerificationQueue {
    async fn schedule_email_confirmation(&self, user: &User) -> Result<(), NotificationError> {
        let job = EmailJob::confirmation(user, &self.settings);

        self.sender.try_send(job).map_err(|e| match e {
            TrySendError::Full(_) => NotificationError::QueueFull,
            TrySendError::Closed(_) => NotificationError::QueueClosed,
        })?;

        tracing::debug!(user_id = %user.id(), "Confirmation email queued");
        Ok(())
    }
}
