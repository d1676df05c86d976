//! Notification layer - confirmation email scheduling.
//!
//! The service only sees the [`EmailVerificationService`] contract. The
//! bundled implementation queues jobs for a background [`EmailWorker`].

mod email_job;
mod email_verification;

pub use email_job::{email_job_handler, EmailJob, EmailWorker, MailerSettings};
pub use email_verification::{EmailVerificationQueue, EmailVerificationService, NotificationError};

#[cfg(any(test, feature = "test-utils"))]
pub use email_verification::MockEmailVerificationService;
