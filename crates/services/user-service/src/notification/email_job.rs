//! Email background job.
//!
//! Confirmation emails are queued as jobs and processed by a worker task.
//! Transport is not wired up: the handler logs the rendered message.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use domain::{User, CONFIRMATION_EMAIL_SUBJECT};

use crate::config::UserServiceConfig;

/// Settings needed to render a confirmation email
#[derive(Debug, Clone)]
pub struct MailerSettings {
    /// Sender address
    pub from: String,
    /// Base URL of the confirmation link
    pub confirmation_url: String,
}

impl From<&UserServiceConfig> for MailerSettings {
    fn from(config: &UserServiceConfig) -> Self {
        Self {
            from: config.email_from.clone(),
            confirmation_url: config.confirmation_url.clone(),
        }
    }
}

/// Email job payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJob {
    /// Recipient email address
    pub to: String,
    /// Email subject line
    pub subject: String,
    /// Email body content (plain text)
    pub body: String,
    /// Optional sender override
    #[serde(default)]
    pub from: Option<String>,
}

impl EmailJob {
    /// Create a new email job
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            from: None,
        }
    }

    /// Set custom sender address
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Build the confirmation email for a freshly registered user
    pub fn confirmation(user: &User, settings: &MailerSettings) -> Self {
        let body = format!(
            "Hi {},\n\n\
             Thanks for signing up. Please confirm your email address by visiting:\n\
             {}?user={}\n",
            user.first_name(),
            settings.confirmation_url,
            user.id()
        );

        Self::new(user.email(), CONFIRMATION_EMAIL_SUBJECT, body).with_from(settings.from.as_str())
    }
}

/// Email job handler - processes a single email job
pub async fn email_job_handler(job: EmailJob) {
    let from = job.from.as_deref().unwrap_or("<default sender>");

    tracing::info!(
        to = %job.to,
        from = %from,
        subject = %job.subject,
        "Processing email job"
    );
    tracing::debug!(
        "=== EMAIL (not sent) ===\n\
         From: {}\n\
         To: {}\n\
         Subject: {}\n\
         Body:\n{}\n\
         ========================",
        from,
        job.to,
        job.subject,
        job.body
    );
}

/// Background worker draining the confirmation email queue.
pub struct EmailWorker {
    receiver: mpsc::Receiver<EmailJob>,
}

impl EmailWorker {
    pub(crate) fn new(receiver: mpsc::Receiver<EmailJob>) -> Self {
        Self { receiver }
    }

    /// Process jobs until every queue handle is dropped.
    ///
    /// Returns the number of jobs processed.
    pub async fn run(mut self) -> usize {
        tracing::debug!("Email worker started");

        let mut processed = 0;
        while let Some(job) = self.receiver.recv().await {
            email_job_handler(job).await;
            processed += 1;
        }

        tracing::debug!(processed, "Email worker stopped");
        processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn settings() -> MailerSettings {
        MailerSettings {
            from: "noreply@estore.test".to_string(),
            confirmation_url: "https://estore.test/confirm".to_string(),
        }
    }

    #[test]
    fn test_confirmation_job_contents() {
        let user = User::new(
            Uuid::new_v4(),
            "Camila".to_string(),
            "Nascimento".to_string(),
            "camila@teste.com".to_string(),
        );

        let job = EmailJob::confirmation(&user, &settings());

        assert_eq!(job.to, "camila@teste.com");
        assert_eq!(job.subject, CONFIRMATION_EMAIL_SUBJECT);
        assert_eq!(job.from.as_deref(), Some("noreply@estore.test"));
        assert!(job.body.starts_with("Hi Camila,"));
        assert!(job
            .body
            .contains(&format!("https://estore.test/confirm?user={}", user.id())));
    }

    #[test]
    fn test_settings_from_config() {
        let config = UserServiceConfig::default();
        let settings = MailerSettings::from(&config);
        assert_eq!(settings.from, config.email_from);
        assert_eq!(settings.confirmation_url, config.confirmation_url);
    }

    #[tokio::test]
    async fn test_worker_drains_until_closed() {
        let (tx, rx) = mpsc::channel(4);
        let worker = tokio::spawn(EmailWorker::new(rx).run());

        tx.send(EmailJob::new("a@test.com", "one", "body")).await.unwrap();
        tx.send(EmailJob::new("b@test.com", "two", "body")).await.unwrap();
        drop(tx);

        assert_eq!(worker.await.unwrap(), 2);
    }
}
