//! User service - Handles user registration.
//!
//! SOLID (SRP): Handles the registration use case only.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{validate_registration, CreateUser, User, MSG_USER_NOT_CREATED};

use crate::notification::EmailVerificationService;
use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate the input, persist a new user and schedule its confirmation email.
    ///
    /// Passwords are accepted as given; they are neither checked nor stored.
    async fn create_user(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        repeat_password: String,
    ) -> AppResult<User>;

    /// Register a user from a registration form
    async fn register(&self, input: CreateUser) -> AppResult<User> {
        self.create_user(
            input.first_name,
            input.last_name,
            input.email,
            input.password,
            input.repeat_password,
        )
        .await
    }
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    email_verification: Arc<dyn EmailVerificationService>,
}

impl UserManager {
    /// Create new user service instance with its collaborators
    pub fn new(
        repo: Arc<dyn UserRepository>,
        email_verification: Arc<dyn EmailVerificationService>,
    ) -> Self {
        Self {
            repo,
            email_verification,
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        _password: String,
        _repeat_password: String,
    ) -> AppResult<User> {
        validate_registration(&first_name, &last_name, &email).map_err(|e| {
            tracing::debug!(reason = %e, "Registration rejected");
            AppError::from(e)
        })?;

        let user = User::new(Uuid::new_v4(), first_name, last_name, email);

        let created = self.repo.save(&user).await.map_err(|e| {
            tracing::warn!(user_id = %user.id(), error = %e, "Failed to save user");
            AppError::service_failure(e.to_string())
        })?;

        // Only reachable when a repository declines without an error
        if !created {
            tracing::warn!(user_id = %user.id(), "Repository did not confirm user creation");
            return Err(AppError::service_failure(MSG_USER_NOT_CREATED));
        }

        // The saved user stays in place if this fails
        self.email_verification
            .schedule_email_confirmation(&user)
            .await
            .map_err(|e| {
                tracing::warn!(user_id = %user.id(), error = %e, "Failed to schedule email confirmation");
                AppError::service_failure(e.to_string())
            })?;

        tracing::info!(user_id = %user.id(), "User registered");
        Ok(user)
    }
}
