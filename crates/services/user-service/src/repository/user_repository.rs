//! User repository contract and in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence failures reported by a repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Backend failure; the message is passed through untouched
    #[error("{0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        RepositoryError::Storage(msg.into())
    }
}

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    ///
    /// `Ok(true)` confirms the record was created. `Ok(false)` means the
    /// backend declined without failing.
    async fn save(&self, user: &User) -> Result<bool, RepositoryError>;
}

/// In-memory implementation of UserRepository
#[derive(Default)]
pub struct UserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: &User) -> Result<bool, RepositoryError> {
        let mut users = self.users.write().await;

        // Never overwrite an existing record
        if users.contains_key(&user.id()) {
            tracing::debug!(user_id = %user.id(), "User id already stored");
            return Ok(false);
        }

        users.insert(user.id(), user.clone());
        Ok(true)
    }
}
