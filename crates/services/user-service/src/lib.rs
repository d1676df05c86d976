//! User Service Library
//!
//! This crate provides the user registration use case together with the
//! collaborators it runs against: an in-memory user store and a queued
//! email verification service drained by a background worker.

pub mod config;
pub mod notification;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::{info, warn};

use common::AppResult;
use domain::{CreateUser, User};

use crate::config::UserServiceConfig;
use crate::notification::EmailVerificationQueue;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Register a single user with freshly wired collaborators.
///
/// The confirmation email worker is drained before returning, so any
/// queued email has been processed by the time the result is available.
pub async fn run_registration(config: &UserServiceConfig, input: CreateUser) -> AppResult<User> {
    let store = Arc::new(UserStore::new());
    let (queue, worker) = EmailVerificationQueue::new(config);
    let worker_handle = tokio::spawn(worker.run());

    let user_service = UserManager::new(store.clone(), Arc::new(queue));
    let result = user_service.register(input).await;

    // Dropping the service closes the queue and lets the worker finish
    drop(user_service);
    let stored = store.count().await;
    match worker_handle.await {
        Ok(processed) => info!(processed, stored, "Registration finished"),
        Err(e) => warn!("Email worker terminated abnormally: {}", e),
    }

    result
}
