//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The registration rules live here so every entry point applies the same
//! checks in the same order.

pub mod constants;
pub mod error;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{CreateUser, User};
pub use validation::validate_registration;
