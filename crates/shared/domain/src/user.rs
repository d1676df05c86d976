//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity.
///
/// Fields are private and there are no setters: once built, a user's
/// identity and profile never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    /// Declared for symmetry with the registration form; never populated
    #[serde(skip_serializing)]
    password: Option<String>,
    #[serde(skip_serializing)]
    repeat_password: Option<String>,
}

impl User {
    /// Create a new user from already validated fields
    pub fn new(id: Uuid, first_name: String, last_name: String, email: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            password: None,
            repeat_password: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn repeat_password(&self) -> Option<&str> {
        self.repeat_password.as_deref()
    }

    /// Full display name ("first last")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// User registration data transfer object.
///
/// Missing fields deserialize to empty strings and are then rejected by
/// validation like any other blank value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateUser {
    /// User first name
    pub first_name: String,
    /// User last name
    pub last_name: String,
    /// User email address
    pub email: String,
    /// Password as typed (not validated)
    pub password: String,
    /// Password confirmation as typed (not validated)
    pub repeat_password: String,
}
