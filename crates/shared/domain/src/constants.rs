//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Character every accepted email address must contain
pub const EMAIL_REQUIRED_CHAR: char = '@';

/// Rejection message for a blank first name
pub const MSG_FIRST_NAME_EMPTY: &str = "User's first name is empty";

/// Rejection message for a blank last name
pub const MSG_LAST_NAME_EMPTY: &str = "User's last name is empty";

/// Rejection message for a blank or malformed email
pub const MSG_EMAIL_INVALID: &str = "Email is invalid";

// =============================================================================
// Registration
// =============================================================================

/// Failure message when the repository does not confirm creation
pub const MSG_USER_NOT_CREATED: &str = "Could not create user";

/// Subject line of the confirmation email
pub const CONFIRMATION_EMAIL_SUBJECT: &str = "Please confirm your email address";
