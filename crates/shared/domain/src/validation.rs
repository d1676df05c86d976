//! Registration input rules.
//!
//! Checks run in a fixed order and stop at the first violation, so callers
//! always see the message for the earliest offending field.

use crate::constants::{
    EMAIL_REQUIRED_CHAR, MSG_EMAIL_INVALID, MSG_FIRST_NAME_EMPTY, MSG_LAST_NAME_EMPTY,
};
use crate::error::{DomainError, DomainResult};

/// True when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Reject a blank first name.
pub fn validate_first_name(first_name: &str) -> DomainResult<()> {
    if is_blank(first_name) {
        return Err(DomainError::invalid_argument(MSG_FIRST_NAME_EMPTY));
    }
    Ok(())
}

/// Reject a blank last name.
pub fn validate_last_name(last_name: &str) -> DomainResult<()> {
    if is_blank(last_name) {
        return Err(DomainError::invalid_argument(MSG_LAST_NAME_EMPTY));
    }
    Ok(())
}

/// Reject a blank email or one without an `@`.
pub fn validate_email(email: &str) -> DomainResult<()> {
    if is_blank(email) || !email.contains(EMAIL_REQUIRED_CHAR) {
        return Err(DomainError::invalid_argument(MSG_EMAIL_INVALID));
    }
    Ok(())
}

/// Validate the identity fields of a registration request.
///
/// Passwords are not inspected here.
pub fn validate_registration(first_name: &str, last_name: &str, email: &str) -> DomainResult<()> {
    validate_first_name(first_name)?;
    validate_last_name(last_name)?;
    validate_email(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: DomainResult<()>) -> String {
        match result {
            Err(DomainError::InvalidArgument(msg)) => msg,
            Ok(()) => panic!("expected validation failure"),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_registration("Camila", "Nascimento", "camila@teste.com").is_ok());
    }

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_empty_first_name_rejected() {
        let msg = message(validate_registration("", "Nascimento", "camila@teste.com"));
        assert_eq!(msg, "User's first name is empty");
    }

    #[test]
    fn test_whitespace_last_name_rejected() {
        let msg = message(validate_registration("Camila", "  ", "camila@teste.com"));
        assert_eq!(msg, "User's last name is empty");
    }

    #[test]
    fn test_email_without_at_sign_rejected() {
        let msg = message(validate_registration("Camila", "Nascimento", "camila.teste.com"));
        assert_eq!(msg, "Email is invalid");
    }

    #[test]
    fn test_first_failing_field_wins() {
        // All three fields are invalid; only the first is reported
        let msg = message(validate_registration("", "", ""));
        assert_eq!(msg, "User's first name is empty");

        let msg = message(validate_registration("Camila", "", ""));
        assert_eq!(msg, "User's last name is empty");
    }

    #[test]
    fn test_passwords_are_not_part_of_validation() {
        // A lone "@" is enough to pass the email rule
        assert!(validate_email("@").is_ok());
    }
}
