//! Pure field validators for registration and login input.
//!
//! Stateless checks invoked in a fixed order by the registration flow,
//! short-circuiting on the first failure. Each rejection carries the
//! user-facing message shown at the form boundary.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use mercadito_core::{Email, EmailError, Phone, PhoneError};

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A rejected field, with the message to display.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("{0} is required")]
    Required(String),

    /// The email does not have the `local@domain.tld` shape.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    /// The password is too short.
    #[error("password must be at least {min} characters")]
    WeakPassword {
        /// The enforced minimum length.
        min: usize,
    },

    /// The password and its confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The phone number is not a Chilean mobile number.
    #[error("invalid phone number: {0}")]
    Phone(#[from] PhoneError),
}

/// Reject blank (or whitespace-only) values for a required field.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] naming `field` when the value is
/// blank.
pub fn require_non_empty(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field.to_owned()));
    }
    Ok(())
}

/// Check the `local@domain.tld` email shape, returning the normalized value.
///
/// # Errors
///
/// Returns [`ValidationError::Email`] describing the first shape problem.
pub fn email_shape(value: &str) -> Result<Email, ValidationError> {
    Ok(Email::parse(value)?)
}

/// Enforce the minimum password length.
///
/// # Errors
///
/// Returns [`ValidationError::WeakPassword`] when the secret is shorter than
/// [`MIN_PASSWORD_LENGTH`].
pub fn password_strength(secret: &SecretString) -> Result<(), ValidationError> {
    if secret.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::WeakPassword {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Check that a password and its confirmation are identical.
///
/// # Errors
///
/// Returns [`ValidationError::PasswordMismatch`] when they differ.
pub fn passwords_match(a: &SecretString, b: &SecretString) -> Result<(), ValidationError> {
    if a.expose_secret() != b.expose_secret() {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Check the Chilean mobile phone shape, returning the parsed value.
///
/// # Errors
///
/// Returns [`ValidationError::Phone`] describing the first shape problem.
pub fn phone_shape(value: &str) -> Result<Phone, ValidationError> {
    Ok(Phone::parse(value)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("Ana", "name").is_ok());
        assert_eq!(
            require_non_empty("   ", "name").unwrap_err().to_string(),
            "name is required"
        );
    }

    #[test]
    fn test_email_shape_normalizes() {
        let email = email_shape("Ana@Test.COM").unwrap();
        assert_eq!(email.as_str(), "ana@test.com");
        assert!(email_shape("not-an-email").is_err());
    }

    #[test]
    fn test_password_strength_boundary() {
        assert!(password_strength(&SecretString::from("123456")).is_ok());
        assert_eq!(
            password_strength(&SecretString::from("12345")).unwrap_err(),
            ValidationError::WeakPassword { min: 6 }
        );
    }

    #[test]
    fn test_passwords_match() {
        let a = SecretString::from("Test123!");
        assert!(passwords_match(&a, &SecretString::from("Test123!")).is_ok());
        assert_eq!(
            passwords_match(&a, &SecretString::from("test123!")).unwrap_err(),
            ValidationError::PasswordMismatch
        );
    }

    #[test]
    fn test_phone_shape() {
        assert!(phone_shape("+56 9 1234 5678").is_ok());
        assert!(matches!(
            phone_shape("12345").unwrap_err(),
            ValidationError::Phone(_)
        ));
    }
}
