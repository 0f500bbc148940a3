//! CLI command implementations.
//!
//! Every command recovers errors at this boundary: auth failures become a
//! displayed message and a non-zero exit, never a panic, and internal detail
//! (storage paths, hashing internals) stays out of the output.

pub mod account;
pub mod seed;
pub mod watch;

use mercadito_auth::AuthError;

/// The message displayed for an auth failure.
///
/// Validation, conflict, and credential errors already carry their
/// user-facing text; storage and hashing faults collapse into a generic
/// retry-prompting message.
pub fn user_message(err: &AuthError) -> String {
    match err {
        AuthError::Validation(_) | AuthError::EmailTaken | AuthError::InvalidCredentials => {
            err.to_string()
        }
        AuthError::Storage(_) | AuthError::PasswordHash => {
            "could not access local account data, please try again".to_owned()
        }
    }
}
