//! Authentication error types.

use thiserror::Error;

use crate::storage::StorageError;
use crate::validate::ValidationError;

/// Errors that can occur during registration, login, and session operations.
///
/// All variants are recoverable at the boundary the user interacts with: the
/// caller displays a message and leaves the form intact for correction.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad input shape, length, or mismatch. The message is user-facing.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Registration conflict: the email is already registered
    /// (case-insensitive).
    #[error("an account with this email already exists")]
    EmailTaken,

    /// Login failure. Deliberately identical for an unknown email and a wrong
    /// password, so a caller cannot probe which accounts exist.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The durable slot could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Password hashing failed.
    #[error("password hashing error")]
    PasswordHash,
}
