//! Password hashing and verification.
//!
//! Digests are Argon2id in PHC string format with a fresh random salt per
//! hash, so the stored representation is not reversible and two hashes of the
//! same secret differ. Verification re-derives with the salt embedded in the
//! digest rather than re-hashing and comparing strings.
//!
//! Hashing is deliberately CPU-expensive. The async [`hash_secret`] and
//! [`verify_secret`] wrappers offload the work to a blocking thread so the
//! caller's surface stays responsive; no other operation in this crate
//! suspends.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};

use crate::error::AuthError;

/// Hash a password using Argon2id with a fresh random salt.
///
/// # Errors
///
/// Returns [`AuthError::PasswordHash`] if digest computation fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored PHC-format digest.
///
/// Returns `false` for a wrong password and for a digest that cannot be
/// parsed; an unreadable digest must not authenticate anyone.
#[must_use]
pub fn verify_password(password: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Hash a secret on a blocking thread.
///
/// # Errors
///
/// Returns [`AuthError::PasswordHash`] if digest computation fails or the
/// blocking task is cancelled.
pub async fn hash_secret(secret: &SecretString) -> Result<String, AuthError> {
    let secret = secret.clone();
    tokio::task::spawn_blocking(move || hash_password(secret.expose_secret()))
        .await
        .map_err(|_| AuthError::PasswordHash)?
}

/// Verify a secret against a stored digest on a blocking thread.
///
/// # Errors
///
/// Returns [`AuthError::PasswordHash`] if the blocking task is cancelled.
pub async fn verify_secret(secret: &SecretString, digest: &str) -> Result<bool, AuthError> {
    let secret = secret.clone();
    let digest = digest.to_owned();
    tokio::task::spawn_blocking(move || verify_password(secret.expose_secret(), &digest))
        .await
        .map_err(|_| AuthError::PasswordHash)
}
