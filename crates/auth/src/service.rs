//! Authentication service.
//!
//! Composition root wiring the validators, the user store, the password
//! hasher, and the session manager behind the operations the form boundary
//! calls. Construct one [`AuthService`] at startup over the storage handle
//! and pass it to whatever drives the flows.

use std::sync::Arc;

use chrono::Utc;
use secrecy::SecretString;

use mercadito_core::UserId;

use crate::error::AuthError;
use crate::models::{NewUser, SessionRecord, UserRecord};
use crate::password;
use crate::session::SessionManager;
use crate::storage::{StorageBackend, StorageError};
use crate::users::UserStore;
use crate::validate;

/// Registration, login, and session operations over a shared storage handle.
#[derive(Clone)]
pub struct AuthService {
    storage: Arc<dyn StorageBackend>,
    users: UserStore,
    sessions: SessionManager,
}

impl AuthService {
    /// Build the service and its components over one storage handle.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            users: UserStore::new(Arc::clone(&storage)),
            sessions: SessionManager::new(Arc::clone(&storage)),
            storage,
        }
    }

    /// The persisted user collection.
    #[must_use]
    pub const fn users(&self) -> &UserStore {
        &self.users
    }

    /// The session slot.
    #[must_use]
    pub const fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// The storage handle the service was built over.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn StorageBackend> {
        &self.storage
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a new account.
    ///
    /// Validators run in a fixed order (name, email shape, password strength,
    /// password confirmation, phone shape), short-circuiting on the first
    /// failure. On success the secret is hashed on a blocking thread, the
    /// record gets a fresh id and timestamp, free-text fields are trimmed,
    /// and the collection is persisted. The returned record is sanitized;
    /// registering does not log the new account in.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Validation`] for bad input
    /// - [`AuthError::EmailTaken`] when the email is already registered
    ///   (case-insensitive)
    /// - [`AuthError::Storage`] when the user slot cannot be read or written
    pub async fn register(&self, input: NewUser) -> Result<SessionRecord, AuthError> {
        validate::require_non_empty(&input.display_name, "name")?;
        let email = validate::email_shape(&input.email)?;
        validate::password_strength(&input.secret)?;
        validate::passwords_match(&input.secret, &input.secret_confirmation)?;
        let phone = validate::phone_shape(&input.phone)?;

        if self.users.email_taken(&email)? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = password::hash_secret(&input.secret).await?;

        let record = UserRecord {
            id: UserId::generate(),
            display_name: input.display_name.trim().to_owned(),
            email,
            password_hash,
            phone,
            user_type: input.user_type,
            business_name: trimmed(input.business_name),
            tax_id: trimmed(input.tax_id),
            created_at: Utc::now(),
        };
        self.users.append(record.clone())?;

        tracing::info!(user_id = %record.id, user_type = %record.user_type, "registered new account");
        Ok(record.sanitize())
    }

    // =========================================================================
    // Login / session
    // =========================================================================

    /// Log in with an email and secret.
    ///
    /// An unknown email and a wrong secret both produce
    /// [`AuthError::InvalidCredentials`] with the identical message, so a
    /// caller cannot tell which check failed. On success the sanitized record
    /// is persisted as the active session (replacing any previous login) and
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] when the email is unknown or the
    ///   secret does not verify
    /// - [`AuthError::Storage`] when a slot cannot be read or written
    pub async fn login(
        &self,
        email: &str,
        secret: &SecretString,
    ) -> Result<SessionRecord, AuthError> {
        let Some(user) = self.users.find_by_email(email)? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !password::verify_secret(secret, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials);
        }

        let session = user.sanitize();
        self.sessions.set(&session)?;

        tracing::info!(user_id = %session.id, "login succeeded");
        Ok(session)
    }

    /// Clear the active session. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the removal fails.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.sessions.logout()
    }

    /// The active session, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot cannot be read or decoded.
    pub fn current_user(&self) -> Result<Option<SessionRecord>, StorageError> {
        self.sessions.current_user()
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated()
    }
}

/// Trim an optional free-text field; blank input reads as absent.
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mercadito_core::UserType;

    use super::*;
    use crate::storage::MemoryStorage;
    use crate::validate::ValidationError;

    fn service() -> AuthService {
        AuthService::new(Arc::new(MemoryStorage::new()))
    }

    fn buyer(email: &str) -> NewUser {
        NewUser {
            display_name: "María González".to_owned(),
            email: email.to_owned(),
            secret: SecretString::from("Test123!"),
            secret_confirmation: SecretString::from("Test123!"),
            phone: "+56 9 8765 4321".to_owned(),
            user_type: UserType::Buyer,
            business_name: None,
            tax_id: None,
        }
    }

    #[tokio::test]
    async fn test_register_returns_sanitized_record() {
        let service = service();
        let record = service.register(buyer("maria@test.com")).await.unwrap();

        assert_eq!(record.email.as_str(), "maria@test.com");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("passwordHash"));

        // The stored record carries a real Argon2 digest, not the secret.
        let stored = service
            .users()
            .find_by_email("maria@test.com")
            .unwrap()
            .unwrap();
        assert!(stored.password_hash.starts_with("$argon2id$"));
        assert!(!stored.password_hash.contains("Test123!"));
    }

    #[tokio::test]
    async fn test_register_does_not_log_in() {
        let service = service();
        service.register(buyer("maria@test.com")).await.unwrap();
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_rejects_case_variant_duplicate() {
        let service = service();
        service.register(buyer("Maria@Test.com")).await.unwrap();

        let err = service.register(buyer("maria@test.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(service.users().list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_validator_order_short_circuits() {
        let service = service();

        // Blank name is reported before the (also invalid) email.
        let mut input = buyer("not-an-email");
        input.display_name = "  ".to_owned();
        let err = service.register(input).await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation(ValidationError::Required(_))
        ));

        // Weak password is reported before the mismatched confirmation.
        let mut input = buyer("maria@test.com");
        input.secret = SecretString::from("12345");
        input.secret_confirmation = SecretString::from("other");
        let err = service.register(input).await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation(ValidationError::WeakPassword { .. })
        ));

        let mut input = buyer("maria@test.com");
        input.secret_confirmation = SecretString::from("different");
        let err = service.register(input).await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::Validation(ValidationError::PasswordMismatch)
        ));

        // Nothing was persisted along the way.
        assert!(service.users().list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_trims_seller_fields() {
        let service = service();
        let input = NewUser {
            display_name: "  Roberto Silva  ".to_owned(),
            email: "roberto@test.com".to_owned(),
            secret: SecretString::from("Test123!"),
            secret_confirmation: SecretString::from("Test123!"),
            phone: "+56 9 5432 1098".to_owned(),
            user_type: UserType::Seller,
            business_name: Some("  Ferretería Silva  ".to_owned()),
            tax_id: Some("   ".to_owned()),
        };

        let record = service.register(input).await.unwrap();
        assert_eq!(record.display_name, "Roberto Silva");
        assert_eq!(record.business_name.as_deref(), Some("Ferretería Silva"));
        // Blank tax id reads as absent.
        assert!(record.tax_id.is_none());
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let service = service();
        service.register(buyer("maria@test.com")).await.unwrap();

        let unknown = service
            .login("nobody@test.com", &SecretString::from("Test123!"))
            .await
            .unwrap_err();
        let wrong = service
            .login("maria@test.com", &SecretString::from("wrong"))
            .await
            .unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_accepts_case_variant_email() {
        let service = service();
        service.register(buyer("maria@test.com")).await.unwrap();

        let session = service
            .login("MARIA@TEST.COM", &SecretString::from("Test123!"))
            .await
            .unwrap();
        assert_eq!(session.email.as_str(), "maria@test.com");
        assert!(service.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let service = service();
        service.register(buyer("maria@test.com")).await.unwrap();
        service
            .login("maria@test.com", &SecretString::from("Test123!"))
            .await
            .unwrap();

        service.logout().unwrap();
        assert!(!service.is_authenticated());
        assert!(service.current_user().unwrap().is_none());
    }
}
