//! Integration tests for Mercadito.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mercadito-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration and login scenarios
//! - `persistence` - File-backed storage behavior across handles and reopens
//! - `seeding` - Demo account bootstrap
//!
//! The harness below builds an [`AuthService`] over a temporary data
//! directory, exactly the way the CLI does at startup.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use secrecy::SecretString;
use tempfile::TempDir;

use mercadito_auth::{AuthService, FileStorage, NewUser};
use mercadito_core::UserType;

/// A service over a fresh temporary data directory.
///
/// The directory lives as long as the context, so a second service can be
/// opened over the same files to simulate another tab or a restart.
pub struct TestContext {
    dir: TempDir,
    /// The service under test.
    pub service: AuthService,
}

impl TestContext {
    /// Create a context with an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or storage cannot be created;
    /// nothing to test in that case.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let storage = FileStorage::open(dir.path()).expect("open storage");
        let service = AuthService::new(Arc::new(storage));
        Self { dir, service }
    }

    /// Open a second, independent service over the same data directory.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn reopen(&self) -> AuthService {
        let storage = FileStorage::open(self.dir.path()).expect("reopen storage");
        AuthService::new(Arc::new(storage))
    }

    /// The data directory path.
    #[must_use]
    pub fn data_dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Valid buyer registration input for `email`.
#[must_use]
pub fn buyer_input(email: &str) -> NewUser {
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

/// Valid seller registration input for `email`.
#[must_use]
pub fn seller_input(email: &str) -> NewUser {
    NewUser {
        display_name: "Roberto Silva".to_owned(),
        email: email.to_owned(),
        secret: SecretString::from("Test123!"),
        secret_confirmation: SecretString::from("Test123!"),
        phone: "+56 9 5432 1098".to_owned(),
        user_type: UserType::Seller,
        business_name: Some("Ferretería Silva".to_owned()),
        tax_id: Some("76543210".to_owned()),
    }
}
