//! User collection persistence.
//!
//! The `users` slot holds one JSON array of records which is read and
//! rewritten whole on every mutation. There is no locking: two
//! near-simultaneous appends through independent handles can race and one can
//! be silently lost (see the crate docs).

use std::sync::Arc;

use mercadito_core::Email;

use crate::models::UserRecord;
use crate::storage::{self, Slot, StorageBackend, StorageError};

/// Read operations and append over the persisted user collection.
#[derive(Clone)]
pub struct UserStore {
    storage: Arc<dyn StorageBackend>,
}

impl UserStore {
    /// Create a store over a shared storage handle.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// All known records in insertion order. An absent slot reads as empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot cannot be read or decoded.
    pub fn list(&self) -> Result<Vec<UserRecord>, StorageError> {
        Ok(storage::read_json(self.storage.as_ref(), Slot::Users)?.unwrap_or_default())
    }

    /// Case-insensitive exact match on email.
    ///
    /// The needle is trimmed and lower-cased before comparison; stored emails
    /// are already normalized. Anything that cannot match (e.g. an empty
    /// string) simply finds nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot cannot be read or decoded.
    pub fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StorageError> {
        let needle = email.trim().to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .find(|user| user.email.as_str() == needle))
    }

    /// Whether any record already uses this email.
    pub(crate) fn email_taken(&self, email: &Email) -> Result<bool, StorageError> {
        Ok(self.find_by_email(email.as_str())?.is_some())
    }

    /// Append a record and persist the whole collection.
    pub(crate) fn append(&self, record: UserRecord) -> Result<(), StorageError> {
        let mut users = self.list()?;
        users.push(record);
        storage::write_json(self.storage.as_ref(), Slot::Users, &users)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use mercadito_core::{Phone, UserId, UserType};

    use super::*;
    use crate::storage::MemoryStorage;

    fn record(email: &str) -> UserRecord {
        UserRecord {
            id: UserId::generate(),
            display_name: "Test User".to_owned(),
            email: Email::parse(email).unwrap(),
            password_hash: "$argon2id$fake".to_owned(),
            phone: Phone::parse("+56 9 1234 5678").unwrap(),
            user_type: UserType::Buyer,
            business_name: None,
            tax_id: None,
            created_at: Utc::now(),
        }
    }

    fn store() -> UserStore {
        UserStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_list_absent_slot_is_empty() {
        assert!(store().list().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let store = store();
        store.append(record("a@test.com")).unwrap();
        store.append(record("b@test.com")).unwrap();
        store.append(record("c@test.com")).unwrap();

        let emails: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|u| u.email.into_inner())
            .collect();
        assert_eq!(emails, ["a@test.com", "b@test.com", "c@test.com"]);
    }

    #[test]
    fn test_find_by_email_ignores_case_and_whitespace() {
        let store = store();
        store.append(record("ana@test.com")).unwrap();

        assert!(store.find_by_email("ANA@TEST.COM").unwrap().is_some());
        assert!(store.find_by_email("  ana@test.com ").unwrap().is_some());
        assert!(store.find_by_email("other@test.com").unwrap().is_none());
        assert!(store.find_by_email("").unwrap().is_none());
    }

    #[test]
    fn test_email_taken() {
        let store = store();
        store.append(record("ana@test.com")).unwrap();

        let taken = Email::parse("Ana@Test.com").unwrap();
        let free = Email::parse("free@test.com").unwrap();
        assert!(store.email_taken(&taken).unwrap());
        assert!(!store.email_taken(&free).unwrap());
    }
}
