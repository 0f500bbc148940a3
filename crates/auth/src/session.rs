//! Single-session manager.
//!
//! At most one sanitized record lives in the `currentUser` slot. Reads always
//! go back to storage rather than caching, so a removal performed by another
//! handle over the same data is observed on the next call; [`subscribe`]
//! additionally delivers change notifications for in-process observers.
//!
//! [`subscribe`]: SessionManager::subscribe

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::models::SessionRecord;
use crate::storage::{self, Slot, StorageBackend, StorageError, StorageEvent};

/// Set/get/clear over the session slot, plus the authenticated check.
#[derive(Clone)]
pub struct SessionManager {
    storage: Arc<dyn StorageBackend>,
}

impl SessionManager {
    /// Create a manager over a shared storage handle.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// The active session, if any. Re-reads the slot on every call.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot cannot be read or decoded.
    pub fn current_user(&self) -> Result<Option<SessionRecord>, StorageError> {
        storage::read_json(self.storage.as_ref(), Slot::CurrentUser)
    }

    /// Whether a session is active.
    ///
    /// A storage fault reads as "not authenticated"; the protected surface
    /// then redirects to login, which is the safe reaction.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.current_user(), Ok(Some(_)))
    }

    /// Remove the session slot unconditionally. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the removal fails.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove(Slot::CurrentUser)
    }

    /// Change notifications for this store's slots; filter on
    /// [`Slot::CurrentUser`] to watch the session.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.storage.subscribe()
    }

    /// Persist a sanitized record as the active session, replacing any
    /// previous login.
    pub(crate) fn set(&self, record: &SessionRecord) -> Result<(), StorageError> {
        storage::write_json(self.storage.as_ref(), Slot::CurrentUser, record)
    }
}
