//! Durable key-value storage slots.
//!
//! The layout mirrors origin-scoped browser storage: one JSON document per
//! [`Slot`], read and rewritten whole on every access. Backends never cache,
//! so a concurrent writer's change is visible on the next read, and every
//! write or removal broadcasts a [`StorageEvent`] so a surface that depends
//! on the session slot can react promptly when another handle clears it.

mod file;
mod memory;

use core::fmt;

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::broadcast;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Durable slots used by the auth module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// JSON array of user records, insertion order.
    Users,
    /// JSON object holding the sanitized record of the active login.
    CurrentUser,
    /// One-time flag guarding demo account seeding.
    DemoUsersInitialized,
}

impl Slot {
    /// The slot's storage key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::CurrentUser => "currentUser",
            Self::DemoUsersInitialized => "demoUsersInitialized",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// What happened to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The slot was written (created or replaced).
    Written,
    /// The slot was removed.
    Removed,
}

/// Change notification emitted after a slot is written or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageEvent {
    /// The slot that changed.
    pub slot: Slot,
    /// Whether it was written or removed.
    pub kind: ChangeKind,
}

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The underlying storage could not be read or written.
    #[error("storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    /// A slot holds data that cannot be decoded.
    #[error("corrupt data in slot {slot}: {source}")]
    Json {
        /// The slot with undecodable contents.
        slot: Slot,
        /// The decode failure.
        source: serde_json::Error,
    },
}

/// A durable key-value store with one JSON document per [`Slot`].
///
/// Implementations must not cache reads and must broadcast a
/// [`StorageEvent`] after every successful write or removal.
pub trait StorageBackend: Send + Sync {
    /// Read a slot. Returns `Ok(None)` if the slot has never been written
    /// (absent storage is not an error).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the slot cannot be read.
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the slot cannot be written.
    fn write(&self, slot: Slot, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the removal fails.
    fn remove(&self, slot: Slot) -> Result<(), StorageError>;

    /// Subscribe to change notifications from this store.
    fn subscribe(&self) -> broadcast::Receiver<StorageEvent>;
}

/// Broadcasts [`StorageEvent`]s to subscribers; shared by backends.
#[derive(Debug)]
pub(crate) struct ChangeNotifier {
    sender: broadcast::Sender<StorageEvent>,
}

impl ChangeNotifier {
    const CAPACITY: usize = 16;

    pub(crate) fn new() -> Self {
        let (sender, _) = broadcast::channel(Self::CAPACITY);
        Self { sender }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.sender.subscribe()
    }

    /// Notify subscribers; a send with no receivers is fine.
    pub(crate) fn notify(&self, slot: Slot, kind: ChangeKind) {
        let _ = self.sender.send(StorageEvent { slot, kind });
    }
}

/// Read and decode a slot's JSON document.
pub(crate) fn read_json<T: DeserializeOwned>(
    storage: &dyn StorageBackend,
    slot: Slot,
) -> Result<Option<T>, StorageError> {
    match storage.read(slot)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Json { slot, source }),
        None => Ok(None),
    }
}

/// Encode and write a slot's JSON document.
pub(crate) fn write_json<T: Serialize>(
    storage: &dyn StorageBackend,
    slot: Slot,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Json { slot, source })?;
    storage.write(slot, &raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_match_storage_layout() {
        assert_eq!(Slot::Users.key(), "users");
        assert_eq!(Slot::CurrentUser.key(), "currentUser");
        assert_eq!(Slot::DemoUsersInitialized.key(), "demoUsersInitialized");
    }

    #[test]
    fn test_read_json_absent_slot_is_none() {
        let storage = MemoryStorage::new();
        let read: Option<Vec<String>> = read_json(&storage, Slot::Users).unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn test_read_json_corrupt_slot() {
        let storage = MemoryStorage::new();
        storage.write(Slot::Users, "not json").unwrap();

        let read: Result<Option<Vec<String>>, _> = read_json(&storage, Slot::Users);
        assert!(matches!(
            read,
            Err(StorageError::Json {
                slot: Slot::Users,
                ..
            })
        ));
    }

    #[test]
    fn test_write_json_roundtrip() {
        let storage = MemoryStorage::new();
        write_json(&storage, Slot::Users, &vec!["a".to_owned(), "b".to_owned()]).unwrap();

        let read: Option<Vec<String>> = read_json(&storage, Slot::Users).unwrap();
        assert_eq!(read, Some(vec!["a".to_owned(), "b".to_owned()]));
    }
}
