//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tokio::sync::broadcast;

use super::{ChangeKind, ChangeNotifier, Slot, StorageBackend, StorageError, StorageEvent};

/// Ephemeral storage backed by a map; used by tests and throwaway sessions.
///
/// Data lives only as long as the value itself. Reads, writes, and change
/// notifications behave exactly like [`super::FileStorage`].
#[derive(Debug)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<Slot, String>>,
    notifier: ChangeNotifier,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            notifier: ChangeNotifier::new(),
        }
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<Slot, String>> {
        // A panicking writer cannot leave a slot map half-updated; recover
        // the guard instead of propagating the poison.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        Ok(self.slots().get(&slot).cloned())
    }

    fn write(&self, slot: Slot, value: &str) -> Result<(), StorageError> {
        self.slots().insert(slot, value.to_owned());
        self.notifier.notify(slot, ChangeKind::Written);
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<(), StorageError> {
        self.slots().remove(&slot);
        self.notifier.notify(slot, ChangeKind::Removed);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.notifier.subscribe()
    }
}
