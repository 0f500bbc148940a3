//! File-backed storage backend.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tokio::sync::broadcast;

use super::{ChangeKind, ChangeNotifier, Slot, StorageBackend, StorageError, StorageEvent};

/// Durable storage: one `<key>.json` document per slot inside a data
/// directory.
///
/// Every read goes back to disk, so a change made by another handle over the
/// same directory (or another process) is visible on the next call. Writes
/// land in a temp file first and are renamed into place so a reader never
/// observes a torn slot.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
    notifier: ChangeNotifier,
}

impl FileStorage {
    /// Open (and create if needed) a data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            notifier: ChangeNotifier::new(),
        })
    }

    /// The data directory this store reads and writes.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, slot: Slot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(slot)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, slot: Slot, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(slot);
        let tmp = self.dir.join(format!("{}.json.tmp", slot.key()));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        self.notifier.notify(slot, ChangeKind::Written);
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(slot)) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        self.notifier.notify(slot, ChangeKind::Removed);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.notifier.subscribe()
    }
}
