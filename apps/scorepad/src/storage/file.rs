//! Directory-backed store: one `<key>.json` file per key.
//!
//! Every access holds an OS-level lock on `<key>.lock` (shared for reads,
//! exclusive for writes), and writes go through a temp file plus rename, so a
//! second process never observes a half-written record.

// Standard library imports
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

// External crate imports
use fs4::fs_std::FileExt;
use tracing::debug;

// Internal crate imports
use super::{KeyValueStore, StorageError};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

/// Held lock on a key; released on drop.
struct KeyLock {
    file: File,
    path: PathBuf,
}

impl Drop for KeyLock {
    fn drop(&mut self) {
        match FileExt::unlock(&self.file) {
            Ok(()) => debug!(lock_path = %self.path.display(), "key lock released"),
            // The handle is closed right after, which drops the lock anyway.
            Err(e) => debug!(
                error = %e,
                lock_path = %self.path.display(),
                "key unlock returned error (may be benign)"
            ),
        }
    }
}

impl FileStore {
    /// Open (and create if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record for `key`. Keys are limited to `[A-Za-z0-9_-]` so
    /// they can never escape the store directory.
    pub fn record_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn lock(&self, key: &str, exclusive: bool) -> Result<KeyLock, StorageError> {
        let path = self.dir.join(format!("{key}.lock"));
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| StorageError::io(&path, e))?;

        let locked = if exclusive {
            FileExt::lock_exclusive(&file)
        } else {
            FileExt::lock_shared(&file)
        };
        locked.map_err(|e| StorageError::io(&path, e))?;
        debug!(lock_path = %path.display(), exclusive, "key lock acquired");
        Ok(KeyLock { file, path })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.record_path(key)?;
        let _guard = self.lock(key, false)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.record_path(key)?;
        let tmp_path = self.dir.join(format!("{key}.json.tmp"));
        let _guard = self.lock(key, true)?;

        let mut tmp = File::create(&tmp_path).map_err(|e| StorageError::io(&tmp_path, e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.sync_all())
            .map_err(|e| StorageError::io(&tmp_path, e))?;
        drop(tmp);

        fs::rename(&tmp_path, &path).map_err(|e| StorageError::io(&path, e))?;
        debug!(key, bytes = value.len(), "record written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.record_path(key)?;
        let _guard = self.lock(key, true)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "record removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }
}
