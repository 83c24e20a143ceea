//! File-backed storage backend.
//!
//! All entries live in one JSON object (`{"key": "value", ...}`). Every
//! write rewrites the whole file through a temporary file in the same
//! directory followed by `tempfile::NamedTempFile::persist()`, so a crash
//! never leaves a half-written store behind.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::StoragePort;
use crate::{AppError, Result};

/// [`StoragePort`] persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the file exists but cannot be read
    /// or is not a JSON object of string values.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                AppError::Storage(format!("corrupt store {}: {err}", path.display()))
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(AppError::Storage(format!(
                    "failed to read store {}: {err}",
                    path.display()
                )));
            }
        };

        debug!(path = %path.display(), keys = entries.len(), "file store opened");
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk. `self.entries` is only replaced by the
    /// caller once this succeeds.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|err| {
            AppError::Storage(format!(
                "failed to create store directory {}: {err}",
                parent.display()
            ))
        })?;

        let body = serde_json::to_string_pretty(entries)?;
        let mut tmp = NamedTempFile::new_in(&parent)
            .map_err(|err| AppError::Storage(format!("failed to create temporary file: {err}")))?;
        tmp.write_all(body.as_bytes())
            .map_err(|err| AppError::Storage(format!("failed to write temporary file: {err}")))?;
        tmp.persist(&self.path).map_err(|err| {
            AppError::Storage(format!(
                "failed to persist store to {}: {err}",
                self.path.display()
            ))
        })?;
        Ok(())
    }
}

impl StoragePort for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_owned(), value.to_owned());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}
