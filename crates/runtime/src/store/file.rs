//! File-based SessionStore implementation.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::store::{SessionStore, StoreError};

/// File-based store. Each key maps to `{key}.json` in the base directory;
/// writes go through a temp file and an atomic rename so a crash mid-write
/// never leaves a torn snapshot behind.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Opens the store in the platform data directory (for example
    /// `~/.local/share/rollcall` on Linux). Falls back to the current
    /// directory when the platform reports no home.
    pub fn open_default() -> Result<Self, StoreError> {
        let base_dir = directories::ProjectDirs::from("", "", "rollcall")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base_dir)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let value =
            serde_json::from_str(&raw).map_err(|e| StoreError::Serialization(e.to_string()))?;

        tracing::debug!(key, path = %path.display(), "loaded store entry");

        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        let raw = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&temp_path, raw)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!(key, path = %path.display(), "saved store entry");

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(key, "deleted store entry");
        }

        Ok(())
    }
}
