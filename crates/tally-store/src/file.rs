//! # JSON File Access
//!
//! Whole-file load and save for the data files.
//!
//! ## Atomic Replace
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  save(value)                                                           │
//! │    │                                                                    │
//! │    ▼  serialize (pretty, 2-space indent)                                │
//! │  data/.tmpXXXXXX      ← sibling temp file, same filesystem              │
//! │    │  write + fsync                                                     │
//! │    ▼                                                                    │
//! │  rename → data/estoque.json                                            │
//! │                                                                         │
//! │  A concurrent reader sees either the old file or the new one.          │
//! │  A crash mid-write leaves the old file intact.                         │
//! │  The temp file takes the target's permissions before the rename       │
//! │  (0644 for a new file on Unix).                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::Permissions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Handle to one JSON data file.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole file.
    pub async fn load<T: DeserializeOwned>(&self) -> StoreResult<T> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        serde_json::from_slice(&bytes).map_err(|e| StoreError::parse(&self.path, e))
    }

    /// Replaces the whole file with `value`.
    pub async fn save<T: Serialize + ?Sized>(&self, value: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(value).map_err(StoreError::Serialize)?;
        let path = self.path.clone();

        debug!(path = %path.display(), bytes = bytes.len(), "Writing data file");

        tokio::task::spawn_blocking(move || write_atomic(&path, &bytes))
            .await
            .map_err(|e| StoreError::io(&self.path, std::io::Error::other(e)))?
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> StoreResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(path, e))?;
    if let Some(permissions) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| StoreError::io(path, e))?;
    }
    tmp.write_all(bytes).map_err(|e| StoreError::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| StoreError::io(path, e))?;
    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;

    Ok(())
}

/// Permissions the replaced file should end up with.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
