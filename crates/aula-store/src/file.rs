use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::store::{DocumentStore, Record};

/// Stores each collection as `<root>/<collection>.json`, a pretty-printed
/// JSON array of records.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }

    /// Writes an empty `[]` document for `collection` unless one exists.
    /// Returns `true` when the file was created.
    pub fn ensure_collection(&self, collection: &str) -> Result<bool, StoreError> {
        let path = self.path_for(collection);
        if path.exists() {
            return Ok(false);
        }
        fs::create_dir_all(&self.root).map_err(|e| StoreError::write(collection, e))?;
        atomic_write(&path, b"[]").map_err(|e| StoreError::write(collection, e))?;
        debug!(collection, path = %path.display(), "created empty collection");
        Ok(true)
    }
}

impl DocumentStore for FileStore {
    fn load_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        let path = self.path_for(collection);
        let bytes = fs::read(&path).map_err(|e| {
            warn!(collection, path = %path.display(), error = %e, "collection read failed");
            StoreError::read(collection, e)
        })?;
        let records: Vec<Record> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::read(collection, e))?;
        debug!(collection, count = records.len(), "loaded collection");
        Ok(records)
    }

    fn save_all(&self, collection: &str, records: &[Record]) -> Result<(), StoreError> {
        let path = self.path_for(collection);
        let bytes =
            serde_json::to_vec_pretty(records).map_err(|e| StoreError::write(collection, e))?;
        atomic_write(&path, &bytes).map_err(|e| {
            warn!(collection, path = %path.display(), error = %e, "collection write failed");
            StoreError::write(collection, e)
        })?;
        debug!(collection, count = records.len(), "saved collection");
        Ok(())
    }
}

/// write -> sync -> rename, so readers never observe a half-written file.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");

    let result = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    });

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
