use super::{Storage, StoredBook};
use crate::book::RecordStore;
use crate::error::{AddrBookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_FILE_NAME: &str = "addressbook.json";

pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Fails with `InvalidStoragePath` unless `path` ends in `.json`.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(AddrBookError::InvalidStoragePath(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddrBookError::Io)?;
            }
        }
        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<RecordStore> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(RecordStore::new());
        }

        let content = fs::read_to_string(&self.path).map_err(AddrBookError::Io)?;
        let book: StoredBook = serde_json::from_str(&content).map_err(|e| {
            AddrBookError::Storage(format!(
                "{} is not a valid address book file: {}",
                self.path.display(),
                e
            ))
        })?;
        let store = book.into_store()?;
        info!(path = %self.path.display(), count = store.len(), "loaded address book");
        Ok(store)
    }

    fn save(&mut self, store: &RecordStore) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(&StoredBook::from_store(store))
            .map_err(AddrBookError::Serialization)?;
        fs::write(&self.path, content).map_err(AddrBookError::Io)?;
        info!(path = %self.path.display(), count = store.len(), "saved address book");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
