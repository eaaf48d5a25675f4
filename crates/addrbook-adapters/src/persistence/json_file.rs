use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use addrbook_core::AddressBook;
use addrbook_ports::error::StorageError;
use addrbook_ports::outbound::BookStore;
use chrono::Utc;
use tracing::{debug, info};

use super::snapshot;

pub const DEFAULT_FILE_NAME: &str = "addressbook.json";

/// Keeps the whole book in one JSON file.
///
/// There is no file locking: two processes sharing a path will overwrite each
/// other's saves.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<AddressBook, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        let book = snapshot::decode(&bytes)?;
        debug!(path = %self.path.display(), contacts = book.len(), "snapshot decoded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let bytes = snapshot::encode(book, Utc::now())?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }

        // Write beside the target then swap, so a failed write never truncates
        // the previous snapshot.
        let tmp = self.temp_path();
        fs::write(&tmp, &bytes).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::Io(e.to_string()))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "snapshot written");
        Ok(())
    }
}
