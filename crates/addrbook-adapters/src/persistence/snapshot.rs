use addrbook_core::{AddressBook, Record};
use addrbook_ports::error::StorageError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

#[derive(Deserialize)]
struct SnapshotV1 {
    contacts: Vec<Record>,
}

pub(crate) fn encode(book: &AddressBook, now: DateTime<Utc>) -> Result<Vec<u8>, StorageError> {
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        saved_at: now,
        contacts: book.iter().collect(),
    };
    serde_json::to_vec_pretty(&snapshot)
        .map_err(|e| StorageError::Serialization(e.to_string()))
}

pub(crate) fn decode(bytes: &[u8]) -> Result<AddressBook, StorageError> {
    let header: VersionHeader =
        serde_json::from_slice(bytes).map_err(|e| StorageError::CorruptData(e.to_string()))?;
    if header.version != SNAPSHOT_VERSION {
        return Err(StorageError::UnsupportedVersion(header.version));
    }

    let snapshot: SnapshotV1 =
        serde_json::from_slice(bytes).map_err(|e| StorageError::CorruptData(e.to_string()))?;
    AddressBook::from_records(snapshot.contacts)
        .map_err(|e| StorageError::CorruptData(e.to_string()))
}
