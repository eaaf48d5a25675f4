use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(String),
    #[error("could not serialize address book: {0}")]
    Serialization(String),
    #[error("corrupt address book data: {0}")]
    CorruptData(String),
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}
