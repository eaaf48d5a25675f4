use addrbook_core::DomainError;
use addrbook_ports::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
