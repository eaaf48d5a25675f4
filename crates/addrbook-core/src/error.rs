use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("name must be at least 2 characters long")]
    InvalidName,
    #[error("phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("address must be at least 5 characters long")]
    InvalidAddress,
    #[error("duplicate contact name: {0}")]
    DuplicateName(String),
}
