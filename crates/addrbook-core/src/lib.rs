pub mod book;
pub mod error;
pub mod record;

pub use book::AddressBook;
pub use error::DomainError;
pub use record::{Address, Name, Phone, Record};
