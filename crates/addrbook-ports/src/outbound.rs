use addrbook_core::AddressBook;

use crate::error::StorageError;

/// Whole-book persistence. Implementations read and write the complete
/// snapshot; there is no partial or append mode.
pub trait BookStore {
    /// Returns an empty book when nothing has been saved yet.
    fn load(&self) -> Result<AddressBook, StorageError>;
    fn save(&self, book: &AddressBook) -> Result<(), StorageError>;
}
