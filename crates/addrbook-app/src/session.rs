use addrbook_core::AddressBook;
use addrbook_ports::outbound::BookStore;
use tracing::info;

use crate::error::AppError;

/// Owns the in-memory book for one run of the program together with the
/// store it was loaded from.
pub struct BookSession<S>
where
    S: BookStore,
{
    store: S,
    book: AddressBook,
}

impl<S> BookSession<S>
where
    S: BookStore,
{
    pub fn open(store: S) -> Result<Self, AppError> {
        let book = store.load()?;
        info!(contacts = book.len(), "address book loaded");
        Ok(Self { store, book })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.store.save(&self.book)?;
        info!(contacts = self.book.len(), "address book saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;
    use addrbook_ports::error::StorageError;
    use std::cell::RefCell;

    // --- Mock Adapters ---

    #[derive(Default)]
    struct MockStore {
        saved: RefCell<Option<AddressBook>>,
    }

    impl BookStore for MockStore {
        fn load(&self) -> Result<AddressBook, StorageError> {
            Ok(self.saved.borrow().clone().unwrap_or_default())
        }
        fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
            *self.saved.borrow_mut() = Some(book.clone());
            Ok(())
        }
    }

    struct BrokenStore;

    impl BookStore for BrokenStore {
        fn load(&self) -> Result<AddressBook, StorageError> {
            Err(StorageError::CorruptData("bad json".into()))
        }
        fn save(&self, _book: &AddressBook) -> Result<(), StorageError> {
            Err(StorageError::Io("disk full".into()))
        }
    }

    #[test]
    fn open_empty_store_gives_empty_book() {
        let session = BookSession::open(MockStore::default()).unwrap();
        assert!(session.book().is_empty());
    }

    #[test]
    fn save_hands_current_book_to_store() {
        let mut session = BookSession::open(MockStore::default()).unwrap();
        commands::add_contact("Ann Lee", "1234567890", "123 Main St", session.book_mut())
            .unwrap();
        session.save().unwrap();

        let saved = session.store.saved.borrow();
        assert!(saved.as_ref().unwrap().find("Ann Lee").is_some());
    }

    #[test]
    fn open_propagates_corrupt_data() {
        let result = BookSession::open(BrokenStore);
        assert!(matches!(
            result,
            Err(AppError::Storage(StorageError::CorruptData(_)))
        ));
    }
}
