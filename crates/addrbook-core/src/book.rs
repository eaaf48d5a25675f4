use indexmap::IndexMap;

use crate::error::DomainError;
use crate::record::{Name, Record};

/// All contacts, keyed by their current name and kept in insertion order.
///
/// The underlying map is never handed out, so a key always matches the name
/// of the record stored under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from previously stored records, rejecting repeated names.
    pub fn from_records<I>(records: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut book = Self::new();
        for record in records {
            if book.find(record.name()).is_some() {
                return Err(DomainError::DuplicateName(record.name().to_string()));
            }
            book.add_record(record);
        }
        Ok(book)
    }

    /// Inserts `record` under its name. An existing entry with the same name is
    /// overwritten in place.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Appends a phone to the record stored under `name`. `Ok(None)` when
    /// there is no such record.
    pub fn add_phone(&mut self, name: &str, raw: &str) -> Result<Option<&Record>, DomainError> {
        self.edit(name, |record| record.add_phone(raw))
    }

    /// Replaces every phone of the record stored under `name` with `raw`.
    pub fn edit_phone(&mut self, name: &str, raw: &str) -> Result<Option<&Record>, DomainError> {
        self.edit(name, |record| record.edit_phone(raw))
    }

    pub fn edit_address(
        &mut self,
        name: &str,
        raw: &str,
    ) -> Result<Option<&Record>, DomainError> {
        self.edit(name, |record| record.edit_address(raw))
    }

    // Names change only through `rename`, so the closures here never touch one.
    fn edit<F>(&mut self, name: &str, apply: F) -> Result<Option<&Record>, DomainError>
    where
        F: FnOnce(&mut Record) -> Result<(), DomainError>,
    {
        let Some(record) = self.records.get_mut(name) else {
            return Ok(None);
        };
        apply(record)?;
        Ok(Some(record))
    }

    pub fn delete(&mut self, name: &str) -> bool {
        self.records.shift_remove(name).is_some()
    }

    /// Moves the record stored under `old` to `new` and updates its name.
    ///
    /// The renamed record goes to the end of the order. If `new` already
    /// names another record, that record is overwritten.
    pub fn rename(&mut self, old: &str, new: Name) -> Option<&Record> {
        let mut record = self.records.shift_remove(old)?;
        record.set_name(new);
        let (index, _) = self
            .records
            .insert_full(record.name().to_string(), record);
        self.records.get_index(index).map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
