pub mod address;
pub mod name;
pub mod phone;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub use address::Address;
pub use name::Name;
pub use phone::Phone;

/// One contact: a name, any number of phones, and at most one address.
///
/// Every mutator validates its input before touching state, so a failed call
/// leaves the record as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    address: Option<Address>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            address: None,
        }
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), DomainError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Replaces every stored number with `raw`.
    pub fn edit_phone(&mut self, raw: &str) -> Result<(), DomainError> {
        self.phones = vec![Phone::new(raw)?];
        Ok(())
    }

    pub fn add_address(&mut self, raw: &str) -> Result<(), DomainError> {
        self.address = Some(Address::new(raw)?);
        Ok(())
    }

    pub fn edit_address(&mut self, raw: &str) -> Result<(), DomainError> {
        self.add_address(raw)
    }

    /// Does not re-key the owning book; use [`crate::AddressBook::rename`].
    pub fn edit_name(&mut self, raw: &str) -> Result<(), DomainError> {
        self.name = Name::new(raw)?;
        Ok(())
    }

    pub(crate) fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Phone numbers joined with `sep`; empty when the record has none.
    pub fn joined_phones(&self, sep: &str) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact: {}, phones: {}, address: {}",
            self.name,
            self.joined_phones("; "),
            self.address.as_ref().map_or("N/A", Address::as_str)
        )
    }
}
