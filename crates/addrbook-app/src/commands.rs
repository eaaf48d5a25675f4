//! Operations the menu invokes. Each one looks a contact up by exact name and
//! reports a missing contact through [`Reply::NotFound`] rather than an error;
//! only an invalid field value produces `Err`.

use std::fmt;

use addrbook_core::{AddressBook, DomainError, Name, Record};
use tracing::debug;

pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Done(String),
    NotFound,
}

impl Reply {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Reply::NotFound)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Done(message) => f.write_str(message),
            Reply::NotFound => f.write_str(CONTACT_NOT_FOUND),
        }
    }
}

/// Adds a contact with one phone and an address, overwriting any contact
/// that already has this name.
pub fn add_contact(
    name: &str,
    phone: &str,
    address: &str,
    book: &mut AddressBook,
) -> Result<Reply, DomainError> {
    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    record.add_address(address)?;
    book.add_record(record);
    debug!(contact = name, "contact added");
    Ok(Reply::Done(format!("Contact {name} added.")))
}

pub fn change_name(old: &str, new: &str, book: &mut AddressBook) -> Result<Reply, DomainError> {
    if book.find(old).is_none() {
        return Ok(Reply::NotFound);
    }
    let new_name = Name::new(new)?;
    book.rename(old, new_name);
    debug!(from = old, to = new, "contact renamed");
    Ok(Reply::Done(format!("Contact name changed to {new}.")))
}

pub fn change_phone(name: &str, new: &str, book: &mut AddressBook) -> Result<Reply, DomainError> {
    if book.edit_phone(name, new)?.is_none() {
        return Ok(Reply::NotFound);
    }
    debug!(contact = name, "phone changed");
    Ok(Reply::Done("Phone number changed.".into()))
}

pub fn change_address(
    name: &str,
    new: &str,
    book: &mut AddressBook,
) -> Result<Reply, DomainError> {
    if book.edit_address(name, new)?.is_none() {
        return Ok(Reply::NotFound);
    }
    debug!(contact = name, "address changed");
    Ok(Reply::Done("Address changed.".into()))
}

pub fn get_phone(name: &str, book: &AddressBook) -> Reply {
    match book.find(name) {
        Some(record) => Reply::Done(format!(
            "Phone numbers for {}: {}",
            record.name(),
            record.joined_phones(", ")
        )),
        None => Reply::NotFound,
    }
}

/// A contact saved without an address shows `N/A`.
pub fn show_address(name: &str, book: &AddressBook) -> Reply {
    match book.find(name) {
        Some(record) => Reply::Done(format!(
            "Address for {}: {}",
            record.name(),
            record.address().map_or("N/A", |a| a.as_str())
        )),
        None => Reply::NotFound,
    }
}

pub fn delete_contact(name: &str, book: &mut AddressBook) -> Reply {
    if book.delete(name) {
        debug!(contact = name, "contact deleted");
        Reply::Done(format!("Contact {name} deleted."))
    } else {
        Reply::NotFound
    }
}
