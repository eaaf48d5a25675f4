use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const MIN_ADDRESS_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        Self::try_from(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Address {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.chars().count() < MIN_ADDRESS_CHARS {
            return Err(DomainError::InvalidAddress);
        }
        Ok(Self(value))
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}
