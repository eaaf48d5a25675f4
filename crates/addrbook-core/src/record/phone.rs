use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const PHONE_DIGITS: usize = 10;

/// Phone number made of exactly ten ASCII digits (e.g., "0501234567").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(number: &str) -> Result<Self, DomainError> {
        if !Self::is_valid(number) {
            return Err(DomainError::InvalidPhone);
        }
        Ok(Self(number.to_string()))
    }

    fn is_valid(number: &str) -> bool {
        let bytes = number.as_bytes();
        bytes.len() == PHONE_DIGITS && bytes.iter().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Phone {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !Self::is_valid(&value) {
            return Err(DomainError::InvalidPhone);
        }
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}
