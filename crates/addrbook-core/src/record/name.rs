use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const MIN_NAME_CHARS: usize = 2;

/// Contact name. Also the key a record is stored under in the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        Self::try_from(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.chars().count() < MIN_NAME_CHARS {
            return Err(DomainError::InvalidName);
        }
        Ok(Self(value))
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn name_too_short_rejected() {
        assert_eq!(Name::new(""), Err(DomainError::InvalidName));
        assert_eq!(Name::new("A"), Err(DomainError::InvalidName));
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        // one Cyrillic letter is two bytes in UTF-8
        assert_eq!(Name::new("Я"), Err(DomainError::InvalidName));
        assert!(Name::new("Ян").is_ok());
    }

    #[test]
    fn name_is_not_trimmed() {
        let name = Name::new("  ").unwrap();
        assert_eq!(name.as_str(), "  ");
    }

    proptest! {
        #[test]
        fn long_enough_name_preserved(s in "\\PC{2,40}") {
            let name = Name::new(&s).unwrap();
            prop_assert_eq!(&*name, s.as_str());
        }

        #[test]
        fn short_name_rejected(s in "\\PC{0,1}") {
            prop_assert_eq!(Name::new(&s), Err(DomainError::InvalidName));
        }
    }
}
