//! Validated field values for a contact.
//!
//! Every type here is immutable once built: the constructor trims and checks
//! the raw input, so holding a `Phone` means holding a valid phone number.
//! The record store never validates anything itself; it only compares these
//! values for equality.
//!
//! Rules:
//! - [`Name`]: alphanumeric characters and spaces
//! - [`Phone`]: digits only
//! - [`Email`]: `local@domain`, both sides made of word characters or `.`
//! - [`Address`]: anything on a single line
//! - [`Tag`]: alphanumeric, case-sensitive
//!
//! Phone, email and address additionally carry a private flag.

use crate::error::{AddrBookError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const CONSTRAINTS: &'static str =
        "Person names should be spaces or alphanumeric characters";

    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if is_valid_name(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(AddrBookError::IllegalValue(Self::CONSTRAINTS.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The whitespace separated words of the name, used by keyword search.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == ' ')
}

impl TryFrom<String> for Name {
    type Error = AddrBookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialized form shared by the fields that carry a private flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRepr {
    pub value: String,
    #[serde(default)]
    pub private: bool,
}

macro_rules! private_field {
    ($(#[$meta:meta])* $ty:ident, $constraints:expr, $check:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "FieldRepr", into = "FieldRepr")]
        pub struct $ty {
            value: String,
            is_private: bool,
        }

        impl $ty {
            pub const CONSTRAINTS: &'static str = $constraints;

            pub fn new(raw: &str, is_private: bool) -> Result<Self> {
                let trimmed = raw.trim();
                if !$check(trimmed) {
                    return Err(AddrBookError::IllegalValue(Self::CONSTRAINTS.to_string()));
                }
                Ok(Self {
                    value: trimmed.to_string(),
                    is_private,
                })
            }

            pub fn value(&self) -> &str {
                &self.value
            }

            pub fn is_private(&self) -> bool {
                self.is_private
            }
        }

        impl TryFrom<FieldRepr> for $ty {
            type Error = AddrBookError;

            fn try_from(repr: FieldRepr) -> Result<Self> {
                Self::new(&repr.value, repr.private)
            }
        }

        impl From<$ty> for FieldRepr {
            fn from(field: $ty) -> Self {
                FieldRepr {
                    value: field.value,
                    private: field.is_private,
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }
    };
}

private_field!(
    /// A phone number, digits only.
    Phone,
    "Person phone numbers should only contain numbers",
    is_valid_phone
);

private_field!(
    /// An email address of the form `local@domain`.
    Email,
    "Person emails should be 2 alphanumeric/period strings separated by '@'",
    is_valid_email
);

private_field!(
    /// A postal address; any single line of text.
    Address,
    "Person addresses can be in any format",
    is_valid_address
);

fn is_valid_phone(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_email(s: &str) -> bool {
    let is_part = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
    };
    match s.split_once('@') {
        Some((local, domain)) => is_part(local) && is_part(domain),
        None => false,
    }
}

fn is_valid_address(s: &str) -> bool {
    !s.is_empty() && !s.contains(['\n', '\r'])
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && trimmed.chars().all(char::is_alphanumeric) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(AddrBookError::IllegalValue(Self::CONSTRAINTS.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = AddrBookError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

pub type TagSet = BTreeSet<Tag>;

/// Builds a tag set from raw labels, collapsing duplicates.
pub fn tag_set<I, S>(raw: I) -> Result<TagSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(|s| Tag::new(s.as_ref())).collect()
}
