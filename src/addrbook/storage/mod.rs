//! # Storage Layer
//!
//! The record store lives in memory while commands run; this module is the
//! collaborator that loads it at startup and writes it back after each
//! command. The [`Storage`] trait keeps the API layer independent of where
//! the data actually goes.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStorage`]: production storage, one pretty-printed JSON file
//! - [`memory::InMemoryStorage`]: keeps the last saved snapshot; for tests
//!
//! ## File Format
//!
//! ```text
//! {
//!   "persons": [
//!     {
//!       "name": "John Doe",
//!       "phone":   { "value": "98765432", "private": false },
//!       "email":   { "value": "johnd@gmail.com", "private": true },
//!       "address": { "value": "311, Clementi Ave 2", "private": false },
//!       "tags": ["friends"]
//!     }
//!   ]
//! }
//! ```
//!
//! Values are validated again on load, so a hand-edited file with a bad
//! phone number fails to load instead of producing an invalid contact.

use crate::book::RecordStore;
use crate::error::Result;
use crate::model::Contact;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Loads and saves a whole [`RecordStore`].
pub trait Storage {
    fn load(&self) -> Result<RecordStore>;

    fn save(&mut self, store: &RecordStore) -> Result<()>;

    /// Human readable description of where data is kept.
    fn location(&self) -> String;
}

/// On-disk document shape shared by the file backend and tests.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoredBook {
    #[serde(default)]
    pub persons: Vec<Contact>,
}

impl StoredBook {
    pub fn from_store(store: &RecordStore) -> Self {
        Self {
            persons: store.snapshot(),
        }
    }

    pub fn into_store(self) -> Result<RecordStore> {
        RecordStore::from_contacts(self.persons)
    }
}
