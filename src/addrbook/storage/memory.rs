use super::{Storage, StoredBook};
use crate::book::RecordStore;
use crate::error::{AddrBookError, Result};
use crate::model::Contact;

/// In-memory storage for testing.
/// Does NOT persist data beyond the value itself.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    saved: Vec<Contact>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contacts as of the last successful save (or the initial contents).
    pub fn saved(&self) -> &[Contact] {
        &self.saved
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    /// Makes every later `save` fail with an I/O error.
    pub fn fail_saves(&mut self) {
        self.fail_saves = true;
    }
}

impl Storage for InMemoryStorage {
    fn load(&self) -> Result<RecordStore> {
        RecordStore::from_contacts(self.saved.clone())
    }

    fn save(&mut self, store: &RecordStore) -> Result<()> {
        if self.fail_saves {
            return Err(AddrBookError::Io(std::io::Error::other(
                "simulated storage failure",
            )));
        }
        self.saved = StoredBook::from_store(store).persons;
        self.save_count += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::fixtures::person;

    pub struct StorageFixture {
        pub storage: InMemoryStorage,
    }

    impl Default for StorageFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StorageFixture {
        pub fn new() -> Self {
            Self {
                storage: InMemoryStorage::new(),
            }
        }

        pub fn with_persons(mut self, names: &[&str]) -> Self {
            self.storage
                .saved
                .extend(names.iter().map(|name| person(name)));
            self
        }

        pub fn with_contact(mut self, contact: Contact) -> Self {
            self.storage.saved.push(contact);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StorageFixture;
    use super::*;
    use crate::model::fixtures::person;

    #[test]
    fn loads_fixture_contents() {
        let storage = StorageFixture::new().with_persons(&["Bob", "Bill"]).storage;
        let store = storage.load().unwrap();
        assert_eq!(store.snapshot(), vec![person("Bob"), person("Bill")]);
    }

    #[test]
    fn save_replaces_snapshot() {
        let mut storage = InMemoryStorage::new();
        let store = RecordStore::from_contacts(vec![person("Ann")]).unwrap();
        storage.save(&store).unwrap();
        assert_eq!(storage.saved(), &[person("Ann")]);
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn failing_saves_keep_old_snapshot() {
        let mut storage = StorageFixture::new().with_persons(&["Bob"]).storage;
        storage.fail_saves();
        assert!(storage.save(&RecordStore::new()).is_err());
        assert_eq!(storage.saved(), &[person("Bob")]);
    }
}
