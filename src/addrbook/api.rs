//! # API Facade
//!
//! The API layer is the single entry point for front-ends. One call runs one
//! command start to finish:
//!
//! 1. parse the text into a [`Command`]
//! 2. execute it against the [`ViewSession`]
//! 3. hand the record store to the [`Storage`] collaborator to persist
//!
//! The session lives as long as the API value, so the shown list from one
//! call (e.g. `list`) is what display indexes resolve against in the next
//! (e.g. `delete 2`).
//!
//! ## Errors
//!
//! Parse and validation failures come back as `Err` and nothing is saved.
//! Domain failures the command understands come back as error-level messages
//! in an `Ok` result. A failed save is returned as `Err` and is not retried.
//!
//! ## Generic Over Storage
//!
//! `AddressBookApi<S: Storage>` is generic over the storage backend:
//! - Production: `AddressBookApi<JsonFileStorage>`
//! - Testing: `AddressBookApi<InMemoryStorage>`

use crate::commands::{CmdResult, Command};
use crate::error::Result;
use crate::parser;
use crate::session::ViewSession;
use crate::storage::Storage;
use tracing::debug;

pub use crate::commands::{CmdMessage, DisplayContact, MessageLevel};

pub struct AddressBookApi<S: Storage> {
    storage: S,
    session: ViewSession,
}

impl<S: Storage> AddressBookApi<S> {
    /// Loads the store from `storage` and opens a fresh session on it.
    pub fn open(storage: S) -> Result<Self> {
        let store = storage.load()?;
        Ok(Self {
            storage,
            session: ViewSession::new(store),
        })
    }

    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        let command = parser::parse(input)?;
        self.run(command)
    }

    pub fn run(&mut self, command: Command) -> Result<CmdResult> {
        debug!(command = command.word(), "executing");
        let result = command.execute(&mut self.session)?;
        self.storage.save(self.session.store())?;
        Ok(result)
    }

    pub fn session(&self) -> &ViewSession {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrBookError;
    use crate::fields::Phone;
    use crate::model::fixtures::person;
    use crate::storage::memory::fixtures::StorageFixture;
    use crate::storage::memory::InMemoryStorage;

    fn api_with(names: &[&str]) -> AddressBookApi<InMemoryStorage> {
        AddressBookApi::open(StorageFixture::new().with_persons(names).storage).unwrap()
    }

    #[test]
    fn open_loads_store_with_empty_shown_list() {
        let api = api_with(&["Bob", "Bill"]);
        assert_eq!(api.session().store().len(), 2);
        assert!(api.session().shown_list().is_empty());
    }

    #[test]
    fn execute_saves_after_command() {
        let mut api = api_with(&[]);
        api.execute("add Bob p/1 e/1@email a/House of 1 t/tag").unwrap();

        assert_eq!(api.storage().saved(), &[person("Bob")]);
        assert_eq!(api.storage().save_count(), 1);
    }

    #[test]
    fn shown_list_carries_between_calls() {
        let mut api = api_with(&["Bob", "Bill"]);
        api.execute("list").unwrap();
        let result = api.execute("delete 2").unwrap();

        assert_eq!(result.affected, vec![person("Bill")]);
        assert_eq!(api.storage().saved(), &[person("Bob")]);
        // indexes still refer to the earlier listing
        let again = api.execute("view 2").unwrap();
        assert!(again.has_errors());
    }

    #[test]
    fn parse_errors_do_not_save() {
        let mut api = api_with(&["Bob"]);
        let err = api.execute("add Nobody").unwrap_err();
        assert!(matches!(err, AddrBookError::InvalidCommand(_)));
        assert_eq!(api.storage().save_count(), 0);
    }

    #[test]
    fn save_failure_propagates() {
        let mut storage = StorageFixture::new().with_persons(&["Bob"]).storage;
        storage.fail_saves();
        let mut api = AddressBookApi::open(storage).unwrap();

        let err = api.execute("clear").unwrap_err();
        assert!(matches!(err, AddrBookError::Io(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn run_accepts_parsed_commands() {
        let mut bob = person("Bob");
        bob.phone = Phone::new("77", true).unwrap();
        let storage = StorageFixture::new().with_contact(bob).storage;
        let mut api = AddressBookApi::open(storage).unwrap();

        api.run(Command::List).unwrap();
        let result = api.run(Command::ViewAll(1)).unwrap();
        assert!(result.messages[0].content.contains("(private) 77"));
    }

    #[test]
    fn unbounded_delete_range_is_rejected() {
        let mut api = api_with(&["Bob", "Bill"]);
        api.execute("list").unwrap();

        let result = api.execute(&format!("delete 1-{}", usize::MAX)).unwrap();
        assert!(result.has_errors());
        assert_eq!(api.session().store().len(), 2);

        let result = api.execute("delete 1-2").unwrap();
        assert_eq!(result.affected, vec![person("Bob"), person("Bill")]);
    }

    #[test]
    fn only_listings_carry_listed_contacts() {
        let mut api = api_with(&["Bob"]);
        assert_eq!(api.execute("list").unwrap().listed.len(), 1);
        assert!(api.execute("view 1").unwrap().listed.is_empty());
        assert!(api.execute("help").unwrap().listed.is_empty());
    }
}
