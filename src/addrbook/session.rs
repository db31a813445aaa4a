//! # View Session
//!
//! A [`ViewSession`] owns the [`RecordStore`] and the "last shown list": the
//! filtered projection of the store the user was most recently shown. Display
//! indexes typed by the user (1-based) always resolve against that list, never
//! against the store directly.
//!
//! ## When the shown list is refreshed
//!
//! | operation          | shown list                                       |
//! |--------------------|--------------------------------------------------|
//! | `set_filter`       | recomputed from the store                        |
//! | `add_record`       | new record appended if it passes the filter      |
//! | `clear`            | emptied along with the store                     |
//! | `remove_at`        | untouched (the removed record stays listed)      |
//! | `edit_record`      | untouched (the edit shows through the handle)    |
//! | `store_mut()` use  | untouched                                        |
//!
//! Keeping the list stale after removals means the indexes a user just saw
//! stay valid for the rest of a batch of commands. Call `set_filter` again to
//! resynchronize.

use crate::book::RecordStore;
use crate::error::{AddrBookError, Result};
use crate::index::DISPLAYED_INDEX_OFFSET;
use crate::model::{Contact, ContactRef};
use tracing::debug;

/// Predicate selecting which records appear in the shown list.
pub type ContactFilter = Box<dyn Fn(&Contact) -> bool>;

pub struct ViewSession {
    store: RecordStore,
    shown: Vec<ContactRef>,
    filter: Option<ContactFilter>,
}

impl ViewSession {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            shown: Vec::new(),
            filter: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Direct access to the store. Changes made here are not reflected in the
    /// shown list until the next `set_filter`.
    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Replaces the active filter (`None` shows everything) and rebuilds the
    /// shown list from the store's current records.
    pub fn set_filter(&mut self, filter: Option<ContactFilter>) {
        self.filter = filter;
        self.shown = self
            .store
            .iter()
            .filter(|r| self.passes(&r.borrow()))
            .cloned()
            .collect();
        debug!(shown = self.shown.len(), total = self.store.len(), "shown list rebuilt");
    }

    pub fn shown_list(&self) -> &[ContactRef] {
        &self.shown
    }

    pub fn add_record(&mut self, contact: Contact) -> Result<ContactRef> {
        let handle = self.store.add(contact)?;
        if self.passes(&handle.borrow()) {
            self.shown.push(handle.clone());
        }
        Ok(handle)
    }

    /// Edits through the store; the shown list is left as is.
    pub fn edit_record(&mut self, contact: &Contact) -> Result<ContactRef> {
        self.store.edit(contact)
    }

    /// Resolves a 1-based display index against the shown list.
    pub fn record_at(&self, index: usize) -> Result<ContactRef> {
        index
            .checked_sub(DISPLAYED_INDEX_OFFSET)
            .and_then(|i| self.shown.get(i))
            .cloned()
            .ok_or(AddrBookError::IndexOutOfRange {
                index,
                len: self.shown.len(),
            })
    }

    /// Removes the record shown at `index` from the store. The shown list
    /// keeps listing it.
    pub fn remove_at(&mut self, index: usize) -> Result<ContactRef> {
        let target = self.record_at(index)?;
        let contact = target.snapshot();
        self.store.remove(&contact)
    }

    pub fn contains_record(&self, contact: &Contact) -> bool {
        self.store.contains(contact)
    }

    /// Empties both the store and the shown list.
    pub fn clear(&mut self) {
        self.store.clear();
        self.shown.clear();
    }

    fn passes(&self, contact: &Contact) -> bool {
        self.filter.as_ref().map_or(true, |f| f(contact))
    }
}

impl std::fmt::Debug for ViewSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewSession")
            .field("store", &self.store)
            .field("shown", &self.shown)
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{person, person_with_phone};

    fn session_with(names: &[&str]) -> ViewSession {
        let store = RecordStore::from_contacts(names.iter().map(|n| person(n))).unwrap();
        ViewSession::new(store)
    }

    fn shown(session: &ViewSession) -> Vec<Contact> {
        session.shown_list().iter().map(ContactRef::snapshot).collect()
    }

    fn named(name: &'static str) -> Option<ContactFilter> {
        Some(Box::new(move |c: &Contact| c.name.as_str() == name))
    }

    #[test]
    fn new_session_shows_nothing() {
        let session = ViewSession::new(RecordStore::new());
        assert!(session.shown_list().is_empty());
        assert!(session.store().is_empty());
    }

    #[test]
    fn set_filter_none_shows_all() {
        let mut session = session_with(&["Bob", "Bill"]);
        session.set_filter(None);
        assert_eq!(shown(&session), vec![person("Bob"), person("Bill")]);
    }

    #[test]
    fn set_filter_keeps_store_order() {
        let mut session = session_with(&["Bob", "Bill", "Bobby", "Ann"]);
        session.set_filter(Some(Box::new(|c: &Contact| c.name.as_str().starts_with('B'))));
        assert_eq!(
            shown(&session),
            vec![person("Bob"), person("Bill"), person("Bobby")]
        );
    }

    #[test]
    fn shown_list_aliases_store_records() {
        let mut session = session_with(&["Bob"]);
        session.set_filter(None);
        assert!(session.shown_list()[0].ptr_eq(&session.store().records()[0]));
    }

    #[test]
    fn add_record_appends_when_unfiltered() {
        let mut session = session_with(&[]);
        session.add_record(person("Bob")).unwrap();
        assert_eq!(shown(&session), vec![person("Bob")]);
    }

    #[test]
    fn add_record_failing_filter_is_stored_but_not_shown() {
        let mut session = session_with(&["Bob"]);
        session.set_filter(named("Bob"));

        session.add_record(person("Bill")).unwrap();

        assert!(session.contains_record(&person("Bill")));
        assert_eq!(shown(&session), vec![person("Bob")]);
    }

    #[test]
    fn add_record_passing_filter_is_appended() {
        let mut session = session_with(&["Ann"]);
        session.set_filter(Some(Box::new(|c: &Contact| c.name.as_str().starts_with('B'))));
        session.add_record(person("Bob")).unwrap();
        assert_eq!(shown(&session), vec![person("Bob")]);
    }

    #[test]
    fn add_duplicate_leaves_both_lists_alone() {
        let mut session = session_with(&["Bob"]);
        session.set_filter(None);
        let err = session.add_record(person("Bob")).unwrap_err();
        assert!(matches!(err, AddrBookError::DuplicateRecord));
        assert_eq!(shown(&session), vec![person("Bob")]);
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn record_at_uses_one_based_indexes() {
        let mut session = session_with(&["Bob", "Bill"]);
        session.set_filter(None);
        assert_eq!(session.record_at(1).unwrap(), person("Bob"));
        assert_eq!(session.record_at(2).unwrap(), person("Bill"));
    }

    #[test]
    fn record_at_rejects_zero_and_past_end() {
        let mut session = session_with(&["Bob", "Bill"]);
        session.set_filter(None);
        for index in [0, 3] {
            let err = session.record_at(index).unwrap_err();
            assert!(matches!(
                err,
                AddrBookError::IndexOutOfRange { len: 2, .. }
            ));
        }
    }

    #[test]
    fn record_at_on_empty_shown_list_fails() {
        let session = session_with(&["Bob"]);
        assert!(matches!(
            session.record_at(1),
            Err(AddrBookError::IndexOutOfRange { index: 1, len: 0 })
        ));
    }

    #[test]
    fn remove_at_leaves_shown_list_stale_until_refiltered() {
        let mut session = session_with(&["Bob", "Bill"]);
        session.set_filter(None);

        session.remove_at(2).unwrap();

        assert_eq!(session.store().snapshot(), vec![person("Bob")]);
        assert_eq!(shown(&session), vec![person("Bob"), person("Bill")]);

        session.set_filter(None);
        assert_eq!(shown(&session), vec![person("Bob")]);
    }

    #[test]
    fn remove_at_stale_entry_is_not_found() {
        let mut session = session_with(&["Bob", "Bill"]);
        session.set_filter(None);
        session.remove_at(2).unwrap();

        let err = session.remove_at(2).unwrap_err();
        assert!(matches!(err, AddrBookError::RecordNotFound));
    }

    #[test]
    fn remove_at_after_direct_store_removal_is_not_found() {
        let mut session = session_with(&["Bob"]);
        session.set_filter(None);
        session.store_mut().remove(&person("Bob")).unwrap();

        assert!(matches!(
            session.remove_at(1),
            Err(AddrBookError::RecordNotFound)
        ));
    }

    #[test]
    fn remove_at_bad_index_changes_nothing() {
        let mut session = session_with(&["Bob"]);
        session.set_filter(None);
        assert!(matches!(
            session.remove_at(5),
            Err(AddrBookError::IndexOutOfRange { .. })
        ));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn edit_shows_through_shown_list_without_resync() {
        let mut session = session_with(&["Bob", "Bill"]);
        session.set_filter(None);
        let before = session.record_at(2).unwrap();

        session.edit_record(&person_with_phone("Bill", "555")).unwrap();

        assert_eq!(before.borrow().phone.value(), "555");
        assert_eq!(session.shown_list()[1].borrow().phone.value(), "555");
    }

    #[test]
    fn edit_while_holding_a_shown_record_is_an_error() {
        let mut session = session_with(&["Bob"]);
        session.set_filter(None);
        let handle = session.record_at(1).unwrap();
        let guard = handle.borrow();

        let err = session
            .edit_record(&person_with_phone("Bob", "9"))
            .unwrap_err();
        assert!(matches!(err, AddrBookError::RecordInUse));
        assert!(!err.is_recoverable());
        assert_eq!(guard.phone.value(), "1");
    }

    #[test]
    fn edit_does_not_reapply_filter() {
        let mut session = session_with(&["Bob"]);
        session.set_filter(Some(Box::new(|c: &Contact| c.phone.value() == "1")));
        session.edit_record(&person_with_phone("Bob", "2")).unwrap();

        // no longer matches, but stays listed until the next resync
        assert_eq!(session.shown_list().len(), 1);
        session.set_filter(Some(Box::new(|c: &Contact| c.phone.value() == "1")));
        assert!(session.shown_list().is_empty());
    }

    #[test]
    fn direct_store_adds_are_not_shown_until_resync() {
        let mut session = session_with(&["Bob"]);
        session.set_filter(None);
        session.store_mut().add(person("Bill")).unwrap();
        assert_eq!(session.shown_list().len(), 1);

        session.set_filter(None);
        assert_eq!(session.shown_list().len(), 2);
    }

    #[test]
    fn contains_record_delegates_to_store() {
        let session = session_with(&["Bob"]);
        assert!(session.contains_record(&person("Bob")));
        assert!(!session.contains_record(&person("Bill")));
    }

    #[test]
    fn clear_empties_store_and_shown_list() {
        let mut session = session_with(&["Bob", "Bill"]);
        session.set_filter(named("Bob"));
        session.clear();
        assert!(session.store().is_empty());
        assert!(session.shown_list().is_empty());
    }
}
