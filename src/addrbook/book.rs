//! # Record Store
//!
//! [`RecordStore`] is the authoritative list of contacts. It keeps insertion
//! order and never holds two equal contacts.
//!
//! ## Two kinds of matching
//!
//! - `add`, `remove`, `contains` and construction compare **whole contacts**.
//!   Two contacts named "Bob" with different phones are distinct records.
//! - `edit` matches by **name only**, then rewrites the other fields of the
//!   matched record in place.
//!
//! The two not-found failures follow the same split: a name miss on edit is
//! [`NoSuchRecord`](AddrBookError::NoSuchRecord), a value miss on remove is
//! [`RecordNotFound`](AddrBookError::RecordNotFound).
//!
//! ## Shared records
//!
//! Records are held as [`ContactRef`] handles. Anything that cloned a handle
//! (a view session's shown list, a caller) sees later in-place edits.

use crate::error::{AddrBookError, Result};
use crate::model::{Contact, ContactRef};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<ContactRef>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an initial batch, rejecting the whole batch if it
    /// contains duplicates.
    pub fn from_contacts<I>(contacts: I) -> Result<Self>
    where
        I: IntoIterator<Item = Contact>,
    {
        let contacts: Vec<Contact> = contacts.into_iter().collect();
        let mut seen = HashSet::with_capacity(contacts.len());
        if !contacts.iter().all(|c| seen.insert(c)) {
            return Err(AddrBookError::DuplicateRecord);
        }
        Ok(Self {
            records: contacts.into_iter().map(ContactRef::new).collect(),
        })
    }

    pub fn contains(&self, contact: &Contact) -> bool {
        self.records.iter().any(|r| r == contact)
    }

    pub fn add(&mut self, contact: Contact) -> Result<ContactRef> {
        if self.contains(&contact) {
            return Err(AddrBookError::DuplicateRecord);
        }
        debug!(name = %contact.name, "adding record");
        let handle = ContactRef::new(contact);
        self.records.push(handle.clone());
        Ok(handle)
    }

    /// Rewrites the phone, email, address and tags of the stored record named
    /// like `contact`. With several records of that name, the latest added
    /// one is edited.
    ///
    /// Fails with `DuplicateRecord` if the result would equal another stored
    /// record, or `RecordInUse` if a caller still holds a borrow of the
    /// target; the store is unchanged in both cases.
    pub fn edit(&mut self, contact: &Contact) -> Result<ContactRef> {
        let target = self
            .records
            .iter()
            .rposition(|r| r.borrow().name == contact.name)
            .ok_or(AddrBookError::NoSuchRecord)?;

        let mut updated = self.records[target].snapshot();
        updated.update_details(contact);
        let clashes = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| i != target && *r == updated);
        if clashes {
            return Err(AddrBookError::DuplicateRecord);
        }

        let handle = &self.records[target];
        handle.update_details(contact)?;
        debug!(name = %contact.name, position = target, "edited record");
        Ok(handle.clone())
    }

    /// Removes the first record equal to `contact`.
    pub fn remove(&mut self, contact: &Contact) -> Result<ContactRef> {
        let position = self
            .records
            .iter()
            .position(|r| r == contact)
            .ok_or(AddrBookError::RecordNotFound)?;
        debug!(name = %contact.name, position, "removing record");
        Ok(self.records.remove(position))
    }

    pub fn clear(&mut self) {
        debug!(count = self.records.len(), "clearing records");
        self.records.clear();
    }

    /// Every record, in insertion order.
    pub fn records(&self) -> &[ContactRef] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactRef> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Owned copies of every record, in order.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.records.iter().map(ContactRef::snapshot).collect()
    }
}
