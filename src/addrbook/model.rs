use crate::error::{AddrBookError, Result};
use crate::fields::{Address, Email, Name, Phone, TagSet};
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A person in the address book.
///
/// Equality covers every field, privacy flags included. The name alone is
/// only used as a match key by edits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: TagSet,
}

impl Contact {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: TagSet) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Overwrites everything but the name with `other`'s details.
    pub(crate) fn update_details(&mut self, other: &Contact) {
        self.phone = other.phone.clone();
        self.email = other.email.clone();
        self.address = other.address.clone();
        self.tags = other.tags.clone();
    }

    pub fn as_text_show_all(&self) -> String {
        let mark = |private: bool| if private { "(private) " } else { "" };
        format!(
            "{} Phone: {}{} Email: {}{} Address: {}{} Tags: {}",
            self.name,
            mark(self.phone.is_private()),
            self.phone,
            mark(self.email.is_private()),
            self.email,
            mark(self.address.is_private()),
            self.address,
            self.tags_text()
        )
    }

    pub fn as_text_hide_private(&self) -> String {
        let mut text = self.name.to_string();
        if !self.phone.is_private() {
            text.push_str(&format!(" Phone: {}", self.phone));
        }
        if !self.email.is_private() {
            text.push_str(&format!(" Email: {}", self.email));
        }
        if !self.address.is_private() {
            text.push_str(&format!(" Address: {}", self.address));
        }
        text.push_str(&format!(" Tags: {}", self.tags_text()));
        text
    }

    pub fn tags_text(&self) -> String {
        self.tags.iter().map(|t| t.to_string()).collect()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text_show_all())
    }
}

/// A shared, read-only handle to a contact owned by a [`RecordStore`].
///
/// The store and any shown list alias the same allocation, so an in-place
/// edit through the store is visible through every handle. Handles outlive
/// removal: a handle taken before a record was removed keeps reading the
/// record's last contents.
///
/// [`RecordStore`]: crate::book::RecordStore
#[derive(Debug, Clone)]
pub struct ContactRef(Rc<RefCell<Contact>>);

impl ContactRef {
    pub(crate) fn new(contact: Contact) -> Self {
        Self(Rc::new(RefCell::new(contact)))
    }

    /// Read access to the current contents. An edit of this record made
    /// while the guard is alive fails with `RecordInUse`.
    pub fn borrow(&self) -> Ref<'_, Contact> {
        self.0.borrow()
    }

    /// An owned copy of the current contents.
    pub fn snapshot(&self) -> Contact {
        self.0.borrow().clone()
    }

    /// True when both handles point at the same stored record.
    pub fn ptr_eq(&self, other: &ContactRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn update_details(&self, from: &Contact) -> Result<()> {
        let mut contact = self
            .0
            .try_borrow_mut()
            .map_err(|_| AddrBookError::RecordInUse)?;
        contact.update_details(from);
        Ok(())
    }
}

impl PartialEq for ContactRef {
    fn eq(&self, other: &Self) -> bool {
        *self.borrow() == *other.borrow()
    }
}

impl PartialEq<Contact> for ContactRef {
    fn eq(&self, other: &Contact) -> bool {
        *self.borrow() == *other
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::fields::tag_set;

    /// A valid, fully public contact; only the name varies.
    pub fn person(name: &str) -> Contact {
        Contact::new(
            Name::new(name).unwrap(),
            Phone::new("1", false).unwrap(),
            Email::new("1@email", false).unwrap(),
            Address::new("House of 1", false).unwrap(),
            tag_set(["tag"]).unwrap(),
        )
    }

    pub fn person_with_phone(name: &str, phone: &str) -> Contact {
        let mut contact = person(name);
        contact.phone = Phone::new(phone, false).unwrap();
        contact
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn same_name_different_phone_is_not_equal() {
        assert_ne!(person_with_phone("Bob", "1"), person_with_phone("Bob", "2"));
        assert_eq!(person("Bob"), person("Bob"));
    }

    #[test]
    fn hide_private_omits_private_fields() {
        let mut c = person("Bob");
        c.phone = Phone::new("555", true).unwrap();
        let hidden = c.as_text_hide_private();
        assert!(!hidden.contains("555"));
        assert!(hidden.contains("1@email"));

        let shown = c.as_text_show_all();
        assert!(shown.contains("Phone: (private) 555"));
        assert!(shown.contains("Tags: [tag]"));
    }

    #[test]
    fn update_details_keeps_name() {
        let mut c = person("Bob");
        let mut other = person_with_phone("Someone Else", "999");
        other.tags.clear();
        c.update_details(&other);
        assert_eq!(c.name.as_str(), "Bob");
        assert_eq!(c.phone.value(), "999");
        assert!(c.tags.is_empty());
    }

    #[test]
    fn handles_share_updates() {
        let a = ContactRef::new(person("Bob"));
        let b = a.clone();
        a.update_details(&person_with_phone("Bob", "42")).unwrap();
        assert_eq!(b.borrow().phone.value(), "42");
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&ContactRef::new(person("Bob"))));
    }

    #[test]
    fn update_while_borrowed_fails_cleanly() {
        let a = ContactRef::new(person("Bob"));
        let guard = a.borrow();
        let err = a.update_details(&person_with_phone("Bob", "42")).unwrap_err();
        assert!(matches!(err, AddrBookError::RecordInUse));
        assert_eq!(guard.phone.value(), "1");
        drop(guard);
        assert!(a.update_details(&person_with_phone("Bob", "42")).is_ok());
    }
}
