//! Phonebook service
//!
//! Holds the in-memory contact list and mirrors every change to
//! contacts.csv, recording each one in the audit log.

use crate::audit::EntityType;
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{Contact, ContactCategory, ContactId};
use crate::storage::Storage;

/// A single field change applied by [`Phonebook::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactUpdate {
    Name(String),
    /// Replaces the phone number and re-derives the country
    Phone(String),
    Email(String),
    Category(ContactCategory),
}

/// Service for contact management
pub struct Phonebook<'a> {
    storage: &'a Storage,
    contacts: Vec<Contact>,
}

impl<'a> Phonebook<'a> {
    /// Load the phonebook from storage (a missing file gives an empty book)
    pub fn load(storage: &'a Storage) -> PhonebookResult<Self> {
        let contacts = storage.contacts.load()?;
        Ok(Self { storage, contacts })
    }

    /// All contacts in insertion order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Get a contact by its session id
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    /// Append a contact and persist the whole book
    ///
    /// If the write fails the contact is not kept in memory either.
    pub fn add(&mut self, contact: Contact) -> PhonebookResult<ContactId> {
        let id = contact.id();
        self.contacts.push(contact);

        if let Err(e) = self.save() {
            self.contacts.pop();
            return Err(e);
        }

        let added = &self.contacts[self.contacts.len() - 1];
        self.storage.log_create(
            EntityType::Contact,
            id.to_string(),
            Some(added.name().to_string()),
            added,
        );

        Ok(id)
    }

    /// Case-insensitive substring search on the name, in book order
    ///
    /// An empty query matches every contact.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.matches_name(query))
            .collect()
    }

    /// All contacts ordered by name
    pub fn sorted_by_name(&self) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    /// Apply a field change to one contact and persist
    ///
    /// The in-memory contact is left untouched when validation or the write
    /// fails.
    pub fn update(&mut self, id: ContactId, change: ContactUpdate) -> PhonebookResult<&Contact> {
        let index = self
            .position(id)
            .ok_or_else(|| PhonebookError::contact_not_found(id.to_string()))?;

        let mut changed = self.contacts[index].clone();
        match change {
            ContactUpdate::Name(name) => changed
                .set_name(name)
                .map_err(|e| PhonebookError::Validation(e.to_string()))?,
            ContactUpdate::Phone(phone) => changed.update_phone(phone),
            ContactUpdate::Email(email) => changed.set_email(email),
            ContactUpdate::Category(category) => changed.set_category(category),
        }

        let before = std::mem::replace(&mut self.contacts[index], changed);
        if let Err(e) = self.save() {
            self.contacts[index] = before;
            return Err(e);
        }

        let after = &self.contacts[index];
        self.storage.log_update(
            EntityType::Contact,
            id.to_string(),
            Some(after.name().to_string()),
            &before,
            after,
        );

        Ok(after)
    }

    /// Remove exactly the given contact and persist
    ///
    /// Returns the removed contact, or `None` if it was not in the book (in
    /// which case nothing is written). A failed write puts the contact back.
    pub fn delete(&mut self, id: ContactId) -> PhonebookResult<Option<Contact>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let removed = self.contacts.remove(index);
        if let Err(e) = self.save() {
            self.contacts.insert(index, removed);
            return Err(e);
        }

        self.storage.log_delete(
            EntityType::Contact,
            id.to_string(),
            Some(removed.name().to_string()),
            &removed,
        );

        Ok(Some(removed))
    }

    /// Overwrite storage with the full in-memory list
    pub fn save(&self) -> PhonebookResult<()> {
        self.storage.contacts.save(&self.contacts)
    }

    fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id() == id)
    }
}
