//! Contact collection contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/replace/remove and lookup APIs over session contacts.
//!
//! # Invariants
//! - `add_contact` assigns the next free id, never a fixed default.
//! - Name search is a case-insensitive exact match returning the first hit
//!   in insertion order.

use super::ordered::OrderedRecords;
use super::{RepoError, RepoResult};
use crate::model::contact::{Contact, ContactId};

/// Collection interface for contact operations.
pub trait ContactRepository {
    /// Creates a contact with a fresh id.
    fn add_contact(&mut self, name: String, notes: String) -> RepoResult<ContactId>;
    /// Inserts a contact that already carries an id (load/import path).
    fn insert_contact(&mut self, contact: Contact) -> RepoResult<ContactId>;
    /// Replaces the stored contact that has `contact.id`.
    fn replace_contact(&mut self, contact: Contact) -> RepoResult<()>;
    fn remove_contact(&mut self, id: ContactId) -> RepoResult<Contact>;
    fn get_contact(&self, id: ContactId) -> Option<&Contact>;
    /// Contact at `position` in insertion order.
    fn contact_at(&self, position: usize) -> Option<&Contact>;
    fn find_contact_by_name(&self, name: &str) -> Option<&Contact>;
    fn list_contacts(&self) -> &[Contact];
}

/// Ordered in-memory contact collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    records: OrderedRecords<Contact>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from already-identified contacts, keeping order.
    pub fn from_contacts(contacts: Vec<Contact>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for contact in contacts {
            repo.insert_contact(contact)?;
        }
        Ok(repo)
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn add_contact(&mut self, name: String, notes: String) -> RepoResult<ContactId> {
        let id = self.records.next_id().ok_or(RepoError::IdsExhausted)?;
        self.insert_contact(Contact::new(id, name, notes))
    }

    fn insert_contact(&mut self, contact: Contact) -> RepoResult<ContactId> {
        self.records
            .insert(contact)
            .map_err(|rejected| RepoError::DuplicateContactId(rejected.id))
    }

    fn replace_contact(&mut self, contact: Contact) -> RepoResult<()> {
        self.records
            .replace(contact)
            .map(|_| ())
            .map_err(|missing| RepoError::ContactNotFound(missing.id))
    }

    fn remove_contact(&mut self, id: ContactId) -> RepoResult<Contact> {
        self.records
            .remove(id)
            .ok_or(RepoError::ContactNotFound(id))
    }

    fn get_contact(&self, id: ContactId) -> Option<&Contact> {
        self.records.get(id)
    }

    fn contact_at(&self, position: usize) -> Option<&Contact> {
        self.records.at(position)
    }

    fn find_contact_by_name(&self, name: &str) -> Option<&Contact> {
        self.records.find(|contact| contact.name_matches(name))
    }

    fn list_contacts(&self) -> &[Contact] {
        self.records.as_slice()
    }
}
