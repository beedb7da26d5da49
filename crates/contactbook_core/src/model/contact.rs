//! Contact record.
//!
//! # Responsibility
//! - Hold one person entry (`id`, `name`, `notes`).
//! - Render the persisted line and the listing line.
//!
//! # Invariants
//! - Storage field order is `id`, `name`, `notes`.
//! - The storage line never contains a raw newline, whatever the notes hold.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of a contact inside one contact book.
///
/// Unique per collection; assigned by the collection on insert.
pub type ContactId = u32;

/// One contact entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    /// Free text, may be empty.
    pub notes: String,
}

impl Contact {
    pub fn new(id: ContactId, name: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            notes: notes.into(),
        }
    }

    /// Encodes this contact as one persisted record line.
    pub fn to_storage_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes one persisted record line.
    pub fn from_storage_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Returns whether `name` matches this contact, ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "- {} : {} : {}", self.id, self.name, self.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::Contact;

    #[test]
    fn display_uses_dash_prefix_and_colon_separators() {
        let contact = Contact::new(7, "Ada Lovelace", "mathematician");
        assert_eq!(contact.to_string(), "- 7 : Ada Lovelace : mathematician");
    }

    #[test]
    fn storage_line_keeps_field_order_and_escapes_newlines() {
        let contact = Contact::new(3, "Sam", "line one\nline two");
        let line = contact.to_storage_line().unwrap();

        assert!(!line.contains('\n'));
        assert!(line.starts_with(r#"{"id":3,"name":"Sam","notes":"#));
        assert_eq!(Contact::from_storage_line(&line).unwrap(), contact);
    }

    #[test]
    fn name_match_ignores_case() {
        let contact = Contact::new(1, "Grace Hopper", "");
        assert!(contact.name_matches("grace HOPPER"));
        assert!(!contact.name_matches("grace"));
    }
}
