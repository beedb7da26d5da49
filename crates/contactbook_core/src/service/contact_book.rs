//! Contact and meeting use-cases.
//!
//! # Responsibility
//! - Add, edit, delete and find contacts and meetings.
//! - Manage meeting attendees.
//!
//! # Invariants
//! - Every lookup miss surfaces as a `ServiceError`, never a panic.
//! - Edits keep a field when its replacement is `None`.
//! - Deleting a contact removes it from every meeting's attendees.
//! - Meeting use-cases only ever touch the meeting collection.

use crate::model::contact::{Contact, ContactId};
use crate::model::meeting::{Meeting, MeetingId};
use crate::repo::contact_repo::ContactRepository;
use crate::repo::meeting_repo::MeetingRepository;
use crate::repo::RepoError;
use chrono::NaiveDateTime;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for contact book use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    ContactNotFound(ContactId),
    /// No contact has this name (case-insensitive).
    ContactNameNotFound(String),
    MeetingNotFound(MeetingId),
    /// No meeting has these notes (case-insensitive).
    MeetingNotesNotFound(String),
    NotAttending {
        meeting_id: MeetingId,
        contact_id: ContactId,
    },
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContactNotFound(id) => write!(f, "no contact with id {id}"),
            Self::ContactNameNotFound(name) => write!(f, "no contact named '{name}'"),
            Self::MeetingNotFound(id) => write!(f, "no meeting with id {id}"),
            Self::MeetingNotesNotFound(notes) => write!(f, "no meeting named '{notes}'"),
            Self::NotAttending {
                meeting_id,
                contact_id,
            } => write!(
                f,
                "contact {contact_id} is not attending meeting {meeting_id}"
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::ContactNotFound(id) => Self::ContactNotFound(id),
            RepoError::MeetingNotFound(id) => Self::MeetingNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Field replacements for a contact edit. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactEdit {
    pub name: Option<String>,
    pub notes: Option<String>,
}

/// Field replacements for a meeting edit. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingEdit {
    pub date: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

/// Maps console input to an edit value: blank means "keep".
pub fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Facade over both collections.
pub struct ContactBook<C: ContactRepository, M: MeetingRepository> {
    contacts: C,
    meetings: M,
}

impl<C: ContactRepository, M: MeetingRepository> ContactBook<C, M> {
    pub fn new(contacts: C, meetings: M) -> Self {
        Self { contacts, meetings }
    }

    /// Contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        self.contacts.list_contacts()
    }

    /// Meetings in insertion order.
    pub fn meetings(&self) -> &[Meeting] {
        self.meetings.list_meetings()
    }

    pub fn add_contact(
        &mut self,
        name: impl Into<String>,
        notes: impl Into<String>,
    ) -> ServiceResult<Contact> {
        let id = self.contacts.add_contact(name.into(), notes.into())?;
        info!("event=contact_add module=service status=ok contact_id={id}");
        self.contact(id).cloned()
    }

    pub fn contact(&self, id: ContactId) -> ServiceResult<&Contact> {
        self.contacts
            .get_contact(id)
            .ok_or(ServiceError::ContactNotFound(id))
    }

    /// Replaces the contact with a new record carrying the same id.
    pub fn edit_contact(&mut self, id: ContactId, edit: ContactEdit) -> ServiceResult<Contact> {
        let current = self.contact(id)?;
        let updated = Contact::new(
            id,
            edit.name.unwrap_or_else(|| current.name.clone()),
            edit.notes.unwrap_or_else(|| current.notes.clone()),
        );
        self.contacts.replace_contact(updated.clone())?;
        info!("event=contact_edit module=service status=ok contact_id={id}");
        Ok(updated)
    }

    pub fn delete_contact(&mut self, id: ContactId) -> ServiceResult<Contact> {
        let removed = self.contacts.remove_contact(id)?;
        let detached = self.meetings.remove_attendee_everywhere(id);
        info!(
            "event=contact_delete module=service status=ok contact_id={id} meetings_detached={detached}"
        );
        Ok(removed)
    }

    /// First contact whose name matches, ignoring case.
    pub fn find_contact(&self, name: &str) -> ServiceResult<&Contact> {
        self.contacts
            .find_contact_by_name(name)
            .ok_or_else(|| ServiceError::ContactNameNotFound(name.to_string()))
    }

    pub fn add_meeting(
        &mut self,
        date: NaiveDateTime,
        notes: impl Into<String>,
    ) -> ServiceResult<Meeting> {
        let id = self.meetings.add_meeting(date, notes.into())?;
        info!("event=meeting_add module=service status=ok meeting_id={id}");
        self.meeting(id).cloned()
    }

    pub fn meeting(&self, id: MeetingId) -> ServiceResult<&Meeting> {
        self.meetings
            .get_meeting(id)
            .ok_or(ServiceError::MeetingNotFound(id))
    }

    /// Replaces date/notes of a meeting; attendees are carried over.
    pub fn edit_meeting(&mut self, id: MeetingId, edit: MeetingEdit) -> ServiceResult<Meeting> {
        let current = self.meeting(id)?;
        let mut updated = Meeting::new(
            id,
            edit.date.unwrap_or(current.date),
            edit.notes.unwrap_or_else(|| current.notes.clone()),
        );
        updated.attendees = current.attendees.clone();
        self.meetings.replace_meeting(updated.clone())?;
        info!("event=meeting_edit module=service status=ok meeting_id={id}");
        Ok(updated)
    }

    pub fn delete_meeting(&mut self, id: MeetingId) -> ServiceResult<Meeting> {
        let removed = self.meetings.remove_meeting(id)?;
        info!("event=meeting_delete module=service status=ok meeting_id={id}");
        Ok(removed)
    }

    /// First meeting whose notes match, ignoring case.
    pub fn find_meeting(&self, notes: &str) -> ServiceResult<&Meeting> {
        self.meetings
            .find_meeting_by_notes(notes)
            .ok_or_else(|| ServiceError::MeetingNotesNotFound(notes.to_string()))
    }

    /// Returns the meeting and its attendees, ordered by contact id.
    pub fn meeting_attendees(&self, id: MeetingId) -> ServiceResult<(&Meeting, Vec<&Contact>)> {
        let meeting = self.meeting(id)?;
        let attendees = meeting
            .attendees
            .iter()
            .filter_map(|contact_id| self.contacts.get_contact(*contact_id))
            .collect();
        Ok((meeting, attendees))
    }

    /// Adds an existing contact to an existing meeting.
    ///
    /// Returns `Ok(false)` when the contact already attends.
    pub fn add_to_meeting(
        &mut self,
        meeting_id: MeetingId,
        contact_id: ContactId,
    ) -> ServiceResult<bool> {
        self.meeting(meeting_id)?;
        self.contact(contact_id)?;
        let added = self.meetings.add_attendee(meeting_id, contact_id)?;
        info!(
            "event=attendee_add module=service status=ok meeting_id={meeting_id} contact_id={contact_id} changed={added}"
        );
        Ok(added)
    }

    pub fn remove_from_meeting(
        &mut self,
        meeting_id: MeetingId,
        contact_id: ContactId,
    ) -> ServiceResult<()> {
        if !self.meetings.remove_attendee(meeting_id, contact_id)? {
            return Err(ServiceError::NotAttending {
                meeting_id,
                contact_id,
            });
        }
        info!(
            "event=attendee_remove module=service status=ok meeting_id={meeting_id} contact_id={contact_id}"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::non_blank;

    #[test]
    fn non_blank_treats_whitespace_as_keep() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("  Ada "), Some("Ada".to_string()));
    }
}
