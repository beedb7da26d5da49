//! Session context for one run of the contact book.
//!
//! # Responsibility
//! - Own the contact/meeting collections and the persistence handle.
//! - Apply menu actions and write their console output.
//! - Load contacts on open and flush them on quit.
//!
//! # Invariants
//! - A failed load leaves the session usable but degraded: quit never
//!   overwrites a file whose content could not be read.
//! - Meetings are never persisted.

use super::page::Action;
use crate::model::meeting::MEETING_DATE_FORMAT;
use crate::repo::contact_repo::{ContactRepository, InMemoryContactRepository};
use crate::repo::meeting_repo::InMemoryMeetingRepository;
use crate::service::contact_book::ContactBook;
use crate::store::contact_file::{load_contacts, save_contacts};
use crate::store::{FlatFileStore, StoreResult};
use chrono::NaiveDateTime;
use log::{error, info, warn};
use std::io::{self, Write};
use std::path::Path;

/// Notes of the meeting seeded into every new session.
pub const PLACEHOLDER_MEETING_NOTES: &str = "test meeting";

const HELP_TEXT: &str = "Here are all the commands:\n\n\
list contacts\nadd contact\nedit contact\nremove contact\nfind contact\n\n\
list meetings\nadd meeting\nedit meeting\nremove meeting\nfind meeting\n\
view meeting\nadd to meeting\nremove from meeting\n\n\
quit\nhelp\n\n";

/// What the driver does after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Flow cannot go on; return to the home page.
    Abort,
}

/// Where contacts are written on quit.
#[derive(Debug)]
enum Persistence {
    Active(FlatFileStore),
    /// Load failed; keep running in memory and never write.
    Degraded(String),
    /// No backing file configured.
    Disabled,
}

pub type SessionBook = ContactBook<InMemoryContactRepository, InMemoryMeetingRepository>;

pub struct Session {
    book: SessionBook,
    persistence: Persistence,
}

impl Session {
    /// Opens a session backed by the contacts file at `data_file`.
    ///
    /// Never fails: store errors switch the session to degraded mode and are
    /// reported by `degraded_reason`.
    pub fn open(data_file: impl AsRef<Path>, now: NaiveDateTime) -> Self {
        match Self::try_load(data_file.as_ref()) {
            Ok((store, contacts)) => {
                info!(
                    "event=session_open module=menu status=ok contacts={}",
                    contacts.list_contacts().len()
                );
                Self::with_parts(contacts, Persistence::Active(store), now)
            }
            Err(err) => {
                error!("event=session_open module=menu status=error mode=degraded error={err}");
                Self::with_parts(
                    InMemoryContactRepository::new(),
                    Persistence::Degraded(err),
                    now,
                )
            }
        }
    }

    /// Opens a session with no backing file.
    pub fn in_memory(now: NaiveDateTime) -> Self {
        Self::with_parts(InMemoryContactRepository::new(), Persistence::Disabled, now)
    }

    /// Set when contacts could not be loaded and quit will not save.
    pub fn degraded_reason(&self) -> Option<&str> {
        match &self.persistence {
            Persistence::Degraded(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn book(&self) -> &SessionBook {
        &self.book
    }

    /// Writes every contact to the backing file.
    ///
    /// Returns `Ok(false)` when there is nothing to write to.
    pub fn flush(&self) -> StoreResult<bool> {
        match &self.persistence {
            Persistence::Active(store) => {
                save_contacts(store, self.book.contacts())?;
                Ok(true)
            }
            Persistence::Degraded(_) | Persistence::Disabled => Ok(false),
        }
    }

    /// Applies `action`, writing user-facing output to `out`.
    pub fn apply(&mut self, action: Action, out: &mut impl Write) -> io::Result<Outcome> {
        match action {
            Action::ListContacts => {
                writeln!(out, "LIST OF CONTACTS:")?;
                for contact in self.book.contacts() {
                    writeln!(out, "{contact}")?;
                }
            }
            Action::AddContact { name, notes } => match self.book.add_contact(name, notes) {
                Ok(contact) => writeln!(out, "Contact '{}' added!", contact.name)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::RequireContact(id) => {
                if let Err(err) = self.book.contact(id) {
                    writeln!(out, "{err}")?;
                    return Ok(Outcome::Abort);
                }
            }
            Action::EditContact { id, edit } => match self.book.edit_contact(id, edit) {
                Ok(contact) => writeln!(out, "Contact '{}' edited.", contact.name)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::DeleteContact(id) => match self.book.delete_contact(id) {
                Ok(contact) => writeln!(out, "removed contact '{contact}'")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::FindContact(name) => match self.book.find_contact(&name) {
                Ok(contact) => writeln!(out, "{contact}")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::ListMeetings => {
                writeln!(out, "LIST OF MEETINGS:")?;
                for meeting in self.book.meetings() {
                    writeln!(out, "{meeting}")?;
                }
            }
            Action::AddMeeting { date, notes } => match self.book.add_meeting(date, notes) {
                Ok(meeting) => writeln!(
                    out,
                    "Meeting on '{}' added!",
                    meeting.date.format(MEETING_DATE_FORMAT)
                )?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::RequireMeeting(id) => {
                if let Err(err) = self.book.meeting(id) {
                    writeln!(out, "{err}")?;
                    return Ok(Outcome::Abort);
                }
            }
            Action::EditMeeting { id, edit } => match self.book.edit_meeting(id, edit) {
                Ok(meeting) => writeln!(
                    out,
                    "Meeting on '{}' edited.",
                    meeting.date.format(MEETING_DATE_FORMAT)
                )?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::DeleteMeeting(id) => match self.book.delete_meeting(id) {
                Ok(meeting) => writeln!(out, "meeting '{meeting}' removed")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::FindMeeting(notes) => match self.book.find_meeting(&notes) {
                Ok(meeting) => writeln!(out, "{meeting}")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::ViewMeeting(id) => match self.book.meeting_attendees(id) {
                Ok((meeting, attendees)) => {
                    writeln!(out, "{meeting}")?;
                    if attendees.is_empty() {
                        writeln!(out, "  (no attendees)")?;
                    }
                    for contact in attendees {
                        writeln!(out, "  * {contact}")?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::AddToMeeting {
                meeting_id,
                contact_id,
            } => match self.book.add_to_meeting(meeting_id, contact_id) {
                Ok(true) => writeln!(
                    out,
                    "Contact {contact_id} added to meeting {meeting_id}."
                )?,
                Ok(false) => writeln!(
                    out,
                    "Contact {contact_id} is already attending meeting {meeting_id}."
                )?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::RemoveFromMeeting {
                meeting_id,
                contact_id,
            } => match self.book.remove_from_meeting(meeting_id, contact_id) {
                Ok(()) => writeln!(
                    out,
                    "Contact {contact_id} removed from meeting {meeting_id}."
                )?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Action::Help => write!(out, "{HELP_TEXT}")?,
            Action::UnknownCommand(input) => {
                warn!(
                    "event=unknown_command module=menu status=error input_len={}",
                    input.len()
                );
                writeln!(out, "unknown command - type 'help' for a list of commands")?;
            }
            Action::Quit => self.quit(out)?,
        }
        Ok(Outcome::Continue)
    }

    fn quit(&self, out: &mut impl Write) -> io::Result<()> {
        match self.flush() {
            Ok(true) => writeln!(out, "Contacts saved.")?,
            Ok(false) => {
                if let Some(reason) = self.degraded_reason() {
                    writeln!(out, "contacts not saved: storage unavailable ({reason})")?;
                }
            }
            Err(err) => {
                error!("event=session_quit module=menu status=error error={err}");
                writeln!(out, "failed to save contacts: {err}")?;
            }
        }
        info!("event=session_quit module=menu status=ok");
        Ok(())
    }

    fn try_load(data_file: &Path) -> Result<(FlatFileStore, InMemoryContactRepository), String> {
        let store = FlatFileStore::open(data_file).map_err(|err| err.to_string())?;
        let contacts = load_contacts(&store).map_err(|err| err.to_string())?;
        let repo =
            InMemoryContactRepository::from_contacts(contacts).map_err(|err| err.to_string())?;
        Ok((store, repo))
    }

    fn with_parts(
        contacts: InMemoryContactRepository,
        persistence: Persistence,
        now: NaiveDateTime,
    ) -> Self {
        let mut book = ContactBook::new(contacts, InMemoryMeetingRepository::new());
        if let Err(err) = book.add_meeting(now, PLACEHOLDER_MEETING_NOTES) {
            warn!("event=meeting_seed module=menu status=error error={err}");
        }
        Self { book, persistence }
    }
}
