//! Menu pages and the pure transition function.
//!
//! # Responsibility
//! - Enumerate every page of the console menu with its prompt.
//! - Map `(page, input line)` to the next page plus an optional action.
//!
//! # Invariants
//! - `transition` has no side effects; the session applies actions.
//! - Values captured mid-flow live in the page of that flow and are dropped
//!   when the flow ends.
//! - Invalid ids/dates yield `InputError` so the driver re-prompts the same
//!   page.

use crate::model::contact::ContactId;
use crate::model::meeting::{parse_meeting_date, MeetingId};
use crate::service::contact_book::{non_blank, ContactEdit, MeetingEdit};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Commands accepted on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListContacts,
    AddContact,
    EditContact,
    DeleteContact,
    FindContact,
    ListMeetings,
    AddMeeting,
    EditMeeting,
    DeleteMeeting,
    FindMeeting,
    ViewMeeting,
    AddToMeeting,
    RemoveFromMeeting,
    Help,
    Quit,
}

impl Command {
    /// Parses home page input. Case-sensitive; whitespace runs are collapsed.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = WHITESPACE_RE.replace_all(input.trim(), " ");
        let command = match normalized.as_ref() {
            "list contacts" => Self::ListContacts,
            "add contact" => Self::AddContact,
            "edit contact" => Self::EditContact,
            "remove contact" | "delete contact" => Self::DeleteContact,
            "find contact" => Self::FindContact,
            "list meetings" => Self::ListMeetings,
            "add meeting" => Self::AddMeeting,
            "edit meeting" => Self::EditMeeting,
            "remove meeting" | "delete meeting" => Self::DeleteMeeting,
            "find meeting" => Self::FindMeeting,
            "view meeting" => Self::ViewMeeting,
            "add to meeting" => Self::AddToMeeting,
            "remove from meeting" => Self::RemoveFromMeeting,
            "help" => Self::Help,
            "quit" => Self::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// One menu page. Flow pages carry the values captured by earlier steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    AddContactName,
    AddContactNotes { name: String },
    EditContactId,
    EditContactName { id: ContactId },
    EditContactNotes { id: ContactId, name: Option<String> },
    DeleteContact,
    FindContact,
    AddMeetingDate,
    AddMeetingNotes { date: NaiveDateTime },
    EditMeetingId,
    EditMeetingDate { id: MeetingId },
    EditMeetingNotes {
        id: MeetingId,
        date: Option<NaiveDateTime>,
    },
    DeleteMeeting,
    FindMeeting,
    ViewMeeting,
    AddToMeetingId,
    AddToMeetingContact { meeting_id: MeetingId },
    RemoveFromMeetingId,
    RemoveFromMeetingContact { meeting_id: MeetingId },
    /// Terminal page; the driver stops here.
    Exit,
}

impl Page {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Home => "Welcome to the Contacts Manager, what would you like to do?\n",
            Self::AddContactName => "type the FULL NAME of the contact:",
            Self::AddContactNotes { .. } => "type any NOTES about this person:",
            Self::EditContactId => "type the id of the contact you want to edit:",
            Self::EditContactName { .. } => {
                "type the new FULL NAME of the contact (leave blank to not change):"
            }
            Self::EditContactNotes { .. } => {
                "type any new NOTES about the contact (leave blank to not change):"
            }
            Self::DeleteContact => "type the id of the contact you want to delete:",
            Self::FindContact => "type the name of the contact you want to search for:",
            Self::AddMeetingDate => "type the DATE of the meeting (YYYY-MM-DD HH:MM):",
            Self::AddMeetingNotes { .. } => "type the NOTES about this meeting:",
            Self::EditMeetingId => "type the ID of the meeting you want to edit:",
            Self::EditMeetingDate { .. } => {
                "type the new DATE of the meeting (leave blank to not change):"
            }
            Self::EditMeetingNotes { .. } => {
                "type the new NOTES about the meeting (leave blank to not change):"
            }
            Self::DeleteMeeting => "type the id of the meeting you want to delete:",
            Self::FindMeeting => "type the name of the meeting you want to search for:",
            Self::ViewMeeting => "type the id of the meeting you want to view:",
            Self::AddToMeetingId | Self::RemoveFromMeetingId => "type the id of the meeting:",
            Self::AddToMeetingContact { .. } => {
                "type the id of the contact to add to the meeting:"
            }
            Self::RemoveFromMeetingContact { .. } => {
                "type the id of the contact to remove from the meeting:"
            }
            Self::Exit => "",
        }
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListContacts,
    AddContact { name: String, notes: String },
    /// Aborts the flow when the contact does not exist.
    RequireContact(ContactId),
    EditContact { id: ContactId, edit: ContactEdit },
    DeleteContact(ContactId),
    FindContact(String),
    ListMeetings,
    AddMeeting { date: NaiveDateTime, notes: String },
    /// Aborts the flow when the meeting does not exist.
    RequireMeeting(MeetingId),
    EditMeeting { id: MeetingId, edit: MeetingEdit },
    DeleteMeeting(MeetingId),
    FindMeeting(String),
    ViewMeeting(MeetingId),
    AddToMeeting {
        meeting_id: MeetingId,
        contact_id: ContactId,
    },
    RemoveFromMeeting {
        meeting_id: MeetingId,
        contact_id: ContactId,
    },
    Help,
    UnknownCommand(String),
    Quit,
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub next: Page,
    pub action: Option<Action>,
}

impl Step {
    fn to(next: Page) -> Self {
        Self { next, action: None }
    }

    fn home(action: Action) -> Self {
        Self {
            next: Page::Home,
            action: Some(action),
        }
    }

    fn with(next: Page, action: Action) -> Self {
        Self {
            next,
            action: Some(action),
        }
    }
}

/// Console input that cannot be used on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidId(String),
    InvalidDate(String),
    /// Line is not valid UTF-8.
    NotText,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(value) => {
                write!(f, "'{value}' is not a valid id - type a whole number")
            }
            Self::InvalidDate(value) => write!(
                f,
                "'{value}' is not a valid date - use YYYY-MM-DD or YYYY-MM-DD HH:MM"
            ),
            Self::NotText => write!(f, "input is not valid UTF-8 text - please type it again"),
        }
    }
}

impl Error for InputError {}

/// Computes the next page and action for `input` typed on `page`.
///
/// # Errors
/// - `InputError` when an id or date cannot be parsed; the page is unchanged.
pub fn transition(page: &Page, input: &str) -> Result<Step, InputError> {
    let input = input.trim();
    let step = match page {
        Page::Home => home_transition(input),
        Page::AddContactName => Step::to(Page::AddContactNotes {
            name: input.to_string(),
        }),
        Page::AddContactNotes { name } => Step::home(Action::AddContact {
            name: name.clone(),
            notes: input.to_string(),
        }),
        Page::EditContactId => {
            let id = parse_id(input)?;
            Step::with(Page::EditContactName { id }, Action::RequireContact(id))
        }
        Page::EditContactName { id } => Step::to(Page::EditContactNotes {
            id: *id,
            name: non_blank(input),
        }),
        Page::EditContactNotes { id, name } => Step::home(Action::EditContact {
            id: *id,
            edit: ContactEdit {
                name: name.clone(),
                notes: non_blank(input),
            },
        }),
        Page::DeleteContact => Step::home(Action::DeleteContact(parse_id(input)?)),
        Page::FindContact => Step::home(Action::FindContact(input.to_string())),
        Page::AddMeetingDate => Step::to(Page::AddMeetingNotes {
            date: parse_date(input)?,
        }),
        Page::AddMeetingNotes { date } => Step::home(Action::AddMeeting {
            date: *date,
            notes: input.to_string(),
        }),
        Page::EditMeetingId => {
            let id = parse_id(input)?;
            Step::with(Page::EditMeetingDate { id }, Action::RequireMeeting(id))
        }
        Page::EditMeetingDate { id } => {
            let date = match non_blank(input) {
                Some(value) => Some(parse_date(&value)?),
                None => None,
            };
            Step::to(Page::EditMeetingNotes { id: *id, date })
        }
        Page::EditMeetingNotes { id, date } => Step::home(Action::EditMeeting {
            id: *id,
            edit: MeetingEdit {
                date: *date,
                notes: non_blank(input),
            },
        }),
        Page::DeleteMeeting => Step::home(Action::DeleteMeeting(parse_id(input)?)),
        Page::FindMeeting => Step::home(Action::FindMeeting(input.to_string())),
        Page::ViewMeeting => Step::home(Action::ViewMeeting(parse_id(input)?)),
        Page::AddToMeetingId => {
            let meeting_id = parse_id(input)?;
            Step::with(
                Page::AddToMeetingContact { meeting_id },
                Action::RequireMeeting(meeting_id),
            )
        }
        Page::AddToMeetingContact { meeting_id } => Step::home(Action::AddToMeeting {
            meeting_id: *meeting_id,
            contact_id: parse_id(input)?,
        }),
        Page::RemoveFromMeetingId => {
            let meeting_id = parse_id(input)?;
            Step::with(
                Page::RemoveFromMeetingContact { meeting_id },
                Action::RequireMeeting(meeting_id),
            )
        }
        Page::RemoveFromMeetingContact { meeting_id } => {
            Step::home(Action::RemoveFromMeeting {
                meeting_id: *meeting_id,
                contact_id: parse_id(input)?,
            })
        }
        Page::Exit => Step::to(Page::Exit),
    };
    Ok(step)
}

fn home_transition(input: &str) -> Step {
    let Some(command) = Command::parse(input) else {
        return Step::home(Action::UnknownCommand(input.to_string()));
    };
    match command {
        Command::ListContacts => Step::home(Action::ListContacts),
        Command::AddContact => Step::to(Page::AddContactName),
        Command::EditContact => Step::to(Page::EditContactId),
        Command::DeleteContact => Step::to(Page::DeleteContact),
        Command::FindContact => Step::to(Page::FindContact),
        Command::ListMeetings => Step::home(Action::ListMeetings),
        Command::AddMeeting => Step::to(Page::AddMeetingDate),
        Command::EditMeeting => Step::to(Page::EditMeetingId),
        Command::DeleteMeeting => Step::to(Page::DeleteMeeting),
        Command::FindMeeting => Step::to(Page::FindMeeting),
        Command::ViewMeeting => Step::to(Page::ViewMeeting),
        Command::AddToMeeting => Step::to(Page::AddToMeetingId),
        Command::RemoveFromMeeting => Step::to(Page::RemoveFromMeetingId),
        Command::Help => Step::home(Action::Help),
        Command::Quit => Step::with(Page::Exit, Action::Quit),
    }
}

fn parse_id(input: &str) -> Result<u32, InputError> {
    input
        .parse::<u32>()
        .map_err(|_| InputError::InvalidId(input.to_string()))
}

fn parse_date(input: &str) -> Result<NaiveDateTime, InputError> {
    parse_meeting_date(input).ok_or_else(|| InputError::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{transition, Action, Command, InputError, Page, Step};
    use crate::service::contact_book::ContactEdit;

    #[test]
    fn command_parse_collapses_whitespace_but_keeps_case() {
        assert_eq!(
            Command::parse("  list   contacts "),
            Some(Command::ListContacts)
        );
        assert_eq!(Command::parse("delete contact"), Some(Command::DeleteContact));
        assert_eq!(Command::parse("List Contacts"), None);
    }

    #[test]
    fn unknown_home_input_stays_home() {
        let step = transition(&Page::Home, "dance").unwrap();
        assert_eq!(
            step,
            Step {
                next: Page::Home,
                action: Some(Action::UnknownCommand("dance".to_string())),
            }
        );
    }

    #[test]
    fn add_contact_flow_carries_name_into_notes_step() {
        let step = transition(&Page::AddContactName, " Ada ").unwrap();
        assert_eq!(
            step.next,
            Page::AddContactNotes {
                name: "Ada".to_string()
            }
        );

        let step = transition(&step.next, "maths").unwrap();
        assert_eq!(step.next, Page::Home);
        assert_eq!(
            step.action,
            Some(Action::AddContact {
                name: "Ada".to_string(),
                notes: "maths".to_string(),
            })
        );
    }

    #[test]
    fn edit_contact_blank_fields_become_keep() {
        let step = transition(&Page::EditContactId, "4").unwrap();
        assert_eq!(step.action, Some(Action::RequireContact(4)));

        let step = transition(&step.next, "").unwrap();
        let step = transition(&step.next, "new notes").unwrap();
        assert_eq!(
            step.action,
            Some(Action::EditContact {
                id: 4,
                edit: ContactEdit {
                    name: None,
                    notes: Some("new notes".to_string()),
                },
            })
        );
    }

    #[test]
    fn bad_id_is_an_input_error() {
        let err = transition(&Page::DeleteContact, "four").unwrap_err();
        assert_eq!(err, InputError::InvalidId("four".to_string()));
    }

    #[test]
    fn bad_meeting_date_is_an_input_error_but_blank_keeps_on_edit() {
        let err = transition(&Page::AddMeetingDate, "soon").unwrap_err();
        assert_eq!(err, InputError::InvalidDate("soon".to_string()));

        let step = transition(&Page::EditMeetingDate { id: 2 }, "  ").unwrap();
        assert_eq!(step.next, Page::EditMeetingNotes { id: 2, date: None });
    }

    #[test]
    fn quit_moves_to_exit() {
        let step = transition(&Page::Home, "quit").unwrap();
        assert_eq!(step.next, Page::Exit);
        assert_eq!(step.action, Some(Action::Quit));
    }
}
