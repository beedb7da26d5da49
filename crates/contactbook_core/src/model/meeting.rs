//! Meeting record.
//!
//! # Responsibility
//! - Hold one meeting entry and its attendee references.
//! - Parse and render meeting dates for console input/output.
//!
//! # Invariants
//! - `attendees` holds contact ids only and is never part of the storage line.
//! - Display dates use minute precision (`YYYY-MM-DD HH:MM`).

use crate::model::contact::ContactId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Identifier of a meeting inside one session.
pub type MeetingId = u32;

/// Date format used when displaying meetings and as the primary input format.
pub const MEETING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const MEETING_DAY_FORMAT: &str = "%Y-%m-%d";

/// One meeting entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub date: NaiveDateTime,
    pub notes: String,
    /// Contacts attending, by id.
    #[serde(skip)]
    pub attendees: BTreeSet<ContactId>,
}

impl Meeting {
    /// Creates a meeting with no attendees.
    pub fn new(id: MeetingId, date: NaiveDateTime, notes: impl Into<String>) -> Self {
        Self {
            id,
            date,
            notes: notes.into(),
            attendees: BTreeSet::new(),
        }
    }

    /// Adds one attendee. Returns `false` when already attending.
    pub fn add_attendee(&mut self, contact_id: ContactId) -> bool {
        self.attendees.insert(contact_id)
    }

    /// Removes one attendee. Returns `false` when not attending.
    pub fn remove_attendee(&mut self, contact_id: ContactId) -> bool {
        self.attendees.remove(&contact_id)
    }

    pub fn has_attendee(&self, contact_id: ContactId) -> bool {
        self.attendees.contains(&contact_id)
    }

    /// Encodes `id`, `date`, `notes` as one record line; attendees are omitted.
    pub fn to_storage_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Returns whether `notes` matches this meeting's notes, ignoring case.
    pub fn notes_match(&self, notes: &str) -> bool {
        self.notes.to_lowercase() == notes.to_lowercase()
    }
}

impl Display for Meeting {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "- {} : {} : {}",
            self.id,
            self.date.format(MEETING_DATE_FORMAT),
            self.notes
        )
    }
}

/// Parses console date input.
///
/// Accepts `YYYY-MM-DD HH:MM` or a bare `YYYY-MM-DD` (midnight).
pub fn parse_meeting_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDateTime::parse_from_str(trimmed, MEETING_DATE_FORMAT) {
        return Some(date);
    }
    NaiveDate::parse_from_str(trimmed, MEETING_DAY_FORMAT)
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::{parse_meeting_date, Meeting};

    #[test]
    fn parse_accepts_minute_and_day_formats() {
        let with_time = parse_meeting_date("2024-03-05 14:30").unwrap();
        assert_eq!(with_time.format("%H:%M").to_string(), "14:30");

        let day_only = parse_meeting_date(" 2024-03-05 ").unwrap();
        assert_eq!(day_only.format("%Y-%m-%d %H:%M").to_string(), "2024-03-05 00:00");
    }

    #[test]
    fn parse_rejects_free_text() {
        assert!(parse_meeting_date("next tuesday").is_none());
        assert!(parse_meeting_date("2024-13-01").is_none());
    }

    #[test]
    fn storage_line_omits_attendees() {
        let date = parse_meeting_date("2024-03-05 09:00").unwrap();
        let mut meeting = Meeting::new(2, date, "standup");
        meeting.add_attendee(4);

        let line = meeting.to_storage_line().unwrap();
        assert!(line.starts_with(r#"{"id":2,"date":"#));
        assert!(!line.contains("attendees"));
    }

    #[test]
    fn attendee_add_and_remove_report_changes() {
        let date = parse_meeting_date("2024-03-05").unwrap();
        let mut meeting = Meeting::new(1, date, "review");

        assert!(meeting.add_attendee(9));
        assert!(!meeting.add_attendee(9));
        assert!(meeting.has_attendee(9));
        assert!(meeting.remove_attendee(9));
        assert!(!meeting.remove_attendee(9));
    }
}
