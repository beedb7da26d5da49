//! Meeting collection contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/replace/remove and lookup APIs over session meetings.
//! - Maintain attendee references.
//!
//! # Invariants
//! - Replacing a meeting keeps its attendee set unless the caller changed it.
//! - Notes search is a case-insensitive exact match, first hit wins.

use super::ordered::OrderedRecords;
use super::{RepoError, RepoResult};
use crate::model::contact::ContactId;
use crate::model::meeting::{Meeting, MeetingId};
use chrono::NaiveDateTime;

/// Collection interface for meeting operations.
pub trait MeetingRepository {
    /// Creates a meeting with a fresh id and no attendees.
    fn add_meeting(&mut self, date: NaiveDateTime, notes: String) -> RepoResult<MeetingId>;
    fn insert_meeting(&mut self, meeting: Meeting) -> RepoResult<MeetingId>;
    fn replace_meeting(&mut self, meeting: Meeting) -> RepoResult<()>;
    fn remove_meeting(&mut self, id: MeetingId) -> RepoResult<Meeting>;
    fn get_meeting(&self, id: MeetingId) -> Option<&Meeting>;
    fn meeting_at(&self, position: usize) -> Option<&Meeting>;
    fn find_meeting_by_notes(&self, notes: &str) -> Option<&Meeting>;
    fn list_meetings(&self) -> &[Meeting];
    /// Returns `Ok(false)` when the contact already attends.
    fn add_attendee(&mut self, id: MeetingId, contact_id: ContactId) -> RepoResult<bool>;
    /// Returns `Ok(false)` when the contact was not attending.
    fn remove_attendee(&mut self, id: MeetingId, contact_id: ContactId) -> RepoResult<bool>;
    /// Drops `contact_id` from every meeting; returns how many were touched.
    fn remove_attendee_everywhere(&mut self, contact_id: ContactId) -> usize;
}

/// Ordered in-memory meeting collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMeetingRepository {
    records: OrderedRecords<Meeting>,
}

impl InMemoryMeetingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeetingRepository for InMemoryMeetingRepository {
    fn add_meeting(&mut self, date: NaiveDateTime, notes: String) -> RepoResult<MeetingId> {
        let id = self.records.next_id().ok_or(RepoError::IdsExhausted)?;
        self.insert_meeting(Meeting::new(id, date, notes))
    }

    fn insert_meeting(&mut self, meeting: Meeting) -> RepoResult<MeetingId> {
        self.records
            .insert(meeting)
            .map_err(|rejected| RepoError::DuplicateMeetingId(rejected.id))
    }

    fn replace_meeting(&mut self, meeting: Meeting) -> RepoResult<()> {
        self.records
            .replace(meeting)
            .map(|_| ())
            .map_err(|missing| RepoError::MeetingNotFound(missing.id))
    }

    fn remove_meeting(&mut self, id: MeetingId) -> RepoResult<Meeting> {
        self.records
            .remove(id)
            .ok_or(RepoError::MeetingNotFound(id))
    }

    fn get_meeting(&self, id: MeetingId) -> Option<&Meeting> {
        self.records.get(id)
    }

    fn meeting_at(&self, position: usize) -> Option<&Meeting> {
        self.records.at(position)
    }

    fn find_meeting_by_notes(&self, notes: &str) -> Option<&Meeting> {
        self.records.find(|meeting| meeting.notes_match(notes))
    }

    fn list_meetings(&self) -> &[Meeting] {
        self.records.as_slice()
    }

    fn add_attendee(&mut self, id: MeetingId, contact_id: ContactId) -> RepoResult<bool> {
        self.records
            .get_mut(id)
            .map(|meeting| meeting.add_attendee(contact_id))
            .ok_or(RepoError::MeetingNotFound(id))
    }

    fn remove_attendee(&mut self, id: MeetingId, contact_id: ContactId) -> RepoResult<bool> {
        self.records
            .get_mut(id)
            .map(|meeting| meeting.remove_attendee(contact_id))
            .ok_or(RepoError::MeetingNotFound(id))
    }

    fn remove_attendee_everywhere(&mut self, contact_id: ContactId) -> usize {
        self.records
            .iter_mut()
            .filter_map(|meeting| meeting.remove_attendee(contact_id).then_some(()))
            .count()
    }
}
