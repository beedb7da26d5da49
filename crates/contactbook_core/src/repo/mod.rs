//! In-memory record collections.
//!
//! # Responsibility
//! - Own every contact and meeting for the lifetime of a session.
//! - Expose lookups that return explicit "not found" outcomes.
//!
//! # Invariants
//! - Ids are unique per collection; inserting a taken id is rejected.
//! - Iteration, listing and positional lookup follow insertion order.
//! - Replacing a record keeps its position.

use crate::model::contact::ContactId;
use crate::model::meeting::MeetingId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact_repo;
pub mod meeting_repo;
mod ordered;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    ContactNotFound(ContactId),
    MeetingNotFound(MeetingId),
    DuplicateContactId(ContactId),
    DuplicateMeetingId(MeetingId),
    /// Every id is already in use.
    IdsExhausted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContactNotFound(id) => write!(f, "no contact with id {id}"),
            Self::MeetingNotFound(id) => write!(f, "no meeting with id {id}"),
            Self::DuplicateContactId(id) => write!(f, "contact id {id} is already taken"),
            Self::DuplicateMeetingId(id) => write!(f, "meeting id {id} is already taken"),
            Self::IdsExhausted => write!(f, "no free ids left"),
        }
    }
}

impl Error for RepoError {}
