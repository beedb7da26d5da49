//! Core logic for the contact book.
//! Records, flat-file store, in-memory collections and the console menu.

pub mod config;
pub mod logging;
pub mod menu;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use menu::driver::run;
pub use menu::page::{transition, Action, Command, InputError, Page, Step};
pub use menu::session::{Outcome, Session};
pub use model::contact::{Contact, ContactId};
pub use model::meeting::{parse_meeting_date, Meeting, MeetingId};
pub use repo::contact_repo::{ContactRepository, InMemoryContactRepository};
pub use repo::meeting_repo::{InMemoryMeetingRepository, MeetingRepository};
pub use repo::{RepoError, RepoResult};
pub use service::contact_book::{ContactBook, ContactEdit, MeetingEdit, ServiceError};
pub use store::{FlatFileStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
