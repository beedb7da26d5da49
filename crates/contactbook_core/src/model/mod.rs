//! Record types held by the contact book.
//!
//! # Responsibility
//! - Define the contact and meeting value objects.
//! - Own the storage (one line) and display (`- a : b : c`) renderings.
//!
//! # Invariants
//! - Constructors never validate field text; empty names and notes are legal.
//! - Meetings reference attendees by `ContactId`, never by value.

pub mod contact;
pub mod meeting;
