//! Use-case services over the in-memory collections.
//!
//! # Responsibility
//! - Turn menu intents into collection mutations with explicit outcomes.
//! - Keep contact and meeting references consistent across collections.

pub mod contact_book;
