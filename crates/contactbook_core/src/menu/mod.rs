//! Console menu state machine.
//!
//! # Responsibility
//! - Model menu pages and their transitions (`page`).
//! - Hold per-run state and apply actions (`session`).
//! - Drive the prompt/read/transition loop over any line source (`driver`).
//!
//! # Invariants
//! - One page completes before the next begins; nothing runs concurrently.
//! - No failure other than console I/O leaves the driver loop.

pub mod driver;
pub mod page;
pub mod session;
