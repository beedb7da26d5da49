//! Flat-file persistence for contacts.
//!
//! # Responsibility
//! - Read and rewrite the backing text file as a whole.
//! - Translate between contact records and persisted lines.
//!
//! # Invariants
//! - No file handle outlives a single store operation.
//! - A malformed record fails the load with its line number instead of
//!   shifting every following record.
//! - Read failures are errors, never an empty result.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact_file;
mod flat_file;

pub use flat_file::FlatFileStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    /// Persisted record cannot be decoded. `line` is 1-based.
    Malformed {
        line: usize,
        message: String,
    },
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Malformed { line, message } => {
                write!(f, "malformed record on line {line}: {message}")
            }
            Self::Encode(err) => write!(f, "failed to encode record: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
