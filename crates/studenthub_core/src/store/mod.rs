//! Single-file record store.
//!
//! # Responsibility
//! - Load and save the full keyed collection of student records.
//! - Keep JSON serialization details inside the persistence boundary.
//!
//! # Invariants
//! - The backing file is treated as an atomic snapshot: whole-file read,
//!   whole-file overwrite.
//! - `save` is not transactional; a failure mid-write can leave the file
//!   truncated. There is no temp-file-and-rename step.
//! - No locking: concurrent sessions on the same file can clobber each
//!   other's writes.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_store;

pub use json_store::{JsonStore, RecordMap};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for record collection load/save.
#[derive(Debug)]
pub enum StoreError {
    /// Backing file is absent or unreadable, or the write failed.
    Io(std::io::Error),
    /// Backing file contents are not well-formed record data.
    Malformed(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "record store access failed: {err}"),
            Self::Malformed(err) => write!(f, "record store data is malformed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}
