//! Record store contracts and the JSON-file implementation.
//!
//! # Responsibility
//! - Define the durable CRUD contract over the catalog document.
//! - Keep file-format details inside the persistence boundary.
//!
//! # Invariants
//! - Every mutation is a whole-document read-modify-write; the file parses as
//!   valid JSON after every successful write.
//! - Failures propagate untouched; the store never retries and never applies
//!   a partial write.
//! - Single writer only. A concurrent second writer can lose updates; that is
//!   an accepted limitation, not a guarantee this layer provides.

use crate::model::record::{Record, RecordDraft};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for catalog persistence and lookup operations.
#[derive(Debug)]
pub enum StoreError {
    /// File missing, unreadable or unwritable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not a valid catalog document.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Lookup by id matched no record.
    NotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "catalog io failure at `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => write!(
                f,
                "catalog file `{}` is not a valid document: {source}",
                path.display()
            ),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::NotFound(_) => None,
        }
    }
}

/// Store interface for catalog CRUD operations.
///
/// No operation is reentrant-safe against itself; callers issue them
/// serially from a single thread.
pub trait RecordStore {
    /// Creates the backing file with an empty catalog when absent.
    /// Idempotent; an existing file is left untouched.
    fn initialize(&self) -> StoreResult<()>;
    /// Reads and parses the whole document. No partial results on failure.
    fn load_all(&self) -> StoreResult<Vec<Record>>;
    /// Appends the draft with `created_at` stamped to current local time and
    /// writes the full catalog back. Returns the stored record.
    ///
    /// Does not check for id collisions; duplicate ids are accepted as-is.
    fn add(&self, draft: RecordDraft) -> StoreResult<Record>;
    /// Returns the first record whose `scp_id` equals `scp_id` exactly
    /// (case-sensitive), or [`StoreError::NotFound`].
    fn find_by_id(&self, scp_id: &str) -> StoreResult<Record>;
    /// Removes every record whose `scp_id` equals `scp_id` exactly and
    /// writes the catalog back. Removing zero records is not an error.
    fn delete_by_id(&self, scp_id: &str) -> StoreResult<usize>;
    /// Case-insensitive substring search over id, class and name.
    /// A blank query returns the full catalog in original order.
    fn search(&self, query: &str) -> StoreResult<Vec<Record>>;
}
