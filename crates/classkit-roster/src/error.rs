//! Roster error types.
//!
//! Validation failures are structured so the front-end can report them
//! without string matching; none of them abort the session.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file exists but could not be read.
    #[error("failed to read roster file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The roster file could not be written. The in-memory roster is left
    /// exactly as it was before the failed operation.
    #[error("failed to write roster file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record line did not have exactly six comma-separated fields.
    #[error("record has {found} fields, expected 6")]
    FieldCount { found: usize },

    /// A mark field was not a non-negative integer.
    #[error("mark is not a number: {0:?}")]
    MarkNotNumeric(String),

    /// A coursework mark was above the 0-20 component maximum.
    #[error("coursework mark {0} out of range (0-20)")]
    CourseworkOutOfRange(u32),

    /// An exam mark was above the 0-100 maximum.
    #[error("exam mark {0} out of range (0-100)")]
    ExamOutOfRange(u32),

    /// A student name was empty or would corrupt the comma format.
    #[error("student name must be non-empty and must not contain commas")]
    InvalidName,

    /// No student matched the search term.
    #[error("no student matches {0:?}")]
    NotFound(String),
}
