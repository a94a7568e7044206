//! classkit-roster — Student record engine.
//!
//! Parses a flat comma-separated record file into student entities, derives
//! grades from weighted marks, and supports search, extremal lookup,
//! sorting, and mutation with wholesale re-serialization to the same file.

pub mod error;
pub mod roster;
pub mod student;

pub use error::RosterError;
pub use roster::{Roster, SortKey};
pub use student::{Grade, Student, StudentUpdate};
