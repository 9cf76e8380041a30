//! Catalog work record and the derived identity function.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::types::{Genre, Section, WorkId};

// Everything except ALPHA / DIGIT / `_` / `.` / `-` / `~` is escaped, so ids
// stay URL-safe and filesystem-safe.
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// One literary-work record from the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Author name as printed on the curriculum sheet.
    pub author: String,
    /// Work title.
    pub title: String,
    /// Genre bucket.
    pub genre: Genre,
    /// Curriculum section.
    pub section: Section,
}

impl Work {
    /// Derived stable identifier for this work.
    pub fn id(&self) -> WorkId {
        work_id(&self.author, &self.title)
    }
}

/// Derives the stable identifier for an `(author, title)` pair.
///
/// The id is pure and deterministic: it depends only on the two fields, never
/// on catalog position, so it survives reordering and process restarts. Two
/// works are the same entity iff their pair is equal.
pub fn work_id(author: &str, title: &str) -> WorkId {
    let key = format!("{author}|{title}");
    utf8_percent_encode(&key, ID_ENCODE_SET).to_string()
}
