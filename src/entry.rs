//! Per-work progress entry and patch types.

use serde::{Deserialize, Serialize};

/// Mutable progress record attached to one work id.
///
/// Entries are created lazily on first reference and never deleted; stale
/// entries for ids no longer in any active list are retained harmlessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Entry {
    /// True once the user marked the work as read.
    #[serde(default)]
    pub completed: bool,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Stored attachment filenames, relative to the attachment directory.
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Sparse patch where each `Some` field overwrites the entry value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryPatch {
    /// Optional replacement for the completed flag.
    pub completed: Option<bool>,
    /// Optional replacement for the notes text.
    pub notes: Option<String>,
}

impl EntryPatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies this patch in place to `entry`.
    pub fn apply_to(&self, entry: &mut Entry) {
        if let Some(v) = self.completed {
            entry.completed = v;
        }
        if let Some(v) = &self.notes {
            entry.notes = v.clone();
        }
    }
}
