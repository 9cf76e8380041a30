//! Persisted document model and schema-tolerant JSON state file.

pub mod json;

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{entry::Entry, types::WorkId};

/// Persistence failure.
#[derive(Debug)]
pub enum PersistError {
    /// Filesystem error.
    Io(std::io::Error),
    /// Serialization error.
    Serde(serde_json::Error),
    /// Any other failure.
    Message(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Serde(err) => write!(f, "serialization error: {err}"),
            Self::Message(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for PersistError {}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// The whole persisted document: entries plus the optional custom selection.
///
/// `custom_selection` is omitted from the serialized form entirely when
/// absent; "never set" and "explicitly cleared" serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Document {
    /// Progress entries keyed by work id.
    pub entries: HashMap<WorkId, Entry>,
    /// Ordered custom selection, or `None` for the default list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_selection: Option<Vec<WorkId>>,
}

/// Decodes document text, tolerating the legacy schema.
///
/// Accepts the current `{entries, custom_selection?}` wrapper, then falls
/// back to the old format where the whole document is the entries mapping.
/// Any other parse failure yields an empty document, never an error.
pub fn decode_document(text: &str) -> Document {
    if let Ok(doc) = serde_json::from_str::<Document>(text) {
        return doc;
    }

    // Backward-compatible path for files that predate the wrapper object.
    match serde_json::from_str::<HashMap<WorkId, Entry>>(text) {
        Ok(entries) => Document {
            entries,
            custom_selection: None,
        },
        Err(err) => {
            tracing::warn!(%err, "state file unparseable, starting empty");
            Document::default()
        }
    }
}
