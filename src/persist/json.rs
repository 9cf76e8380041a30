//! JSON state file with full-document rewrite semantics.

use std::{
    fs,
    path::{Path, PathBuf},
};

use super::{Document, PersistResult, decode_document};

/// On-disk JSON document, read once at startup and rewritten in full on
/// every mutation (last-writer-wins, no partial updates).
#[derive(Debug, Clone)]
pub struct JsonStateFile {
    path: PathBuf,
}

impl JsonStateFile {
    /// Creates a state file handle at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, recovering silently from every failure mode.
    ///
    /// A missing file and a malformed file both load as an empty document;
    /// the legacy flat `id -> entry` schema loads as entries with an absent
    /// selection.
    pub fn load(&self) -> Document {
        match fs::read_to_string(&self.path) {
            Ok(text) => decode_document(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Document::default(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "state file unreadable, starting empty");
                Document::default()
            }
        }
    }

    /// Serializes and rewrites the whole document.
    pub fn save(&self, doc: &Document) -> PersistResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), entries = doc.entries.len(), "document saved");
        Ok(())
    }
}
