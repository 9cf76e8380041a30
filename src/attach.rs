//! Attachment directory: copy-in storage and open-with-default-app.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

/// Attachment operation failure.
#[derive(Debug)]
pub enum AttachError {
    /// The source file to copy does not exist.
    MissingSource(PathBuf),
    /// The stored file to open does not exist.
    MissingStored(PathBuf),
    /// Filesystem error during copy.
    Io(io::Error),
    /// The host OS opener rejected the file.
    Open(String),
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSource(path) => write!(f, "source file not found: {}", path.display()),
            Self::MissingStored(path) => write!(f, "attached file not found: {}", path.display()),
            Self::Io(err) => write!(f, "copy failed: {err}"),
            Self::Open(msg) => write!(f, "open failed: {msg}"),
        }
    }
}

impl std::error::Error for AttachError {}

impl From<io::Error> for AttachError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Dedicated storage directory for attached files.
///
/// Entries store only the bare stored filename; the original source path is
/// not retained.
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    dir: PathBuf,
}

impl AttachmentStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first copy.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves a stored filename against the storage directory.
    pub fn resolve(&self, stored_name: &str) -> PathBuf {
        self.dir.join(stored_name)
    }

    /// Copies one source file into the store and returns the stored name.
    ///
    /// A name collision is resolved by appending `_1`, `_2`, ... before the
    /// extension until a free name is found.
    pub fn add(&self, src: &Path) -> Result<String, AttachError> {
        if !src.is_file() {
            return Err(AttachError::MissingSource(src.to_path_buf()));
        }
        fs::create_dir_all(&self.dir)?;

        let name = src
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AttachError::MissingSource(src.to_path_buf()))?;
        let stem = src
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name)
            .to_string();
        let ext = src
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        let mut stored = name.to_string();
        let mut i = 1usize;
        while self.dir.join(&stored).exists() {
            stored = format!("{stem}_{i}{ext}");
            i += 1;
        }

        fs::copy(src, self.dir.join(&stored))?;
        tracing::debug!(source = %src.display(), stored, "attachment copied");
        Ok(stored)
    }

    /// Copies a batch of source files.
    ///
    /// A per-file failure is collected and does not abort the remaining
    /// files. Returns stored names and failures in source order.
    pub fn add_all(&self, sources: &[PathBuf]) -> (Vec<String>, Vec<(PathBuf, AttachError)>) {
        let mut stored = Vec::new();
        let mut failed = Vec::new();
        for src in sources {
            match self.add(src) {
                Ok(name) => stored.push(name),
                Err(err) => {
                    tracing::warn!(source = %src.display(), %err, "attachment copy failed");
                    failed.push((src.clone(), err));
                }
            }
        }
        (stored, failed)
    }

    /// Hands a stored file to the host OS default opener.
    pub fn open(&self, stored_name: &str) -> Result<(), AttachError> {
        let full = self.resolve(stored_name);
        if !full.exists() {
            return Err(AttachError::MissingStored(full));
        }
        opener::open(&full).map_err(|err| AttachError::Open(err.to_string()))
    }
}
