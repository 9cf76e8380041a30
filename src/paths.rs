//! Persistent data locations.

use std::{fs, path::PathBuf};

const APP_DIR_NAME: &str = "readlog";
const STATE_FILE_NAME: &str = "readlog.json";
const ATTACH_DIR_NAME: &str = "attachments";

/// Resolved locations for the state file and the attachment directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// JSON state file path.
    pub state_file: PathBuf,
    /// Attachment storage directory.
    pub attach_dir: PathBuf,
}

impl AppPaths {
    /// Lays out the state file and attachment directory under `root`.
    pub fn under_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            state_file: root.join(STATE_FILE_NAME),
            attach_dir: root.join(ATTACH_DIR_NAME),
        }
    }

    /// Resolves the persistent data root for the current user.
    ///
    /// Prefers the platform config directory; when that root cannot be
    /// created, falls back to a directory under the user home. Directory
    /// creation failure is never fatal here, later writes report it.
    pub fn resolve() -> Self {
        let preferred = dirs::config_dir()
            .map(|base| base.join(APP_DIR_NAME))
            .unwrap_or_else(home_fallback);

        let root = match fs::create_dir_all(&preferred) {
            Ok(()) => preferred,
            Err(err) => {
                let fallback = home_fallback();
                tracing::warn!(
                    preferred = %preferred.display(),
                    fallback = %fallback.display(),
                    %err,
                    "preferred data root unusable"
                );
                let _ = fs::create_dir_all(&fallback);
                fallback
            }
        };

        Self::under_root(root)
    }
}

fn home_fallback() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
