//! File-backed session store.
//!
//! Persists the session token and identity record as a small JSON file so
//! the session survives between CLI invocations. The file is re-read on
//! every access, so another process clearing it is observed immediately,
//! and writers simply overwrite (last writer wins).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use staffgate_access::SessionStore;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identity: Option<String>,
    /// When this file was last written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

/// Session store persisted as a JSON file on disk.
///
/// Storage failures degrade to an anonymous session rather than surfacing:
/// an unreadable file reads as empty, and a failed write is logged and
/// dropped. The next successful login rewrites the file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns when the session file was last written, if known.
    #[must_use]
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.load().saved_at
    }

    fn load(&self) -> SessionFile {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SessionFile::default(),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "failed to read session file");
                return SessionFile::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "ignoring unreadable session file");
                SessionFile::default()
            }
        }
    }

    fn save(&self, mut file: SessionFile) {
        file.saved_at = Some(Utc::now());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, path = %parent.display(), "failed to create session directory");
                    return;
                }
            }
        }
        let raw = match serde_json::to_string_pretty(&file) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize session file");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, raw) {
            tracing::warn!(error = %e, path = %self.path.display(), "failed to write session file");
        }
    }
}

impl SessionStore for FileStore {
    fn token(&self) -> Option<String> {
        self.load().token
    }

    fn set_token(&self, token: Option<&str>) {
        let mut file = self.load();
        file.token = token.map(str::to_string);
        self.save(file);
    }

    fn identity_record(&self) -> Option<String> {
        self.load().identity
    }

    fn set_identity_record(&self, record: Option<&str>) {
        let mut file = self.load();
        file.identity = record.map(str::to_string);
        self.save(file);
    }
}
