//! Vault writes: create the note file (never overwriting) and hand it to the
//! desktop for opening.

mod open;

pub use open::{open_note, OpenOutcome};

use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

use crate::config::Settings;
use crate::error::NoteError;

/// Vault-relative note path: `<noteDirectory>/<filename>.md`.
///
/// Plain string join; separators inside `filename` are kept and end up as
/// nested directories.
pub fn note_path(settings: &Settings, filename: &str) -> String {
    format!("{}/{}.md", settings.note_directory, filename)
}

/// Root directory notes are written under.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path for a vault-relative note path. Only the non-empty
    /// `/`-separated segments are joined, so a leading, trailing or doubled
    /// `/` never leaves the vault root.
    pub fn resolve(&self, rel_path: &str) -> PathBuf {
        rel_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// Create a new note at `rel_path` with `content`. Missing parent
    /// directories are created. Fails with [`NoteError::FileExists`] if the
    /// target already exists.
    pub async fn create_note(&self, rel_path: &str, content: &str) -> Result<PathBuf, NoteError> {
        let path = self.resolve(rel_path);
        let io_err = |source| NoteError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(NoteError::FileExists(path.clone()));
            }
            Err(e) => return Err(io_err(e)),
        };

        file.write_all(content.as_bytes()).await.map_err(io_err)?;
        file.flush().await.map_err(io_err)?;

        tracing::info!(path = %path.display(), bytes = content.len(), "note created");
        Ok(path)
    }
}
