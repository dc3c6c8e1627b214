//! Error types for the lookup and note-writing steps.
//!
//! Each variant is terminal for the invocation that produced it; nothing here
//! is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the song.link lookup (transport, HTTP status or payload shape).
#[derive(Debug, Error)]
pub enum LookupError {
    /// The endpoint plus query could not be assembled into a URL.
    #[error("invalid lookup endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    /// Curl reported an error (connection, TLS, timeout, ...).
    #[error("lookup request failed: {0}")]
    Curl(#[from] curl::Error),
    /// The API answered with a non-2xx status.
    #[error("lookup returned HTTP {0}")]
    Http(u32),
    /// Body was not the expected JSON shape.
    #[error("lookup response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure of one add-song invocation.
#[derive(Debug, Error)]
pub enum NoteError {
    /// The activation parameter was missing or empty. Reported as a notice.
    #[error("{0} is empty")]
    EmptyInput(&'static str),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// A note already exists at the target path; it is never overwritten.
    #[error("note already exists: {}", .0.display())]
    FileExists(PathBuf),
    #[error("failed to write note {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The blocking lookup task panicked or was cancelled.
    #[error("lookup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
