//! Best-effort "open the new note" step.

use std::path::Path;
use std::process::{Command, Stdio};

/// Result of asking the desktop to open a note. Never an error: the note is
/// already written when this runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    Failed(String),
}

fn opener_command(path: &Path) -> Command {
    let mut cmd = match std::env::consts::OS {
        "macos" => Command::new("open"),
        "windows" => {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", ""]);
            c
        }
        _ => Command::new("xdg-open"),
    };
    cmd.arg(path);
    cmd
}

/// Ask the platform opener to show `path`. Failures are logged at warn level
/// and returned as [`OpenOutcome::Failed`].
pub fn open_note(path: &Path) -> OpenOutcome {
    if !path.is_file() {
        let reason = format!("{} is not a file", path.display());
        tracing::warn!("not opening note: {}", reason);
        return OpenOutcome::Failed(reason);
    }

    let spawned = opener_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(_) => {
            tracing::debug!(path = %path.display(), "opener spawned");
            OpenOutcome::Opened
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to open note: {}", e);
            OpenOutcome::Failed(e.to_string())
        }
    }
}
