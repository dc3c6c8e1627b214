//! `songnote add-song` / `songnote handle-uri` – look up a track and create its note.

use anyhow::Result;
use songnote_core::activation::ActivationRequest;
use songnote_core::config::Settings;
use songnote_core::error::NoteError;
use songnote_core::pipeline::LinkNoteGenerator;
use songnote_core::songlink::SongLinkClient;
use songnote_core::template::today_utc;
use songnote_core::vault::{open_note, OpenOutcome, Vault};

use crate::cli::OutputArgs;

/// Run one activation. An empty source parameter only prints a notice.
pub async fn run_add_song(
    settings: Settings,
    request: &ActivationRequest,
    output: &OutputArgs,
    dry_run: bool,
) -> Result<()> {
    let vault = Vault::new(output.vault_dir()?);
    let notes = LinkNoteGenerator::new(SongLinkClient::new(), settings, vault);
    let today = today_utc();

    if dry_run {
        match notes.preview(request, today).await {
            Ok(note) => {
                println!("{}", notes.vault().resolve(&note.path).display());
                println!("{}", note.content);
            }
            Err(err @ NoteError::EmptyInput(_)) => notice(&err),
            Err(err) => return Err(err.into()),
        }
        return Ok(());
    }

    match notes.add_song(request, today).await {
        Ok(path) => {
            println!("Created {}", path.display());
            if !output.no_open {
                if let OpenOutcome::Failed(reason) = open_note(&path) {
                    tracing::debug!("note not opened: {}", reason);
                }
            }
        }
        Err(err @ NoteError::EmptyInput(_)) => notice(&err),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn notice(err: &NoteError) {
    tracing::info!("activation ignored: {}", err);
    eprintln!("{}", err);
}
