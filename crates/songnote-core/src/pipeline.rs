//! Add-song pipeline: lookup, entity selection, rendering, note creation.
//!
//! Each invocation is one linear sequence. Nothing is shared between
//! invocations, so two racing on the same target path end with the second
//! getting [`NoteError::FileExists`].

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::activation::ActivationRequest;
use crate::config::Settings;
use crate::entity::select_entity;
use crate::error::NoteError;
use crate::songlink::{LinkAggregationRecord, LinkResolver};
use crate::template::{render_content, render_filename, RenderContext};
use crate::vault::{note_path, Vault};

/// A note rendered from one lookup, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNote {
    pub filename: String,
    /// Vault-relative path, `<noteDirectory>/<filename>.md`.
    pub path: String,
    pub content: String,
}

/// Render filename, path and content for a lookup result.
pub fn render_note(
    record: &LinkAggregationRecord,
    settings: &Settings,
    today: NaiveDate,
) -> RenderedNote {
    let entity = select_entity(record);
    if entity.is_none() {
        tracing::warn!(
            page_url = %record.page_url,
            "no spotify entity in lookup; title, artist and thumbnail are missing"
        );
    }

    let ctx = RenderContext::from_lookup(record, entity, today, settings.missing_value());
    let filename = render_filename(&settings.note_filename_template, &ctx);
    let content = render_content(&settings.note_content_template, &ctx);
    let path = note_path(settings, &filename);

    RenderedNote {
        filename,
        path,
        content,
    }
}

/// Turns an activation into a note in the vault.
#[derive(Debug, Clone)]
pub struct LinkNoteGenerator<R> {
    resolver: R,
    settings: Settings,
    vault: Vault,
}

impl<R> LinkNoteGenerator<R>
where
    R: LinkResolver + Clone + Send + 'static,
{
    pub fn new(resolver: R, settings: Settings, vault: Vault) -> Self {
        Self {
            resolver,
            settings,
            vault,
        }
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Look the track up and render the note without writing anything.
    /// An empty source parameter fails before any network call.
    pub async fn preview(
        &self,
        request: &ActivationRequest,
        today: NaiveDate,
    ) -> Result<RenderedNote, NoteError> {
        let source = request.source_url()?.to_string();
        tracing::info!(source = %source, field = ?request.field, "looking up track");

        let resolver = self.resolver.clone();
        let record = tokio::task::spawn_blocking(move || resolver.resolve(&source)).await??;

        Ok(render_note(&record, &self.settings, today))
    }

    /// Look up, render and create the note. Returns the vault path of the
    /// new file. Lookup and write failures propagate unchanged.
    pub async fn add_song(
        &self,
        request: &ActivationRequest,
        today: NaiveDate,
    ) -> Result<PathBuf, NoteError> {
        let note = self.preview(request, today).await?;
        self.vault.create_note(&note.path, &note.content).await
    }
}
