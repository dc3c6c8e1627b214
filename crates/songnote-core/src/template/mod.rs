//! Note templates: literal `{{name}}` substitution over a fixed token list.
//!
//! Tokens are applied one after another, each as a global literal replace
//! over the text produced so far. A value inserted for an earlier token can
//! therefore be matched by a later token, never the other way round, and the
//! output is never rendered a second time. Unknown `{{...}}` text is left as is.

mod context;

pub use context::{today_utc, RenderContext};

/// A recognised template variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Now,
    Title,
    ArtistName,
    ThumbnailUrl,
    YoutubeUrl,
    YoutubeMusicUrl,
    SpotifyUrl,
    AppleMusicUrl,
    AmazonMusicUrl,
    SonglinkUrl,
}

/// Substitution order for the note body.
pub const CONTENT_TOKENS: [Placeholder; 10] = [
    Placeholder::Now,
    Placeholder::Title,
    Placeholder::ArtistName,
    Placeholder::ThumbnailUrl,
    Placeholder::YoutubeUrl,
    Placeholder::YoutubeMusicUrl,
    Placeholder::SpotifyUrl,
    Placeholder::AppleMusicUrl,
    Placeholder::AmazonMusicUrl,
    Placeholder::SonglinkUrl,
];

/// Substitution order for the note filename.
pub const FILENAME_TOKENS: [Placeholder; 3] =
    [Placeholder::Now, Placeholder::Title, Placeholder::ArtistName];

impl Placeholder {
    /// The literal `{{name}}` marker.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Now => "{{now}}",
            Placeholder::Title => "{{title}}",
            Placeholder::ArtistName => "{{artistName}}",
            Placeholder::ThumbnailUrl => "{{thumbnailUrl}}",
            Placeholder::YoutubeUrl => "{{youtubeUrl}}",
            Placeholder::YoutubeMusicUrl => "{{youtubeMusicUrl}}",
            Placeholder::SpotifyUrl => "{{spotifyUrl}}",
            Placeholder::AppleMusicUrl => "{{appleMusicUrl}}",
            Placeholder::AmazonMusicUrl => "{{amazonMusicUrl}}",
            Placeholder::SonglinkUrl => "{{songlinkUrl}}",
        }
    }
}

/// Comma-separated `{{name}}` list, for help text.
pub fn describe(tokens: &[Placeholder]) -> String {
    tokens
        .iter()
        .map(|p| p.token())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replace each token in `tokens`, in order, with its context value.
pub fn render(template: &str, context: &RenderContext, tokens: &[Placeholder]) -> String {
    tokens.iter().fold(template.to_string(), |text, &p| {
        text.replace(p.token(), context.value(p))
    })
}

pub fn render_filename(template: &str, context: &RenderContext) -> String {
    render(template, context, &FILENAME_TOKENS)
}

pub fn render_content(template: &str, context: &RenderContext) -> String {
    render(template, context, &CONTENT_TOKENS)
}
