//! Values available to the templates for one lookup.

use chrono::{NaiveDate, Utc};

use super::Placeholder;
use crate::songlink::{Entity, Link, LinkAggregationRecord};

/// Resolved substitution values. Every field is inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub now: String,
    pub title: String,
    pub artist_name: String,
    pub thumbnail_url: String,
    pub youtube_url: String,
    pub youtube_music_url: String,
    pub spotify_url: String,
    pub apple_music_url: String,
    pub amazon_music_url: String,
    pub songlink_url: String,
}

impl RenderContext {
    /// Build the context from a lookup result.
    ///
    /// `entity` is the metadata entity (may be absent); any value the lookup
    /// did not provide becomes `missing`.
    pub fn from_lookup(
        record: &LinkAggregationRecord,
        entity: Option<&Entity>,
        today: NaiveDate,
        missing: &str,
    ) -> Self {
        let links = &record.links_by_platform;
        let url = |l: &Option<Link>| or_missing(l.as_ref().map(|l| &l.url), missing);

        Self {
            now: today.format("%Y-%m-%d").to_string(),
            title: or_missing(entity.and_then(|e| e.title.as_ref()), missing),
            artist_name: or_missing(entity.and_then(|e| e.artist_name.as_ref()), missing),
            thumbnail_url: or_missing(entity.and_then(|e| e.thumbnail_url.as_ref()), missing),
            youtube_url: url(&links.youtube),
            youtube_music_url: url(&links.youtube_music),
            spotify_url: url(&links.spotify),
            apple_music_url: url(&links.apple_music),
            amazon_music_url: url(&links.amazon_music),
            songlink_url: record.page_url.clone(),
        }
    }

    pub fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Now => &self.now,
            Placeholder::Title => &self.title,
            Placeholder::ArtistName => &self.artist_name,
            Placeholder::ThumbnailUrl => &self.thumbnail_url,
            Placeholder::YoutubeUrl => &self.youtube_url,
            Placeholder::YoutubeMusicUrl => &self.youtube_music_url,
            Placeholder::SpotifyUrl => &self.spotify_url,
            Placeholder::AppleMusicUrl => &self.apple_music_url,
            Placeholder::AmazonMusicUrl => &self.amazon_music_url,
            Placeholder::SonglinkUrl => &self.songlink_url,
        }
    }
}

fn or_missing(value: Option<&String>, missing: &str) -> String {
    value.cloned().unwrap_or_else(|| missing.to_string())
}

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
