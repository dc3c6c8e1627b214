//! song.link lookup.
//!
//! One GET against the `links` endpoint with the source URL as the only
//! query parameter, decoded into a [`LinkAggregationRecord`]. Uses the curl
//! crate (libcurl); no retry, no caching, curl's default timeouts.

mod model;

pub use model::{Entity, EntityMap, Link, LinkAggregationRecord, LinksByPlatform};

use crate::error::LookupError;
use url::Url;

/// Public song.link lookup endpoint.
pub const SONGLINK_ENDPOINT: &str = "https://api.song.link/v1-alpha.1/links";

/// Turns a track URL into its cross-platform link record.
pub trait LinkResolver {
    fn resolve(&self, source_url: &str) -> Result<LinkAggregationRecord, LookupError>;
}

/// Blocking song.link client. Runs in the current thread; call from
/// `spawn_blocking` if used from async code.
#[derive(Debug, Clone)]
pub struct SongLinkClient {
    endpoint: String,
}

impl Default for SongLinkClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SongLinkClient {
    pub fn new() -> Self {
        Self::with_endpoint(SONGLINK_ENDPOINT)
    }

    /// Client against another base URL (local test servers, mirrors).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Full request URL: endpoint plus `?url=<form-encoded source>`.
    /// The source is not validated.
    pub fn lookup_url(&self, source_url: &str) -> Result<Url, LookupError> {
        Ok(Url::parse_with_params(&self.endpoint, &[("url", source_url)])?)
    }

    fn get(&self, url: &Url) -> Result<(u32, Vec<u8>), LookupError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(concat!("songnote/", env!("CARGO_PKG_VERSION")))?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl LinkResolver for SongLinkClient {
    fn resolve(&self, source_url: &str) -> Result<LinkAggregationRecord, LookupError> {
        let url = self.lookup_url(source_url)?;
        tracing::debug!(%url, "song.link lookup");

        let (code, body) = self.get(&url)?;
        if !(200..300).contains(&code) {
            tracing::warn!(code, "song.link lookup failed");
            return Err(LookupError::Http(code));
        }

        let record: LinkAggregationRecord = serde_json::from_slice(&body)?;
        tracing::debug!(
            page_url = %record.page_url,
            entities = record.entities_by_unique_id.len(),
            "song.link lookup decoded"
        );
        Ok(record)
    }
}
