//! Inbound activation: which parameter carries the track URL, and parsing of
//! activation URIs such as `obsidian://songlink-add-song?url=...`.

use anyhow::{Context, Result};
use std::collections::HashMap;
use url::Url;

use crate::error::NoteError;

/// Which inbound parameter holds the source URL. Both variants feed the
/// same lookup, entity selection and templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceField {
    /// Any supported streaming URL, read from `url`.
    #[default]
    Generic,
    /// A Spotify URL, read from `spotifyUrl`.
    SpotifyOnly,
}

impl SourceField {
    pub fn param_name(self) -> &'static str {
        match self {
            SourceField::Generic => "url",
            SourceField::SpotifyOnly => "spotifyUrl",
        }
    }

    /// Action name used in activation URIs.
    pub fn action(self) -> &'static str {
        match self {
            SourceField::Generic => "songlink-add-song",
            SourceField::SpotifyOnly => "songlink-add-spotify-song",
        }
    }

    pub fn from_action(action: &str) -> Option<Self> {
        [SourceField::Generic, SourceField::SpotifyOnly]
            .into_iter()
            .find(|f| f.action() == action)
    }
}

/// One activation: the variant plus whatever parameters came with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationRequest {
    pub field: SourceField,
    pub params: HashMap<String, String>,
}

impl ActivationRequest {
    pub fn new(field: SourceField) -> Self {
        Self {
            field,
            params: HashMap::new(),
        }
    }

    /// Request whose source parameter is `source` (if any).
    pub fn with_source(field: SourceField, source: Option<String>) -> Self {
        let mut req = Self::new(field);
        if let Some(s) = source {
            req.params.insert(field.param_name().to_string(), s);
        }
        req
    }

    /// The source URL, or [`NoteError::EmptyInput`] if the parameter for this
    /// variant is missing or empty. Not otherwise validated.
    pub fn source_url(&self) -> Result<&str, NoteError> {
        let name = self.field.param_name();
        match self.params.get(name) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(NoteError::EmptyInput(name)),
        }
    }
}

/// Parse an activation URI. The action is the URI host (or first path
/// segment when there is no host); query parameters are form-decoded.
pub fn parse_activation_uri(uri: &str) -> Result<ActivationRequest> {
    let parsed = Url::parse(uri).with_context(|| format!("invalid activation URI: {uri}"))?;

    let action = match parsed.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => parsed
            .path()
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let field = SourceField::from_action(&action).with_context(|| {
        format!(
            "unknown activation action '{}' (expected {} or {})",
            action,
            SourceField::Generic.action(),
            SourceField::SpotifyOnly.action()
        )
    })?;

    let params = parsed.query_pairs().into_owned().collect();
    Ok(ActivationRequest { field, params })
}
