use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default note body: a front-matter block with every placeholder.
pub const DEFAULT_CONTENT_TEMPLATE: &str = r#"---
created: "{{now}}"
title: "{{title}}"
artist: "{{artistName}}"
thumbnail: "{{thumbnailUrl}}"
spotify: "{{spotifyUrl}}"
youtube: "{{youtubeUrl}}"
youtube-music: "{{youtubeMusicUrl}}"
apple-music: "{{appleMusicUrl}}"
amazon-music: "{{amazonMusicUrl}}"
songlink: "{{songlinkUrl}}"
---"#;

pub const DEFAULT_FILENAME_TEMPLATE: &str = "{{artistName}} - {{title}}";

pub const DEFAULT_NOTE_DIRECTORY: &str = "Music";

/// Text substituted for a value the lookup did not provide.
pub const DEFAULT_MISSING_VALUE: &str = "undefined";

/// Settings loaded from `~/.config/songnote/config.toml`.
///
/// Keys missing from the file fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Template for the note filename (without `.md`).
    pub note_filename_template: String,
    /// Template for the note body.
    pub note_content_template: String,
    /// Directory inside the vault where new notes are created.
    pub note_directory: String,
    /// Rendered in place of a missing title, artist, thumbnail or link.
    /// None means the built-in `undefined`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_value: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            note_filename_template: DEFAULT_FILENAME_TEMPLATE.to_string(),
            note_content_template: DEFAULT_CONTENT_TEMPLATE.to_string(),
            note_directory: DEFAULT_NOTE_DIRECTORY.to_string(),
            missing_value: None,
        }
    }
}

impl Settings {
    pub fn missing_value(&self) -> &str {
        self.missing_value.as_deref().unwrap_or(DEFAULT_MISSING_VALUE)
    }

    /// Update one field by its user-facing key.
    pub fn set(&mut self, key: SettingKey, value: String) {
        match key {
            SettingKey::FilenameTemplate => self.note_filename_template = value,
            SettingKey::ContentTemplate => self.note_content_template = value,
            SettingKey::Directory => self.note_directory = value,
            SettingKey::MissingValue => self.missing_value = Some(value),
        }
    }
}

/// Keys accepted by `songnote config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    FilenameTemplate,
    ContentTemplate,
    Directory,
    MissingValue,
}

impl std::str::FromStr for SettingKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "filename-template" => Ok(SettingKey::FilenameTemplate),
            "content-template" => Ok(SettingKey::ContentTemplate),
            "directory" => Ok(SettingKey::Directory),
            "missing-value" => Ok(SettingKey::MissingValue),
            other => anyhow::bail!(
                "unknown setting '{}' (expected filename-template, content-template, directory or missing-value)",
                other
            ),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("songnote")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load settings from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Settings> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but against an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<Settings> {
    if !path.exists() {
        let default_cfg = Settings::default();
        save_at(path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: Settings =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Persist settings to the default config path.
pub fn save(settings: &Settings) -> Result<()> {
    save_at(&config_path()?, settings)
}

/// Settings as the pretty TOML written to disk.
pub fn to_toml(settings: &Settings) -> Result<String> {
    Ok(toml::to_string_pretty(settings)?)
}

pub fn save_at(path: &Path, settings: &Settings) -> Result<()> {
    let toml = to_toml(settings)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    tracing::debug!("saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_values() {
        let cfg = Settings::default();
        assert_eq!(cfg.note_filename_template, "{{artistName}} - {{title}}");
        assert_eq!(cfg.note_directory, "Music");
        assert!(cfg.note_content_template.starts_with("---\ncreated: \"{{now}}\""));
        assert!(cfg.note_content_template.ends_with("songlink: \"{{songlinkUrl}}\"\n---"));
        assert_eq!(cfg.missing_value(), "undefined");
    }

    #[test]
    fn config_toml_roundtrip_keeps_multiline_template() {
        let cfg = Settings::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_falls_back_to_defaults() {
        let toml = r#"
            note_directory = "Library/Songs"
        "#;
        let cfg: Settings = toml::from_str(toml).unwrap();
        assert_eq!(cfg.note_directory, "Library/Songs");
        assert_eq!(cfg.note_filename_template, DEFAULT_FILENAME_TEMPLATE);
        assert_eq!(cfg.note_content_template, DEFAULT_CONTENT_TEMPLATE);
        assert!(cfg.missing_value.is_none());
    }

    #[test]
    fn config_toml_empty_missing_value() {
        let cfg: Settings = toml::from_str("missing_value = \"\"").unwrap();
        assert_eq!(cfg.missing_value(), "");
    }

    #[test]
    fn load_or_init_creates_then_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, Settings::default());

        let mut changed = created.clone();
        changed.set(SettingKey::Directory, "Inbox".to_string());
        changed.set(SettingKey::MissingValue, String::new());
        save_at(&path, &changed).unwrap();

        let reloaded = load_or_init_at(&path).unwrap();
        assert_eq!(reloaded.note_directory, "Inbox");
        assert_eq!(reloaded.missing_value(), "");
    }

    #[test]
    fn setting_key_parse() {
        assert_eq!(
            "filename-template".parse::<SettingKey>().unwrap(),
            SettingKey::FilenameTemplate
        );
        assert_eq!(
            "content-template".parse::<SettingKey>().unwrap(),
            SettingKey::ContentTemplate
        );
        assert_eq!("directory".parse::<SettingKey>().unwrap(), SettingKey::Directory);
        assert!("vault".parse::<SettingKey>().is_err());
    }
}
