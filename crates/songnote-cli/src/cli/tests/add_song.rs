//! Tests for add-song and handle-uri.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_add_song_url() {
    match parse(&["songnote", "add-song", "--url", "https://youtu.be/x"]) {
        CliCommand::AddSong {
            url,
            spotify_url,
            output,
            dry_run,
        } => {
            assert_eq!(url.as_deref(), Some("https://youtu.be/x"));
            assert!(spotify_url.is_none());
            assert!(output.vault.is_none());
            assert!(!output.no_open);
            assert!(!dry_run);
        }
        _ => panic!("expected AddSong"),
    }
}

#[test]
fn cli_parse_add_song_spotify_with_options() {
    match parse(&[
        "songnote",
        "add-song",
        "--spotify-url",
        "https://open.spotify.com/track/1",
        "--vault",
        "/tmp/vault",
        "--no-open",
        "--dry-run",
    ]) {
        CliCommand::AddSong {
            url,
            spotify_url,
            output,
            dry_run,
        } => {
            assert!(url.is_none());
            assert_eq!(spotify_url.as_deref(), Some("https://open.spotify.com/track/1"));
            assert_eq!(output.vault.as_deref(), Some(std::path::Path::new("/tmp/vault")));
            assert!(output.no_open);
            assert!(dry_run);
        }
        _ => panic!("expected AddSong"),
    }
}

#[test]
fn cli_parse_add_song_without_url_is_allowed() {
    // Reported as a notice at run time, not a parse error.
    match parse(&["songnote", "add-song"]) {
        CliCommand::AddSong { url, spotify_url, .. } => {
            assert!(url.is_none());
            assert!(spotify_url.is_none());
        }
        _ => panic!("expected AddSong"),
    }
}

#[test]
fn cli_parse_add_song_rejects_both_fields() {
    let res = Cli::try_parse_from([
        "songnote",
        "add-song",
        "--url",
        "a",
        "--spotify-url",
        "b",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_handle_uri() {
    match parse(&[
        "songnote",
        "handle-uri",
        "obsidian://songlink-add-song?url=x",
        "--vault",
        "v",
    ]) {
        CliCommand::HandleUri { uri, output } => {
            assert_eq!(uri, "obsidian://songlink-add-song?url=x");
            assert_eq!(output.vault.as_deref(), Some(std::path::Path::new("v")));
        }
        _ => panic!("expected HandleUri"),
    }
}
