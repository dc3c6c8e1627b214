//! CLI for songnote.

mod commands;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use songnote_core::activation::{parse_activation_uri, ActivationRequest, SourceField};
use songnote_core::config;
use std::path::PathBuf;

use commands::{run_add_song, run_completions, run_config, run_man};

/// Top-level CLI for songnote.
#[derive(Debug, Parser)]
#[command(name = "songnote")]
#[command(about = "songnote: create a vault note for a music track via song.link", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the note goes and whether to open it afterwards.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Vault root directory (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub vault: Option<PathBuf>,

    /// Do not ask the desktop to open the new note.
    #[arg(long)]
    pub no_open: bool,
}

impl OutputArgs {
    pub fn vault_dir(&self) -> Result<PathBuf> {
        match &self.vault {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up a track URL on song.link and create its note.
    AddSong {
        /// Track URL from any supported platform.
        #[arg(long, conflicts_with = "spotify_url")]
        url: Option<String>,

        /// Spotify track URL.
        #[arg(long)]
        spotify_url: Option<String>,

        #[command(flatten)]
        output: OutputArgs,

        /// Print the rendered note instead of writing it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Handle an activation URI, e.g. obsidian://songlink-add-song?url=...
    HandleUri {
        /// Activation URI.
        uri: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show or change the note settings.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current settings and the available template variables.
    Show,
    /// Print the config file path.
    Path,
    /// Change one setting: filename-template, content-template, directory or missing-value.
    Set {
        /// Setting name.
        key: String,
        /// New value (stored as-is).
        value: String,
    },
    /// Restore the built-in defaults.
    Reset,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::AddSong {
                url,
                spotify_url,
                output,
                dry_run,
            } => {
                let request = match spotify_url {
                    Some(s) => ActivationRequest::with_source(SourceField::SpotifyOnly, Some(s)),
                    None => ActivationRequest::with_source(SourceField::Generic, url),
                };
                let settings = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", settings);
                run_add_song(settings, &request, &output, dry_run).await?;
            }
            CliCommand::HandleUri { uri, output } => {
                let request = parse_activation_uri(&uri)?;
                let settings = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", settings);
                run_add_song(settings, &request, &output, false).await?;
            }
            CliCommand::Config { action } => run_config(action)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
