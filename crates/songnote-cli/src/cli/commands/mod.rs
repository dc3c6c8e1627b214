//! CLI command handlers, one file per command.

mod add_song;
mod completions;
mod config;

pub use add_song::run_add_song;
pub use completions::{run_completions, run_man};
pub use config::run_config;
