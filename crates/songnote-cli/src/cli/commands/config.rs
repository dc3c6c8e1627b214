//! `songnote config` – show, locate, change or reset the settings.

use anyhow::Result;
use songnote_core::config::{self, SettingKey, Settings};
use songnote_core::template::{describe, CONTENT_TOKENS, FILENAME_TOKENS};

use crate::cli::ConfigAction;

pub fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let settings = config::load_or_init()?;
            print!("{}", show(&settings)?);
        }
        ConfigAction::Path => println!("{}", config::config_path()?.display()),
        ConfigAction::Set { key, value } => {
            let key: SettingKey = key.parse()?;
            let mut settings = config::load_or_init()?;
            settings.set(key, value);
            config::save(&settings)?;
            tracing::info!("setting {:?} updated", key);
            println!("Saved {}", config::config_path()?.display());
        }
        ConfigAction::Reset => {
            config::save(&Settings::default())?;
            tracing::info!("settings reset to defaults");
            println!("Restored defaults in {}", config::config_path()?.display());
        }
    }
    Ok(())
}

fn show(settings: &Settings) -> Result<String> {
    Ok(format!(
        "{}\n# filename-template variables: {}\n# content-template variables: {}\n",
        config::to_toml(settings)?.trim_end(),
        describe(&FILENAME_TOKENS),
        describe(&CONTENT_TOKENS),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_lists_settings_and_variables() {
        let out = show(&Settings::default()).unwrap();
        assert!(out.contains("note_directory = \"Music\""));
        assert!(out.contains("# filename-template variables: {{now}}, {{title}}, {{artistName}}\n"));
        assert!(out.contains("{{amazonMusicUrl}}, {{songlinkUrl}}\n"));
    }
}
