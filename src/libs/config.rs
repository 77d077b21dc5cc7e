//! Configuration management for the tudo application.
//!
//! Settings are stored as JSON in the platform data directory. Beyond
//! the database file name, the configuration carries the display
//! settings the view projection cannot derive from data: the default
//! team for new tasks, the *validated* team (whose tasks never turn
//! urgent by due date), the *not-applicable* team and its marker
//! character. `init` runs a small interactive wizard over the current
//! values.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database file name inside the data directory.
    #[serde(default = "default_db_file")]
    pub db_file: String,
    /// Team assigned to newly created tasks.
    #[serde(default = "default_team")]
    pub default_team: String,
    /// Team exempt from due-date urgency.
    #[serde(default = "default_validated_team")]
    pub validated_team: String,
    /// Team rendered muted when the text starts with `marker`.
    #[serde(default = "default_na_team")]
    pub na_team: String,
    #[serde(default = "default_marker")]
    pub marker: char,
}

fn default_db_file() -> String {
    "tudo.db".to_string()
}

fn default_team() -> String {
    "ANA".to_string()
}

fn default_validated_team() -> String {
    "OK".to_string()
}

fn default_na_team() -> String {
    "N/A".to_string()
}

fn default_marker() -> char {
    '*'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
            default_team: default_team(),
            validated_team: default_validated_team(),
            na_team: default_na_team(),
            marker: default_marker(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// has been written yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(&path, raw).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))
    }

    /// Interactive setup, primed with the currently effective values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let db_file: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabaseFile.to_string())
            .default(current.db_file)
            .interact_text()?;
        let default_team: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultTeam.to_string())
            .default(current.default_team)
            .interact_text()?;
        let validated_team: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptValidatedTeam.to_string())
            .default(current.validated_team)
            .interact_text()?;
        let na_team: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptNaTeam.to_string())
            .default(current.na_team)
            .interact_text()?;
        let marker: char = Input::with_theme(&theme)
            .with_prompt(Message::PromptMarker.to_string())
            .default(current.marker)
            .interact_text()?;

        Ok(Self {
            db_file,
            default_team,
            validated_team,
            na_team,
            marker,
        })
    }
}
