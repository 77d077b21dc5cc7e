//! Display palette handed to the view projection.
//!
//! Earlier incarnations of the program compiled the team colors in as
//! constants. Here they live in the `team_palette` table (seeded by the
//! migrations) and the special-team settings come from the
//! configuration file, so the projection receives everything it needs
//! as one loaded structure.

use crate::db::palettes::{PaletteKind, Palettes};
use crate::libs::config::Config;
use crate::libs::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One palette row: a label mapped to a display color pair.
///
/// Inactive entries stay in the table but are excluded from the loaded
/// palette, so a team can be retired without losing its colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub foreground: String,
    pub background: String,
    pub active: bool,
}

impl PaletteEntry {
    pub fn new(name: &str, foreground: &str, background: &str) -> Self {
        Self {
            name: name.to_string(),
            foreground: foreground.to_string(),
            background: background.to_string(),
            active: true,
        }
    }
}

/// In-memory palette consulted by the view projection.
#[derive(Debug, Clone)]
pub struct Palette {
    teams: HashMap<String, (String, String)>,
    /// Team whose tasks are never flagged urgent by due date.
    pub validated_team: String,
    /// Team rendered muted when the task text starts with `marker`.
    pub na_team: String,
    pub marker: char,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>, validated_team: String, na_team: String, marker: char) -> Self {
        let teams = entries
            .into_iter()
            .filter(|e| e.active)
            .map(|e| (e.name, (e.foreground, e.background)))
            .collect();

        Self {
            teams,
            validated_team,
            na_team,
            marker,
        }
    }

    /// Reads the team palette from the database and the special-team
    /// settings from the configuration.
    pub fn load(config: &Config) -> Result<Self> {
        let entries = Palettes::new()?.list(PaletteKind::Team)?;
        Ok(Self::new(
            entries,
            config.validated_team.clone(),
            config.na_team.clone(),
            config.marker,
        ))
    }

    /// Configured `(foreground, background)` for a team, if any.
    pub fn team_colors(&self, team: &str) -> Option<(&str, &str)> {
        self.teams.get(team).map(|(fg, bg)| (fg.as_str(), bg.as_str()))
    }
}
