//! Game settings and preferences
//!
//! Read from a JSON file at startup. Missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for every new game (random when unset)
    pub seed: Option<u64>,

    // === Display ===
    /// ANSI background colors per stage
    pub color: bool,
    /// Show each tile's rank next to its label
    pub show_ranks: bool,
    /// Print the control hints under the board
    pub show_controls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            color: true,
            show_ranks: false,
            show_controls: true,
        }
    }
}

impl Settings {
    /// Environment variable naming an alternative settings file
    pub const PATH_ENV: &'static str = "STARTUP_2048_SETTINGS";

    /// Settings file looked up in the working directory
    const DEFAULT_FILE: &'static str = "startup-2048.json";

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Where settings are read from
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE))
    }

    /// Load settings from [`Settings::path`], falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::info!("Using default settings ({}: {})", path.display(), err);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Seed for the next game
    pub fn next_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
