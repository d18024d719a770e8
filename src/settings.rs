//! Game settings and preferences
//!
//! Persisted as a JSON file next to the high scores.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PersistError;
use crate::sim::{Difficulty, GameState};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty used for the next life
    pub difficulty: Difficulty,
    /// Fixed run seed; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Mirror is pushed away from the magnet instead of pulled
    pub inverse_mirror: bool,
    /// Ticks the headless demo runs for
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            seed: None,
            inverse_mirror: false,
            // One minute at 60 Hz
            demo_ticks: 3600,
        }
    }
}

impl Settings {
    /// Default file name
    pub const FILE_NAME: &'static str = "magnetic_mirror_settings.json";

    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Fresh game state (on the menu) configured from these settings
    pub fn new_game(&self, fallback_seed: u64) -> GameState {
        let mut state = GameState::new(self.seed.unwrap_or(fallback_seed), self.difficulty);
        state.inverse_mirror = self.inverse_mirror;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"difficulty":"Hard"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.demo_ticks, 3600);
        assert!(!settings.inverse_mirror);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Settings::FILE_NAME);
        let settings = Settings {
            difficulty: Difficulty::Easy,
            seed: Some(77),
            inverse_mirror: true,
            demo_ticks: 10,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_bad_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Settings::load(&path), Err(PersistError::Json(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        let missing = dir.path().join("missing.json");
        assert!(matches!(Settings::load(&missing), Err(PersistError::Io(_))));
        assert_eq!(Settings::load_or_default(&missing), Settings::default());
    }

    #[test]
    fn test_new_game_applies_settings() {
        let settings = Settings {
            seed: Some(5),
            inverse_mirror: true,
            difficulty: Difficulty::Hard,
            ..Settings::default()
        };
        let state = settings.new_game(999);
        assert_eq!(state.seed, 5);
        assert!(state.inverse_mirror);
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.phase, GamePhase::Menu);

        assert_eq!(Settings::default().new_game(999).seed, 999);
    }
}
