//! Player settings and preferences
//!
//! Persisted separately from scores in their own JSON file. Loads are
//! tolerant: a missing or unreadable file falls back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::PersistError;
use crate::sim::state::BirdColor;

/// Volume adjustment granularity
pub const VOLUME_STEP: f32 = 0.1;

/// Player preferences carried across sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Cosmetic bird tint
    pub bird_color: BirdColor,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.5,
            bird_color: BirdColor::default(),
        }
    }
}

impl Settings {
    pub fn volume_up(&mut self) {
        self.master_volume = (self.master_volume + VOLUME_STEP).min(1.0);
    }

    pub fn volume_down(&mut self) {
        self.master_volume = (self.master_volume - VOLUME_STEP).max(0.0);
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file {} is corrupt: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        log::info!("settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_clamps_at_both_ends() {
        let mut settings = Settings::default();
        for _ in 0..20 {
            settings.volume_up();
        }
        assert_eq!(settings.master_volume, 1.0);
        for _ in 0..20 {
            settings.volume_down();
        }
        assert_eq!(settings.master_volume, 0.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.bird_color = BirdColor::Purple;
        settings.volume_up();
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }
}
