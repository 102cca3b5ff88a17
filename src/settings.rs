//! Persistent settings for game initialization
//!
//! Saves and loads user preferences and best-run records to/from an
//! init_settings.json file in the config directory.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/init_settings.json";

/// Persistent settings that survive between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitSettings {
    /// Viewport preset index
    pub viewport_index: usize,
    /// Longest run so far (world units)
    pub best_distance: f32,
    /// Most coins collected in one run
    pub best_coins: u32,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            viewport_index: crate::constants::DEFAULT_VIEWPORT_INDEX,
            best_distance: 0.0,
            best_coins: 0,
        }
    }
}

impl InitSettings {
    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            info!("No init_settings.json found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", SETTINGS_FILE);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse init_settings.json: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read init_settings.json: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = Path::new(SETTINGS_FILE).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(SETTINGS_FILE, json)?;
        info!("Saved settings to {}", SETTINGS_FILE);
        Ok(())
    }

    /// Fold a finished run into the best-run records. Returns true if
    /// either record improved.
    pub fn record_best(&mut self, distance: f32, coins: u32) -> bool {
        let mut improved = false;
        if distance > self.best_distance {
            self.best_distance = distance;
            improved = true;
        }
        if coins > self.best_coins {
            self.best_coins = coins;
            improved = true;
        }
        improved
    }
}

/// Resource tracking the current init settings (for change detection)
#[derive(Resource)]
pub struct CurrentSettings {
    pub settings: InitSettings,
    pub dirty: bool,
}

impl Default for CurrentSettings {
    fn default() -> Self {
        Self {
            settings: InitSettings::load(),
            dirty: false,
        }
    }
}

impl CurrentSettings {
    /// Mark settings as changed (will be saved on next update)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Save if dirty
    pub fn save_if_dirty(&mut self) {
        if self.dirty {
            if let Err(e) = self.settings.save() {
                warn!("Failed to save settings: {}", e);
            }
            self.dirty = false;
        }
    }
}

/// System to save settings periodically when changed
pub fn save_settings_system(mut settings: ResMut<CurrentSettings>) {
    settings.save_if_dirty();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_best_improves_monotonically() {
        let mut settings = InitSettings::default();

        assert!(settings.record_best(1000.0, 5));
        assert_eq!(settings.best_distance, 1000.0);
        assert_eq!(settings.best_coins, 5);

        // A worse run changes nothing
        assert!(!settings.record_best(500.0, 3));
        assert_eq!(settings.best_distance, 1000.0);
        assert_eq!(settings.best_coins, 5);

        // Records improve independently
        assert!(settings.record_best(800.0, 9));
        assert_eq!(settings.best_distance, 1000.0);
        assert_eq!(settings.best_coins, 9);
    }
}
