//! Persistent player preferences
//!
//! Saves and loads look/move preferences and an optional fixed seed
//! to/from an init_settings.json file in the config directory.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{CAMERA_MOVE_SPEED, MOUSE_SENSITIVITY};

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/init_settings.json";

/// Persistent settings that survive between sessions
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitSettings {
    /// Degrees of camera rotation per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Fly camera speed in units per second
    pub camera_speed: f32,
    pub invert_y: bool,
    /// Seed for hole relocation; `None` draws from entropy.
    /// The `--seed` flag overrides it.
    pub seed: Option<u64>,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            camera_speed: CAMERA_MOVE_SPEED,
            invert_y: false,
            seed: None,
        }
    }
}

impl InitSettings {
    /// Load settings from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        Self::load_from(SETTINGS_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No {} found, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(SETTINGS_FILE)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_reload() {
        let dir = std::env::temp_dir().join(format!("minigolf_settings_{}", uuid::Uuid::new_v4()));
        let path = dir.join("init_settings.json");
        let settings = InitSettings {
            invert_y: true,
            seed: Some(99),
            ..default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(InitSettings::load_from(&path), settings);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: InitSettings = serde_json::from_str(r#"{ "invert_y": true }"#).unwrap();
        assert!(settings.invert_y);
        assert_eq!(settings.camera_speed, CAMERA_MOVE_SPEED);
        assert_eq!(settings.seed, None);
    }
}
