//! Game settings and preferences
//!
//! Read from a JSON file next to the game. A missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_MILLIS;
use crate::error::{GameError, Result};
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Files ===
    /// Directory holding `imgs/` and `audio/`
    pub assets_dir: PathBuf,
    /// Plain-text file holding the best score
    pub high_score_path: PathBuf,

    // === Timing ===
    /// Simulation and repaint period in milliseconds
    pub tick_millis: u64,
    /// Seed for pipe layouts (None = derived from the clock)
    pub seed: Option<u64>,

    // === Audio ===
    /// Looping background music
    pub music: bool,
    /// Jump sound
    pub sound_effects: bool,

    // === Balance ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("resources"),
            high_score_path: PathBuf::from("high.txt"),

            tick_millis: TICK_MILLIS,
            seed: None,

            music: true,
            sound_effects: true,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Tick period as a duration (never zero)
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Path of an image under the assets directory
    pub fn image_path(&self, name: &str) -> PathBuf {
        self.assets_dir.join("imgs").join(name)
    }

    /// Path of a sound under the assets directory
    pub fn audio_path(&self, name: &str) -> PathBuf {
        self.assets_dir.join("audio").join(name)
    }

    /// Load settings from a JSON file, falling back to defaults when absent
    pub fn load(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(GameError::Settings {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        let settings: Self = serde_json::from_str(&json).map_err(|e| GameError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !settings.tuning.spacing_is_valid() {
            return Err(GameError::Settings {
                path: path.to_path_buf(),
                reason: "pipe_spacing must exceed pipe_width".to_string(),
            });
        }
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| GameError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(path, json).map_err(|e| GameError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tick_period(), Duration::from_millis(10));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.music = false;
        settings.seed = Some(7);
        settings.tuning.gravity = 0.3;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.resolve_seed(), 7);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(GameError::Settings { .. })
        ));
    }

    #[test]
    fn test_overlapping_pipes_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "tuning": { "pipe_spacing": 10.0 } }"#).unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_asset_paths() {
        let settings = Settings::default();
        assert_eq!(
            settings.image_path("pipe.png"),
            PathBuf::from("resources/imgs/pipe.png")
        );
        assert_eq!(
            settings.audio_path("boing.wav"),
            PathBuf::from("resources/audio/boing.wav")
        );
    }
}
