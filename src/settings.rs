//! Persisted player settings and the data directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::theme::Theme;

const SETTINGS_FILE: &str = "settings.json";
const LEADERBOARD_FILE: &str = "leaderboard.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_volume")]
    pub sound_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            theme: Theme::default(),
            sound_volume: default_volume(),
        }
    }
}

impl Settings {
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.sound_volume = if self.sound_volume.is_finite() {
            self.sound_volume.clamp(0.0, 1.0)
        } else {
            default_volume()
        };
        self
    }
}

fn default_version() -> u32 {
    1
}

fn default_volume() -> f32 {
    1.0
}

/// Whether the developer sound tester is enabled (`NEON_SNAKE_DEV=1`).
pub fn dev_mode() -> bool {
    std::env::var("NEON_SNAKE_DEV")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Directory holding the settings and leaderboard files
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("NEON_SNAKE_DATA_DIR") {
            return Self::new(explicit);
        }

        let base = std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".local");
                    p.push("share");
                    p
                })
            });
        match base {
            Some(mut dir) => {
                dir.push("neon-snake");
                Self::new(dir)
            }
            None => Self::new("."),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    pub fn leaderboard_path(&self) -> PathBuf {
        self.dir.join(LEADERBOARD_FILE)
    }

    /// Missing or unreadable settings fall back to defaults.
    pub fn load(&self) -> Settings {
        let path = self.settings_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                return Settings::default();
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Settings::default();
            }
        };
        match serde_json::from_slice::<Settings>(&bytes) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.settings_path(), serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}
