//! Game settings and preferences
//!
//! Persisted as JSON next to the binary; anything missing or unreadable falls
//! back to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Number of cards dealt (two per pair)
    pub card_count: usize,
    /// Grid columns
    pub columns: usize,
    /// Board area in layout units (width, height)
    pub board_size: Vec2,
    /// Padding around the grid
    pub padding: f32,
    /// Gap between cards
    pub spacing: f32,

    // === Timing (seconds) ===
    /// Full flip, both halves
    pub flip_duration: f32,
    /// How long a mismatched pair stays visible
    pub pause_duration: f32,

    // === Assets ===
    /// Root holding one sub-directory of pictures per character.
    /// `None` runs without pictures.
    pub images_dir: Option<PathBuf>,

    /// Fixed deal seed (random when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            card_count: crate::consts::DEFAULT_CARD_COUNT,
            columns: 4,
            board_size: Vec2::new(800.0, 600.0),
            padding: 10.0,
            spacing: 10.0,

            flip_duration: crate::consts::FLIP_DURATION,
            pause_duration: crate::consts::PAUSE_DURATION,

            images_dir: None,
            seed: None,
        }
    }
}

impl Settings {
    /// Reject configurations that would break pairing or timing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_count == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.card_count % 2 != 0 {
            return Err(ConfigError::OddCardCount(self.card_count));
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        check_duration("flip_duration", self.flip_duration)?;
        check_duration("pause_duration", self.pause_duration)?;
        let timing = self.timing();
        if timing.pause < timing.flip {
            return Err(ConfigError::PauseShorterThanFlip {
                pause: self.pause_duration,
                flip: self.flip_duration,
            });
        }
        if !(self.board_size.x > 0.0 && self.board_size.y > 0.0) {
            return Err(ConfigError::InvalidBoardSize {
                width: self.board_size.x,
                height: self.board_size.y,
            });
        }
        Ok(())
    }

    /// Number of distinct pictures a game needs
    pub fn pair_count(&self) -> usize {
        self.card_count / 2
    }

    /// Timing as scheduler durations
    pub fn timing(&self) -> Timing {
        Timing {
            flip: secs_to_millis(self.flip_duration),
            pause: secs_to_millis(self.pause_duration),
        }
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings, surfacing read and parse failures
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

/// Whole milliseconds, so durations built from the same setting compare equal
fn secs_to_millis(secs: f32) -> Duration {
    Duration::from_millis((secs.max(0.0) * 1000.0).round() as u64)
}

/// Must be finite and at least one whole millisecond once converted
fn check_duration(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && secs_to_millis(value) > Duration::ZERO {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration { name, value })
    }
}

/// Durations the board schedules its deferred work with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Full flip, both halves
    pub flip: Duration,
    /// Mismatch display time before cards turn back
    pub pause: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Settings::default().timing()
    }
}
