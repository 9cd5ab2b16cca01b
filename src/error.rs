//! Setup-time errors
//!
//! Nothing fails during play; every error here is raised while building a
//! game from settings and assets.

use std::path::PathBuf;

/// Errors raised while configuring or starting a game
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Cards come in pairs
    #[error("card count must be even, got {0}")]
    OddCardCount(usize),

    #[error("card count must be at least 2")]
    EmptyBoard,

    #[error("grid needs at least one column")]
    NoColumns,

    /// A duration setting is under a millisecond, negative or not finite
    #[error("invalid duration for {name}: {value}")]
    InvalidDuration { name: &'static str, value: f32 },

    /// Mismatched cards would be turned back before they finished turning up
    #[error("pause_duration ({pause}s) must not be shorter than flip_duration ({flip}s)")]
    PauseShorterThanFlip { pause: f32, flip: f32 },

    #[error("board area must be positive, got {width}x{height}")]
    InvalidBoardSize { width: f32, height: f32 },

    /// Not enough distinct picture directories for the requested pairs
    #[error("need {needed} picture sets under {dir}, found {found}")]
    InsufficientAssets {
        dir: PathBuf,
        needed: usize,
        found: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings format error: {0}")]
    Json(#[from] serde_json::Error),
}
