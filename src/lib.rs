//! Memo Robots - a memory-matching card game
//!
//! Core modules:
//! - `sim`: Deterministic game logic (deal, turns, flips, timers, layout)
//! - `app`: Screen flow around the game
//! - `assets`: Picture selection per deal
//! - `settings`: Persisted preferences
//! - `error`: Setup-time errors

pub mod app;
pub mod assets;
pub mod error;
pub mod settings;
pub mod sim;

pub use app::{App, Screen};
pub use error::ConfigError;
pub use settings::{Settings, Timing};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: Duration = Duration::from_nanos(16_666_667);
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Cards dealt by default (4 pairs)
    pub const DEFAULT_CARD_COUNT: usize = 8;
    /// Full card flip, seconds
    pub const FLIP_DURATION: f32 = 0.2;
    /// Mismatched pair display time, seconds
    pub const PAUSE_DURATION: f32 = 1.0;
}
