//! Deterministic game simulation
//!
//! All gameplay logic lives here:
//! - Virtual clock only, advanced by the tick driver
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod board;
pub mod card;
pub mod flip;
pub mod layout;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use autoplay::AutoPlayer;
pub use board::{Board, GameEvent, Ignored, TouchOutcome};
pub use card::{Card, CardFace, CardId};
pub use flip::{Flip, FlipProgress, FlipStage, quad_points};
pub use layout::{GridLayout, Rect, hit_test};
pub use scheduler::{Deferred, Scheduler, TimerQueue};
pub use state::{CardView, GamePhase, GameState};
pub use tick::{TickInput, tick};
