//! Fixed timestep tick
//!
//! Applies one frame of input, advances the virtual clock and resolves every
//! deferred task that came due, in order.

use std::time::Duration;

use glam::Vec2;

use super::board::GameEvent;
use super::card::CardId;
use super::state::{GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tap position in board coordinates (from mouse/touch)
    pub tap: Option<Vec2>,
    /// Direct card touch, already hit-tested by the host
    pub touch: Option<CardId>,
}

/// Advance the game by `dt`, returning the events it produced
pub fn tick(state: &mut GameState, input: &TickInput, dt: Duration) -> Vec<GameEvent> {
    if let Some(point) = input.tap {
        state.tap(point);
    }
    if let Some(id) = input.touch {
        state.touch(id);
    }

    state.timers.advance(dt);
    while let Some(task) = state.timers.pop_due() {
        state.board.resolve(task, &mut state.timers);
    }

    if state.phase == GamePhase::Playing {
        state.elapsed += dt;
    }

    let events = state.board.drain_events();
    if events.contains(&GameEvent::Won) {
        state.phase = GamePhase::Won;
    }
    events
}
