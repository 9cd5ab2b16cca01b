//! Screen flow: home, game, about, and the won popup
//!
//! Screen transitions themselves are the host toolkit's job; this only
//! tracks which screen is current and feeds the game its frame time.

use std::time::Duration;

use glam::Vec2;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::error::ConfigError;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Game,
    About,
}

/// The running application
#[derive(Debug)]
pub struct App {
    settings: Settings,
    screen: Screen,
    game: GameState,
    won_popup: bool,
    running: bool,
    accumulator: Duration,
    input: TickInput,
}

impl App {
    /// Build the app on the home screen with a first deal ready
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        let game = GameState::new(&settings, seed)?;
        log::info!("Memory: app ready with seed {}", seed);
        Ok(Self {
            settings,
            screen: Screen::Home,
            game,
            won_popup: false,
            running: true,
            accumulator: Duration::ZERO,
            input: TickInput::default(),
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_won_popup_open(&self) -> bool {
        self.won_popup
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn show_home(&mut self) {
        log::warn!("Memory: show_home");
        self.screen = Screen::Home;
    }

    /// Deal a new game and switch to it
    pub fn show_game(&mut self) -> Result<(), ConfigError> {
        log::warn!("Memory: show_game");
        self.restart()?;
        self.screen = Screen::Game;
        Ok(())
    }

    pub fn show_about(&mut self) {
        log::warn!("Memory: show_about");
        self.screen = Screen::About;
    }

    /// New deal on the current screen
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.game.start()?;
        self.won_popup = false;
        self.accumulator = Duration::ZERO;
        self.input = TickInput::default();
        Ok(())
    }

    /// Open the won popup
    pub fn won(&mut self) {
        log::info!(
            "Memory: won in {} turns, {:.1}s",
            self.game.board.turns(),
            self.game.elapsed.as_secs_f32()
        );
        self.won_popup = true;
    }

    /// The OS asked to pause; always refused so the game keeps its state
    pub fn on_pause(&self) -> bool {
        true
    }

    pub fn close(&mut self) {
        log::info!("Memory: close");
        self.running = false;
    }

    /// Queue a tap (board coordinates) for the next tick
    pub fn tap(&mut self, point: Vec2) {
        self.input.tap = Some(point);
    }

    /// Feed one frame of wall time; runs fixed ticks while the game screen is up
    pub fn update(&mut self, frame_dt: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.screen != Screen::Game {
            self.input = TickInput::default();
            return events;
        }

        self.accumulator += frame_dt.min(Duration::from_millis(100));
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(tick(&mut self.game, &self.input, SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;

            // One-shot inputs
            self.input = TickInput::default();
        }

        if events.contains(&GameEvent::Won) {
            self.won();
        }
        events
    }
}
