//! Game state: one deal of the board plus everything needed to drive and draw it

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::{Board, TouchOutcome};
use super::card::CardId;
use super::layout::{GridLayout, Rect, hit_test};
use super::scheduler::TimerQueue;
use crate::assets;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pairs remain
    Playing,
    /// Win announced
    Won,
}

/// Everything a renderer needs for one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub id: CardId,
    pub rect: Rect,
    /// Quad corners for the current flip stage
    pub quad: [Vec2; 4],
    /// Draw the front face (and picture) rather than the back
    pub front_visible: bool,
    pub picture: Option<&'a Path>,
    pub matched: bool,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub board: Board,
    pub timers: TimerQueue,
    pub phase: GamePhase,
    /// Play time of the current deal
    pub elapsed: Duration,
    /// Card rectangles, indexed by card id
    rects: Vec<Rect>,
    /// Picture per pair id (empty when running without assets)
    pictures: Vec<PathBuf>,
    card_count: usize,
    layout: GridLayout,
    board_size: Vec2,
    images_dir: Option<PathBuf>,
}

impl GameState {
    /// Validate settings and deal the first board
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            board: Board::new(settings.timing()),
            timers: TimerQueue::new(),
            phase: GamePhase::Playing,
            elapsed: Duration::ZERO,
            rects: Vec::new(),
            pictures: Vec::new(),
            card_count: settings.card_count,
            layout: GridLayout {
                columns: settings.columns,
                padding: settings.padding,
                spacing: settings.spacing,
            },
            board_size: settings.board_size,
            images_dir: settings.images_dir.clone(),
        };
        state.start()?;
        Ok(state)
    }

    /// Deal a fresh board. Pending timers from the previous deal are dropped.
    pub fn start(&mut self) -> Result<(), ConfigError> {
        log::info!("Memory: game.start()");

        // Pick pictures first so a missing asset leaves the old deal intact
        let pictures = match &self.images_dir {
            Some(dir) => assets::pick_pictures(dir, self.card_count / 2, &mut self.rng)?,
            None => Vec::new(),
        };

        self.board.fill(self.card_count, &mut self.rng)?;
        self.timers.clear();
        self.pictures = pictures;
        self.rects = self.layout.arrange(self.card_count, self.board_size);
        self.phase = GamePhase::Playing;
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    /// Touch a card directly
    pub fn touch(&mut self, id: CardId) -> TouchOutcome {
        self.board.on_card_touched(id, &mut self.timers)
    }

    /// Touch whatever card lies under `point`; `None` on a miss
    pub fn tap(&mut self, point: Vec2) -> Option<TouchOutcome> {
        let id = self.card_at(point)?;
        Some(self.touch(id))
    }

    pub fn card_at(&self, point: Vec2) -> Option<CardId> {
        hit_test(&self.rects, point).map(CardId)
    }

    pub fn rect(&self, id: CardId) -> Option<Rect> {
        self.rects.get(id.index()).copied()
    }

    /// Picture shown on a card's front
    pub fn picture_for(&self, id: CardId) -> Option<&Path> {
        let card = self.board.card(id)?;
        self.pictures.get(card.pair_id as usize).map(PathBuf::as_path)
    }

    pub fn card_views(&self) -> impl Iterator<Item = CardView<'_>> + '_ {
        self.board
            .cards()
            .iter()
            .zip(&self.rects)
            .map(|(card, rect)| CardView {
                id: card.id,
                rect: *rect,
                quad: card.flip.quad_points(*rect),
                front_visible: card.flip.front_visible(),
                picture: self.picture_for(card.id),
                matched: card.is_matched(),
            })
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = Settings {
            card_count: 9,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(&settings, 1),
            Err(ConfigError::OddCardCount(9))
        ));
    }

    #[test]
    fn test_new_lays_out_every_card() {
        let state = GameState::new(&Settings::default(), 1).unwrap();
        assert_eq!(state.board.cards().len(), 8);
        assert_eq!(state.card_views().count(), 8);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_tap_hits_card_under_point() {
        let mut state = GameState::new(&Settings::default(), 1).unwrap();
        let rect = state.rect(CardId(5)).unwrap();

        assert_eq!(state.card_at(rect.center()), Some(CardId(5)));
        assert_eq!(state.tap(rect.center()), Some(TouchOutcome::FirstRevealed));
        assert_eq!(state.board.revealed(), Some(CardId(5)));

        assert_eq!(state.tap(Vec2::new(-1.0, -1.0)), None);
    }

    #[test]
    fn test_restart_drops_pending_timers() {
        let mut state = GameState::new(&Settings::default(), 1).unwrap();
        state.touch(CardId(0));
        assert!(!state.timers.is_idle());

        state.start().unwrap();
        assert!(state.timers.is_idle());
        assert!(!state.board.is_busy());
        assert!(state.board.cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_pictures_follow_pair_ids() {
        let root = tempfile::tempdir().unwrap();
        for i in 0..5 {
            let dir = root.path().join(format!("robot{i}"));
            std::fs::create_dir(&dir).unwrap();
            std::fs::write(dir.join("face.png"), b"").unwrap();
        }
        let settings = Settings {
            images_dir: Some(root.path().to_path_buf()),
            ..Default::default()
        };
        let state = GameState::new(&settings, 3).unwrap();

        for a in state.board.cards() {
            for b in state.board.cards() {
                let same_picture = state.picture_for(a.id) == state.picture_for(b.id);
                assert_eq!(same_picture, a.pair_id == b.pair_id);
            }
        }
    }

    #[test]
    fn test_missing_pictures_fail_setup() {
        let root = tempfile::tempdir().unwrap();
        let settings = Settings {
            images_dir: Some(root.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(&settings, 3),
            Err(ConfigError::InsufficientAssets { needed: 4, found: 0, .. })
        ));
    }
}
