//! Board controller: deal, turn sequencing, matching, win detection
//!
//! All input goes through [`Board::on_card_touched`]; everything that happens
//! later comes back through [`Board::resolve`] as a [`Deferred`] task from the
//! scheduler the caller passed in.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardFace, CardId};
use super::flip::split_duration;
use super::scheduler::{Deferred, Scheduler};
use crate::error::ConfigError;
use crate::settings::Timing;

/// Notifications for the host (sound, popups, score display)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card was turned face-up by the player
    CardRevealed(CardId),
    /// Second card matched the first
    PairMatched(CardId, CardId),
    /// Second card did not match; both will turn back
    PairMismatched(CardId, CardId),
    /// A mismatched card started turning face-down
    CardHidden(CardId),
    /// Every pair found. Fires once per deal.
    Won,
}

/// Why a touch had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Busy,
    AlreadyRevealed,
    Disabled,
    Animating,
    NoSuchCard,
}

/// What a touch did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    Ignored(Ignored),
    /// First card of a turn is now face-up
    FirstRevealed,
    Matched,
    Mismatched,
}

#[derive(Debug, Clone)]
pub struct Board {
    cards: Vec<Card>,
    /// Face-up card waiting for its partner
    revealed: Option<CardId>,
    /// Input gate while a flip or comparison is outstanding
    busy: bool,
    cards_left: usize,
    /// Completed turns (second card revealed)
    turns: u32,
    won: bool,
    timing: Timing,
    events: Vec<GameEvent>,
}

impl Board {
    /// Empty board; call [`fill`](Self::fill) to deal
    pub fn new(timing: Timing) -> Self {
        Self {
            cards: Vec::new(),
            revealed: None,
            busy: false,
            cards_left: 0,
            turns: 0,
            won: false,
            timing,
            events: Vec::new(),
        }
    }

    /// Deal `card_count` shuffled cards in pairs.
    ///
    /// Odd or zero counts are rejected and the board is left as it was.
    pub fn fill(&mut self, card_count: usize, rng: &mut impl Rng) -> Result<(), ConfigError> {
        if card_count == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if card_count % 2 != 0 {
            return Err(ConfigError::OddCardCount(card_count));
        }
        log::debug!("Memory: fill board with {} cards", card_count);

        let pairs = (card_count / 2) as u32;
        let mut pair_ids: Vec<u32> = (0..pairs).chain(0..pairs).collect();
        pair_ids.shuffle(rng);

        self.cards = pair_ids
            .into_iter()
            .enumerate()
            .map(|(i, pair_id)| Card::new(CardId(i), pair_id))
            .collect();
        self.revealed = None;
        self.busy = false;
        self.cards_left = card_count;
        self.turns = 0;
        self.won = false;
        self.events.clear();
        Ok(())
    }

    /// Handle a touch on a card
    pub fn on_card_touched(&mut self, id: CardId, timers: &mut impl Scheduler) -> TouchOutcome {
        if self.busy {
            log::debug!("Memory: busy, cancel event");
            return TouchOutcome::Ignored(Ignored::Busy);
        }
        if self.revealed == Some(id) {
            log::debug!("Memory: skip same card");
            return TouchOutcome::Ignored(Ignored::AlreadyRevealed);
        }
        let Some(card) = self.cards.get(id.index()) else {
            log::warn!("Memory: touch on unknown card {}", id);
            return TouchOutcome::Ignored(Ignored::NoSuchCard);
        };
        if !card.is_enabled() {
            return TouchOutcome::Ignored(Ignored::Disabled);
        }
        if !card.accepts_touch() || !self.begin_flip(id, timers) {
            return TouchOutcome::Ignored(Ignored::Animating);
        }

        log::debug!("Memory: card touched");
        let pair_id = self.cards[id.index()].pair_id;
        log::info!("Memory: touched card {} (pair {})", id, pair_id);
        self.cards[id.index()].face = CardFace::FaceUp;
        self.events.push(GameEvent::CardRevealed(id));

        let Some(first) = self.revealed.take() else {
            log::info!("Memory: picked a first card");
            self.busy = true;
            self.revealed = Some(id);
            timers.schedule_once(self.timing.flip, Deferred::ClearBusy);
            return TouchOutcome::FirstRevealed;
        };

        // Second, distinct card
        self.busy = true;
        self.turns += 1;

        if self.cards[first.index()].pair_id == pair_id {
            log::info!("Memory: good card touched !");
            self.cards[id.index()].disable();
            self.cards[first.index()].disable();
            self.cards_left -= 2;
            self.events.push(GameEvent::PairMatched(first, id));
            timers.schedule_once(self.timing.flip, Deferred::ClearBusy);
            if self.cards_left == 0 {
                timers.schedule_once(self.timing.flip * 2, Deferred::Won);
            }
            TouchOutcome::Matched
        } else {
            log::warn!("Memory: incorrect card touched !");
            self.events.push(GameEvent::PairMismatched(first, id));
            timers.schedule_once(self.timing.pause, Deferred::Flip(id));
            timers.schedule_once(self.timing.pause, Deferred::Flip(first));
            timers.schedule_once(self.timing.pause, Deferred::ClearBusy);
            TouchOutcome::Mismatched
        }
    }

    /// Run a deferred task that has come due
    pub fn resolve(&mut self, task: Deferred, timers: &mut impl Scheduler) {
        match task {
            Deferred::Flip(id) => {
                let Some(card) = self.cards.get(id.index()) else {
                    return;
                };
                // Only unmatched cards are ever turned back down
                if card.is_matched() {
                    return;
                }
                if self.begin_flip(id, timers) {
                    self.cards[id.index()].face = CardFace::FaceDown;
                    self.events.push(GameEvent::CardHidden(id));
                } else if self.cards[id.index()].flip.is_animating() {
                    // Still turning up; retry once the current half is over
                    let (first, _) = split_duration(self.timing.flip);
                    timers.schedule_once(first, Deferred::Flip(id));
                }
            }
            Deferred::FlipHalf(id) => {
                if let Some(card) = self.cards.get_mut(id.index())
                    && card.flip.half()
                {
                    let (_, second) = split_duration(self.timing.flip);
                    timers.schedule_once(second, Deferred::FlipComplete(id));
                }
            }
            Deferred::FlipComplete(id) => {
                if let Some(card) = self.cards.get_mut(id.index()) {
                    card.flip.complete();
                }
            }
            Deferred::ClearBusy => {
                self.busy = false;
            }
            Deferred::Won => {
                if !self.won {
                    log::info!("Memory: all pairs found in {} turns", self.turns);
                    self.won = true;
                    self.events.push(GameEvent::Won);
                }
            }
        }
    }

    fn begin_flip(&mut self, id: CardId, timers: &mut impl Scheduler) -> bool {
        let started = self.cards[id.index()].flip.start();
        if started {
            let (first, _) = split_duration(self.timing.flip);
            timers.schedule_once(first, Deferred::FlipHalf(id));
        }
        started
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub fn revealed(&self) -> Option<CardId> {
        self.revealed
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Unmatched cards still on the board
    pub fn cards_left(&self) -> usize {
        self.cards_left
    }

    pub fn pairs_left(&self) -> usize {
        self.cards_left / 2
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Take the notifications produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
