//! Idle/demo mode: a player with perfect memory
//!
//! Remembers every card it has seen face-up. Completes a known pair when it
//! can, otherwise turns over a card it has never seen.

use std::collections::HashMap;

use super::board::Board;
use super::card::CardId;

#[derive(Debug, Clone, Default)]
pub struct AutoPlayer {
    /// Pair id of every card seen face-up
    seen: HashMap<CardId, u32>,
}

impl AutoPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember whatever is face-up right now
    pub fn observe(&mut self, board: &Board) {
        for card in board.cards().iter().filter(|c| c.is_face_up()) {
            self.seen.insert(card.id, card.pair_id);
        }
    }

    /// Card to touch next, `None` while the board is not accepting input
    pub fn next_touch(&mut self, board: &Board) -> Option<CardId> {
        self.observe(board);
        // Let mismatched cards finish turning back before choosing
        if board.is_busy() || board.cards().iter().any(|c| c.flip.is_animating()) {
            return None;
        }

        let playable: Vec<CardId> = board
            .cards()
            .iter()
            .filter(|c| c.accepts_touch() && Some(c.id) != board.revealed())
            .map(|c| c.id)
            .collect();

        match board.revealed() {
            Some(first) => {
                let pair_id = self.seen.get(&first).copied();
                playable
                    .iter()
                    .copied()
                    .find(|id| pair_id.is_some() && self.seen.get(id).copied() == pair_id)
                    .or_else(|| self.first_unseen(&playable))
                    .or_else(|| playable.first().copied())
            }
            None => self
                .known_pair(&playable)
                .or_else(|| self.first_unseen(&playable))
                .or_else(|| playable.first().copied()),
        }
    }

    fn first_unseen(&self, playable: &[CardId]) -> Option<CardId> {
        playable
            .iter()
            .copied()
            .find(|id| !self.seen.contains_key(id))
    }

    /// A playable card whose partner is also known and playable
    fn known_pair(&self, playable: &[CardId]) -> Option<CardId> {
        playable.iter().copied().find(|a| {
            let pair_id = self.seen.get(a);
            pair_id.is_some()
                && playable
                    .iter()
                    .any(|b| b != a && self.seen.get(b) == pair_id)
        })
    }
}
