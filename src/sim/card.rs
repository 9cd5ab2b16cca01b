//! Cards and their face state

use serde::{Deserialize, Serialize};

use super::flip::Flip;

/// Position of a card on the board (stable for one deal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub usize);

impl CardId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Logical face of a card.
///
/// `FaceDown -> FaceUp -> { Matched | FaceDown }`; `Matched` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardFace {
    #[default]
    FaceDown,
    FaceUp,
    Matched,
}

/// A dealt card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// Both cards of a pair share this
    pub pair_id: u32,
    pub face: CardFace,
    /// Animation state, independent of the logical face
    pub flip: Flip,
}

impl Card {
    pub fn new(id: CardId, pair_id: u32) -> Self {
        Self {
            id,
            pair_id,
            face: CardFace::FaceDown,
            flip: Flip::default(),
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.face != CardFace::FaceDown
    }

    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// Matched cards take no further input
    pub fn is_enabled(&self) -> bool {
        !self.is_matched()
    }

    /// Whether a touch would be accepted by the card itself
    pub fn accepts_touch(&self) -> bool {
        self.is_enabled() && !self.flip.is_animating()
    }

    pub fn disable(&mut self) {
        log::debug!("Memory: disable card {}", self.id);
        self.face = CardFace::Matched;
    }
}
