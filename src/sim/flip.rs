//! Card flip sequencing and quad geometry
//!
//! A flip is two half rotations around the card's vertical axis. Each half
//! moves the quad one geometry stage along `Closed -> HalfOpen -> Open ->
//! HalfClosed -> Closed`; the visible face is swapped at the midpoint, when
//! the card is edge-on.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::Rect;

/// Geometry stage of the card quad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlipStage {
    /// Back showing, flat
    #[default]
    Closed,
    /// Edge-on, turning toward the front
    HalfOpen,
    /// Front showing, flat
    Open,
    /// Edge-on, turning toward the back
    HalfClosed,
}

impl FlipStage {
    const ALL: [FlipStage; 4] = [
        FlipStage::Closed,
        FlipStage::HalfOpen,
        FlipStage::Open,
        FlipStage::HalfClosed,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// A flip can only begin from a flat stage
    pub fn is_at_rest(self) -> bool {
        matches!(self, FlipStage::Closed | FlipStage::Open)
    }
}

/// Corner offsets applied when leaving each stage, as signs on
/// `(w/2, h/10)` for the corners in quad order
/// (bottom-left, bottom-right, top-right, top-left).
const FLIP_OFFSETS: [[[f32; 2]; 4]; 4] = [
    [[1.0, 1.0], [-1.0, -1.0], [-1.0, 1.0], [1.0, -1.0]],
    [[1.0, -1.0], [-1.0, 1.0], [-1.0, -1.0], [1.0, 1.0]],
    [[-1.0, 1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, -1.0]],
    [[-1.0, -1.0], [1.0, 1.0], [1.0, -1.0], [-1.0, 1.0]],
];

/// Which half of a flip is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlipProgress {
    #[default]
    Idle,
    FirstHalf,
    SecondHalf,
}

/// Per-card flip animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flip {
    stage: FlipStage,
    progress: FlipProgress,
    front_visible: bool,
}

impl Flip {
    pub fn stage(&self) -> FlipStage {
        self.stage
    }

    pub fn progress(&self) -> FlipProgress {
        self.progress
    }

    pub fn is_animating(&self) -> bool {
        self.progress != FlipProgress::Idle
    }

    /// Whether the renderer should draw the front face and picture
    pub fn front_visible(&self) -> bool {
        self.front_visible
    }

    /// Begin a flip. Returns false when the flip is refused.
    pub fn start(&mut self) -> bool {
        if self.is_animating() {
            log::error!("Memory: cancel flip, already animating");
            return false;
        }
        if !self.stage.is_at_rest() {
            return false;
        }
        log::info!("Memory: started flip from {:?}", self.stage);
        self.stage = self.stage.next();
        self.progress = FlipProgress::FirstHalf;
        true
    }

    /// Midpoint: swap the visible face and head for the next flat stage
    pub fn half(&mut self) -> bool {
        if self.progress != FlipProgress::FirstHalf {
            return false;
        }
        log::debug!("Memory: flip half");
        self.front_visible = self.stage == FlipStage::HalfOpen;
        self.stage = self.stage.next();
        self.progress = FlipProgress::SecondHalf;
        true
    }

    pub fn complete(&mut self) -> bool {
        if self.progress != FlipProgress::SecondHalf {
            return false;
        }
        log::debug!("Memory: flip complete, stage: {:?}", self.stage);
        self.progress = FlipProgress::Idle;
        true
    }

    /// Quad corners for the current stage, in the order
    /// bottom-left, bottom-right, top-right, top-left of the flat card
    pub fn quad_points(&self, rect: Rect) -> [Vec2; 4] {
        quad_points(rect, self.stage)
    }
}

/// Quad corners of `rect` rotated to `stage`
pub fn quad_points(rect: Rect, stage: FlipStage) -> [Vec2; 4] {
    let mut points = rect.corners();
    let offset = Vec2::new(rect.size.x / 2.0, rect.size.y / 10.0);

    for signs in FLIP_OFFSETS.iter().take(stage.index()) {
        for (point, sign) in points.iter_mut().zip(signs) {
            *point += offset * Vec2::from_array(*sign);
        }
    }
    points
}

/// Split a flip duration into its two halves so they add back up exactly
pub fn split_duration(flip: Duration) -> (Duration, Duration) {
    let first = flip / 2;
    (first, flip - first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_rect() -> Rect {
        Rect::new(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0))
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_full_flip_cycle() {
        let mut flip = Flip::default();
        assert_eq!(flip.stage(), FlipStage::Closed);

        assert!(flip.start());
        assert_eq!(flip.stage(), FlipStage::HalfOpen);
        assert!(!flip.front_visible());

        assert!(flip.half());
        assert_eq!(flip.stage(), FlipStage::Open);
        assert!(flip.front_visible());

        assert!(flip.complete());
        assert!(!flip.is_animating());

        // And back down
        assert!(flip.start());
        assert_eq!(flip.stage(), FlipStage::HalfClosed);
        assert!(flip.half());
        assert!(!flip.front_visible());
        assert!(flip.complete());
        assert_eq!(flip.stage(), FlipStage::Closed);
    }

    #[test]
    fn test_refuses_flip_while_animating() {
        let mut flip = Flip::default();
        assert!(flip.start());
        assert!(!flip.start());
        assert!(flip.half());
        assert!(!flip.start());
        assert_eq!(flip.stage(), FlipStage::Open);
    }

    #[test]
    fn test_out_of_order_steps_are_ignored() {
        let mut flip = Flip::default();
        assert!(!flip.half());
        assert!(!flip.complete());
        flip.start();
        assert!(!flip.complete());
        assert_eq!(flip.progress(), FlipProgress::FirstHalf);
    }

    #[test]
    fn test_closed_quad_is_the_rect() {
        let rect = card_rect();
        assert_eq!(quad_points(rect, FlipStage::Closed), rect.corners());
    }

    #[test]
    fn test_half_open_quad_is_edge_on() {
        let points = quad_points(card_rect(), FlipStage::HalfOpen);
        // All corners collapse onto the vertical centre line
        for p in points {
            assert!((p.x - 60.0).abs() < 1e-4);
        }
        // With the perspective skew on the heights
        assert!(approx(points[0], Vec2::new(60.0, 25.0)));
        assert!(approx(points[1], Vec2::new(60.0, 15.0)));
    }

    #[test]
    fn test_open_quad_is_mirrored_rect() {
        let rect = card_rect();
        let [bl, br, tr, tl] = rect.corners();
        let points = quad_points(rect, FlipStage::Open);
        assert!(approx(points[0], br));
        assert!(approx(points[1], bl));
        assert!(approx(points[2], tl));
        assert!(approx(points[3], tr));
    }

    #[test]
    fn test_offsets_cancel_over_a_cycle() {
        for corner in 0..4 {
            for axis in 0..2 {
                let sum: f32 = FLIP_OFFSETS.iter().map(|s| s[corner][axis]).sum();
                assert_eq!(sum, 0.0);
            }
        }
    }

    #[test]
    fn test_split_duration_is_exact() {
        let flip = Duration::from_millis(201);
        let (a, b) = split_duration(flip);
        assert_eq!(a + b, flip);
    }
}
