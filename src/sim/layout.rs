//! Grid layout and hit-testing for the card table
//!
//! Layout units have their origin at the bottom-left of the board, y up.
//! Cards fill the grid row by row starting from the top-left.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Corners in quad order: bottom-left, bottom-right, top-right, top-left
    pub fn corners(&self) -> [Vec2; 4] {
        let max = self.max();
        [
            self.min,
            Vec2::new(max.x, self.min.y),
            max,
            Vec2::new(self.min.x, max.y),
        ]
    }

    /// Edges are inclusive
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }
}

/// Evenly spaced card grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: usize,
    pub padding: f32,
    pub spacing: f32,
}

impl GridLayout {
    pub fn rows_for(&self, card_count: usize) -> usize {
        card_count.div_ceil(self.columns.max(1))
    }

    /// Rectangles for `card_count` cards inside a board of `area`
    pub fn arrange(&self, card_count: usize, area: Vec2) -> Vec<Rect> {
        let columns = self.columns.max(1);
        let rows = self.rows_for(card_count).max(1);

        let inner = area - Vec2::splat(2.0 * self.padding);
        let gaps = Vec2::new((columns - 1) as f32, (rows - 1) as f32) * self.spacing;
        let cell = ((inner - gaps) / Vec2::new(columns as f32, rows as f32)).max(Vec2::ZERO);

        (0..card_count)
            .map(|i| {
                let col = (i % columns) as f32;
                let row = (i / columns) as f32;
                let x = self.padding + col * (cell.x + self.spacing);
                // Row 0 is the top row
                let y = area.y - self.padding - cell.y - row * (cell.y + self.spacing);
                Rect::new(Vec2::new(x, y), cell)
            })
            .collect()
    }
}

/// Index of the rectangle containing `point`, if any
pub fn hit_test(rects: &[Rect], point: Vec2) -> Option<usize> {
    rects.iter().position(|r| r.contains_point(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridLayout {
        GridLayout {
            columns: 4,
            padding: 10.0,
            spacing: 10.0,
        }
    }

    #[test]
    fn test_arrange_fills_rows_from_top_left() {
        let rects = grid().arrange(8, Vec2::new(450.0, 230.0));
        assert_eq!(rects.len(), 8);

        // (450 - 20 - 30) / 4 = 100 wide, (230 - 20 - 10) / 2 = 100 tall
        assert_eq!(rects[0].size, Vec2::new(100.0, 100.0));
        assert_eq!(rects[0].min, Vec2::new(10.0, 120.0));
        assert_eq!(rects[3].min, Vec2::new(340.0, 120.0));
        assert_eq!(rects[4].min, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_partial_last_row() {
        let layout = grid();
        assert_eq!(layout.rows_for(6), 2);
        assert_eq!(layout.rows_for(8), 2);
        assert_eq!(layout.rows_for(9), 3);
        assert_eq!(layout.arrange(6, Vec2::new(400.0, 400.0)).len(), 6);
    }

    #[test]
    fn test_hit_test() {
        let rects = grid().arrange(8, Vec2::new(450.0, 230.0));
        assert_eq!(hit_test(&rects, Vec2::new(60.0, 170.0)), Some(0));
        assert_eq!(hit_test(&rects, Vec2::new(440.0, 20.0)), Some(7));
        // Gap between cards
        assert_eq!(hit_test(&rects, Vec2::new(115.0, 170.0)), None);
        // Outside the board
        assert_eq!(hit_test(&rects, Vec2::new(-5.0, -5.0)), None);
    }

    #[test]
    fn test_rect_corners_and_center() {
        let rect = Rect::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
        assert_eq!(rect.center(), Vec2::new(3.0, 5.0));
        assert_eq!(rect.corners()[2], Vec2::new(5.0, 8.0));
        assert!(rect.contains_point(Vec2::new(5.0, 8.0)));
        assert!(!rect.contains_point(Vec2::new(5.1, 8.0)));
    }
}
