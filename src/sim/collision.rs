//! Axis-aligned box overlap tests
//!
//! The bullet is a circle but collides through its enclosing square, which is
//! how the wall and the target see it too.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square enclosing a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            size: Vec2::splat(radius * 2.0),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        let lo = self.min.max(other.min);
        let hi = self.max().min(other.max());
        lo.x < hi.x && lo.y < hi.y
    }
}

/// Check the bullet circle's bounding box against a rectangle
#[inline]
pub fn ball_rect_overlap(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> bool {
    Rect::around_circle(ball_pos, ball_radius).intersects(rect)
}

/// Whether a point has left the playfield
///
/// Only the floor and the side walls count; a shot may go above the top edge
/// and come back down.
#[inline]
pub fn out_of_bounds(pos: Vec2, width: f32, height: f32) -> bool {
    pos.y > height || pos.x < 0.0 || pos.x > width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_inside() {
        let target = Rect::new(Vec2::new(420.0, 545.0), Vec2::new(55.0, 55.0));
        assert!(ball_rect_overlap(Vec2::new(440.0, 560.0), 10.0, &target));
    }

    #[test]
    fn test_overlap_touching_edge_is_not_hit() {
        let wall = Rect::new(Vec2::new(400.0, 500.0), Vec2::new(32.0, 100.0));
        // Bullet box spans [380, 400] on x: shares the wall's left edge only
        assert!(!ball_rect_overlap(Vec2::new(390.0, 550.0), 10.0, &wall));
        assert!(ball_rect_overlap(Vec2::new(390.5, 550.0), 10.0, &wall));
    }

    #[test]
    fn test_overlap_miss() {
        let wall = Rect::new(Vec2::new(400.0, 500.0), Vec2::new(32.0, 100.0));
        // Well above the wall
        assert!(!ball_rect_overlap(Vec2::new(416.0, 300.0), 10.0, &wall));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(out_of_bounds(Vec2::new(810.0, 300.0), 800.0, 600.0));
        assert!(out_of_bounds(Vec2::new(-1.0, 300.0), 800.0, 600.0));
        assert!(out_of_bounds(Vec2::new(100.0, 601.0), 800.0, 600.0));
        // Above the screen is still in play
        assert!(!out_of_bounds(Vec2::new(100.0, -200.0), 800.0, 600.0));
        assert!(!out_of_bounds(Vec2::new(800.0, 600.0), 800.0, 600.0));
    }
}
