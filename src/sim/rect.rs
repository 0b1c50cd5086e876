//! Axis-aligned rectangle geometry for the ball, paddles and sprites
//!
//! A rectangle is stored by its center and size:
//! - left/right = center.x ∓ width/2
//! - top/bottom = center.y ∓ height/2 (y grows downward)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in playfield units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center position (mutable as the entity moves)
    pub center: Vec2,
    /// Full width and height (fixed per entity)
    size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Build from the top-left corner, the way sprites are laid out
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left + size / 2.0, size)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    pub fn top_left(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    /// Standard AABB test: overlap iff both axis projections intersect.
    /// Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_extents() + other.half_extents();
        delta.x < reach.x && delta.y < reach.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_follow_center() {
        let mut rect = Rect::new(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(rect.left(), 90.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.top(), 45.0);
        assert_eq!(rect.bottom(), 55.0);

        rect.center.x += 5.0;
        assert_eq!(rect.left(), 95.0);
        assert_eq!(rect.width(), 20.0);
    }

    #[test]
    fn test_from_top_left() {
        let rect = Rect::from_top_left(Vec2::ZERO, Vec2::new(640.0, 480.0));
        assert_eq!(rect.center, Vec2::new(320.0, 240.0));
        assert_eq!(rect.top_left(), Vec2::ZERO);
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(8.0, 3.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_needs_both_axes() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        // Overlaps on x only
        let b = Rect::new(Vec2::new(5.0, 30.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
        // Overlaps on y only
        let c = Rect::new(Vec2::new(30.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }
}
