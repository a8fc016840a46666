//! Axis-aligned bounding boxes
//!
//! A box only stores its half extents; the center is supplied per test so one
//! box can be shared by every entity of a kind.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box described by its half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    half_extents: Vec2,
}

impl BoundingBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            half_extents: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Resize the box (the screen box follows the canvas)
    pub fn set_offset(&mut self, width: f32, height: f32) {
        self.half_extents = Vec2::new(width / 2.0, height / 2.0);
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    /// Strict containment: points on an edge are outside
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        point_in_offset_area(center, self.half_extents, point)
    }

    /// Containment for a box centered on the origin
    pub fn contains_absolute(&self, point: Vec2) -> bool {
        self.contains(Vec2::ZERO, point)
    }

    /// Containment with the half extents scaled (visually scaled sprites)
    pub fn contains_scaled(&self, center: Vec2, scale: f32, point: Vec2) -> bool {
        point_in_offset_area(center, self.half_extents * scale, point)
    }
}

#[inline]
fn point_in_offset_area(center: Vec2, half: Vec2, point: Vec2) -> bool {
    let upper = center + half;
    let lower = center - half;
    lower.x < point.x && point.x < upper.x && lower.y < point.y && point.y < upper.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges_are_outside() {
        let bbox = BoundingBox::new(100.0, 50.0);
        let c = Vec2::new(10.0, 10.0);
        assert!(bbox.contains(c, c));
        assert!(!bbox.contains(c, Vec2::new(60.0, 10.0)));
        assert!(!bbox.contains(c, Vec2::new(-40.0, 10.0)));
        assert!(!bbox.contains(c, Vec2::new(10.0, 35.0)));
        assert!(!bbox.contains(c, Vec2::new(10.0, -15.0)));
        assert!(bbox.contains(c, Vec2::new(59.9, 34.9)));
    }

    #[test]
    fn test_scaled_containment() {
        let bbox = BoundingBox::new(160.0, 310.0);
        let c = Vec2::ZERO;
        let p = Vec2::new(50.0, 0.0);
        assert!(bbox.contains_scaled(c, 1.0, p));
        // Half width shrinks to 40 at scale 0.5
        assert!(!bbox.contains_scaled(c, 0.5, p));
    }

    #[test]
    fn test_set_offset() {
        let mut bbox = BoundingBox::new(10.0, 10.0);
        bbox.set_offset(1920.0, 1080.0);
        assert_eq!(bbox.half_extents(), Vec2::new(960.0, 540.0));
        assert!(bbox.contains_absolute(Vec2::new(959.0, -539.0)));
        assert!(!bbox.contains_absolute(Vec2::new(-960.0, 0.0)));
    }

    proptest! {
        #[test]
        fn prop_interior_points_inside(
            cx in -500.0f32..500.0, cy in -500.0f32..500.0,
            hw in 1.0f32..300.0, hh in 1.0f32..300.0,
            fx in -0.99f32..0.99, fy in -0.99f32..0.99,
        ) {
            let bbox = BoundingBox::new(hw * 2.0, hh * 2.0);
            let c = Vec2::new(cx, cy);
            let p = Vec2::new(cx + hw * fx, cy + hh * fy);
            prop_assert!(bbox.contains(c, p));
        }

        #[test]
        fn prop_edge_points_outside(
            hw in 1.0f32..300.0, hh in 1.0f32..300.0,
            t in -1.0f32..1.0, side in 0u8..4,
        ) {
            let bbox = BoundingBox::new(hw * 2.0, hh * 2.0);
            let half = bbox.half_extents();
            let p = match side {
                0 => Vec2::new(half.x, half.y * t),
                1 => Vec2::new(-half.x, half.y * t),
                2 => Vec2::new(half.x * t, half.y),
                _ => Vec2::new(half.x * t, -half.y),
            };
            prop_assert!(!bbox.contains_absolute(p));
        }
    }
}
