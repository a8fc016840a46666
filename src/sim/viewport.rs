//! Coordinate spaces
//!
//! - screen: origin top-left, pixels (pointer events)
//! - absolute: origin at canvas center, pixels (simulation space)
//! - viewport: origin at canvas center, normalized to [-1, 1]
//!
//! +y points down in all three.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bbox::BoundingBox;
use crate::consts::ASPECT_RATIO;
use crate::math::div_or_keep;

/// Canvas geometry and the conversions between coordinate spaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Viewport {
    size: Vec2,
    center: Vec2,
    aspect_ratio: f32,
    /// Visible area in absolute coordinates
    screen_bbox: BoundingBox,
}

impl Viewport {
    /// Viewport for a canvas `width` pixels wide at the default aspect ratio
    pub fn new(width: f32) -> Self {
        Self::with_aspect_ratio(width, ASPECT_RATIO)
    }

    pub fn with_aspect_ratio(width: f32, aspect_ratio: f32) -> Self {
        let mut viewport = Self {
            size: Vec2::ZERO,
            center: Vec2::ZERO,
            aspect_ratio,
            screen_bbox: BoundingBox::new(0.0, 0.0),
        };
        viewport.resize(width);
        viewport
    }

    /// Recompute canvas geometry; height always follows from width
    pub fn resize(&mut self, width: f32) {
        let height = width / self.aspect_ratio;
        self.size = Vec2::new(width, height);
        self.center = (self.size / 2.0).floor();
        self.screen_bbox.set_offset(width, height);

        if self.center.x == 0.0 || self.center.y == 0.0 {
            log::warn!("Degenerate canvas size {}x{}, viewport conversions frozen", width, height);
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    #[inline]
    pub fn screen_bbox(&self) -> &BoundingBox {
        &self.screen_bbox
    }

    /// `[0, width]` -> `[-half_width, half_width]`
    #[inline]
    pub fn screen_to_absolute(&self, screen: Vec2) -> Vec2 {
        screen - self.center
    }

    /// Absolute pixels -> `[-1, 1]` (unchanged on a degenerate canvas)
    #[inline]
    pub fn absolute_to_viewport(&self, absolute: Vec2) -> Vec2 {
        div_or_keep(absolute, self.center)
    }

    /// `[-1, 1]` -> absolute pixels
    #[inline]
    pub fn viewport_to_absolute(&self, viewport: Vec2) -> Vec2 {
        viewport * self.center
    }

    /// Whether an absolute position lies strictly inside the visible canvas
    #[inline]
    pub fn is_visible(&self, absolute: Vec2) -> bool {
        self.screen_bbox.contains_absolute(absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_keeps_aspect_ratio() {
        let viewport = Viewport::new(1600.0);
        assert_eq!(viewport.size(), Vec2::new(1600.0, 900.0));
        assert_eq!(viewport.center(), Vec2::new(800.0, 450.0));
    }

    #[test]
    fn test_center_is_floored() {
        let viewport = Viewport::with_aspect_ratio(101.0, 1.0);
        assert_eq!(viewport.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_round_trip_conversions() {
        let viewport = Viewport::new(1600.0);
        let abs = viewport.screen_to_absolute(Vec2::new(1200.0, 225.0));
        assert_eq!(abs, Vec2::new(400.0, -225.0));
        let vp = viewport.absolute_to_viewport(abs);
        assert_eq!(vp, Vec2::new(0.5, -0.5));
        assert_eq!(viewport.viewport_to_absolute(vp), abs);
    }

    #[test]
    fn test_degenerate_canvas_freezes_conversion() {
        let viewport = Viewport::new(0.0);
        let p = Vec2::new(12.0, -3.0);
        assert_eq!(viewport.absolute_to_viewport(p), p);
    }

    #[test]
    fn test_visibility_is_strict() {
        let viewport = Viewport::new(1600.0);
        assert!(viewport.is_visible(Vec2::ZERO));
        assert!(viewport.is_visible(Vec2::new(-799.0, 449.0)));
        assert!(!viewport.is_visible(Vec2::new(-800.0, 0.0)));
        assert!(!viewport.is_visible(Vec2::new(0.0, 450.0)));
    }
}
