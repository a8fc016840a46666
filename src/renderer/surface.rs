//! Draw surface abstraction

use glam::{Affine2, Vec2};

/// Radial-gradient stroke used for spark trails
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Gradient center, in the same space as the line endpoints
    pub center: Vec2,
    pub radius: f32,
    pub inner: [f32; 4],
    pub outer: [f32; 4],
    pub width: f32,
}

/// Something the scene can be drawn onto. Each call applies `transform`
/// for that draw only.
pub trait DrawSurface {
    type Bitmap;

    /// Current size in pixels
    fn size(&self) -> Vec2;

    fn bitmap_size(&self, bitmap: &Self::Bitmap) -> Vec2;

    /// Draw a bitmap centred on the transformed origin
    fn draw_image(&mut self, bitmap: &Self::Bitmap, transform: Affine2);

    /// Draw text centred on the transformed origin
    fn draw_text(&mut self, text: &str, color: [f32; 4], font: &str, size: f32, transform: Affine2);

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle, transform: Affine2);
}

/// Top-left corner that centres a bitmap of `size` on the origin
#[inline]
pub fn centered_corner(size: Vec2) -> Vec2 {
    -(size / 2.0).floor()
}
