//! Render transforms
//!
//! A transform is built relative to an origin (normally the canvas center):
//! a translation to the target position, then rotation, then uniform scale.
//! Rotation and scale multiply into the linear part; the translation is kept
//! separately and is unaffected by them.

use glam::{Affine2, Mat2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    origin: Vec2,
    matrix: Mat2,
    position: Vec2,
}

impl RenderTransform {
    /// Identity transform around `origin`
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            matrix: Mat2::IDENTITY,
            position: Vec2::ZERO,
        }
    }

    pub fn position_of(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn rotation_of(mut self, rotation: f32) -> Self {
        self.matrix *= Mat2::from_angle(rotation);
        self
    }

    pub fn scale_of(mut self, scale: f32) -> Self {
        self.matrix *= scale;
        self
    }

    /// Scale so a frame `frame_height` pixels tall fills `canvas_height`.
    /// A zero-height frame leaves the transform unscaled.
    pub fn fit_height(self, canvas_height: f32, frame_height: f32) -> Self {
        if frame_height == 0.0 {
            log::warn!("Cannot fit a zero-height frame to the canvas");
            return self;
        }
        self.scale_of(canvas_height / frame_height)
    }

    /// Canvas-space affine: origin, then position, then the linear part
    pub fn to_affine(&self) -> Affine2 {
        Affine2::from_mat2_translation(self.matrix, self.origin + self.position)
    }

    /// Map a local point into canvas pixels
    pub fn apply(&self, local: Vec2) -> Vec2 {
        self.to_affine().transform_point2(local)
    }
}
