//! Rendering module
//!
//! The scene is drawn through the [`DrawSurface`] trait: every draw call
//! carries its own affine transform, so nothing leaks from one draw into the
//! next. The browser back end lives in `platform`; [`HeadlessSurface`] records
//! commands for the native runner and tests.

pub mod headless;
pub mod scene;
pub mod sprites;
pub mod surface;
pub mod transform;

pub use headless::{DrawCommand, HeadlessBitmap, HeadlessSurface, headless_atlas};
pub use scene::render_frame;
pub use sprites::{FrameLayout, FrameRect, SpriteAtlas, SpriteId};
pub use surface::{DrawSurface, LineStyle};
pub use transform::RenderTransform;

/// Colors as RGBA in `[0, 1]`
pub mod colors {
    const fn rgba(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
    }

    pub const SPARK_INNER: [f32; 4] = rgba(214, 176, 107, 1.0);
    pub const SPARK_OUTER: [f32; 4] = rgba(214, 176, 107, 0.1);

    /// Bottom to top colors of layered text (score and screen cards)
    pub const TEXT_LAYERS: [[f32; 4]; 12] = [
        rgba(0x31, 0x2C, 0x33, 1.0),
        rgba(0x41, 0x30, 0x47, 1.0),
        rgba(0x69, 0x3A, 0x7A, 1.0),
        rgba(0x41, 0x30, 0x47, 1.0),
        rgba(0x69, 0x3A, 0x7A, 1.0),
        rgba(0x8C, 0x2F, 0xAD, 1.0),
        rgba(0x69, 0x3A, 0x7A, 1.0),
        rgba(0x8C, 0x2F, 0xAD, 1.0),
        rgba(0xA9, 0x0F, 0xE0, 1.0),
        rgba(0x8C, 0x2F, 0xAD, 1.0),
        rgba(0xA9, 0x0F, 0xE0, 1.0),
        rgba(0xFF, 0xFF, 0xFF, 1.0),
    ];

    /// CSS `rgba(...)` string for a color
    pub fn to_css(color: [f32; 4]) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(color[0]),
            channel(color[1]),
            channel(color[2]),
            color[3].clamp(0.0, 1.0)
        )
    }

}
