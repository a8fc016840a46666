//! Headless draw surface
//!
//! Records every draw call instead of rasterizing it. The native runner uses
//! it to drive full frames without a browser and tests use it to check what
//! was drawn and in which order.

use glam::{Affine2, Vec2};

use super::sprites::{FrameLayout, SpriteAtlas, SpriteId};
use super::surface::{DrawSurface, LineStyle};
use crate::error::AssetError;

/// Stand-in bitmap: which frame it is and how big
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessBitmap {
    pub sprite: SpriteId,
    pub frame: usize,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Image {
        sprite: SpriteId,
        frame: usize,
        transform: Affine2,
    },
    Text {
        text: String,
        color: [f32; 4],
        transform: Affine2,
    },
    Line {
        from: Vec2,
        to: Vec2,
        style: LineStyle,
        transform: Affine2,
    },
}

impl DrawCommand {
    pub fn sprite(&self) -> Option<SpriteId> {
        match self {
            DrawCommand::Image { sprite, .. } => Some(*sprite),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl HeadlessSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand over the recorded frame and start a new one
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for HeadlessSurface {
    type Bitmap = HeadlessBitmap;

    fn size(&self) -> Vec2 {
        self.size
    }

    fn bitmap_size(&self, bitmap: &HeadlessBitmap) -> Vec2 {
        bitmap.size
    }

    fn draw_image(&mut self, bitmap: &HeadlessBitmap, transform: Affine2) {
        self.commands.push(DrawCommand::Image {
            sprite: bitmap.sprite,
            frame: bitmap.frame,
            transform,
        });
    }

    fn draw_text(&mut self, text: &str, color: [f32; 4], _font: &str, _size: f32, transform: Affine2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            color,
            transform,
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &LineStyle, transform: Affine2) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            style: *style,
            transform,
        });
    }
}

/// Image size assumed for sprites whose frames span the whole image
fn stand_in_image_size(id: SpriteId) -> Vec2 {
    match id {
        SpriteId::Backdrop => Vec2::new(1920.0, 1080.0),
        SpriteId::Crosshair => Vec2::new(512.0, 512.0),
        SpriteId::Heart | SpriteId::Zombie => Vec2::ZERO,
    }
}

/// Atlas with every sprite "loaded" as stand-in bitmaps
pub fn headless_atlas() -> Result<SpriteAtlas<HeadlessBitmap>, AssetError> {
    let mut atlas = SpriteAtlas::new();
    for id in SpriteId::ALL {
        let layout = id.layout();
        let image_size = match layout {
            FrameLayout::Full => stand_in_image_size(id),
            FrameLayout::Row { .. } => layout.image_size().unwrap_or(Vec2::ZERO),
        };
        let frames = layout
            .rects(image_size)
            .into_iter()
            .enumerate()
            .map(|(frame, rect)| HeadlessBitmap {
                sprite: id,
                frame,
                size: rect.size,
            })
            .collect();
        atlas.insert_loaded(id, frames)?;
    }
    Ok(atlas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_atlas_is_complete() {
        let atlas = headless_atlas().unwrap();
        assert!(atlas.all_loaded());
        assert_eq!(atlas.frame_count(SpriteId::Zombie).unwrap(), 10);
        assert_eq!(atlas.frame_count(SpriteId::Heart).unwrap(), 2);
        let frame = atlas.frame(SpriteId::Zombie, 13).unwrap();
        assert_eq!(frame.frame, 3);
        assert_eq!(frame.size, Vec2::new(200.0, 312.0));
    }

    #[test]
    fn test_take_commands_resets() {
        let mut surface = HeadlessSurface::new(Vec2::new(1600.0, 900.0));
        surface.draw_text("hi", [1.0; 4], "font", 10.0, Affine2::IDENTITY);
        assert_eq!(surface.take_commands().len(), 1);
        assert!(surface.commands().is_empty());
    }
}
