//! Sprite atlas
//!
//! Sprites are registered before loading and filled in once their image is
//! ready. Frame lookups on a sprite that is missing or still loading fail with
//! an [`AssetError`] instead of drawing garbage.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Backdrop,
    Heart,
    Zombie,
    Crosshair,
}

impl SpriteId {
    pub const ALL: [SpriteId; 4] = [
        SpriteId::Backdrop,
        SpriteId::Heart,
        SpriteId::Zombie,
        SpriteId::Crosshair,
    ];

    /// Image path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            SpriteId::Backdrop => "res/sprite/backdrop.png",
            SpriteId::Heart => "res/sprite/heart.png",
            SpriteId::Zombie => "res/sprite/zombie.png",
            SpriteId::Crosshair => "res/sprite/crosshair.png",
        }
    }

    /// How frames are cut out of the image
    pub fn layout(&self) -> FrameLayout {
        match self {
            SpriteId::Backdrop | SpriteId::Crosshair => FrameLayout::Full,
            SpriteId::Heart => FrameLayout::Row {
                origin: Vec2::ZERO,
                size: Vec2::new(90.0, 90.0),
                count: 2,
            },
            SpriteId::Zombie => FrameLayout::Row {
                origin: Vec2::ZERO,
                size: Vec2::new(200.0, 312.0),
                count: 10,
            },
        }
    }
}

/// Source rectangle of one frame, in image pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub origin: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameLayout {
    /// The whole image is a single frame
    Full,
    /// `count` equally sized frames left to right
    Row { origin: Vec2, size: Vec2, count: usize },
}

impl FrameLayout {
    pub fn rects(&self, image_size: Vec2) -> Vec<FrameRect> {
        match *self {
            FrameLayout::Full => vec![FrameRect {
                origin: Vec2::ZERO,
                size: image_size,
            }],
            FrameLayout::Row { origin, size, count } => (0..count)
                .map(|i| FrameRect {
                    origin: origin + Vec2::new(size.x * i as f32, 0.0),
                    size,
                })
                .collect(),
        }
    }

    /// Smallest image that holds every frame (`None` for full-image layouts)
    pub fn image_size(&self) -> Option<Vec2> {
        match *self {
            FrameLayout::Full => None,
            FrameLayout::Row { origin, size, count } => {
                Some(origin + Vec2::new(size.x * count as f32, size.y))
            }
        }
    }
}

#[derive(Debug, Clone)]
enum SpriteSlot<B> {
    Loading,
    Loaded(Vec<B>),
}

/// Frames for every sprite, keyed by id
#[derive(Debug, Clone)]
pub struct SpriteAtlas<B> {
    sprites: HashMap<SpriteId, SpriteSlot<B>>,
}

impl<B> Default for SpriteAtlas<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> SpriteAtlas<B> {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Register a sprite whose frames are on their way
    pub fn mark_loading(&mut self, id: SpriteId) {
        self.sprites.insert(id, SpriteSlot::Loading);
    }

    /// Store the frames of a loaded sprite
    pub fn insert_loaded(&mut self, id: SpriteId, frames: Vec<B>) -> Result<(), AssetError> {
        if frames.is_empty() {
            return Err(AssetError::EmptySprite(id));
        }
        log::debug!("Sprite {:?} loaded with {} frame(s)", id, frames.len());
        self.sprites.insert(id, SpriteSlot::Loaded(frames));
        Ok(())
    }

    pub fn is_loaded(&self, id: SpriteId) -> bool {
        matches!(self.sprites.get(&id), Some(SpriteSlot::Loaded(_)))
    }

    pub fn all_loaded(&self) -> bool {
        SpriteId::ALL.iter().all(|&id| self.is_loaded(id))
    }

    fn frames(&self, id: SpriteId) -> Result<&[B], AssetError> {
        match self.sprites.get(&id) {
            Some(SpriteSlot::Loaded(frames)) => Ok(frames),
            Some(SpriteSlot::Loading) => Err(AssetError::NotLoaded(id)),
            None => Err(AssetError::UnknownSprite(id)),
        }
    }

    pub fn frame_count(&self, id: SpriteId) -> Result<usize, AssetError> {
        self.frames(id).map(|frames| frames.len())
    }

    /// Frame `index`, wrapped around the sprite's frame count
    pub fn frame(&self, id: SpriteId, index: usize) -> Result<&B, AssetError> {
        let frames = self.frames(id)?;
        if frames.is_empty() {
            return Err(AssetError::EmptySprite(id));
        }
        Ok(&frames[index % frames.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_before_load_fails() {
        let mut atlas: SpriteAtlas<u32> = SpriteAtlas::new();
        assert!(matches!(
            atlas.frame(SpriteId::Zombie, 0),
            Err(AssetError::UnknownSprite(SpriteId::Zombie))
        ));
        atlas.mark_loading(SpriteId::Zombie);
        assert!(matches!(
            atlas.frame(SpriteId::Zombie, 0),
            Err(AssetError::NotLoaded(SpriteId::Zombie))
        ));
    }

    #[test]
    fn test_frames_wrap() {
        let mut atlas = SpriteAtlas::new();
        atlas.insert_loaded(SpriteId::Heart, vec![10, 11]).unwrap();
        assert_eq!(*atlas.frame(SpriteId::Heart, 0).unwrap(), 10);
        assert_eq!(*atlas.frame(SpriteId::Heart, 3).unwrap(), 11);
        assert_eq!(atlas.frame_count(SpriteId::Heart).unwrap(), 2);
        assert!(!atlas.all_loaded());
    }

    #[test]
    fn test_empty_sprite_rejected() {
        let mut atlas: SpriteAtlas<u32> = SpriteAtlas::new();
        assert!(matches!(
            atlas.insert_loaded(SpriteId::Backdrop, Vec::new()),
            Err(AssetError::EmptySprite(SpriteId::Backdrop))
        ));
        assert!(!atlas.is_loaded(SpriteId::Backdrop));
    }

    #[test]
    fn test_row_layout_rects() {
        let rects = SpriteId::Zombie.layout().rects(Vec2::new(2000.0, 312.0));
        assert_eq!(rects.len(), 10);
        assert_eq!(rects[3].origin, Vec2::new(600.0, 0.0));
        assert_eq!(rects[3].size, Vec2::new(200.0, 312.0));
        assert_eq!(SpriteId::Zombie.layout().image_size(), Some(Vec2::new(2000.0, 312.0)));

        let full = FrameLayout::Full.rects(Vec2::new(64.0, 32.0));
        assert_eq!(full, vec![FrameRect { origin: Vec2::ZERO, size: Vec2::new(64.0, 32.0) }]);
    }
}
