//! Error types

use thiserror::Error;

use crate::renderer::SpriteId;

/// Sprite lookup failures. Drawing with an unusable sprite is a caller bug,
/// so these are surfaced loudly rather than papered over.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Sprite {0:?} was never registered")]
    UnknownSprite(SpriteId),

    #[error("Sprite {0:?} accessed before it finished loading")]
    NotLoaded(SpriteId),

    #[error("Sprite {0:?} has no frames")]
    EmptySprite(SpriteId),

    #[error("Sprite {id:?} failed to load from {path}")]
    LoadFailed { id: SpriteId, path: String },
}

/// Errors raised while drawing a frame
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}
