//! Game tuning
//!
//! Everything that shapes a session (lives, costs, spawn pacing, overlay font)
//! lives here so it can be swapped with a JSON file instead of a rebuild.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Player ===
    /// Lives at the start of a session
    pub starting_lives: u32,
    /// Score at the start of a session (shots cost score, so this is ammo too)
    pub starting_score: u64,
    /// Score deducted for every shot, hit or miss
    pub shot_cost: u64,

    // === Zombies ===
    /// Score awarded for a kill
    pub zombie_points: u64,
    /// Base walking speed (pixels/s before depth scaling)
    pub walking_speed_base: f32,
    /// Extra walking speed sampled uniformly on top of the base
    pub walking_speed_variation: f32,

    // === Spawning ===
    /// Base time between spawns (seconds)
    pub spawn_period: f32,
    /// Spawn period jitter multiplier range `[min, max)`
    pub spawn_jitter: (f32, f32),
    /// Number of discrete depth/height lanes zombies spawn into
    pub spawn_bands: u32,

    // === HUD ===
    pub font_name: String,
    pub font_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            starting_score: 10,
            shot_cost: 1,

            zombie_points: 10,
            walking_speed_base: 100.0,
            walking_speed_variation: 100.0,

            spawn_period: 0.5,
            spawn_jitter: (0.8, 1.5),
            spawn_bands: 16,

            font_name: "Pixelify Sans".to_string(),
            font_size: 60.0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject tunings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.starting_lives == 0 {
            return Err(SettingsError::Invalid("starting_lives must be at least 1".into()));
        }
        if self.spawn_bands == 0 {
            return Err(SettingsError::Invalid("spawn_bands must be at least 1".into()));
        }
        if !(self.spawn_period > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "spawn_period must be positive, got {}",
                self.spawn_period
            )));
        }
        let (lo, hi) = self.spawn_jitter;
        if !(lo > 0.0 && lo <= hi) {
            return Err(SettingsError::Invalid(format!(
                "spawn_jitter must satisfy 0 < min <= max, got ({lo}, {hi})"
            )));
        }
        if self.walking_speed_base < 0.0 || self.walking_speed_variation < 0.0 {
            return Err(SettingsError::Invalid("walking speeds must not be negative".into()));
        }
        if !(self.font_size > 0.0) {
            return Err(SettingsError::Invalid("font_size must be positive".into()));
        }
        Ok(())
    }
}
