//! Zombie Gallery - A depth-layered zombie shooting gallery
//!
//! Core modules:
//! - `math`: Vector helpers on top of `glam::Vec2`
//! - `sim`: Deterministic simulation (entities, spawning, shooting, scoring)
//! - `renderer`: Render transforms, sprite atlas and draw-surface abstraction
//! - `platform`: Browser front end (canvas, input, frame loop)
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod math;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AssetError, RenderError, SettingsError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Canvas aspect ratio; height is always derived from width
    pub const ASPECT_RATIO: f32 = 16.0 / 9.0;
    /// Smallest frame delta fed to the simulation (1 ms)
    pub const MIN_FRAME_DT: f32 = 0.001;
    /// Largest frame delta fed to the simulation (tab switches, debugger stops)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Zombie hit box in unscaled sprite pixels
    pub const ZOMBIE_BBOX_WIDTH: f32 = 160.0;
    pub const ZOMBIE_BBOX_HEIGHT: f32 = 310.0;
    /// Walk distance (pixels) covered by one animation frame
    pub const ZOMBIE_WALK_STEP: f32 = 10.0;
    /// Horizontal spawn coordinate in viewport space (just inside the right edge)
    pub const ZOMBIE_SPAWN_VIEWPORT_X: f32 = 0.99;

    /// Dying zombies: launch speed (pixels/s)
    pub const ZOMBIE_LAUNCH_SPEED: f32 = 900.0;
    /// Dying zombies: gravity (pixels/s², +y is down)
    pub const ZOMBIE_GRAVITY: f32 = 2200.0;
    /// Dying zombies: how fast they fly away from the viewer (depth units/s)
    pub const ZOMBIE_FLY_DEPTH_RATE: f32 = 1.2;
    /// Dying zombies: spin (radians/s)
    pub const ZOMBIE_SPIN: f32 = 7.0;

    /// Spark burst geometry
    pub const SPARK_SPACE_SIZE: f32 = 200.0;
    pub const SPARK_COUNT: usize = 32;
    pub const SPARK_SPEED: f32 = 700.0;
    /// Trail easing factor applied every update
    pub const SPARK_TRAIL_LERP: f32 = 0.2;
    pub const SPARK_GRADIENT_RADIUS: f32 = 100.0;
    pub const SPARK_LINE_WIDTH: f32 = 6.0;
}

/// Snap a unit-range value down onto one of `steps` evenly spaced bands
#[inline]
pub fn step_from_unit_range(n: f32, steps: u32) -> f32 {
    if steps == 0 {
        return 0.0;
    }
    (n * steps as f32).floor() / steps as f32
}
