//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Injected randomness only (seeded PCG or a scripted source)
//! - Stable iteration order (by zombie ID, then by depth bucket)
//! - No rendering or platform dependencies

pub mod bbox;
pub mod buckets;
pub mod crosshair;
pub mod particles;
pub mod random;
pub mod state;
pub mod status;
pub mod tick;
pub mod viewport;
pub mod zombie;

pub use bbox::BoundingBox;
pub use buckets::KeyOrderedMap;
pub use crosshair::Crosshair;
pub use particles::{Particle, ParticleSpace, SparkParticle, SparkSpace};
pub use random::{RandomSource, ScriptedRandom, seeded};
pub use state::{GameEvent, GameState};
pub use status::{PlayerStatus, ScreenCard};
pub use tick::{FrameInput, clamp_frame_dt, tick};
pub use viewport::Viewport;
pub use zombie::{Zombie, ZombieId, ZombieState};
