//! Zombies: walking lane movement and the death flight
//!
//! A zombie is created walking at a fixed depth and either crosses the screen
//! or gets shot. Shooting switches it to `Dying` for good: it is launched,
//! falls under gravity and recedes from the viewer until it leaves the screen
//! and the coordinator despawns it.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use super::bbox::BoundingBox;
use super::random::RandomSource;
use crate::consts::*;
use crate::math::from_angle;

/// Stable zombie identity (allocation order)
pub type ZombieId = u32;

/// Floor for the depth used as the fly-away reference, so depth 0 still shrinks
const MIN_FLY_REFERENCE: f32 = 0.01;

/// Zombie lifecycle. There is no way back from `Dying`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZombieState {
    Walking,
    /// Launched after a kill; removed once it leaves the screen
    Dying {
        elapsed: f32,
        fly_velocity: Vec2,
        fly_depth: f32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    pub id: ZombieId,
    /// Absolute position (sprite center)
    pub pos: Vec2,
    /// How far from the viewer, in `[0, 1)`. Fixed at spawn.
    depth: f32,
    pub scale: f32,
    pub rotation: f32,
    /// Base speed in pixels/s, before modulation and depth scaling
    pub walking_speed: f32,
    /// Amplitude of the speed modulation (fraction of base speed)
    pub walking_random_scale: f32,
    /// Angular frequency of the speed modulation (rad/s)
    pub walking_random_period: f32,
    /// Amplitude of the stagger rotation (radians)
    pub walking_wobble_scale: f32,
    /// Score for killing this zombie
    pub points: u64,
    /// Distance walked so far; drives the walk cycle and stagger
    pub walk_distance: f32,
    /// Time alive (seconds)
    pub total_time: f32,
    pub state: ZombieState,
}

impl Zombie {
    pub fn new(id: ZombieId, pos: Vec2, depth: f32, walking_speed: f32, points: u64) -> Self {
        let depth = depth.clamp(0.0, 1.0 - f32::EPSILON);
        Self {
            id,
            pos,
            depth,
            scale: 1.0 - depth,
            rotation: 0.0,
            walking_speed,
            walking_random_scale: 0.3,
            walking_random_period: 2.3,
            walking_wobble_scale: 0.1,
            points,
            walk_distance: 0.0,
            total_time: 0.0,
            state: ZombieState::Walking,
        }
    }

    /// Shared hit box in unscaled sprite pixels
    pub fn bbox() -> BoundingBox {
        BoundingBox::new(ZOMBIE_BBOX_WIDTH, ZOMBIE_BBOX_HEIGHT)
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        matches!(self.state, ZombieState::Dying { .. })
    }

    /// Current fly-away depth, if dying
    pub fn fly_depth(&self) -> Option<f32> {
        match self.state {
            ZombieState::Dying { fly_depth, .. } => Some(fly_depth),
            ZombieState::Walking => None,
        }
    }

    /// Instantaneous walking speed: base speed modulated by two sinusoids of
    /// time alive so a crowd doesn't march in lockstep
    pub fn current_speed(&self) -> f32 {
        let t = self.total_time;
        let period = self.walking_random_period;
        let modulation = (t * period).sin() * self.walking_random_scale
            + (t * period * 1.38).cos() * self.walking_random_scale * 0.6;
        self.walking_speed * (modulation + 1.0)
    }

    /// Stagger rotation derived from the distance walked
    pub fn walking_wobble_rotation(&self) -> f32 {
        let t = self.walk_distance / 1000.0;
        (t * self.walking_speed).sin() * self.walking_wobble_scale * (t.sin() + t.cos() * 0.43)
    }

    /// Walk-cycle frame (the sprite atlas wraps it to the frame count)
    pub fn walk_frame(&self) -> usize {
        (self.walk_distance / ZOMBIE_WALK_STEP).floor().max(0.0) as usize
    }

    pub fn update(&mut self, dt: f32) {
        self.total_time += dt;
        let fly_reference = self.fly_reference();

        match self.state {
            ZombieState::Walking => {
                self.scale = 1.0 - self.depth;
                let step = self.current_speed() * dt;
                self.walk_distance += step;
                // Further back walks slower on screen
                self.pos.x -= step * self.scale;
                self.rotation = self.walking_wobble_rotation();
            }
            ZombieState::Dying {
                ref mut elapsed,
                ref mut fly_velocity,
                ref mut fly_depth,
            } => {
                *elapsed += dt;
                fly_velocity.y += ZOMBIE_GRAVITY * dt;
                self.pos += *fly_velocity * dt * self.scale;
                *fly_depth += ZOMBIE_FLY_DEPTH_RATE * dt;
                self.scale = fly_reference / *fly_depth;
                self.rotation += ZOMBIE_SPIN * dt;
            }
        }
    }

    /// Kill the zombie and launch it. Returns false if it was already dead.
    pub fn die(&mut self, rng: &mut dyn RandomSource) -> bool {
        if self.is_dead() {
            return false;
        }
        // Angles around π point up with the (sin, cos) convention
        let angle = rng.range(0.75 * PI, 1.25 * PI);
        let scale = 1.0 - self.depth;
        self.state = ZombieState::Dying {
            elapsed: 0.0,
            fly_velocity: from_angle(angle) * ZOMBIE_LAUNCH_SPEED,
            // Chosen so depth / fly_depth picks up exactly where walking left off
            fly_depth: self.fly_reference() / scale,
        };
        self.scale = scale;
        true
    }

    /// Hit test against the hit box at the current visual scale. Dying
    /// zombies stay hittable until they are despawned.
    pub fn is_hit(&self, point: Vec2) -> bool {
        Self::bbox().contains_scaled(self.pos, self.scale, point)
    }

    fn fly_reference(&self) -> f32 {
        self.depth.max(MIN_FLY_REFERENCE)
    }
}
