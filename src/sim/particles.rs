//! Particle spaces
//!
//! A particle space is a bounded region centered on an origin that owns a
//! short-lived population of particles. Every update it culls particles whose
//! previous position left the region, culls the ones that report themselves
//! dead, then advances the survivors. Culling on the previous position keeps a
//! particle alive for the frame it is spawned on.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::bbox::BoundingBox;
use super::random::RandomSource;
use crate::consts::*;
use crate::math::{from_angle, lerp};

/// Behaviour every particle kind provides
pub trait Particle {
    /// Position before the most recent update (used for bounds culling)
    fn last_pos(&self) -> Vec2;
    /// Move the particle (and everything that trails it) to `origin`
    fn teleport(&mut self, origin: Vec2);
    fn update(&mut self, dt: f32);
    /// Self-reported end of life, independent of bounds
    fn is_dead(&self) -> bool;
}

/// A spark: straight-line flight with an easing trail for streak rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkParticle {
    pub pos: Vec2,
    pub last_pos: Vec2,
    pub vel: Vec2,
    /// Lags behind `pos`; the streak is drawn from here to `pos`
    pub trail_pos: Vec2,
}

impl SparkParticle {
    /// Spark at `pos` heading in a random direction at `SPARK_SPEED`
    pub fn new(pos: Vec2, rng: &mut dyn RandomSource) -> Self {
        let angle = rng.next_unit() * TAU;
        Self {
            pos,
            last_pos: pos,
            vel: from_angle(angle) * SPARK_SPEED,
            trail_pos: pos,
        }
    }
}

impl Particle for SparkParticle {
    fn last_pos(&self) -> Vec2 {
        self.last_pos
    }

    fn teleport(&mut self, origin: Vec2) {
        self.pos = origin;
        self.last_pos = origin;
        self.trail_pos = origin;
    }

    fn update(&mut self, dt: f32) {
        self.last_pos = self.pos;
        self.pos += self.vel * dt;
        self.trail_pos = lerp(self.trail_pos, self.pos, SPARK_TRAIL_LERP);
    }

    /// Sparks only ever leave through the bounds check
    fn is_dead(&self) -> bool {
        false
    }
}

/// A bounded region owning a set of particles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSpace<P> {
    /// Origin (absolute); new particles start here
    pub pos: Vec2,
    bbox: BoundingBox,
    particles: Vec<P>,
    /// `None` means unbounded
    capacity: Option<usize>,
    pub total_time: f32,
}

impl<P: Particle> ParticleSpace<P> {
    pub fn new(pos: Vec2, width: f32, height: f32, capacity: Option<usize>) -> Self {
        Self {
            pos,
            bbox: BoundingBox::new(width, height),
            particles: Vec::with_capacity(capacity.unwrap_or(0)),
            capacity,
            total_time: 0.0,
        }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.capacity.is_none()
    }

    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    #[inline]
    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn particles(&self) -> &[P] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Adopt a particle if there is room, moving it to the origin.
    /// Returns whether it was accepted.
    pub fn add_particle(&mut self, mut particle: P) -> bool {
        let has_room = self
            .capacity
            .is_none_or(|capacity| self.particles.len() < capacity);
        if !has_room {
            return false;
        }
        particle.teleport(self.pos);
        self.particles.push(particle);
        true
    }

    /// Drop every particle (teardown)
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn update(&mut self, dt: f32) {
        self.total_time += dt;

        let origin = self.pos;
        let bbox = self.bbox;
        self.particles.retain(|p| bbox.contains(origin, p.last_pos()));
        self.particles.retain(|p| !p.is_dead());

        for particle in &mut self.particles {
            particle.update(dt);
        }
    }
}

/// The burst left behind by every shot
pub type SparkSpace = ParticleSpace<SparkParticle>;

impl SparkSpace {
    /// Spark space at `origin` filled with a full burst
    pub fn burst(origin: Vec2, rng: &mut dyn RandomSource) -> Self {
        let mut space = Self::new(origin, SPARK_SPACE_SIZE, SPARK_SPACE_SIZE, Some(SPARK_COUNT));
        space.spawn_particles(SPARK_COUNT, rng);
        space
    }

    /// Try to add `count` sparks; returns how many were accepted
    pub fn spawn_particles(&mut self, count: usize, rng: &mut dyn RandomSource) -> usize {
        let mut accepted = 0;
        for _ in 0..count {
            if self.add_particle(SparkParticle::new(Vec2::ZERO, rng)) {
                accepted += 1;
            }
        }
        accepted
    }
}
