//! Game state and the coordinator operations
//!
//! `GameState` exclusively owns every entity collection and is the only
//! writer of score, lives and the game-over flag. Zombies live in an id-keyed
//! arena with a secondary depth index for draw order.

use std::collections::{BTreeMap, BTreeSet};

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::buckets::KeyOrderedMap;
use super::crosshair::Crosshair;
use super::particles::SparkSpace;
use super::random::{RandomSource, seeded};
use super::status::PlayerStatus;
use super::viewport::Viewport;
use super::zombie::{Zombie, ZombieId};
use crate::consts::*;
use crate::settings::Settings;
use crate::step_from_unit_range;

/// Something the front end may want to react to (sound, analytics, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ZombieSpawned { id: ZombieId, depth: f32 },
    ZombieKilled { id: ZombieId, points: u64 },
    ZombieGotPast { id: ZombieId, lives_left: u32 },
    ShotFired { pos: Vec2, hit: Option<ZombieId> },
    GameOver { score: u64 },
    Restarted,
}

/// Depth buckets are walked farthest first
fn depth_order(a: &f32, b: &f32) -> std::cmp::Ordering {
    b.total_cmp(a)
}

#[derive(Debug)]
pub struct GameState<R: RandomSource = Pcg32> {
    pub settings: Settings,
    pub viewport: Viewport,
    pub score: u64,
    pub lives: u32,
    pub is_paused: bool,
    /// Game over (not to be confused with a zombie's own death)
    pub is_dead: bool,
    /// Set by the first shot; fades the start card away
    pub session_started: bool,
    zombies: BTreeMap<ZombieId, Zombie>,
    draw_buckets: KeyOrderedMap<f32, BTreeSet<ZombieId>>,
    particle_spaces: Vec<SparkSpace>,
    pub crosshair: Crosshair,
    pub status: PlayerStatus,
    /// Simulated time while unpaused (seconds)
    pub total_time: f32,
    pub next_spawn_time: f32,
    pub spawn_period: f32,
    next_zombie_id: ZombieId,
    rng: R,
    events: Vec<GameEvent>,
}

impl GameState<Pcg32> {
    /// New session on a canvas `width` pixels wide, seeded for reproducibility
    pub fn new(seed: u64, settings: Settings, width: f32) -> Self {
        Self::with_rng(seeded(seed), settings, width)
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn with_rng(rng: R, settings: Settings, width: f32) -> Self {
        let spawn_period = settings.spawn_period;
        Self {
            score: settings.starting_score,
            lives: settings.starting_lives,
            settings,
            viewport: Viewport::new(width),
            is_paused: false,
            is_dead: false,
            session_started: false,
            zombies: BTreeMap::new(),
            draw_buckets: KeyOrderedMap::new(depth_order),
            particle_spaces: Vec::new(),
            crosshair: Crosshair::new(Vec2::ZERO),
            status: PlayerStatus::default(),
            total_time: 0.0,
            next_spawn_time: spawn_period,
            spawn_period,
            next_zombie_id: 1,
            rng,
            events: Vec::new(),
        }
    }

    // === Queries ===

    /// Zombies in id (spawn) order
    pub fn zombies(&self) -> impl Iterator<Item = &Zombie> {
        self.zombies.values()
    }

    pub fn zombie(&self, id: ZombieId) -> Option<&Zombie> {
        self.zombies.get(&id)
    }

    pub fn zombie_count(&self) -> usize {
        self.zombies.len()
    }

    /// Zombies back-to-front: farthest depth bucket first, id order within
    pub fn draw_order(&self) -> impl Iterator<Item = &Zombie> {
        self.draw_buckets
            .values()
            .flat_map(|bucket| bucket.iter())
            .filter_map(|id| self.zombies.get(id))
    }

    pub fn draw_buckets(&self) -> &KeyOrderedMap<f32, BTreeSet<ZombieId>> {
        &self.draw_buckets
    }

    pub fn particle_spaces(&self) -> &[SparkSpace] {
        &self.particle_spaces
    }

    /// Take every event raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Input ===

    /// Aim the crosshair at a pointer position in screen pixels
    pub fn set_pointer(&mut self, screen: Vec2) {
        self.crosshair.target_pos = self.viewport.screen_to_absolute(screen);
    }

    /// Toggle pause. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) {
        if self.is_dead {
            return;
        }
        self.is_paused = !self.is_paused;
        log::info!("Game {}", if self.is_paused { "paused" } else { "resumed" });
    }

    pub fn resize(&mut self, width: f32) {
        self.viewport.resize(width);
    }

    // === Spawning ===

    /// Spawn a zombie in a random lane just inside the right edge
    pub fn spawn_zombie(&mut self) -> ZombieId {
        let level = step_from_unit_range(self.rng.next_unit(), self.settings.spawn_bands);
        let height = 0.8 - level * 0.35;
        let depth = 0.55 + level * 0.15;
        let pos = self
            .viewport
            .viewport_to_absolute(Vec2::new(ZOMBIE_SPAWN_VIEWPORT_X, height));
        let walking_speed =
            self.settings.walking_speed_base + self.rng.next_unit() * self.settings.walking_speed_variation;
        self.spawn_zombie_at(pos, depth, walking_speed)
    }

    /// Spawn a zombie at an absolute position and depth
    pub fn spawn_zombie_at(&mut self, pos: Vec2, depth: f32, walking_speed: f32) -> ZombieId {
        let id = self.next_zombie_id;
        self.next_zombie_id += 1;

        let zombie = Zombie::new(id, pos, depth, walking_speed, self.settings.zombie_points);
        let depth = zombie.depth();
        self.draw_buckets
            .get_or_insert_with(depth, BTreeSet::new)
            .insert(id);
        self.zombies.insert(id, zombie);

        log::debug!("Zombie {} spawned at {:?} depth {:.3}", id, pos, depth);
        self.events.push(GameEvent::ZombieSpawned { id, depth });
        id
    }

    /// Remove a zombie from the arena and its depth bucket. Empty buckets
    /// are dropped.
    pub fn despawn(&mut self, id: ZombieId) -> Option<Zombie> {
        let zombie = self.zombies.remove(&id)?;
        let depth = zombie.depth();
        let bucket_empty = match self.draw_buckets.get_mut(&depth) {
            Some(bucket) => {
                bucket.remove(&id);
                bucket.is_empty()
            }
            None => false,
        };
        if bucket_empty {
            self.draw_buckets.delete(&depth);
        }
        Some(zombie)
    }

    // === Scoring ===

    /// Kill a zombie and award its points. Returns false for unknown or
    /// already dead zombies.
    pub fn kill(&mut self, id: ZombieId) -> bool {
        let Some(zombie) = self.zombies.get_mut(&id) else {
            return false;
        };
        if !zombie.die(&mut self.rng) {
            return false;
        }
        let points = zombie.points;
        self.score += points;
        log::debug!("Zombie {} killed (+{}), score {}", id, points, self.score);
        self.events.push(GameEvent::ZombieKilled { id, points });
        true
    }

    /// Closest (largest depth) alive zombie under `point`. The first one
    /// found in id order wins ties.
    pub fn closest_hit(&self, point: Vec2) -> Option<ZombieId> {
        self.zombies
            .values()
            .filter(|z| !z.is_dead() && z.is_hit(point))
            .fold(None, |best: Option<&Zombie>, z| match best {
                Some(b) if b.depth() >= z.depth() => Some(b),
                _ => Some(z),
            })
            .map(|z| z.id)
    }

    /// Fire at the crosshair. Returns whether a shot was taken; shots need
    /// score to spend and a running, unpaused game.
    pub fn shoot(&mut self) -> bool {
        if self.score == 0 || self.is_paused || self.is_dead {
            return false;
        }
        if !self.session_started {
            self.session_started = true;
            self.status.game_start();
            log::info!("Game started");
        }

        let pos = self.crosshair.pos;
        let hit = self.closest_hit(pos);
        if let Some(id) = hit {
            self.kill(id);
        }

        self.particle_spaces.push(SparkSpace::burst(pos, &mut self.rng));
        self.crosshair.start_wobble();
        self.status.shot_fired();
        self.score = self.score.saturating_sub(self.settings.shot_cost);
        self.events.push(GameEvent::ShotFired { pos, hit });
        true
    }

    fn zombie_got_past(&mut self, id: ZombieId) {
        if self.despawn(id).is_none() {
            return;
        }
        self.status.heart_lost();
        self.lives = self.lives.saturating_sub(1);
        log::debug!("Zombie {} got past, {} lives left", id, self.lives);
        self.events.push(GameEvent::ZombieGotPast { id, lives_left: self.lives });
        if self.lives == 0 {
            self.end_game();
        }
    }

    fn end_game(&mut self) {
        self.is_dead = true;
        self.status.game_end();
        log::info!("Game over with score {}", self.score);
        self.events.push(GameEvent::GameOver { score: self.score });
    }

    /// Start a fresh session after game over. The clock keeps running so
    /// overlay animations stay continuous.
    pub fn restart(&mut self) {
        self.score = self.settings.starting_score;
        self.lives = self.settings.starting_lives;
        self.is_paused = false;
        self.is_dead = false;
        self.session_started = true;
        self.zombies.clear();
        self.draw_buckets.clear();
        self.particle_spaces.clear();
        self.spawn_period = self.settings.spawn_period;
        self.next_spawn_time = self.total_time + self.spawn_period;
        self.status.game_start();
        log::info!("Game restarted");
        self.events.push(GameEvent::Restarted);
    }

    // === Frame ===

    /// Advance the world by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.status.update(dt);
        if self.is_paused {
            return;
        }
        self.total_time += dt;

        for zombie in self.zombies.values_mut() {
            zombie.update(dt);
        }
        for space in &mut self.particle_spaces {
            space.update(dt);
        }
        if !self.is_dead {
            self.crosshair.update(dt);
        }

        if self.total_time > self.next_spawn_time {
            let (lo, hi) = self.settings.spawn_jitter;
            self.next_spawn_time = self.total_time + self.spawn_period * self.rng.range(lo, hi);
            self.spawn_zombie();
        }

        // Decide first, then remove
        let gone: Vec<(ZombieId, bool)> = self
            .zombies
            .values()
            .filter(|z| !self.viewport.is_visible(z.pos))
            .map(|z| (z.id, z.is_dead()))
            .collect();
        for (id, killed) in gone {
            if killed || self.is_dead {
                self.despawn(id);
            } else {
                self.zombie_got_past(id);
            }
        }

        let before = self.particle_spaces.len();
        self.particle_spaces.retain(|space| !space.is_empty());
        let removed = before - self.particle_spaces.len();
        if removed > 0 {
            log::debug!("Tore down {} particle space(s)", removed);
        }
    }
}
