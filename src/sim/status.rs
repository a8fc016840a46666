//! Player status overlay state
//!
//! Hearts, score and the title "screen card" only carry animation timers here.
//! Lives and score are read from the game state at draw time and never
//! written by the overlay.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::math::from_angle;

pub const HEART_COUNT: usize = 3;
pub const FULL_HEART_FRAME: usize = 0;
pub const LOST_HEART_FRAME: usize = 1;
/// First heart, in viewport coordinates
pub const HEART_POSITION_START: Vec2 = Vec2::new(-0.8, -0.85);
pub const HEART_SCALE: f32 = 1.0;
/// Horizontal spacing between hearts (pixels)
pub const HEART_SPACING: f32 = 100.0;
pub const HEART_SHAKE_SCALE: f32 = 20.0;
pub const HEART_SHAKE_DURATION: f32 = 0.3;
/// Delay between neighbouring hearts' bounce
pub const HEART_SHAKE_STAGGER: f32 = 0.1;

pub const SHOT_SHAKE_SCALE: f32 = 50.0;
pub const SHOT_SHAKE_DURATION: f32 = 0.2;
/// Angular frequency of the post-shot jitter (rad/s)
pub const SHOT_SHAKE_FREQUENCY: f32 = 1000.0;

/// Score, in viewport coordinates
pub const SCORE_POSITION: Vec2 = Vec2::new(0.7, -0.85);
pub const SCORE_LAYER_OFFSET: Vec2 = Vec2::new(2.0, -2.0);
pub const SCORE_DIGITS: usize = 6;

pub const CARD_FLY_POSITION_SCALE: f32 = 20.0;
pub const CARD_FLY_ROTATION_SCALE: f32 = 0.2;
pub const CARD_LAYER_OFFSET_SCALE: f32 = 1.5;
/// Stacked copies drawn for layered text
pub const LAYER_COUNT: usize = 12;
/// Layers hidden/revealed per second during card transitions
pub const LAYER_HIDE_SPEED: f32 = 24.0;

/// Title text shown over the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenCard {
    Start,
    Again,
}

impl ScreenCard {
    pub fn text(&self) -> &'static str {
        match self {
            ScreenCard::Start => "Hit mouse button to start",
            ScreenCard::Again => "You're dead. Hit mouse button",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub total_time: f32,
    pub shot_fired_elapsed: f32,
    pub heart_lost_elapsed: f32,
    pub screen_card_elapsed: f32,
    pub screen_card: ScreenCard,
    /// Card layers are being hidden (true) or revealed (false)
    pub screen_card_fade_out: bool,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            shot_fired_elapsed: SHOT_SHAKE_DURATION,
            heart_lost_elapsed: HEART_SHAKE_DURATION + HEART_SHAKE_STAGGER * HEART_COUNT as f32,
            screen_card_elapsed: 0.0,
            screen_card: ScreenCard::Start,
            screen_card_fade_out: false,
        }
    }
}

impl PlayerStatus {
    pub fn shot_fired(&mut self) {
        self.shot_fired_elapsed = 0.0;
    }

    pub fn heart_lost(&mut self) {
        self.heart_lost_elapsed = 0.0;
    }

    /// Bring in the game-over card
    pub fn game_end(&mut self) {
        self.screen_card = ScreenCard::Again;
        self.screen_card_elapsed = 0.0;
        self.screen_card_fade_out = false;
    }

    /// Fade the current card away
    pub fn game_start(&mut self) {
        self.screen_card_elapsed = 0.0;
        self.screen_card_fade_out = true;
    }

    /// Whether the card still has visible layers or is mid-transition
    pub fn card_visible(&self) -> bool {
        self.hidden_layer_count() < LAYER_COUNT
    }

    pub fn update(&mut self, dt: f32) {
        self.total_time += dt;
        self.shot_fired_elapsed += dt;
        self.heart_lost_elapsed += dt;
        self.screen_card_elapsed += dt;
    }

    /// Jitter applied to hearts and score right after a shot
    pub fn shot_shake(&self) -> Vec2 {
        let t = self.shot_fired_elapsed;
        let damp = (1.0 - t / SHOT_SHAKE_DURATION).max(0.0);
        let phase = t * SHOT_SHAKE_FREQUENCY;
        Vec2::new(phase.sin(), phase.cos()) * damp * SHOT_SHAKE_SCALE
    }

    /// Bounce for a heart, `index` steps after the one that was just lost
    pub fn heart_shake(&self, index: i32) -> Vec2 {
        let time = (self.heart_lost_elapsed - index as f32 * HEART_SHAKE_STAGGER).max(0.0);
        let time_pi = (time / HEART_SHAKE_DURATION).min(1.0) * PI;
        Vec2::new(0.0, time_pi.sin().powi(4) * -HEART_SHAKE_SCALE)
    }

    /// Vertical fly-in of the card
    pub fn card_offset(&self) -> Vec2 {
        Vec2::new(0.0, (self.screen_card_elapsed * PI).cos() * CARD_FLY_POSITION_SCALE)
    }

    pub fn card_rotation(&self) -> f32 {
        (self.total_time * PI).sin() * CARD_FLY_ROTATION_SCALE
    }

    /// Offset between stacked card layers, slowly orbiting
    pub fn card_layer_offset(&self) -> Vec2 {
        let r = self.total_time;
        let scale = (r * 2.5).cos() * 0.5 + 1.0;
        from_angle(r) * scale * CARD_LAYER_OFFSET_SCALE
    }

    /// How many of the bottom card layers are currently hidden
    pub fn hidden_layer_count(&self) -> usize {
        let progressed =
            ((self.screen_card_elapsed * LAYER_HIDE_SPEED).floor().max(0.0) as usize).min(LAYER_COUNT);
        if self.screen_card_fade_out {
            progressed
        } else {
            LAYER_COUNT - progressed
        }
    }

    pub fn card_text(&self) -> &'static str {
        self.screen_card.text()
    }
}
