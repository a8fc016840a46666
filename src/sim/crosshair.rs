//! Crosshair motion
//!
//! The crosshair eases toward the pointer and leans into horizontal movement.
//! Firing restarts a shared wobble countdown that kicks position, rotation and
//! scale through damped oscillations.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::math::lerp;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crosshair {
    /// Absolute position actually drawn
    pub pos: Vec2,
    /// Absolute position the pointer asks for
    pub target_pos: Vec2,
    pub rotation: f32,
    pub scale: f32,
    /// Resting scale
    pub target_scale: f32,
    /// Time since the last shot (seconds); saturates at `wobble_duration`
    pub wobble_elapsed: f32,
    pub wobble_duration: f32,
    /// Peak position kick (pixels)
    pub wobble_amplitude: f32,
    pub wobble_cycles_position: f32,
    pub wobble_cycles_rotation: f32,
    pub wobble_cycles_scale: f32,
    /// Peak scale kick
    pub wobble_scale_amplitude: f32,
    /// Easing rate toward the target (per second)
    pub follow_strength: f32,
    pub move_rotation_strength: f32,
    pub move_rotation_scale: f32,
    pub total_time: f32,
}

impl Crosshair {
    pub fn new(pos: Vec2) -> Self {
        let wobble_duration = 1.5;
        Self {
            pos,
            target_pos: pos,
            rotation: 0.0,
            scale: 0.1,
            target_scale: 0.1,
            wobble_elapsed: wobble_duration,
            wobble_duration,
            wobble_amplitude: 300.0,
            wobble_cycles_position: 3.0,
            wobble_cycles_rotation: 5.0,
            wobble_cycles_scale: 3.0,
            wobble_scale_amplitude: 0.05,
            follow_strength: 10.0,
            move_rotation_strength: 0.01,
            move_rotation_scale: 0.16,
            total_time: 0.0,
        }
    }

    /// Restart the recoil animation
    pub fn start_wobble(&mut self) {
        self.wobble_elapsed = 0.0;
    }

    /// Progress through the wobble in `[0, 1]`
    fn wobble_progress(&self) -> f32 {
        if self.wobble_duration <= 0.0 {
            return 1.0;
        }
        (self.wobble_elapsed / self.wobble_duration).min(1.0)
    }

    /// Position kick, decaying as `(1 - progress)^4`
    pub fn wobble_offset(&self) -> Vec2 {
        let ramp = self.wobble_progress();
        let time_pi = ramp * self.wobble_cycles_position * PI;
        let damp = (1.0 - ramp).powi(4) * self.wobble_amplitude;
        Vec2::new(
            (3.0 * time_pi).cos() * (2.0 * time_pi).sin() * damp,
            -(3.0 * time_pi).sin() * damp,
        )
    }

    /// Lean into horizontal movement toward the target
    pub fn move_rotation(&self) -> f32 {
        let velocity = self.target_pos - self.pos;
        let deflection = velocity.x.abs() * self.move_rotation_strength + PI / 10.0;
        sign(velocity.x) * ((1.0 / deflection).cos() + 1.0) * self.move_rotation_scale
    }

    pub fn wobble_rotation(&self) -> f32 {
        let ramp = self.wobble_progress();
        let time_pi = ramp * self.wobble_cycles_rotation * PI;
        let damp = 1.0 - ramp;
        -(damp * time_pi).sin() * damp
    }

    pub fn wobble_scale(&self) -> f32 {
        let ramp = self.wobble_progress();
        let time_pi = ramp * self.wobble_cycles_scale * PI;
        let damp = 1.0 - ramp;
        self.target_scale + (damp * time_pi).sin() * damp * self.wobble_scale_amplitude
    }

    pub fn update(&mut self, dt: f32) {
        self.total_time += dt;
        self.wobble_elapsed = (self.wobble_elapsed + dt).min(self.wobble_duration.max(0.0));

        // Clamped so a long frame can't overshoot the target
        let t = (self.follow_strength * dt).min(0.99);
        let goal = self.target_pos + self.wobble_offset();
        self.pos = lerp(self.pos, goal, t);

        self.rotation = self.move_rotation() + self.wobble_rotation();
        self.scale = self.wobble_scale();
    }
}

/// `Math.sign`-style sign: zero stays zero
#[inline]
fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_eases_toward_target() {
        let mut c = Crosshair::new(Vec2::ZERO);
        c.target_pos = Vec2::new(200.0, -100.0);
        let mut prev = (c.target_pos - c.pos).length();
        for _ in 0..40 {
            c.update(DT);
            let d = (c.target_pos - c.pos).length();
            assert!(d < prev);
            prev = d;
        }
        assert!(prev < 1.0);
    }

    #[test]
    fn test_long_frame_does_not_overshoot() {
        let mut c = Crosshair::new(Vec2::ZERO);
        c.target_pos = Vec2::new(100.0, 0.0);
        c.update(5.0);
        assert!(c.pos.x <= 100.0);
        assert!(c.pos.x >= 98.0);
    }

    #[test]
    fn test_idle_has_no_wobble() {
        let c = Crosshair::new(Vec2::ZERO);
        assert_eq!(c.wobble_offset(), Vec2::ZERO);
        assert_eq!(c.wobble_rotation(), 0.0);
        assert_eq!(c.wobble_scale(), c.target_scale);
    }

    #[test]
    fn test_wobble_kicks_then_settles() {
        let mut c = Crosshair::new(Vec2::ZERO);
        c.start_wobble();
        c.update(0.1);
        assert!(c.wobble_offset().length() > 1.0);
        assert_ne!(c.scale, c.target_scale);

        for _ in 0..120 {
            c.update(DT);
        }
        assert_eq!(c.wobble_offset(), Vec2::ZERO);
        assert_eq!(c.scale, c.target_scale);
        assert!(c.pos.length() < 1.0);
    }

    #[test]
    fn test_leans_into_movement() {
        let mut c = Crosshair::new(Vec2::ZERO);
        c.target_pos = Vec2::new(300.0, 0.0);
        assert!(c.move_rotation() > 0.0);
        c.target_pos = Vec2::new(-300.0, 0.0);
        assert!(c.move_rotation() < 0.0);
        c.target_pos = Vec2::ZERO;
        assert_eq!(c.move_rotation(), 0.0);
    }
}
