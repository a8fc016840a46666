//! Frame tick
//!
//! Applies one frame of input to the game state and advances it. Frame
//! deltas come from a display-driven clock, so they are clamped before use.

use glam::Vec2;

use super::random::RandomSource;
use super::state::GameState;
use crate::consts::*;

/// Input gathered since the previous frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Latest pointer position in screen pixels
    pub pointer: Option<Vec2>,
    /// Shoot (click/tap), or restart after game over
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Clamp a raw frame delta into `[MIN_FRAME_DT, MAX_FRAME_DT]`
pub fn clamp_frame_dt(dt: f32) -> f32 {
    if !(dt >= MIN_FRAME_DT) {
        log::warn!("Frame delta {} below minimum, clamped", dt);
        return MIN_FRAME_DT;
    }
    dt.min(MAX_FRAME_DT)
}

/// Advance the game by one frame
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &FrameInput, dt: f32) {
    let dt = clamp_frame_dt(dt);

    if let Some(screen) = input.pointer {
        state.set_pointer(screen);
    }

    if input.pause {
        state.toggle_pause();
    }

    if input.fire {
        if state.is_dead {
            state.restart();
        } else {
            state.shoot();
        }
    }

    state.update(dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::random::ScriptedRandom;
    use crate::sim::state::GameEvent;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> GameState<ScriptedRandom> {
        GameState::with_rng(ScriptedRandom::new([0.3, 0.7, 0.1]), Settings::default(), 1600.0)
    }

    #[test]
    fn test_dt_is_clamped() {
        assert_eq!(clamp_frame_dt(0.0), MIN_FRAME_DT);
        assert_eq!(clamp_frame_dt(-3.0), MIN_FRAME_DT);
        assert_eq!(clamp_frame_dt(f32::NAN), MIN_FRAME_DT);
        assert_eq!(clamp_frame_dt(10.0), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(DT), DT);
    }

    #[test]
    fn test_pointer_sets_crosshair_target() {
        let mut state = new_state();
        let input = FrameInput {
            pointer: Some(Vec2::new(1000.0, 100.0)),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.crosshair.target_pos, Vec2::new(200.0, -350.0));
        assert!(state.crosshair.pos.x > 0.0);
    }

    #[test]
    fn test_pause_toggles() {
        let mut state = new_state();
        let pause = FrameInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, DT);
        assert!(state.is_paused);
        let time = state.total_time;
        tick(&mut state, &FrameInput::default(), DT);
        assert_eq!(state.total_time, time);

        tick(&mut state, &pause, DT);
        assert!(!state.is_paused);
        assert!(state.total_time > time);
    }

    #[test]
    fn test_fire_after_game_over_restarts() {
        let mut state = new_state();
        state.lives = 0;
        state.is_dead = true;
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, DT);
        assert!(!state.is_dead);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 10, "the restarting click is not a shot");
        assert!(state.drain_events().contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999, Settings::default(), 1280.0);
        let mut b = GameState::new(99999, Settings::default(), 1280.0);

        let inputs = [
            FrameInput {
                pointer: Some(Vec2::new(900.0, 500.0)),
                ..Default::default()
            },
            FrameInput {
                fire: true,
                ..Default::default()
            },
            FrameInput::default(),
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input, DT);
                tick(&mut b, input, DT);
            }
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.zombie_count(), b.zombie_count());
        let pa: Vec<_> = a.zombies().map(|z| z.pos).collect();
        let pb: Vec<_> = b.zombies().map(|z| z.pos).collect();
        assert_eq!(pa, pb);
    }
}
