//! End-to-end gameplay scenarios driven through the public API

use glam::Vec2;
use proptest::prelude::*;

use zombie_gallery::Settings;
use zombie_gallery::consts::SPARK_COUNT;
use zombie_gallery::sim::{FrameInput, GameEvent, GameState, ScriptedRandom, tick};

const DT: f32 = 1.0 / 60.0;

/// A session where nothing spawns on its own
fn quiet_state() -> GameState<ScriptedRandom> {
    let settings = Settings {
        spawn_period: 1.0e6,
        ..Settings::default()
    };
    GameState::with_rng(ScriptedRandom::new([0.5, 0.25, 0.75]), settings, 1600.0)
}

fn got_past_events(events: &[GameEvent]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::ZombieGotPast { lives_left, .. } => Some(*lives_left),
            _ => None,
        })
        .collect()
}

#[test]
fn shooting_with_no_score_does_nothing() {
    let mut state = quiet_state();
    state.spawn_zombie_at(Vec2::ZERO, 0.6, 100.0);
    state.drain_events();
    state.score = 0;

    assert!(!state.shoot());
    assert_eq!(state.score, 0);
    assert!(state.particle_spaces().is_empty());
    assert!(state.zombies().all(|z| !z.is_dead()));
    assert!(state.drain_events().is_empty());
    assert!(!state.session_started);
}

#[test]
fn kill_awards_points_and_stays_hittable() {
    let mut state = quiet_state();
    let id = state.spawn_zombie_at(Vec2::new(200.0, 100.0), 0.6, 100.0);
    state.crosshair.pos = Vec2::new(200.0, 100.0);

    let before = state.score;
    assert!(state.shoot());
    let zombie = state.zombie(id).unwrap();
    assert!(zombie.is_dead());
    assert_eq!(state.score, before + zombie.points - state.settings.shot_cost);
    assert!(zombie.is_hit(state.crosshair.pos));

    // A second shot has nothing alive to hit but still costs a shot
    let score = state.score;
    assert!(state.shoot());
    assert_eq!(state.score, score - 1);
    let events = state.drain_events();
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::ZombieKilled { .. }))
            .count(),
        1
    );
}

#[test]
fn walking_zombie_off_screen_costs_one_life() {
    let mut state = quiet_state();
    let start = state.viewport.viewport_to_absolute(Vec2::new(0.99, 0.8));
    let id = state.spawn_zombie_at(start, 0.55, 100.0);
    assert!((state.zombie(id).unwrap().scale - 0.45).abs() < 1e-6);

    let mut events = Vec::new();
    let mut frames = 0;
    while state.zombie(id).is_some() {
        state.update(DT);
        events.extend(state.drain_events());
        frames += 1;
        assert!(frames < 60 * 300, "zombie never left the screen");
    }

    assert_eq!(got_past_events(&events), vec![2]);
    assert_eq!(state.lives, 2);
    assert!(!state.is_dead);
    // The heart bounce restarts on the exit frame itself
    assert!(state.status.heart_lost_elapsed < 1e-6);
}

#[test]
fn dead_zombie_leaving_screen_costs_nothing() {
    let mut state = quiet_state();
    let id = state.spawn_zombie_at(Vec2::new(0.0, 200.0), 0.6, 100.0);
    assert!(state.kill(id));
    let resting = state.status.heart_lost_elapsed;

    let mut frames = 0;
    while state.zombie(id).is_some() {
        state.update(DT);
        frames += 1;
        assert!(frames < 60 * 60, "dead zombie never left the screen");
    }

    assert_eq!(state.lives, 3);
    assert!(got_past_events(&state.drain_events()).is_empty());
    assert!(state.status.heart_lost_elapsed > resting);
}

#[test]
fn third_zombie_through_ends_the_game() {
    let mut state = quiet_state();
    let edge = -state.viewport.center().x;
    for offset in [10.0, 60.0, 110.0] {
        state.spawn_zombie_at(Vec2::new(edge + offset, 0.0), 0.6, 100.0);
    }

    let mut through = 0;
    let mut frames = 0;
    while through < 3 {
        state.update(DT);
        let events = state.drain_events();
        for lives_left in got_past_events(&events) {
            through += 1;
            assert_eq!(lives_left, 3 - through);
        }
        let game_over = events.iter().any(|e| matches!(e, GameEvent::GameOver { .. }));
        assert_eq!(game_over, through == 3 && state.is_dead);
        if through < 3 {
            assert!(!state.is_dead);
        }
        frames += 1;
        assert!(frames < 60 * 60);
    }

    assert!(state.is_dead);
    assert_eq!(state.lives, 0);
    assert!(!state.status.screen_card_fade_out);
    assert_eq!(state.status.card_text(), "You're dead. Hit mouse button");
}

#[test]
fn zombie_walking_off_after_game_over_is_dropped_quietly() {
    let mut state = quiet_state();
    state.lives = 1;
    state.spawn_zombie_at(Vec2::new(-799.5, 0.0), 0.6, 100.0);
    state.update(DT);
    assert!(state.is_dead);
    state.drain_events();
    let resting = state.status.heart_lost_elapsed;

    let id = state.spawn_zombie_at(Vec2::new(-799.5, 0.0), 0.6, 100.0);
    state.drain_events();
    state.update(DT);

    assert!(state.zombie(id).is_none());
    assert_eq!(state.lives, 0);
    assert!(state.is_dead);
    assert!(state.drain_events().is_empty());
    assert!(state.status.heart_lost_elapsed > resting);
}

#[test]
fn spark_space_is_torn_down_once_empty() {
    let mut state = quiet_state();
    assert!(state.shoot());
    assert_eq!(state.particle_spaces().len(), 1);
    assert_eq!(state.particle_spaces()[0].len(), SPARK_COUNT);

    let mut frames = 0;
    while !state.particle_spaces().is_empty() {
        state.update(DT);
        frames += 1;
        assert!(frames < 120, "spark space never emptied");
    }
    assert!(frames > 1);
}

#[test]
fn click_after_game_over_restarts() {
    let mut state = quiet_state();
    state.spawn_zombie_at(Vec2::new(-799.5, 0.0), 0.6, 100.0);
    state.lives = 1;
    state.update(DT);
    assert!(state.is_dead);

    // Shots are refused, the click restarts instead
    let fire = FrameInput {
        fire: true,
        ..Default::default()
    };
    tick(&mut state, &fire, DT);
    assert!(!state.is_dead);
    assert_eq!(state.lives, 3);
    assert_eq!(state.score, 10);

    // And the next click is an ordinary shot again
    tick(&mut state, &fire, DT);
    assert_eq!(state.score, 9);
}

proptest! {
    #[test]
    fn prop_score_and_lives_stay_in_range(
        steps in proptest::collection::vec((any::<bool>(), 0.0f32..1600.0, 0.0f32..900.0, 0.0f32..0.3), 1..200)
    ) {
        let mut state = GameState::new(7, Settings::default(), 1600.0);
        for (fire, x, y, dt) in steps {
            let input = FrameInput { pointer: Some(Vec2::new(x, y)), fire, pause: false };
            let lives_before = state.lives;
            tick(&mut state, &input, dt);
            prop_assert!(state.lives <= 3);
            prop_assert!(state.lives <= lives_before || state.lives == 3);
            prop_assert_eq!(state.is_dead, state.lives == 0);
        }
    }
}
