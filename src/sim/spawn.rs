//! Time-gated hostile spawning at the viewport boundary

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::sim::state::{Hostile, SessionState};
use crate::tuning::Tuning;

/// Attempt a spawn for the current tick.
///
/// Fires once the spawn delay has elapsed since the last attempt, picking a
/// uniform-random point on one of the four viewport edges. The cadence timer
/// resets on every attempt that clears the gate, so spawn timing stays
/// regular regardless of the outcome.
pub fn try_spawn(state: &mut SessionState) -> Option<Hostile> {
    let now = state.clock.now_ms();
    if now - state.last_spawn_ms < current_spawn_delay(&state.tuning, state.score) {
        return None;
    }
    state.last_spawn_ms = now;
    Some(roll_hostile(&mut state.rng, &state.tuning))
}

/// One-way difficulty ratchet: survival runs step the delay down once the
/// score reaches the threshold. Radial runs keep a fixed cadence.
fn current_spawn_delay(tuning: &Tuning, score: u32) -> u64 {
    if tuning.mode.is_survival() && score >= tuning.spawn_ratchet_score {
        tuning.spawn_delay_fast_ms
    } else {
        tuning.spawn_delay_ms
    }
}

fn roll_hostile(rng: &mut Pcg32, tuning: &Tuning) -> Hostile {
    let level = rng.random_range(1..=tuning.hostile_levels);
    Hostile {
        pos: edge_position(rng, tuning.viewport),
        radius: tuning.hostile_radius,
        speed: rng.random_range(tuning.hostile_speed_min..=tuning.hostile_speed_max) as f32,
        level,
        health: level as i32,
    }
}

/// Uniform-random point on the viewport boundary: one of the four edges,
/// uniform along it, pinned to the boundary value across it
fn edge_position(rng: &mut Pcg32, viewport: Vec2) -> Vec2 {
    match rng.random_range(0..4u32) {
        0 => Vec2::new(rng.random_range(0.0..=viewport.x), 0.0),
        1 => Vec2::new(viewport.x, rng.random_range(0.0..=viewport.y)),
        2 => Vec2::new(rng.random_range(0.0..=viewport.x), viewport.y),
        _ => Vec2::new(0.0, rng.random_range(0.0..=viewport.y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn on_boundary(pos: Vec2, viewport: Vec2) -> bool {
        pos.x == 0.0 || pos.x == viewport.x || pos.y == 0.0 || pos.y == viewport.y
    }

    #[test]
    fn test_spawn_positions_sit_on_the_boundary() {
        let tuning = Tuning::survival();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let hostile = roll_hostile(&mut rng, &tuning);
            assert!(on_boundary(hostile.pos, tuning.viewport), "{:?}", hostile.pos);
            assert!(hostile.pos.x >= 0.0 && hostile.pos.x <= tuning.viewport.x);
            assert!(hostile.pos.y >= 0.0 && hostile.pos.y <= tuning.viewport.y);
        }
    }

    #[test]
    fn test_hostile_health_equals_level() {
        let tuning = Tuning::survival();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let hostile = roll_hostile(&mut rng, &tuning);
            assert!((1..=3).contains(&hostile.level));
            assert_eq!(hostile.health, hostile.level as i32);
        }
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = SessionState::new(Tuning::survival(), 1);

        // Gate holds until the full delay has elapsed
        state.clock.ticks = 59; // 983ms
        assert!(try_spawn(&mut state).is_none());

        state.clock.ticks = 60; // 1000ms
        assert!(try_spawn(&mut state).is_some());
        assert_eq!(state.last_spawn_ms, 1000);

        // Timer was reset, so the next window starts from the last attempt
        state.clock.ticks = 90;
        assert!(try_spawn(&mut state).is_none());
        state.clock.ticks = 120;
        assert!(try_spawn(&mut state).is_some());
    }

    #[test]
    fn test_ratchet_halves_the_delay_once() {
        let mut state = SessionState::new(Tuning::survival(), 1);
        state.score = 1000;

        state.clock.ticks = 30; // 500ms
        assert!(try_spawn(&mut state).is_some());

        state.clock.ticks = 60;
        assert!(try_spawn(&mut state).is_some());
    }

    #[test]
    fn test_radial_cadence_ignores_score() {
        let mut state = SessionState::new(Tuning::radial_dense(), 1);
        state.score = 5000;

        state.clock.ticks = 30; // 500ms: not yet in a radial run
        assert!(try_spawn(&mut state).is_none());
        state.clock.ticks = 60;
        assert!(try_spawn(&mut state).is_some());
    }

    #[test]
    fn test_radial_hostiles_are_level_one() {
        let tuning = Tuning::radial_sparse();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let hostile = roll_hostile(&mut rng, &tuning);
            assert_eq!(hostile.level, 1);
            assert_eq!(hostile.health, 1);
            assert!((2.0..=4.0).contains(&hostile.speed));
        }
    }
}
