//! Targeting and projectile emission
//!
//! Survival sessions auto-aim one shot at the nearest hostile on a cooldown;
//! radial sessions volley a full ring of bullets while fire is held. The
//! cooldown timestamp resets only on an actual emission.

use std::cmp::Ordering;
use std::f32::consts::TAU;

use glam::Vec2;

use crate::sim::state::{GameEvent, Hostile, Projectile, SessionState};
use crate::tuning::Mode;
use crate::unit_from_angle;

/// Position of the hostile nearest to `from` by Euclidean distance; ties fall
/// to the first in iteration order
pub fn nearest_hostile(from: Vec2, hostiles: &[Hostile]) -> Option<Vec2> {
    hostiles
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(from)
                .partial_cmp(&b.pos.distance_squared(from))
                .unwrap_or(Ordering::Equal)
        })
        .map(|h| h.pos)
}

/// Run the session's fire policy for this tick
pub fn run_fire_control(state: &mut SessionState, fire_held: bool) {
    let now = state.clock.now_ms();
    let ready = match state.player.last_shot_ms {
        None => true,
        Some(last) => now - last >= state.tuning.shoot_cooldown_ms,
    };
    if !ready {
        return;
    }
    match state.tuning.mode {
        Mode::Survival { .. } => fire_homing(state, now),
        Mode::Radial { bullet_count } => {
            if fire_held {
                fire_radial(state, bullet_count, now);
            }
        }
    }
}

/// Single auto-aimed shot toward the nearest hostile. Suppressed when no
/// hostile exists or the target coincides with the player on both axes
/// (no direction to aim along).
fn fire_homing(state: &mut SessionState, now: u64) {
    let Some(target) = nearest_hostile(state.player.pos, &state.hostiles) else {
        return;
    };
    if target == state.player.pos {
        return;
    }
    let delta = target - state.player.pos;
    state.projectiles.push(Projectile {
        pos: state.player.pos,
        dir: delta.normalize(),
        angle: delta.y.atan2(delta.x),
        speed: state.tuning.projectile_speed,
        radius: state.tuning.projectile_radius,
    });
    state.player.last_shot_ms = Some(now);
    state.push_event(GameEvent::ShotFired);
}

/// Full-circle volley: `count` projectiles at `i * 360/count` degrees
fn fire_radial(state: &mut SessionState, count: u32, now: u64) {
    let step = TAU / count as f32;
    for i in 0..count {
        let angle = i as f32 * step;
        state.projectiles.push(Projectile {
            pos: state.player.pos,
            dir: unit_from_angle(angle),
            angle,
            speed: state.tuning.projectile_speed,
            radius: state.tuning.projectile_radius,
        });
    }
    state.player.last_shot_ms = Some(now);
    state.push_event(GameEvent::ShotFired);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn hostile_at(x: f32, y: f32) -> Hostile {
        Hostile {
            pos: Vec2::new(x, y),
            radius: 15.0,
            speed: 2.0,
            level: 1,
            health: 1,
        }
    }

    #[test]
    fn test_nearest_hostile_selection() {
        let from = Vec2::ZERO;
        let hostiles = vec![hostile_at(50.0, 0.0), hostile_at(0.0, 10.0), hostile_at(90.0, 0.0)];
        assert_eq!(nearest_hostile(from, &hostiles), Some(Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn test_no_hostiles_suppresses_the_shot() {
        let mut state = SessionState::new(Tuning::survival(), 1);
        run_fire_control(&mut state, false);
        assert!(state.projectiles.is_empty());
        // A suppressed shot does not consume the cooldown
        assert_eq!(state.player.last_shot_ms, None);
    }

    #[test]
    fn test_coincident_target_suppresses_the_shot() {
        let mut state = SessionState::new(Tuning::survival(), 1);
        let pos = state.player.pos;
        state.hostiles.push(hostile_at(pos.x, pos.y));
        run_fire_control(&mut state, false);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_homing_shot_aims_at_nearest() {
        let mut state = SessionState::new(Tuning::survival(), 1);
        let pos = state.player.pos;
        state.hostiles.push(hostile_at(pos.x, pos.y - 100.0));
        run_fire_control(&mut state, false);

        assert_eq!(state.projectiles.len(), 1);
        let shot = &state.projectiles[0];
        assert_eq!(shot.dir, Vec2::new(0.0, -1.0));
        assert_eq!(shot.pos, pos);
        assert_eq!(state.player.last_shot_ms, Some(0));
        assert_eq!(state.drain_events(), vec![GameEvent::ShotFired]);
    }

    #[test]
    fn test_cooldown_gates_the_next_shot() {
        let mut state = SessionState::new(Tuning::survival(), 1);
        let pos = state.player.pos;
        state.hostiles.push(hostile_at(pos.x, pos.y - 100.0));

        run_fire_control(&mut state, false);
        assert_eq!(state.projectiles.len(), 1);

        // 483ms after the shot: still cooling down
        state.clock.ticks = 29;
        run_fire_control(&mut state, false);
        assert_eq!(state.projectiles.len(), 1);

        // 500ms after the shot: ready again
        state.clock.ticks = 30;
        run_fire_control(&mut state, false);
        assert_eq!(state.projectiles.len(), 2);
    }

    #[test]
    fn test_radial_burst_requires_held_fire() {
        let mut state = SessionState::new(Tuning::radial_sparse(), 1);
        run_fire_control(&mut state, false);
        assert!(state.projectiles.is_empty());

        run_fire_control(&mut state, true);
        assert_eq!(state.projectiles.len(), 8);
    }

    #[test]
    fn test_radial_burst_angles_at_45_degree_steps() {
        let mut state = SessionState::new(Tuning::radial_sparse(), 1);
        run_fire_control(&mut state, true);

        for (i, shot) in state.projectiles.iter().enumerate() {
            let expected = i as f32 * TAU / 8.0;
            assert!((shot.angle - expected).abs() < 1e-6);
            assert!((shot.dir - unit_from_angle(expected)).length() < 1e-6);
        }
    }

    proptest! {
        /// Every burst emits exactly `count` unit-direction projectiles, and
        /// even counts cancel by symmetry.
        #[test]
        fn prop_radial_burst_geometry(count in 1u32..=64) {
            let mut tuning = Tuning::radial_dense();
            tuning.mode = Mode::Radial { bullet_count: count };
            let mut state = SessionState::new(tuning, 1);
            run_fire_control(&mut state, true);

            prop_assert_eq!(state.projectiles.len(), count as usize);
            let mut sum = Vec2::ZERO;
            for shot in &state.projectiles {
                prop_assert!((shot.dir.length() - 1.0).abs() < 1e-5);
                sum += shot.dir;
            }
            if count % 2 == 0 {
                prop_assert!(sum.length() < 1e-4);
            }
        }
    }
}
