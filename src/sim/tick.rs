//! Fixed timestep session tick
//!
//! One call advances a session by exactly one frame: clock, shield expiry,
//! input-driven movement, pursuit, ballistics, spawning, fire control, then
//! collision resolution in a fixed order on the post-movement state.

use crate::sim::state::{EndReason, Phase, SessionState};
use crate::sim::{collision, fire, movement, spawn};
use crate::tuning::Mode;

/// Input sampled once per tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Held fire control (radial sessions; survival auto-fires)
    pub fire: bool,
    /// External quit signal, checked once per tick
    pub quit: bool,
}

/// Advance the session by one fixed step. A no-op once the session has ended.
pub fn tick(state: &mut SessionState, input: &TickInput) {
    if state.phase != Phase::Running {
        return;
    }
    if input.quit {
        state.end(EndReason::Quit);
        return;
    }

    state.clock.advance();
    let now = state.clock.now_ms();

    // Survival sessions run against the clock
    if let Mode::Survival { session_ms } = state.tuning.mode {
        if now >= session_ms {
            state.end(EndReason::TimeUp);
            return;
        }
    }

    state
        .player
        .update_shield(now, state.tuning.shield_duration_ms);

    // Movement: player, pursuit, ballistics
    let viewport = state.tuning.viewport;
    movement::move_player(&mut state.player, input, viewport);
    let target = state.player.pos;
    match state.tuning.mode {
        Mode::Survival { .. } => {
            for hostile in &mut state.hostiles {
                movement::pursue_vector(hostile, target);
            }
        }
        Mode::Radial { .. } => {
            for hostile in &mut state.hostiles {
                movement::pursue_axis_step(hostile, target);
            }
        }
    }
    for projectile in &mut state.projectiles {
        movement::integrate_projectile(projectile);
    }
    state
        .projectiles
        .retain(|p| !movement::projectile_out_of_bounds(p, viewport));
    if let Mode::Radial { .. } = state.tuning.mode {
        let margin = state.tuning.hostile_despawn_margin;
        state
            .hostiles
            .retain(|h| !movement::hostile_out_of_bounds(h, viewport, margin));
    }

    // Spawning and fire control
    if let Some(hostile) = spawn::try_spawn(state) {
        state.hostiles.push(hostile);
    }
    fire::run_fire_control(state, input.fire);

    // Collision resolution; removed entities never reach a later pass
    collision::resolve_hostile_player(state);
    if state.phase != Phase::Running {
        return;
    }
    match state.tuning.mode {
        Mode::Survival { .. } => collision::resolve_projectile_hits_survival(state),
        Mode::Radial { .. } => collision::resolve_projectile_hits_radial(state),
    }
    collision::resolve_pickups(state);
}
