//! Per-tick position integration
//!
//! Player motion is input-driven and clamped to the viewport. Hostiles
//! pursue the player: survival sessions use normalized vector pursuit,
//! radial sessions step each axis independently. Projectiles fly
//! ballistically and are culled once they leave the viewport.

use glam::Vec2;

use crate::direction_to;
use crate::sim::state::{Hostile, Player, Projectile};
use crate::sim::tick::TickInput;

/// Apply one tick of directional input, keeping the player's collision
/// boundary inside the viewport
pub fn move_player(player: &mut Player, input: &TickInput, viewport: Vec2) {
    if input.left {
        player.pos.x -= player.speed;
    }
    if input.right {
        player.pos.x += player.speed;
    }
    if input.up {
        player.pos.y -= player.speed;
    }
    if input.down {
        player.pos.y += player.speed;
    }
    player.pos.x = player.pos.x.clamp(player.radius, viewport.x - player.radius);
    player.pos.y = player.pos.y.clamp(player.radius, viewport.y - player.radius);
}

/// Survival pursuit: one normalized step toward the target. A zero-length
/// delta produces no movement.
pub fn pursue_vector(hostile: &mut Hostile, target: Vec2) {
    hostile.pos += direction_to(hostile.pos, target) * hostile.speed;
}

/// Radial-variant pursuit: each axis steps toward the target independently,
/// so diagonal movers cover ~1.41x the ground of axis-aligned ones per tick.
pub fn pursue_axis_step(hostile: &mut Hostile, target: Vec2) {
    if target.x > hostile.pos.x {
        hostile.pos.x += hostile.speed;
    }
    if target.x < hostile.pos.x {
        hostile.pos.x -= hostile.speed;
    }
    if target.y > hostile.pos.y {
        hostile.pos.y += hostile.speed;
    }
    if target.y < hostile.pos.y {
        hostile.pos.y -= hostile.speed;
    }
}

/// Ballistic step, applied unconditionally every tick
pub fn integrate_projectile(projectile: &mut Projectile) {
    projectile.pos += projectile.dir * projectile.speed;
}

/// True once a projectile's center leaves the viewport
pub fn projectile_out_of_bounds(projectile: &Projectile, viewport: Vec2) -> bool {
    projectile.pos.x < 0.0
        || projectile.pos.x > viewport.x
        || projectile.pos.y < 0.0
        || projectile.pos.y > viewport.y
}

/// True once a hostile drifts past the despawn margin (radial sessions)
pub fn hostile_out_of_bounds(hostile: &Hostile, viewport: Vec2, margin: f32) -> bool {
    hostile.pos.x < -margin
        || hostile.pos.x > viewport.x + margin
        || hostile.pos.y < -margin
        || hostile.pos.y > viewport.y + margin
}
