//! Pairwise overlap tests and their state transitions
//!
//! Survival sessions test circle against circle; radial sessions test
//! axis-aligned rectangles, with radii doubling as half-extents. Every pass
//! collects its hits first and compacts the collections afterwards, so
//! nothing is removed mid-iteration and a removed entity never participates
//! in a later pass of the same tick.

use glam::Vec2;
use rand::Rng;

use crate::sim::state::{EndReason, GameEvent, Pickup, PickupKind, SessionState};

/// Strict circle overlap: circles touching at exactly the radius sum do not
/// collide
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Strict overlap between axis-aligned squares centered at `a` and `b` with
/// the given half-extents
pub fn rects_overlap(a: Vec2, half_a: f32, b: Vec2, half_b: f32) -> bool {
    (a.x - b.x).abs() < half_a + half_b && (a.y - b.y).abs() < half_a + half_b
}

/// Drop the marked indices from a collection in one compaction pass
fn compact<T>(items: &mut Vec<T>, marked: &[usize]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !marked.contains(&idx);
        idx += 1;
        keep
    });
}

/// Hostile-player contact.
///
/// Contact always destroys the hostile; an active shield only negates the
/// damage. Radial sessions have no health pool, so any contact ends the
/// session outright.
pub fn resolve_hostile_player(state: &mut SessionState) {
    let rect = state.tuning.mode.uses_rect_overlap();
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;

    let mut contacts: Vec<usize> = Vec::new();
    for (i, hostile) in state.hostiles.iter().enumerate() {
        let overlapping = if rect {
            rects_overlap(hostile.pos, hostile.radius, player_pos, player_radius)
        } else {
            circles_overlap(hostile.pos, hostile.radius, player_pos, player_radius)
        };
        if overlapping {
            contacts.push(i);
        }
    }
    if contacts.is_empty() {
        return;
    }

    if rect {
        state.end(EndReason::Defeat);
        return;
    }

    for _ in &contacts {
        if !state.player.shield_active {
            state.player.health -= state.tuning.contact_damage;
            state.push_event(GameEvent::PlayerHit);
        }
    }
    compact(&mut state.hostiles, &contacts);

    if state.player.health <= 0 {
        state.end(EndReason::Defeat);
    }
}

/// Survival projectile pass: the hit threshold is the radius sum tightened
/// by the configured trim, and at most one projectile lands per hostile per
/// tick. A kill scores, and may drop a pickup at the hostile's last position.
pub fn resolve_projectile_hits_survival(state: &mut SessionState) {
    let trim = state.tuning.projectile_hit_trim;

    let mut spent: Vec<usize> = Vec::new();
    let mut dead: Vec<usize> = Vec::new();
    let mut drop_sites: Vec<Vec2> = Vec::new();

    for (hi, hostile) in state.hostiles.iter_mut().enumerate() {
        for (pi, projectile) in state.projectiles.iter().enumerate() {
            if spent.contains(&pi) {
                continue;
            }
            let threshold = hostile.radius + projectile.radius - trim;
            if hostile.pos.distance(projectile.pos) < threshold {
                spent.push(pi);
                hostile.health -= 1;
                if hostile.health <= 0 {
                    dead.push(hi);
                    drop_sites.push(hostile.pos);
                }
                break;
            }
        }
    }

    for site in drop_sites {
        state.score += state.tuning.score_per_kill;
        state.push_event(GameEvent::HostileDestroyed);
        maybe_drop_pickup(state, site);
    }
    compact(&mut state.hostiles, &dead);
    compact(&mut state.projectiles, &spent);
}

/// Radial group pass: all-pairs volley resolution. Every hostile a
/// projectile overlaps is destroyed, and the projectile is consumed.
pub fn resolve_projectile_hits_radial(state: &mut SessionState) {
    let mut spent: Vec<usize> = Vec::new();
    let mut dead: Vec<usize> = Vec::new();

    for (pi, projectile) in state.projectiles.iter().enumerate() {
        let mut hit = false;
        for (hi, hostile) in state.hostiles.iter().enumerate() {
            if dead.contains(&hi) {
                continue;
            }
            if rects_overlap(projectile.pos, projectile.radius, hostile.pos, hostile.radius) {
                dead.push(hi);
                hit = true;
            }
        }
        if hit {
            spent.push(pi);
        }
    }

    state.score += dead.len() as u32 * state.tuning.score_per_kill;
    for _ in &dead {
        state.push_event(GameEvent::HostileDestroyed);
    }
    compact(&mut state.hostiles, &dead);
    compact(&mut state.projectiles, &spent);
}

/// Pickup collection: heal toward the ceiling, or refresh the shield window
pub fn resolve_pickups(state: &mut SessionState) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;

    let mut taken: Vec<usize> = Vec::new();
    for (i, pickup) in state.pickups.iter().enumerate() {
        if circles_overlap(pickup.pos, pickup.radius, player_pos, player_radius) {
            taken.push(i);
        }
    }
    if taken.is_empty() {
        return;
    }

    let now = state.clock.now_ms();
    for &i in &taken {
        let kind = state.pickups[i].kind;
        match kind {
            PickupKind::Heal => {
                // The partial-heal ceiling sits below the starting pool; a
                // player already at or above it is left unchanged
                if state.player.health < state.tuning.heal_ceiling {
                    state.player.health = (state.player.health + state.tuning.heal_amount)
                        .min(state.tuning.heal_ceiling);
                }
            }
            PickupKind::Shield => {
                // Non-stacking: a fresh pickup restarts the window
                state.player.shield_active = true;
                state.player.shield_start_ms = now;
            }
        }
        state.push_event(GameEvent::PickupCollected(kind));
    }
    compact(&mut state.pickups, &taken);
}

fn maybe_drop_pickup(state: &mut SessionState, pos: Vec2) {
    if state.tuning.pickup_drop_chance <= 0.0 {
        return;
    }
    if !state.rng.random_bool(state.tuning.pickup_drop_chance) {
        return;
    }
    let kind = if state.rng.random_bool(0.5) {
        PickupKind::Heal
    } else {
        PickupKind::Shield
    };
    state.pickups.push(Pickup {
        pos,
        kind,
        radius: state.tuning.pickup_radius,
    });
}
