//! Data-driven game balance
//!
//! Every gameplay number lives in `Tuning` so variants and tests can
//! configure a session without touching simulation code. The named presets
//! reproduce the three shipped game variants.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Which game variant a session runs
///
/// The variant pins its coupled policies: survival runs use circle overlap
/// and normalized vector pursuit; radial runs use axis-aligned rectangle
/// overlap and per-axis stepping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// Timed survival run: auto-aimed shots, health pool, pickups
    Survival {
        /// Total session length in milliseconds
        session_ms: u64,
    },
    /// Endless 360-degree run: held-fire radial bursts, contact is lethal
    Radial {
        /// Projectiles per burst, evenly spaced over a full turn
        bullet_count: u32,
    },
}

impl Mode {
    /// Radial variants resolve overlap with axis-aligned rectangles
    pub fn uses_rect_overlap(&self) -> bool {
        matches!(self, Mode::Radial { .. })
    }

    pub fn is_survival(&self) -> bool {
        matches!(self, Mode::Survival { .. })
    }
}

/// Balance knobs for one session
///
/// Radii double as rectangle half-extents in the radial variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub mode: Mode,
    /// Playfield dimensions
    pub viewport: Vec2,

    // Player
    pub player_radius: f32,
    /// Pixels moved per tick along each active input axis
    pub player_speed: f32,
    pub starting_health: i32,
    /// Health points represented by one heart
    pub health_per_heart: i32,
    /// Display cap for the heart row
    pub max_hearts: i32,
    pub shoot_cooldown_ms: u64,

    // Hostiles
    pub hostile_radius: f32,
    /// Per-hostile speed, sampled uniformly from this inclusive range
    pub hostile_speed_min: u32,
    pub hostile_speed_max: u32,
    /// Levels roll uniformly in `1..=hostile_levels`; starting health equals
    /// the level
    pub hostile_levels: u32,
    /// Radial variants cull hostiles this far outside the viewport
    pub hostile_despawn_margin: f32,

    // Projectiles
    pub projectile_radius: f32,
    pub projectile_speed: f32,
    /// Visual-hitbox tightening: subtracted from the nominal radius sum in
    /// the survival hostile hit test. Unclamped, so very small radii can
    /// make hits impossible.
    pub projectile_hit_trim: f32,

    // Spawning
    pub spawn_delay_ms: u64,
    /// One-way ratchet: survival spawn delay drops to
    /// `spawn_delay_fast_ms` once the score reaches this
    pub spawn_ratchet_score: u32,
    pub spawn_delay_fast_ms: u64,

    // Damage, score, pickups
    /// Health lost per hostile contact (survival)
    pub contact_damage: i32,
    pub score_per_kill: u32,
    pub pickup_radius: f32,
    /// Probability that a destroyed hostile drops a pickup
    pub pickup_drop_chance: f64,
    pub heal_amount: i32,
    /// Heal pickups never raise health above this
    pub heal_ceiling: i32,
    pub shield_duration_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::survival()
    }
}

impl Tuning {
    /// Timed survival shooter: homing auto-fire, hearts, shield and heal drops
    pub fn survival() -> Self {
        Self {
            mode: Mode::Survival {
                session_ms: 180_000,
            },
            viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            player_radius: 20.0,
            player_speed: 5.0,
            starting_health: 100,
            health_per_heart: 20,
            max_hearts: 5,
            shoot_cooldown_ms: 500,
            hostile_radius: 15.0,
            hostile_speed_min: 2,
            hostile_speed_max: 2,
            hostile_levels: 3,
            hostile_despawn_margin: 100.0,
            projectile_radius: 50.0,
            projectile_speed: 7.0,
            projectile_hit_trim: 30.0,
            spawn_delay_ms: 1000,
            spawn_ratchet_score: 1000,
            spawn_delay_fast_ms: 500,
            contact_damage: 20,
            score_per_kill: 10,
            pickup_radius: 30.0,
            pickup_drop_chance: 0.2,
            heal_amount: 20,
            heal_ceiling: 60,
            shield_duration_ms: 5000,
        }
    }

    /// Dense burst variant: twelve bullets per volley
    pub fn radial_dense() -> Self {
        Self {
            mode: Mode::Radial { bullet_count: 12 },
            player_radius: 15.0,
            player_speed: 5.0,
            shoot_cooldown_ms: 150,
            hostile_radius: 10.0,
            hostile_speed_min: 1,
            hostile_speed_max: 3,
            hostile_levels: 1,
            projectile_radius: 2.5,
            projectile_speed: 7.0,
            pickup_drop_chance: 0.0,
            ..Self::survival()
        }
    }

    /// Sparse burst variant: eight faster bullets, faster hostiles
    pub fn radial_sparse() -> Self {
        Self {
            mode: Mode::Radial { bullet_count: 8 },
            shoot_cooldown_ms: 200,
            hostile_speed_min: 2,
            hostile_speed_max: 4,
            projectile_radius: 3.0,
            projectile_speed: 8.0,
            ..Self::radial_dense()
        }
    }
}
