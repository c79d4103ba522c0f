//! Edge Swarm - arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, fire control, collisions)
//! - `tuning`: Data-driven game balance and variant presets
//!
//! Rendering, audio playback and raw input decoding live outside this crate.
//! The presentation boundary is `SessionState` plus what it derives: a `Hud`
//! snapshot each frame, a queue of `GameEvent` cues, and a `SessionResult`
//! once the session ends.

pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, Hud, SessionResult, SessionState, TickInput, tick};
pub use tuning::{Mode, Tuning};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Default viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
}

/// Unit vector for an angle in radians
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Direction from `from` toward `to`; the zero vector when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Milliseconds elapsed after `ticks` fixed steps (exact integer math at 60 Hz)
#[inline]
pub fn ticks_to_ms(ticks: u64) -> u64 {
    ticks * 1000 / consts::TICK_RATE as u64
}
