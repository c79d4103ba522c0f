//! Session state and core entity types
//!
//! Everything a presentation layer needs to draw a frame lives here. The
//! session state owns every entity collection exclusively; `tick` is the
//! only mutator.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::ticks_to_ms;
use crate::tuning::{Mode, Tuning};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Survival timer ran out
    TimeUp,
    /// Health reached zero, or a hostile touched the player in a radial run
    Defeat,
    /// External quit signal
    Quit,
}

/// Session lifecycle. The transition is one-way; there is no pause state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Ended(EndReason),
}

/// Pickup kinds dropped by destroyed hostiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Heal,
    Shield,
}

/// Fire-and-forget cues for the audio/presentation boundary
///
/// Queued during a tick and drained by the consumer; dropping them on the
/// floor is harmless to simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    HostileDestroyed,
    PickupCollected(PickupKind),
    PlayerHit,
}

/// The player avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Collision radius, or rectangle half-extent in radial sessions
    pub radius: f32,
    /// Pixels per tick along each active input axis
    pub speed: f32,
    pub health: i32,
    pub shield_active: bool,
    /// Timestamp (ms) of the most recent shield pickup
    pub shield_start_ms: u64,
    /// Timestamp (ms) of the last emitted shot; `None` before the first
    pub last_shot_ms: Option<u64>,
}

impl Player {
    fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.viewport / 2.0,
            radius: tuning.player_radius,
            speed: tuning.player_speed,
            health: tuning.starting_health,
            shield_active: false,
            shield_start_ms: 0,
            last_shot_ms: None,
        }
    }

    /// Hearts are derived from health, never stored separately
    pub fn hearts(&self, health_per_heart: i32) -> i32 {
        self.health.max(0) / health_per_heart
    }

    /// Clear the shield once its window has elapsed
    pub fn update_shield(&mut self, now_ms: u64, duration_ms: u64) {
        if self.shield_active && now_ms - self.shield_start_ms >= duration_ms {
            self.shield_active = false;
        }
    }
}

/// An enemy pursuing the player
#[derive(Debug, Clone)]
pub struct Hostile {
    pub pos: Vec2,
    /// Collision radius, or rectangle half-extent in radial sessions
    pub radius: f32,
    pub speed: f32,
    /// Drives the sprite variant and the starting health
    pub level: u32,
    pub health: i32,
}

/// A bullet in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    /// Unit direction of travel
    pub dir: Vec2,
    /// Firing angle in radians, kept for sprite orientation
    pub angle: f32,
    pub speed: f32,
    /// Collision radius, or rectangle half-extent in radial sessions
    pub radius: f32,
}

/// A collectible left behind by a destroyed hostile
#[derive(Debug, Clone)]
pub struct Pickup {
    pub pos: Vec2,
    pub kind: PickupKind,
    pub radius: f32,
}

/// Fixed-step session clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionClock {
    pub ticks: u64,
}

impl SessionClock {
    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    /// Milliseconds since session start (exact integer math at 60 Hz)
    pub fn now_ms(&self) -> u64 {
        ticks_to_ms(self.ticks)
    }
}

/// Derived per-frame HUD fields for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u32,
    /// Heart row, capped at the configured maximum
    pub hearts: i32,
    /// Session time left (survival sessions only)
    pub remaining_ms: Option<u64>,
    /// Shield time left, when a shield is active
    pub shield_remaining_ms: Option<u64>,
}

/// Final outcome surfaced to the end-of-session presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub score: u32,
    pub reason: EndReason,
    pub elapsed_ms: u64,
}

/// Complete state of one play-through
///
/// Constructed once per session with a seed, so any run can be reproduced
/// exactly. All randomness (spawn placement, hostile rolls, pickup drops)
/// flows through the owned RNG.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub clock: SessionClock,
    pub phase: Phase,
    pub score: u32,
    pub player: Player,
    pub hostiles: Vec<Hostile>,
    pub projectiles: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
    /// Timestamp (ms) of the last spawn-cadence reset
    pub last_spawn_ms: u64,
    events: Vec<GameEvent>,
}

impl SessionState {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            player: Player::new(&tuning),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            clock: SessionClock::default(),
            phase: Phase::Running,
            score: 0,
            hostiles: Vec::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            last_spawn_ms: 0,
            events: Vec::new(),
        }
    }

    /// End the session. The first reason wins; later calls are ignored.
    pub fn end(&mut self, reason: EndReason) {
        if self.phase == Phase::Running {
            self.phase = Phase::Ended(reason);
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all cues queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot of the HUD fields for the current frame
    pub fn hud(&self) -> Hud {
        let now = self.clock.now_ms();
        let remaining_ms = match self.tuning.mode {
            Mode::Survival { session_ms } => Some(session_ms.saturating_sub(now)),
            Mode::Radial { .. } => None,
        };
        let shield_remaining_ms = if self.player.shield_active {
            let expiry = self.player.shield_start_ms + self.tuning.shield_duration_ms;
            Some(expiry.saturating_sub(now))
        } else {
            None
        };
        Hud {
            score: self.score,
            hearts: self
                .player
                .hearts(self.tuning.health_per_heart)
                .min(self.tuning.max_hearts),
            remaining_ms,
            shield_remaining_ms,
        }
    }

    /// Final outcome, available once the session has ended
    pub fn result(&self) -> Option<SessionResult> {
        match self.phase {
            Phase::Ended(reason) => Some(SessionResult {
                score: self.score,
                reason,
                elapsed_ms: self.clock.now_ms(),
            }),
            Phase::Running => None,
        }
    }
}
