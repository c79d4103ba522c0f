//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected through the session state
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod fire;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, rects_overlap};
pub use fire::nearest_hostile;
pub use spawn::try_spawn;
pub use state::{
    EndReason, GameEvent, Hostile, Hud, Phase, Pickup, PickupKind, Player, Projectile,
    SessionClock, SessionResult, SessionState,
};
pub use tick::{TickInput, tick};
