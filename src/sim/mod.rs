//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per scheduled frame, fixed per-tick speeds
//! - Injected RNG only (callers pass a seeded source into `tick`)
//! - No rendering or platform dependencies

pub mod collision;
pub mod formation;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::{Aabb, resolve_collisions};
pub use state::{GamePhase, GameState, Invader, InvaderKind, Player, Projectile, Shield};
pub use tick::{GameEvent, TickInput, tick};
