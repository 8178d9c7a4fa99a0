//! Grid Invaders - a fixed-formation arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formation, collisions, game state)
//! - `render`: Stateless scene builder consumed by a 2D surface
//! - `tuning`: Overridable gameplay configuration

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tunables;

/// Game configuration constants
///
/// `tuning::Tunables` carries the runtime-overridable copies; these are
/// the canonical defaults.
pub mod consts {
    /// Playfield dimensions in pixels
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Formation grid
    pub const FORMATION_ROWS: usize = 5;
    pub const FORMATION_COLS: usize = 10;
    /// Top-left of the grid at session start
    pub const FORMATION_ORIGIN_X: f32 = 50.0;
    pub const FORMATION_ORIGIN_Y: f32 = 50.0;
    /// Center-to-center spacing between grid slots
    pub const FORMATION_PITCH: f32 = 40.0;
    /// Horizontal formation speed (pixels per tick)
    pub const INVADER_SPEED: f32 = 0.5;
    /// Uniform y step applied when the formation bounces off an edge
    pub const DESCENT_STEP: f32 = 10.0;
    /// Per-tick probability that the formation fires
    pub const FIRE_PROBABILITY: f64 = 0.02;

    /// Entity sizes (axis-aligned squares except shields)
    pub const INVADER_SIZE: f32 = 32.0;
    pub const PLAYER_SIZE: f32 = 32.0;
    /// Shots are points for collision; this is their drawn size
    pub const SHOT_SIZE: f32 = 4.0;

    /// Shields
    pub const SHIELD_COUNT: usize = 3;
    pub const SHIELD_WIDTH: f32 = 64.0;
    pub const SHIELD_HEIGHT: f32 = 20.0;
    pub const SHIELD_HP: u8 = 3;
    /// Shield row sits this far above the field bottom
    pub const SHIELD_MARGIN_BOTTOM: f32 = 100.0;

    /// Player
    pub const START_LIVES: u8 = 3;
    /// Instantaneous x delta per move input (unclamped to the field)
    pub const PLAYER_STEP: f32 = 10.0;
    /// Player row sits this far above the field bottom
    pub const PLAYER_MARGIN_BOTTOM: f32 = 50.0;

    /// Projectiles (pixels per tick, along y)
    pub const PLAYER_SHOT_SPEED: f32 = 5.0;
    pub const INVADER_SHOT_SPEED: f32 = 3.0;
    /// Maximum concurrent player shots
    pub const PLAYER_SHOT_CAP: usize = 3;

    /// Score awarded per invader kill
    pub const SCORE_PER_KILL: u64 = 10;
}
