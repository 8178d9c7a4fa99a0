//! Data-driven gameplay configuration
//!
//! Every fixed constant from `crate::consts` has a runtime-overridable
//! copy here so a hosting page (or a test) can rebalance the game
//! without recompiling. Loaded from JSON; defaults mirror `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Overridable gameplay constants
///
/// Held by `GameState` so every sim pass reads the same values for the
/// whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Playfield dimensions
    pub field_width: f32,
    pub field_height: f32,

    /// Formation grid shape and placement
    pub rows: usize,
    pub cols: usize,
    pub formation_origin_x: f32,
    pub formation_origin_y: f32,
    pub formation_pitch: f32,
    /// Horizontal formation speed (pixels per tick)
    pub invader_speed: f32,
    /// Uniform y step on edge bounce
    pub descent_step: f32,
    /// Per-tick probability that the formation fires
    pub fire_probability: f64,

    /// Entity sizes
    pub invader_size: f32,
    pub player_size: f32,

    /// Shields
    pub shield_count: usize,
    pub shield_width: f32,
    pub shield_height: f32,
    pub shield_hp: u8,
    pub shield_margin_bottom: f32,

    /// Player
    pub start_lives: u8,
    pub player_step: f32,
    pub player_margin_bottom: f32,

    /// Projectiles
    pub player_shot_speed: f32,
    pub invader_shot_speed: f32,
    pub player_shot_cap: usize,

    /// Score per invader kill
    pub score_per_kill: u64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            rows: FORMATION_ROWS,
            cols: FORMATION_COLS,
            formation_origin_x: FORMATION_ORIGIN_X,
            formation_origin_y: FORMATION_ORIGIN_Y,
            formation_pitch: FORMATION_PITCH,
            invader_speed: INVADER_SPEED,
            descent_step: DESCENT_STEP,
            fire_probability: FIRE_PROBABILITY,
            invader_size: INVADER_SIZE,
            player_size: PLAYER_SIZE,
            shield_count: SHIELD_COUNT,
            shield_width: SHIELD_WIDTH,
            shield_height: SHIELD_HEIGHT,
            shield_hp: SHIELD_HP,
            shield_margin_bottom: SHIELD_MARGIN_BOTTOM,
            start_lives: START_LIVES,
            player_step: PLAYER_STEP,
            player_margin_bottom: PLAYER_MARGIN_BOTTOM,
            player_shot_speed: PLAYER_SHOT_SPEED,
            invader_shot_speed: INVADER_SHOT_SPEED,
            player_shot_cap: PLAYER_SHOT_CAP,
            score_per_kill: SCORE_PER_KILL,
        }
    }
}

impl Tunables {
    /// Parse overrides from JSON; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tunables::default();
        assert_eq!(t.rows, 5);
        assert_eq!(t.cols, 10);
        assert_eq!(t.player_shot_cap, 3);
        assert_eq!(t.start_lives, 3);
        assert!((t.fire_probability - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_overrides() {
        let t = Tunables::from_json(r#"{ "invader_speed": 2.0, "rows": 3 }"#).unwrap();
        assert_eq!(t.rows, 3);
        assert!((t.invader_speed - 2.0).abs() < f32::EPSILON);
        // Untouched fields keep their defaults
        assert_eq!(t.cols, 10);
        assert!((t.descent_step - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_json_round_trip() {
        let t = Tunables::default();
        let back = Tunables::from_json(&t.to_json()).unwrap();
        assert_eq!(back.shield_count, t.shield_count);
        assert!((back.player_shot_speed - t.player_shot_speed).abs() < f32::EPSILON);
    }
}
