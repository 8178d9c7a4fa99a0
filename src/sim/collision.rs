//! Collision geometry and the per-tick collision resolver
//!
//! Shots are points, targets are axis-aligned boxes, and the
//! containment test is strict on every side: a shot sitting exactly on
//! a box edge does not register. On a hit the shot is relocated
//! off-field immediately, so it cannot match another box later in the
//! same pass; the projectile pass prunes it next tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Offset past the top edge a spent player shot is parked at
const OFF_FIELD_TOP: f32 = -10.0;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner (screen coordinates, y grows downward)
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict interior containment: points on the boundary miss
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x > self.min.x && p.x < max.x && p.y > self.min.y && p.y < max.y
    }
}

/// Resolve all shot/target collisions for the current tick
///
/// Runs after movement. Player shots kill invaders and score; invader
/// shots damage the player and shields. Player and shield checks on an
/// invader shot are independent within the pass, but the immediate
/// relocation on first shield hit prevents double-counting across
/// shields.
pub fn resolve_collisions(state: &mut GameState) {
    let score_per_kill = state.tuning.score_per_kill;

    for shot in &mut state.player_shots {
        for invader in &mut state.invaders {
            if invader.alive && invader.aabb().contains_point(shot.pos) {
                invader.alive = false;
                state.score += score_per_kill;
                // Park off-field before the next invader is examined
                shot.pos.y = OFF_FIELD_TOP;
            }
        }
    }

    let off_field_bottom = state.tuning.field_height + 1.0;
    for shot in &mut state.invader_shots {
        if state.player.aabb().contains_point(shot.pos) {
            state.player.lives = state.player.lives.saturating_sub(1);
            shot.pos.y = off_field_bottom;
        }
        for shield in &mut state.shields {
            if shield.is_active() && shield.aabb().contains_point(shot.pos) {
                shield.hp -= 1;
                shot.pos.y = off_field_bottom;
            }
        }
    }
}
