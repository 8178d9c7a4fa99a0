//! Projectile advancement and pruning
//!
//! Advance first, then prune: a shot that leaves the field this tick is
//! gone before the collision pass ever sees its new position on the
//! next one. Player shots leave through the top, invader shots through
//! the bottom.

use super::state::GameState;

/// Move every shot by its per-tick velocity and drop the ones that left
/// the playfield vertically.
pub fn advance_projectiles(state: &mut GameState) {
    for shot in &mut state.player_shots {
        shot.pos.y += shot.vel_y;
    }
    state.player_shots.retain(|s| s.pos.y > 0.0);

    for shot in &mut state.invader_shots {
        shot.pos.y += shot.vel_y;
    }
    let field_height = state.tuning.field_height;
    state.invader_shots.retain(|s| s.pos.y < field_height);
}
