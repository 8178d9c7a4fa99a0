//! Enemy formation controller
//!
//! The grid moves as one rigid block: every alive invader advances by
//! the shared direction and speed, and an edge crossing flips the
//! direction and steps the whole grid down, at most once per tick.
//! Firing is a single Bernoulli draw per tick on the injected RNG.

use rand::Rng;

use super::state::{GameState, Projectile};

/// Advance the formation by one tick and maybe fire
///
/// The fire-probability draw happens every tick, even with no alive
/// shooter, so the RNG stream depends only on the tick count.
pub fn update_formation<R: Rng>(state: &mut GameState, rng: &mut R) {
    let step = state.direction * state.tuning.invader_speed;
    let field_width = state.tuning.field_width;

    let mut edge_reached = false;
    for invader in state.invaders.iter_mut().filter(|i| i.alive) {
        invader.pos.x += step;
        if invader.pos.x < 0.0 || invader.pos.x + invader.size > field_width {
            edge_reached = true;
        }
    }

    if edge_reached {
        state.direction = -state.direction;
        // Uniform descent for the whole grid, dead slots included
        for invader in &mut state.invaders {
            invader.pos.y += state.tuning.descent_step;
        }
    }

    if rng.random_bool(state.tuning.fire_probability) {
        let shooters: Vec<usize> = state
            .invaders
            .iter()
            .enumerate()
            .filter(|(_, i)| i.alive)
            .map(|(idx, _)| idx)
            .collect();
        // The selection draw only happens with a shooter available
        if !shooters.is_empty() {
            let idx = shooters[rng.random_range(0..shooters.len())];
            let shot = Projectile {
                pos: state.invaders[idx].bottom_center(),
                vel_y: state.tuning.invader_shot_speed,
            };
            state.invader_shots.push(shot);
        }
    }
}
