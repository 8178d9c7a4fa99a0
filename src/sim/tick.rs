//! Per-frame simulation tick
//!
//! One logical tick per scheduled animation frame. The terminal check
//! runs before anything else moves, and `GamePhase::GameOver` is
//! absorbing: once entered, ticks are no-ops until the state is
//! rebuilt.

use rand::Rng;

use super::collision::resolve_collisions;
use super::formation::update_formation;
use super::projectile::advance_projectiles;
use super::state::{GamePhase, GameState};

/// Input events gathered since the previous tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

/// Outputs for the external sinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score/lives display push, once per running tick
    Hud { score: u64, lives: u8 },
    /// Terminal event carrying the final score
    GameOver { score: u64 },
}

/// Advance the session by one tick
///
/// Order: terminal check, input application, formation, projectiles,
/// collision resolution, display push. The render handoff is the
/// caller's job (snapshot the state into `crate::render`).
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    if is_terminal(state) {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver { score: state.score });
        return events;
    }

    state.time_ticks += 1;

    if input.move_left {
        state.move_left();
    }
    if input.move_right {
        state.move_right();
    }
    if input.fire {
        state.fire();
    }

    update_formation(state, rng);
    advance_projectiles(state);
    resolve_collisions(state);

    events.push(GameEvent::Hud {
        score: state.score,
        lives: state.player.lives,
    });
    events
}

/// Terminal when the player is depleted or any alive invader's lower
/// edge has reached the player's row (breach).
fn is_terminal(state: &GameState) -> bool {
    state.player.lives == 0
        || state
            .alive_invaders()
            .any(|i| i.pos.y + i.size >= state.player.pos.y)
}
