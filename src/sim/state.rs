//! Game state and core simulation types
//!
//! `GameState` is the explicit simulation context: every collection the
//! game mutates lives on it, and the tick passes it to each subsystem.
//! No ambient/static state anywhere in the sim.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tunables;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Session ended; absorbing until the state is rebuilt
    GameOver,
}

/// Cosmetic invader variant, alternating by grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvaderKind {
    Squid,
    Crab,
}

/// One slot of the formation grid
///
/// Dead invaders stay in the collection for the whole session; `alive`
/// gates movement, firing, collision and rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invader {
    pub pos: Vec2,
    pub size: f32,
    pub alive: bool,
    pub kind: InvaderKind,
}

impl Invader {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    /// Spawn point for this invader's shots
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size / 2.0, self.pos.y + self.size)
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub lives: u8,
}

impl Player {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    /// Spawn point for the player's shots
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size / 2.0, self.pos.y)
    }
}

/// A destructible shield absorbing invader shots
///
/// hp reaches 0 and the shield goes inert; it is never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shield {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub hp: u8,
}

impl Shield {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }

    pub fn is_active(&self) -> bool {
        self.hp > 0
    }
}

/// A shot in flight; a point for collision purposes
///
/// `vel_y` is signed: negative moves up (player shots), positive moves
/// down (invader shots).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel_y: f32,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed, kept for restart/reproduction
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub score: u64,
    /// Formation travel direction, +1 right / -1 left
    pub direction: f32,
    pub player: Player,
    /// Row-major grid, never compacted
    pub invaders: Vec<Invader>,
    pub shields: Vec<Shield>,
    /// Player shots, capped at `tuning.player_shot_cap`
    pub player_shots: Vec<Projectile>,
    pub invader_shots: Vec<Projectile>,
    pub tuning: Tunables,
}

impl GameState {
    /// Create a fresh session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tunables::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tunables) -> Self {
        let player = Player {
            pos: Vec2::new(
                tuning.field_width / 2.0 - tuning.player_size / 2.0,
                tuning.field_height - tuning.player_margin_bottom,
            ),
            size: tuning.player_size,
            lives: tuning.start_lives,
        };

        let mut state = Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Running,
            score: 0,
            direction: 1.0,
            player,
            invaders: Vec::with_capacity(tuning.rows * tuning.cols),
            shields: Vec::with_capacity(tuning.shield_count),
            player_shots: Vec::new(),
            invader_shots: Vec::new(),
            tuning,
        };

        state.spawn_invaders();
        state.spawn_shields();
        state
    }

    /// Rebuild the session in place (restart path)
    pub fn reset(&mut self, seed: u64) {
        *self = Self::with_tuning(seed, self.tuning.clone());
    }

    fn spawn_invaders(&mut self) {
        for r in 0..self.tuning.rows {
            for c in 0..self.tuning.cols {
                self.invaders.push(Invader {
                    pos: Vec2::new(
                        self.tuning.formation_origin_x + c as f32 * self.tuning.formation_pitch,
                        self.tuning.formation_origin_y + r as f32 * self.tuning.formation_pitch,
                    ),
                    size: self.tuning.invader_size,
                    alive: true,
                    kind: if r % 2 == 0 {
                        InvaderKind::Squid
                    } else {
                        InvaderKind::Crab
                    },
                });
            }
        }
    }

    fn spawn_shields(&mut self) {
        let gap = self.tuning.field_width / (self.tuning.shield_count as f32 + 1.0);
        for i in 0..self.tuning.shield_count {
            self.shields.push(Shield {
                pos: Vec2::new(
                    gap * (i as f32 + 1.0) - self.tuning.shield_width / 2.0,
                    self.tuning.field_height - self.tuning.shield_margin_bottom,
                ),
                width: self.tuning.shield_width,
                height: self.tuning.shield_height,
                hp: self.tuning.shield_hp,
            });
        }
    }

    /// Move input: instantaneous x delta, intentionally unclamped to the
    /// field bounds.
    pub fn move_left(&mut self) {
        self.player.pos.x -= self.tuning.player_step;
    }

    pub fn move_right(&mut self) {
        self.player.pos.x += self.tuning.player_step;
    }

    /// Fire input: appends a shot only while under the concurrent cap.
    /// Returns whether a shot was spawned.
    pub fn fire(&mut self) -> bool {
        if self.player_shots.len() >= self.tuning.player_shot_cap {
            return false;
        }
        self.player_shots.push(Projectile {
            pos: self.player.top_center(),
            vel_y: -self.tuning.player_shot_speed,
        });
        true
    }

    pub fn alive_invaders(&self) -> impl Iterator<Item = &Invader> {
        self.invaders.iter().filter(|i| i.alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spawn() {
        let state = GameState::new(1);
        assert_eq!(state.invaders.len(), 50);
        assert!(state.invaders.iter().all(|i| i.alive));

        // Row-major layout: first row at y=50, kinds alternating by row
        assert_eq!(state.invaders[0].pos, Vec2::new(50.0, 50.0));
        assert_eq!(state.invaders[0].kind, InvaderKind::Squid);
        assert_eq!(state.invaders[10].kind, InvaderKind::Crab);
        assert_eq!(state.invaders[9].pos, Vec2::new(50.0 + 9.0 * 40.0, 50.0));
    }

    #[test]
    fn test_shield_spawn() {
        let state = GameState::new(1);
        assert_eq!(state.shields.len(), 3);
        // Even gaps across an 800-wide field: centers at 200/400/600
        assert_eq!(state.shields[0].pos.x, 200.0 - 32.0);
        assert_eq!(state.shields[1].pos.x, 400.0 - 32.0);
        assert_eq!(state.shields[2].pos.y, 500.0);
        assert!(state.shields.iter().all(|s| s.hp == 3));
    }

    #[test]
    fn test_player_spawn() {
        let state = GameState::new(1);
        assert_eq!(state.player.pos, Vec2::new(400.0 - 16.0, 550.0));
        assert_eq!(state.player.lives, 3);
    }

    #[test]
    fn test_fire_cap() {
        let mut state = GameState::new(1);
        assert!(state.fire());
        assert!(state.fire());
        assert!(state.fire());
        assert!(!state.fire());
        assert_eq!(state.player_shots.len(), 3);

        // Shots spawn at the player's top-center, moving up
        let shot = &state.player_shots[0];
        assert_eq!(shot.pos, state.player.top_center());
        assert!(shot.vel_y < 0.0);
    }

    #[test]
    fn test_movement_is_unclamped() {
        let mut state = GameState::new(1);
        for _ in 0..100 {
            state.move_left();
        }
        // Out-of-bounds movement is deliberate, not a defect
        assert!(state.player.pos.x < 0.0);
    }

    #[test]
    fn test_reset_keeps_tuning() {
        let tuning = Tunables {
            rows: 2,
            ..Tunables::default()
        };
        let mut state = GameState::with_tuning(7, tuning);
        state.score = 120;
        state.reset(9);
        assert_eq!(state.seed, 9);
        assert_eq!(state.score, 0);
        assert_eq!(state.invaders.len(), 2 * 10);
    }
}
