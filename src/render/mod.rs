//! Stateless render adapter
//!
//! Builds a flat list of colored rectangles from a simulation
//! snapshot. The consuming surface (canvas 2D, a test, anything that
//! can fill rects) clears the previous frame and draws the list in
//! order. No simulation logic belongs here.

use glam::Vec2;

use crate::sim::{GameState, InvaderKind};

/// Sprite colors, CSS hex as the canvas sink consumes them
pub mod colors {
    pub const PLAYER: &str = "#00ffcc";
    pub const SQUID: &str = "#ff66ff";
    pub const CRAB: &str = "#00ffcc";
    pub const SHIELD: &str = "#6666ff";
    pub const PLAYER_SHOT: &str = "#ffffff";
    pub const INVADER_SHOT: &str = "#ff0033";
}

/// One filled rectangle of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectShape {
    pub min: Vec2,
    pub size: Vec2,
    pub color: &'static str,
}

/// Build the draw list for one frame
///
/// Dead invaders and depleted shields are skipped; shots draw at their
/// cosmetic size even though they collide as points.
pub fn build_scene(state: &GameState) -> Vec<RectShape> {
    let shot_size = Vec2::splat(crate::consts::SHOT_SIZE);
    let mut shapes = Vec::with_capacity(
        1 + state.invaders.len()
            + state.shields.len()
            + state.player_shots.len()
            + state.invader_shots.len(),
    );

    shapes.push(RectShape {
        min: state.player.pos,
        size: Vec2::splat(state.player.size),
        color: colors::PLAYER,
    });

    for invader in state.alive_invaders() {
        shapes.push(RectShape {
            min: invader.pos,
            size: Vec2::splat(invader.size),
            color: match invader.kind {
                InvaderKind::Squid => colors::SQUID,
                InvaderKind::Crab => colors::CRAB,
            },
        });
    }

    for shield in state.shields.iter().filter(|s| s.is_active()) {
        shapes.push(RectShape {
            min: shield.pos,
            size: Vec2::new(shield.width, shield.height),
            color: colors::SHIELD,
        });
    }

    for shot in &state.player_shots {
        shapes.push(RectShape {
            min: shot.pos,
            size: shot_size,
            color: colors::PLAYER_SHOT,
        });
    }
    for shot in &state.invader_shots {
        shapes.push(RectShape {
            min: shot.pos,
            size: shot_size,
            color: colors::INVADER_SHOT,
        });
    }

    shapes
}
