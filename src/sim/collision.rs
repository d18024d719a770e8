//! Collision detection and the game-over checks
//!
//! Everything is axis-aligned boxes: the player and mirror are
//! `PLAYER_SIZE` squares, obstacles and power-ups carry their own size.

use glam::Vec2;

use super::state::{GameOverReason, GameState, Sprite};
use crate::consts::*;

/// Strict axis-aligned rectangle overlap (touching edges do not count)
#[inline]
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Overlap test between the player's box and another box
#[inline]
pub fn player_overlaps(player_pos: Vec2, other_pos: Vec2, other_size: Vec2) -> bool {
    rects_overlap(player_pos, Vec2::splat(PLAYER_SIZE), other_pos, other_size)
}

/// Check the four canvas edges
///
/// On a hit the sprite is clamped back onto the edge and the matching
/// velocity component is zeroed.
pub fn check_walls(sprite: &mut Sprite) -> Option<GameOverReason> {
    if sprite.pos.x < 0.0 {
        sprite.pos.x = 0.0;
        sprite.vel.x = 0.0;
        return Some(GameOverReason::LeftWall);
    }
    if sprite.pos.x + PLAYER_SIZE > CANVAS_WIDTH {
        sprite.pos.x = CANVAS_WIDTH - PLAYER_SIZE;
        sprite.vel.x = 0.0;
        return Some(GameOverReason::RightWall);
    }
    if sprite.pos.y < 0.0 {
        sprite.pos.y = 0.0;
        sprite.vel.y = 0.0;
        return Some(GameOverReason::Ceiling);
    }
    if sprite.pos.y + PLAYER_SIZE > CANVAS_HEIGHT {
        sprite.pos.y = CANVAS_HEIGHT - PLAYER_SIZE;
        sprite.vel.y = 0.0;
        return Some(GameOverReason::Floor);
    }
    None
}

/// Walls, then obstacles, then the mirror; first hit wins
///
/// The caller skips this whole block while invincibility is active.
pub fn check_collisions(state: &mut GameState) -> Option<GameOverReason> {
    if let Some(reason) = check_walls(&mut state.player) {
        return Some(reason);
    }

    let player_pos = state.player.pos;
    if state
        .obstacles
        .iter()
        .any(|o| player_overlaps(player_pos, o.pos, o.size))
    {
        return Some(GameOverReason::Obstacle);
    }

    if player_overlaps(player_pos, state.mirror.pos, Vec2::splat(PLAYER_SIZE)) {
        return Some(GameOverReason::Fusion);
    }

    None
}

/// Count consecutive slow ticks; any fast tick resets the count
pub fn track_activity(inactive_ticks: &mut u32, vel: Vec2) -> Option<GameOverReason> {
    if vel.length() < MIN_MOVEMENT_SPEED {
        *inactive_ticks += 1;
        if *inactive_ticks >= INACTIVITY_THRESHOLD {
            return Some(GameOverReason::Inactivity);
        }
    } else {
        *inactive_ticks = 0;
    }
    None
}
