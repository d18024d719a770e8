//! Obstacle and power-up spawning and lifecycle
//!
//! Both generators key off the per-life frame counter. Boxes come every
//! `spawn_rate` frames (per difficulty), power-ups every
//! `POWERUP_SPAWN_RATE` frames regardless of difficulty.

use glam::Vec2;
use rand::Rng;

use super::collision::player_overlaps;
use super::state::{ActiveEffects, GameState, Obstacle, PowerUp, PowerUpKind};
use crate::consts::*;

/// Run both periodic generators for the current frame
pub fn run_spawners(state: &mut GameState) {
    let params = state.difficulty.params();
    if state.frame % params.spawn_rate == 0 {
        spawn_obstacle(state);
    }
    if state.frame % POWERUP_SPAWN_RATE == 0 {
        spawn_power_up(state);
    }
}

/// Drop a box just above the canvas, unless the difficulty cap is reached
pub fn spawn_obstacle(state: &mut GameState) -> bool {
    let params = state.difficulty.params();
    if state.obstacles.len() >= params.max_obstacles {
        return false;
    }

    let x = state.rng.random_range(0.0..CANVAS_WIDTH - OBSTACLE_SIZE);
    let speed = params.base_speed + state.rng.random_range(0.0..OBSTACLE_SPEED_JITTER);
    state.obstacles.push(Obstacle {
        pos: Vec2::new(x, -OBSTACLE_SIZE),
        size: Vec2::splat(OBSTACLE_SIZE),
        speed,
    });
    log::debug!("Spawned box at x={:.1} speed={:.2} (frame {})", x, speed, state.frame);
    true
}

/// Drop a random power-up just above the canvas
pub fn spawn_power_up(state: &mut GameState) {
    let kind = PowerUpKind::ALL[state.rng.random_range(0..PowerUpKind::ALL.len())];
    let x = state.rng.random_range(0.0..CANVAS_WIDTH - POWERUP_SIZE);
    state.power_ups.push(PowerUp {
        pos: Vec2::new(x, -POWERUP_SIZE),
        kind,
        speed: state.difficulty.params().base_speed,
    });
    log::debug!("Spawned {:?} power-up at x={:.1}", kind, x);
}

/// Move boxes down and drop the ones that left the canvas
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>) {
    obstacles.retain_mut(Obstacle::fall);
}

/// Move power-ups down, apply the ones the player touches, drop exits
///
/// Returns the kinds picked up this tick.
pub fn advance_power_ups(
    power_ups: &mut Vec<PowerUp>,
    player_pos: Vec2,
    effects: &mut ActiveEffects,
) -> Vec<PowerUpKind> {
    let mut picked = Vec::new();
    power_ups.retain_mut(|p| {
        p.pos.y += p.speed;
        if player_overlaps(player_pos, p.pos, p.size()) {
            p.kind.apply(effects);
            picked.push(p.kind);
            return false;
        }
        p.pos.y < CANVAS_HEIGHT
    });
    for kind in &picked {
        log::debug!("Picked up {:?}", kind);
    }
    picked
}
