//! Magnetic Mirror - a 2D arcade physics game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, magnet, spawning, game over)
//! - `runner`: Fixed-timestep scheduler and input queue
//! - `settings`: Player configuration
//! - `highscores`: Leaderboard

pub mod error;
pub mod highscores;
pub mod runner;
pub mod settings;
pub mod sim;

pub use error::PersistError;
pub use highscores::HighScores;
pub use runner::{FrameRunner, InputQueue};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz animation frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical canvas size
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player and mirror sprites are squares of this size
    pub const PLAYER_SIZE: f32 = 24.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.08;
    /// Horizontal speed set by the move keys
    pub const MOVE_SPEED: f32 = 4.0;
    /// Per-component velocity limit
    pub const MAX_VELOCITY: f32 = 6.0;
    /// Velocity multiplier applied after integration
    pub const DRAG: f32 = 0.98;

    /// Magnet force tuning
    pub const MAGNET_FORCE: f32 = 0.5;
    pub const MAGNET_RANGE: f32 = 900.0;
    pub const MIN_DISTANCE: f32 = 5.0;
    pub const MAX_FORCE: f32 = 2.0;

    /// Magnet energy (ticks of pulling)
    pub const MAX_ENERGY: u32 = 180;
    pub const RECHARGE_RATE: u32 = 1;
    pub const DRAIN_RATE: u32 = 1;

    /// Consecutive slow ticks before the player is out
    pub const INACTIVITY_THRESHOLD: u32 = 180;
    pub const MIN_MOVEMENT_SPEED: f32 = 0.5;

    /// Falling boxes
    pub const OBSTACLE_SIZE: f32 = 30.0;
    /// Random speed added on top of the difficulty base speed, in [0, JITTER)
    pub const OBSTACLE_SPEED_JITTER: f32 = 2.0;

    /// Power-ups
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const POWERUP_SPAWN_RATE: u64 = 300;
    pub const POWERUP_DURATION: u32 = 300;

    /// Exit animations
    pub const DEATH_ANIMATION_FRAMES: u32 = 8;
    pub const DEATH_ANIMATION_SPEED: u32 = 3;
    pub const FUSION_FADE_STEP: f32 = 0.02;
    pub const FUSION_REVEAL_TICKS: u32 = 60;
    pub const FUSION_SIZE: f32 = PLAYER_SIZE * 1.5;
}

/// Clamp each component of `v` to [-limit, limit]
#[inline]
pub fn clamp_components(v: Vec2, limit: f32) -> Vec2 {
    v.clamp(Vec2::splat(-limit), Vec2::splat(limit))
}

/// Whether a point lies inside the canvas (edges inclusive)
#[inline]
pub fn in_canvas(point: Vec2) -> bool {
    use consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    (0.0..=CANVAS_WIDTH).contains(&point.x) && (0.0..=CANVAS_HEIGHT).contains(&point.y)
}

/// Clamp a point into the canvas
#[inline]
pub fn clamp_to_canvas(point: Vec2) -> Vec2 {
    use consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    point.clamp(Vec2::ZERO, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT))
}

/// Unit direction and distance from `from` to `to`
///
/// Returns `None` when the points coincide.
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Option<(Vec2, f32)> {
    let delta = to - from;
    let distance = delta.length();
    if distance > 0.0 {
        Some((delta / distance, distance))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_components() {
        let v = clamp_components(Vec2::new(9.0, -7.5), 6.0);
        assert_eq!(v, Vec2::new(6.0, -6.0));

        let v = clamp_components(Vec2::new(1.0, -2.0), 6.0);
        assert_eq!(v, Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_in_canvas_edges() {
        assert!(in_canvas(Vec2::ZERO));
        assert!(in_canvas(Vec2::new(800.0, 600.0)));
        assert!(!in_canvas(Vec2::new(-0.1, 10.0)));
        assert!(!in_canvas(Vec2::new(10.0, 600.5)));
    }

    #[test]
    fn test_direction_to() {
        let (dir, dist) = direction_to(Vec2::ZERO, Vec2::new(3.0, 4.0)).unwrap();
        assert!((dist - 5.0).abs() < 1e-6);
        assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-6);

        assert!(direction_to(Vec2::ONE, Vec2::ONE).is_none());
    }
}
