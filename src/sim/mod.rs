//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per simulated frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod energy;
pub mod input;
pub mod magnet;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{check_collisions, player_overlaps, rects_overlap, track_activity};
pub use energy::update_energy;
pub use input::{InputEvent, handle_input};
pub use magnet::{Magnet, apply_magnet_force, magnet_force};
pub use snapshot::{PowerUpView, Snapshot, SpriteView};
pub use state::{
    ActiveEffects, Difficulty, DifficultyParams, ExitAnimation, GameOverReason, GamePhase,
    GameState, LifeState, Obstacle, PowerUp, PowerUpInfo, PowerUpKind, Sprite,
};
pub use tick::tick;
