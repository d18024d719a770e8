//! Read-only view of the game for renderers and tooling

use glam::Vec2;
use serde::Serialize;

use super::state::{Difficulty, ExitAnimation, GamePhase, GameState, Obstacle, PowerUpKind, Sprite};

/// A sprite as the renderer needs it
#[derive(Debug, Clone, Serialize)]
pub struct SpriteView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing_right: bool,
}

/// A power-up with its display colour resolved
#[derive(Debug, Clone, Serialize)]
pub struct PowerUpView {
    pub pos: Vec2,
    pub size: f32,
    pub kind: PowerUpKind,
    pub color: u32,
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub frame: u64,
    pub score: u64,
    pub player: SpriteView,
    pub mirror: SpriteView,
    pub obstacles: Vec<Obstacle>,
    pub power_ups: Vec<PowerUpView>,
    pub magnet: Option<Vec2>,
    /// Magnet is exerting force (draw the tether lines)
    pub magnet_active: bool,
    pub energy: u32,
    pub energy_fraction: f32,
    pub infinite_magnet_ticks: u32,
    pub invincibility_ticks: u32,
    pub game_over: Option<&'static str>,
    pub exit_animation: Option<ExitAnimation>,
    /// Exit animation has reached its final frame
    pub exit_animation_done: bool,
}

impl GameState {
    /// Capture the state a renderer reads after a tick
    pub fn snapshot(&self) -> Snapshot {
        let view = |s: &Sprite| SpriteView {
            pos: s.pos,
            vel: s.vel,
            facing_right: s.facing_right,
        };

        Snapshot {
            phase: self.phase,
            difficulty: self.difficulty,
            frame: self.frame,
            score: self.score,
            player: view(&self.player),
            mirror: view(&self.mirror),
            obstacles: self.obstacles.clone(),
            power_ups: self
                .power_ups
                .iter()
                .map(|p| PowerUpView {
                    pos: p.pos,
                    size: p.size().x,
                    kind: p.kind,
                    color: p.kind.info().color,
                })
                .collect(),
            magnet: self.magnet.point,
            magnet_active: self.magnet.is_active(self.effects.infinite_magnet()),
            energy: self.magnet.energy,
            energy_fraction: self.magnet.energy_fraction(),
            infinite_magnet_ticks: self.effects.remaining(PowerUpKind::InfiniteMagnet),
            invincibility_ticks: self.effects.remaining(PowerUpKind::Invincibility),
            game_over: self.game_over_reason().map(|r| r.message()),
            exit_animation: self.exit_animation.clone(),
            exit_animation_done: self
                .exit_animation
                .as_ref()
                .is_some_and(ExitAnimation::is_finished),
        }
    }
}
