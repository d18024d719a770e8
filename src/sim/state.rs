//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; it is passed by
//! `&mut` into the update functions, never held globally.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::magnet::Magnet;
use crate::clamp_components;
use crate::consts::*;

/// Top-level screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu screens (handled outside the simulation)
    Menu,
    /// A life is running or has just ended
    Playing,
}

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Spawner tuning for one difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParams {
    /// Ticks between obstacle spawns
    pub spawn_rate: u64,
    /// No spawn while this many obstacles are live
    pub max_obstacles: usize,
    /// Base falling speed for obstacles and power-ups
    pub base_speed: f32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn params(&self) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams {
                spawn_rate: 60,
                max_obstacles: 8,
                base_speed: 2.0,
            },
            Difficulty::Medium => DifficultyParams {
                spawn_rate: 40,
                max_obstacles: 10,
                base_speed: 3.0,
            },
            Difficulty::Hard => DifficultyParams {
                spawn_rate: 20,
                max_obstacles: 15,
                base_speed: 4.0,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Why a life ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    LeftWall,
    RightWall,
    Ceiling,
    Floor,
    Obstacle,
    /// Player touched the mirror sprite
    Fusion,
    /// Player stayed (nearly) still for too long
    Inactivity,
}

impl GameOverReason {
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::LeftWall => "HIT LEFT WALL!",
            GameOverReason::RightWall => "HIT RIGHT WALL!",
            GameOverReason::Ceiling => "HIT CEILING!",
            GameOverReason::Floor => "FELL DOWN!",
            GameOverReason::Obstacle => "HIT BY BOX!",
            GameOverReason::Fusion => "PLAYERS COLLIDED! FUSION IN PROGRESS...",
            GameOverReason::Inactivity => "STOPPED MOVING!",
        }
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Alive/terminal state of the current life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    Terminal(GameOverReason),
}

/// Player or mirror sprite
///
/// `pos` is the top-left corner of a `PLAYER_SIZE` square.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing_right: bool,
    /// Canonical start position (used by reset and NaN recovery)
    home: Vec2,
    home_facing_right: bool,
}

impl Sprite {
    pub fn new(home: Vec2, facing_right: bool) -> Self {
        Self {
            pos: home,
            vel: Vec2::ZERO,
            facing_right,
            home,
            home_facing_right: facing_right,
        }
    }

    /// The player starts on the left quarter line, facing right
    pub fn player() -> Self {
        Self::new(Vec2::new(CANVAS_WIDTH / 4.0, CANVAS_HEIGHT / 2.0), true)
    }

    /// The mirror starts on the right quarter line, facing left
    pub fn mirror() -> Self {
        Self::new(Vec2::new(CANVAS_WIDTH * 3.0 / 4.0, CANVAS_HEIGHT / 2.0), false)
    }

    pub fn home(&self) -> Vec2 {
        self.home
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_SIZE / 2.0)
    }

    /// Back to the start position, at rest
    pub fn reset(&mut self) {
        self.pos = self.home;
        self.vel = Vec2::ZERO;
        self.facing_right = self.home_facing_right;
    }

    /// Recover from NaN/infinite position or velocity
    ///
    /// Returns true if the sprite had to be reset.
    pub fn sanitize(&mut self) -> bool {
        if self.pos.is_finite() && self.vel.is_finite() {
            return false;
        }
        self.pos = self.home;
        self.vel = Vec2::ZERO;
        true
    }

    pub fn apply_gravity(&mut self) {
        self.vel.y += GRAVITY;
        self.vel = clamp_components(self.vel, MAX_VELOCITY);
    }

    /// Move by the current velocity, then bleed off speed
    pub fn integrate(&mut self) {
        self.pos += self.vel;
        self.vel *= DRAG;
    }
}

/// A falling box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed per tick
    pub speed: f32,
}

impl Obstacle {
    /// Move down one tick; returns false once it has left the canvas
    pub fn fall(&mut self) -> bool {
        self.pos.y += self.speed;
        self.pos.y < CANVAS_HEIGHT
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Magnet ignores energy while active
    InfiniteMagnet,
    /// Wall, box and mirror collisions are ignored while active
    Invincibility,
}

/// Static data for a power-up kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUpInfo {
    /// Display colour (0xRRGGBB)
    pub color: u32,
    /// Effect length in ticks
    pub duration: u32,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::InfiniteMagnet, PowerUpKind::Invincibility];

    pub const fn info(&self) -> PowerUpInfo {
        match self {
            PowerUpKind::InfiniteMagnet => PowerUpInfo {
                color: 0x00FF00,
                duration: POWERUP_DURATION,
            },
            PowerUpKind::Invincibility => PowerUpInfo {
                color: 0xFFD700,
                duration: POWERUP_DURATION,
            },
        }
    }

    /// Start (or restart) this effect
    pub fn apply(&self, effects: &mut ActiveEffects) {
        let duration = self.info().duration;
        match self {
            PowerUpKind::InfiniteMagnet => effects.infinite_magnet_ticks = duration,
            PowerUpKind::Invincibility => effects.invincibility_ticks = duration,
        }
    }
}

/// A falling power-up pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub speed: f32,
}

impl PowerUp {
    pub fn size(&self) -> Vec2 {
        Vec2::splat(POWERUP_SIZE)
    }
}

/// Active power-up effects (an effect is on while its timer is non-zero)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub infinite_magnet_ticks: u32,
    pub invincibility_ticks: u32,
}

impl ActiveEffects {
    pub fn infinite_magnet(&self) -> bool {
        self.infinite_magnet_ticks > 0
    }

    pub fn invincible(&self) -> bool {
        self.invincibility_ticks > 0
    }

    pub fn remaining(&self, kind: PowerUpKind) -> u32 {
        match kind {
            PowerUpKind::InfiniteMagnet => self.infinite_magnet_ticks,
            PowerUpKind::Invincibility => self.invincibility_ticks,
        }
    }

    /// Count all running timers down by one tick
    pub fn tick(&mut self) {
        self.infinite_magnet_ticks = self.infinite_magnet_ticks.saturating_sub(1);
        self.invincibility_ticks = self.invincibility_ticks.saturating_sub(1);
    }
}

/// Cosmetic sequence played after a life ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExitAnimation {
    /// Sprite-sheet death at the player's last position
    Death { pos: Vec2, frame: u32, ticks: u32 },
    /// Purple cube fading in where the two sprites met
    Fusion {
        pos: Vec2,
        size: f32,
        alpha: f32,
        ticks: u32,
        revealed: bool,
    },
}

impl ExitAnimation {
    pub fn death(pos: Vec2) -> Self {
        ExitAnimation::Death {
            pos,
            frame: 0,
            ticks: 0,
        }
    }

    pub fn fusion(pos: Vec2) -> Self {
        ExitAnimation::Fusion {
            pos,
            size: FUSION_SIZE,
            alpha: 0.0,
            ticks: 0,
            revealed: false,
        }
    }

    /// Advance one tick
    pub fn advance(&mut self) {
        match self {
            ExitAnimation::Death { frame, ticks, .. } => {
                if *frame + 1 >= DEATH_ANIMATION_FRAMES {
                    return;
                }
                *ticks += 1;
                if *ticks % DEATH_ANIMATION_SPEED == 0 {
                    *frame += 1;
                }
            }
            ExitAnimation::Fusion {
                alpha,
                ticks,
                revealed,
                ..
            } => {
                *alpha = (*alpha + FUSION_FADE_STEP).min(1.0);
                *ticks = ticks.saturating_add(1);
                if *ticks >= FUSION_REVEAL_TICKS {
                    *revealed = true;
                }
            }
        }
    }

    /// Whether nothing more will change
    pub fn is_finished(&self) -> bool {
        match self {
            ExitAnimation::Death { frame, .. } => *frame + 1 >= DEATH_ANIMATION_FRAMES,
            ExitAnimation::Fusion {
                alpha, revealed, ..
            } => *alpha >= 1.0 && *revealed,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Fixed for the duration of a life
    pub difficulty: Difficulty,
    /// Push the mirror away from the magnet instead of pulling it
    pub inverse_mirror: bool,
    pub player: Sprite,
    pub mirror: Sprite,
    /// Consecutive ticks the player has been below `MIN_MOVEMENT_SPEED`
    pub inactive_ticks: u32,
    pub magnet: Magnet,
    pub effects: ActiveEffects,
    pub obstacles: Vec<Obstacle>,
    pub power_ups: Vec<PowerUp>,
    /// Ticks survived this life
    pub score: u64,
    /// Simulation tick counter for this life
    pub frame: u64,
    pub life: LifeState,
    pub exit_animation: Option<ExitAnimation>,
}

impl GameState {
    /// Create a new game state on the menu screen
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            difficulty,
            inverse_mirror: false,
            player: Sprite::player(),
            mirror: Sprite::mirror(),
            inactive_ticks: 0,
            magnet: Magnet::default(),
            effects: ActiveEffects::default(),
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            score: 0,
            frame: 0,
            life: LifeState::Alive,
            exit_animation: None,
        }
    }

    /// Leave the menu and begin a fresh life
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
        self.reset();
        log::info!(
            "Game started (difficulty={}, seed={})",
            self.difficulty.as_str(),
            self.seed
        );
    }

    /// Restore every start-of-life value
    ///
    /// The RNG keeps its stream so successive lives differ.
    pub fn reset(&mut self) {
        self.player.reset();
        self.mirror.reset();
        self.inactive_ticks = 0;
        self.magnet = Magnet::default();
        self.effects = ActiveEffects::default();
        self.obstacles.clear();
        self.power_ups.clear();
        self.score = 0;
        self.frame = 0;
        self.life = LifeState::Alive;
        self.exit_animation = None;
    }

    pub fn is_over(&self) -> bool {
        matches!(self.life, LifeState::Terminal(_))
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.life {
            LifeState::Alive => None,
            LifeState::Terminal(reason) => Some(reason),
        }
    }

    /// Whether the game is on the play screen with a running life
    pub fn is_live(&self) -> bool {
        self.phase == GamePhase::Playing && !self.is_over()
    }

    /// End the current life; only the first reason per life sticks
    pub fn end_life(&mut self, reason: GameOverReason) {
        if self.is_over() {
            return;
        }
        self.life = LifeState::Terminal(reason);
        self.exit_animation = Some(match reason {
            GameOverReason::Fusion => {
                ExitAnimation::fusion((self.player.pos + self.mirror.pos) / 2.0)
            }
            _ => ExitAnimation::death(self.player.pos),
        });
        log::info!(
            "Game over: {} (score={}, frame={})",
            reason,
            self.score,
            self.frame
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_menu() {
        let state = GameState::new(1, Difficulty::Easy);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.life, LifeState::Alive);
        assert_eq!(state.magnet.energy, MAX_ENERGY);
        assert_eq!(state.player.pos, Vec2::new(200.0, 300.0));
        assert_eq!(state.mirror.pos, Vec2::new(600.0, 300.0));
        assert!(state.player.facing_right);
        assert!(!state.mirror.facing_right);
    }

    #[test]
    fn test_end_life_sets_reason_once() {
        let mut state = GameState::new(1, Difficulty::Medium);
        state.start();
        state.end_life(GameOverReason::Floor);
        state.end_life(GameOverReason::Inactivity);
        assert_eq!(state.game_over_reason(), Some(GameOverReason::Floor));
        assert!(matches!(
            state.exit_animation,
            Some(ExitAnimation::Death { .. })
        ));
    }

    #[test]
    fn test_fusion_starts_cube_at_midpoint() {
        let mut state = GameState::new(1, Difficulty::Medium);
        state.start();
        state.player.pos = Vec2::new(100.0, 100.0);
        state.mirror.pos = Vec2::new(110.0, 120.0);
        state.end_life(GameOverReason::Fusion);
        match state.exit_animation {
            Some(ExitAnimation::Fusion { pos, size, alpha, .. }) => {
                assert_eq!(pos, Vec2::new(105.0, 110.0));
                assert_eq!(size, 36.0);
                assert_eq!(alpha, 0.0);
            }
            ref other => panic!("expected fusion animation, got {:?}", other),
        }
    }

    #[test]
    fn test_sprite_sanitize() {
        let mut sprite = Sprite::player();
        sprite.pos = Vec2::new(f32::NAN, 10.0);
        sprite.vel = Vec2::new(3.0, 1.0);
        assert!(sprite.sanitize());
        assert_eq!(sprite.pos, sprite.home());
        assert_eq!(sprite.vel, Vec2::ZERO);

        sprite.vel = Vec2::new(1.0, 1.0);
        assert!(!sprite.sanitize());
        assert_eq!(sprite.vel, Vec2::new(1.0, 1.0));

        sprite.vel = Vec2::new(f32::INFINITY, 0.0);
        assert!(sprite.sanitize());
    }

    #[test]
    fn test_effect_timers_expire() {
        let mut effects = ActiveEffects::default();
        PowerUpKind::Invincibility.apply(&mut effects);
        assert!(effects.invincible());
        assert!(!effects.infinite_magnet());
        for _ in 0..299 {
            effects.tick();
        }
        assert!(effects.invincible());
        effects.tick();
        assert!(!effects.invincible());
        assert_eq!(effects.remaining(PowerUpKind::Invincibility), 0);
    }

    #[test]
    fn test_death_animation_runs_eight_frames() {
        let mut anim = ExitAnimation::death(Vec2::ZERO);
        for _ in 0..100 {
            anim.advance();
        }
        assert!(matches!(anim, ExitAnimation::Death { frame: 7, .. }));
        assert!(anim.is_finished());
    }

    #[test]
    fn test_fusion_fades_in_and_reveals() {
        let mut anim = ExitAnimation::fusion(Vec2::ZERO);
        for _ in 0..59 {
            anim.advance();
        }
        assert!(matches!(anim, ExitAnimation::Fusion { revealed: false, .. }));
        anim.advance();
        match anim {
            ExitAnimation::Fusion { alpha, revealed, .. } => {
                assert!((alpha - 1.0).abs() < 1e-4);
                assert!(revealed);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_difficulty_table() {
        assert_eq!(Difficulty::Easy.params().spawn_rate, 60);
        assert_eq!(Difficulty::Medium.params().max_obstacles, 10);
        assert_eq!(Difficulty::Hard.params().base_speed, 4.0);
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
    }
}
