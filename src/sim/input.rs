//! Player input events
//!
//! Events are applied between ticks, in arrival order. The platform layer
//! maps keys/mouse to these; nothing here knows about key codes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Difficulty, GamePhase, GameState};
use crate::consts::MOVE_SPEED;

/// Input commands the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Left key pressed
    MoveLeft,
    /// Right key pressed
    MoveRight,
    /// Left key released
    StopLeft,
    /// Right key released
    StopRight,
    /// Magnet key pressed
    MagnetHold,
    /// Magnet key released
    MagnetRelease,
    /// Click at canvas coordinates
    Click { x: f32, y: f32 },
    /// Restart key (only after game over)
    Restart,
    /// Start button on the menu
    StartGame,
    /// Difficulty picked on the menu
    SelectDifficulty(Difficulty),
}

/// Apply one input event to the game state
///
/// Returns true if the event changed anything.
pub fn handle_input(state: &mut GameState, event: InputEvent) -> bool {
    match event {
        InputEvent::StartGame => {
            if state.phase != GamePhase::Menu {
                return false;
            }
            state.start();
            true
        }
        InputEvent::SelectDifficulty(difficulty) => {
            if state.phase != GamePhase::Menu {
                return false;
            }
            state.difficulty = difficulty;
            log::info!("Difficulty set to {}", difficulty.as_str());
            true
        }
        InputEvent::Restart => {
            if state.phase != GamePhase::Playing || !state.is_over() {
                return false;
            }
            state.reset();
            log::info!("Game restarted");
            true
        }
        _ if !state.is_live() => false,
        InputEvent::MoveLeft => {
            set_horizontal(state, -MOVE_SPEED);
            true
        }
        InputEvent::MoveRight => {
            set_horizontal(state, MOVE_SPEED);
            true
        }
        InputEvent::StopLeft => stop_horizontal(state, |vx| vx < 0.0),
        InputEvent::StopRight => stop_horizontal(state, |vx| vx > 0.0),
        InputEvent::MagnetHold => {
            let infinite = state.effects.infinite_magnet();
            state.magnet.arm(infinite)
        }
        InputEvent::MagnetRelease => {
            let was_pulling = state.magnet.pulling;
            state.magnet.release();
            was_pulling
        }
        InputEvent::Click { x, y } => state.magnet.place(Vec2::new(x, y)),
    }
}

/// Both sprites get the same horizontal command
fn set_horizontal(state: &mut GameState, vx: f32) {
    let facing_right = vx > 0.0;
    for sprite in [&mut state.player, &mut state.mirror] {
        sprite.vel.x = vx;
        sprite.facing_right = facing_right;
    }
}

/// Key release only stops the sprites if the player is still moving that way
fn stop_horizontal(state: &mut GameState, moving_that_way: impl Fn(f32) -> bool) -> bool {
    if !moving_that_way(state.player.vel.x) {
        return false;
    }
    state.player.vel.x = 0.0;
    state.mirror.vel.x = 0.0;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameOverReason;

    fn playing() -> GameState {
        let mut state = GameState::new(3, Difficulty::Medium);
        handle_input(&mut state, InputEvent::StartGame);
        state
    }

    #[test]
    fn test_menu_flow() {
        let mut state = GameState::new(3, Difficulty::Medium);
        assert!(!handle_input(&mut state, InputEvent::MoveLeft));
        assert!(handle_input(
            &mut state,
            InputEvent::SelectDifficulty(Difficulty::Hard)
        ));
        assert!(handle_input(&mut state, InputEvent::StartGame));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, Difficulty::Hard);

        // Difficulty is fixed once playing
        assert!(!handle_input(
            &mut state,
            InputEvent::SelectDifficulty(Difficulty::Easy)
        ));
        assert_eq!(state.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_move_applies_to_both_sprites() {
        let mut state = playing();
        handle_input(&mut state, InputEvent::MoveLeft);
        assert_eq!(state.player.vel.x, -MOVE_SPEED);
        assert_eq!(state.mirror.vel.x, -MOVE_SPEED);
        assert!(!state.player.facing_right);
        assert!(!state.mirror.facing_right);

        // Releasing the other direction does nothing
        assert!(!handle_input(&mut state, InputEvent::StopRight));
        assert_eq!(state.player.vel.x, -MOVE_SPEED);

        assert!(handle_input(&mut state, InputEvent::StopLeft));
        assert_eq!(state.player.vel.x, 0.0);
        assert_eq!(state.mirror.vel.x, 0.0);
    }

    #[test]
    fn test_magnet_hold_needs_point() {
        let mut state = playing();
        assert!(!handle_input(&mut state, InputEvent::MagnetHold));
        assert!(handle_input(&mut state, InputEvent::Click { x: 400.0, y: 50.0 }));
        assert!(handle_input(&mut state, InputEvent::MagnetHold));
        assert!(state.magnet.pulling);

        // A new click disarms the magnet
        handle_input(&mut state, InputEvent::Click { x: 300.0, y: 50.0 });
        assert!(!state.magnet.pulling);
        assert_eq!(state.magnet.point, Some(Vec2::new(300.0, 50.0)));
    }

    #[test]
    fn test_click_outside_canvas_is_noop() {
        let mut state = playing();
        handle_input(&mut state, InputEvent::Click { x: 400.0, y: 50.0 });
        handle_input(&mut state, InputEvent::MagnetHold);
        assert!(!handle_input(&mut state, InputEvent::Click { x: 900.0, y: 50.0 }));
        assert!(state.magnet.pulling);
        assert_eq!(state.magnet.point, Some(Vec2::new(400.0, 50.0)));
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut state = playing();
        assert!(!handle_input(&mut state, InputEvent::Restart));

        state.end_life(GameOverReason::Ceiling);
        assert!(!handle_input(&mut state, InputEvent::MoveRight));
        assert!(handle_input(&mut state, InputEvent::Restart));
        assert!(!state.is_over());
    }
}
