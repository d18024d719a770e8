//! Demo/idle mode - a simple bot that plays the game
//!
//! Keeps a magnet parked above the player and pulses it to hold altitude.
//! Horizontally it patrols the left half, roughly x in [90, 310], turning
//! before the left wall and well short of the mirror that walks the right
//! half. Deterministic: same state, same events.

use super::input::InputEvent;
use super::state::GameState;
use crate::consts::*;

/// Height the bot parks the magnet at
const MAGNET_PARK_Y: f32 = 40.0;
/// Re-place the magnet once the player drifts this far sideways from it
const MAGNET_DRIFT: f32 = 80.0;
/// Lift while the player's top edge is below this line
const HOVER_LINE: f32 = CANVAS_HEIGHT * 0.45;
/// Turn around this close to the left wall or the canvas midline
const WALL_MARGIN: f32 = 90.0;

/// Decide the input events for the next tick
pub fn plan(state: &GameState) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if !state.is_live() {
        return events;
    }

    let center = state.player.center();

    // Keep the magnet roughly overhead
    let needs_magnet = match state.magnet.point {
        None => true,
        Some(point) => (point.x - center.x).abs() > MAGNET_DRIFT,
    };
    if needs_magnet {
        events.push(InputEvent::Click {
            x: center.x.clamp(0.0, CANVAS_WIDTH),
            y: MAGNET_PARK_Y,
        });
    }

    // Hover: pull while low or falling fast, let go once rising
    let want_lift = state.player.pos.y > HOVER_LINE && state.player.vel.y > -1.5;
    if want_lift && (needs_magnet || !state.magnet.pulling) {
        events.push(InputEvent::MagnetHold);
    } else if !want_lift && state.magnet.pulling {
        events.push(InputEvent::MagnetRelease);
    }

    // Dodge the nearest box above us, otherwise patrol the left half
    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.pos.y < state.player.pos.y && (o.pos.x + o.size.x / 2.0 - center.x).abs() < 50.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let go_right = if center.x < WALL_MARGIN {
        true
    } else if center.x > CANVAS_WIDTH / 2.0 - WALL_MARGIN {
        false
    } else if let Some(obstacle) = threat {
        obstacle.pos.x + obstacle.size.x / 2.0 < center.x
    } else {
        state.player.facing_right
    };

    let moving = state.player.vel.x.abs() > MIN_MOVEMENT_SPEED;
    if !moving || go_right != state.player.facing_right {
        events.push(if go_right {
            InputEvent::MoveRight
        } else {
            InputEvent::MoveLeft
        });
    }

    events
}
