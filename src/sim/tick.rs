//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by exactly one frame.

use super::collision;
use super::energy::update_energy;
use super::magnet::apply_magnet_force;
use super::spawner;
use super::state::{GamePhase, GameState};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    if state.phase == GamePhase::Menu {
        return;
    }

    // Life over: only the exit animation keeps moving
    if state.is_over() {
        if let Some(anim) = state.exit_animation.as_mut() {
            anim.advance();
        }
        return;
    }

    sanitize(state);

    state.frame += 1;
    spawner::run_spawners(state);
    state.effects.tick();

    spawner::advance_obstacles(&mut state.obstacles);
    spawner::advance_power_ups(&mut state.power_ups, state.player.pos, &mut state.effects);

    state.player.apply_gravity();
    state.mirror.apply_gravity();

    let infinite = state.effects.infinite_magnet();
    update_energy(&mut state.magnet, infinite);
    apply_magnet_force(&mut state.player, &state.magnet, infinite, false);
    apply_magnet_force(&mut state.mirror, &state.magnet, infinite, state.inverse_mirror);

    state.player.integrate();
    state.mirror.integrate();

    if !state.effects.invincible() {
        if let Some(reason) = collision::check_collisions(state) {
            state.end_life(reason);
        }
    }

    if !state.is_over() {
        if let Some(reason) = collision::track_activity(&mut state.inactive_ticks, state.player.vel) {
            state.end_life(reason);
        }
    }

    if !state.is_over() {
        state.score += 1;
    }
}

/// Reset any sprite whose position or velocity went non-finite
fn sanitize(state: &mut GameState) {
    if state.player.sanitize() {
        log::warn!("Player state was not finite; reset to start (frame {})", state.frame);
    }
    if state.mirror.sanitize() {
        log::warn!("Mirror state was not finite; reset to start (frame {})", state.frame);
    }
}
