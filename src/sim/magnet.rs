//! Magnet force field
//!
//! A single user-placed point pulls both sprites while the magnet is armed.
//! The force magnitude is `min(MAGNET_FORCE, MAGNET_FORCE * RANGE / d)`,
//! which saturates at `MAGNET_FORCE` over the whole usable range; game
//! balance depends on that shape.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Sprite;
use crate::consts::*;
use crate::{clamp_components, clamp_to_canvas, direction_to, in_canvas};

/// Magnet point, arm state and energy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Magnet {
    /// Attraction point in canvas coordinates
    pub point: Option<Vec2>,
    /// Magnet key is held and accepted
    pub pulling: bool,
    /// Remaining pull ticks, in [0, MAX_ENERGY]
    pub energy: u32,
}

impl Default for Magnet {
    fn default() -> Self {
        Self {
            point: None,
            pulling: false,
            energy: MAX_ENERGY,
        }
    }
}

impl Magnet {
    /// Place or replace the magnet point
    ///
    /// Points outside the canvas are ignored entirely. A successful placement
    /// disarms the magnet.
    pub fn place(&mut self, at: Vec2) -> bool {
        if !in_canvas(at) {
            return false;
        }
        self.pulling = false;
        self.point = Some(clamp_to_canvas(at));
        true
    }

    /// Try to start pulling; needs a point and energy (or infinite magnet)
    pub fn arm(&mut self, infinite: bool) -> bool {
        if self.point.is_some() && (self.energy > 0 || infinite) {
            self.pulling = true;
        }
        self.pulling
    }

    pub fn release(&mut self) {
        self.pulling = false;
    }

    /// Whether force is applied this tick
    pub fn is_active(&self, infinite: bool) -> bool {
        self.point.is_some() && self.pulling && (self.energy > 0 || infinite)
    }

    pub fn energy_fraction(&self) -> f32 {
        self.energy as f32 / MAX_ENERGY as f32
    }
}

/// Force the magnet at `point` exerts on a sprite centred at `center`
///
/// `None` inside `MIN_DISTANCE`, beyond `MAGNET_RANGE`, or when the result is
/// not finite. `inverse` flips the direction (push instead of pull).
pub fn magnet_force(center: Vec2, point: Vec2, inverse: bool) -> Option<Vec2> {
    let (dir, distance) = direction_to(center, point)?;
    if distance < MIN_DISTANCE || distance > MAGNET_RANGE {
        return None;
    }

    let magnitude = MAGNET_FORCE.min(MAGNET_FORCE * (MAGNET_RANGE / distance.max(MIN_DISTANCE)));
    let mut force = dir * magnitude;
    if inverse {
        force = -force;
    }

    let force = clamp_components(force, MAX_FORCE);
    force.is_finite().then_some(force)
}

/// Add this tick's magnet force to a sprite's velocity
///
/// Does not touch energy; draining happens once per tick in
/// [`super::energy::update_energy`]. Returns true if force was applied.
pub fn apply_magnet_force(sprite: &mut Sprite, magnet: &Magnet, infinite: bool, inverse: bool) -> bool {
    if !magnet.is_active(infinite) {
        return false;
    }
    let Some(point) = magnet.point else {
        return false;
    };

    match magnet_force(sprite.center(), point, inverse) {
        Some(force) => {
            sprite.vel = clamp_components(sprite.vel + force, MAX_VELOCITY);
            true
        }
        None => false,
    }
}
