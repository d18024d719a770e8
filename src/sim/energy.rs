//! Magnet energy economy

use super::magnet::Magnet;
use crate::consts::{DRAIN_RATE, MAX_ENERGY, RECHARGE_RATE};

/// Recharge or drain magnet energy; call exactly once per tick
///
/// Idle magnets recharge. An armed magnet drains unless the infinite-magnet
/// power-up is active, and disarms itself when it runs dry.
pub fn update_energy(magnet: &mut Magnet, infinite: bool) {
    if !magnet.pulling {
        if magnet.energy < MAX_ENERGY {
            magnet.energy = (magnet.energy + RECHARGE_RATE).min(MAX_ENERGY);
        }
    } else if !infinite {
        magnet.energy = magnet.energy.saturating_sub(DRAIN_RATE);
        if magnet.energy == 0 {
            magnet.pulling = false;
            log::debug!("Magnet energy depleted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn pulling_magnet(energy: u32) -> Magnet {
        Magnet {
            point: Some(Vec2::new(100.0, 100.0)),
            pulling: true,
            energy,
        }
    }

    #[test]
    fn test_recharge_caps_at_max() {
        let mut magnet = Magnet {
            energy: MAX_ENERGY - 1,
            ..Magnet::default()
        };
        update_energy(&mut magnet, false);
        assert_eq!(magnet.energy, MAX_ENERGY);
        update_energy(&mut magnet, false);
        assert_eq!(magnet.energy, MAX_ENERGY);
    }

    #[test]
    fn test_drain_until_empty_disarms() {
        let mut magnet = pulling_magnet(3);
        update_energy(&mut magnet, false);
        assert_eq!(magnet.energy, 2);
        assert!(magnet.pulling);
        update_energy(&mut magnet, false);
        update_energy(&mut magnet, false);
        assert_eq!(magnet.energy, 0);
        assert!(!magnet.pulling);

        // Next tick it recharges again
        update_energy(&mut magnet, false);
        assert_eq!(magnet.energy, 1);
    }

    #[test]
    fn test_infinite_magnet_freezes_energy() {
        let mut magnet = pulling_magnet(10);
        for _ in 0..50 {
            update_energy(&mut magnet, true);
        }
        assert_eq!(magnet.energy, 10);
        assert!(magnet.pulling);
    }

    #[test]
    fn test_full_drain_takes_max_ticks() {
        let mut magnet = pulling_magnet(MAX_ENERGY);
        let mut ticks = 0;
        while magnet.pulling {
            let before = magnet.energy;
            update_energy(&mut magnet, false);
            assert!(magnet.energy < before);
            ticks += 1;
        }
        assert_eq!(ticks, MAX_ENERGY);
    }
}
