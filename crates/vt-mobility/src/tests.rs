//! Unit tests for vt-mobility.

use vt_core::{GridPoint, TownConfig};

use crate::{MobilityEngine, MobilityError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn reference_engine() -> MobilityEngine {
    MobilityEngine::from_config(&TownConfig::default()).unwrap()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn reference_speed() {
        let e = reference_engine();
        assert!((e.speed() - 0.08).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_and_overshoot() {
        assert!(matches!(MobilityEngine::new(0.0, 10), Err(MobilityError::InvalidSpeed(_))));
        assert!(matches!(MobilityEngine::with_speed(1.5), Err(MobilityError::InvalidSpeed(_))));
        assert!(matches!(MobilityEngine::with_speed(f64::NAN), Err(MobilityError::InvalidSpeed(_))));
        assert!(MobilityEngine::with_speed(1.0).is_ok());
    }
}

// ── Integration ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod integrate {
    use super::*;

    #[test]
    fn one_step_moves_fraction_of_gap() {
        let e = reference_engine();
        let mut p = GridPoint::new(2.5, 12.5);
        // Target tile (15, 5) → centre (15.5, 5.5).
        e.integrate(&mut p, GridPoint::new(15.0, 5.0));
        assert!((p.x - (2.5 + 13.0 * 0.08)).abs() < 1e-12);
        assert!((p.y - (12.5 - 7.0 * 0.08)).abs() < 1e-12);
    }

    #[test]
    fn distance_strictly_decreases() {
        let e = reference_engine();
        let target = GridPoint::new(17.0, 14.0);
        let mut p = GridPoint::new(4.5, 16.5);
        let mut last = e.distance_to_target(p, target);
        for _ in 0..200 {
            e.integrate(&mut p, target);
            let d = e.distance_to_target(p, target);
            assert!(d < last, "distance grew from {last} to {d}");
            last = d;
        }
        assert!(e.has_settled(p, target, 0.01));
    }

    #[test]
    fn unit_speed_snaps_to_centre() {
        let e = MobilityEngine::with_speed(1.0).unwrap();
        let mut p = GridPoint::new(0.0, 0.0);
        e.integrate(&mut p, GridPoint::new(3.0, 4.0));
        assert_eq!(p, GridPoint::new(3.5, 4.5));
        assert!(e.has_settled(p, GridPoint::new(3.0, 4.0), 0.0));
    }

    #[test]
    fn at_centre_stays_put() {
        let e = reference_engine();
        let target = GridPoint::new(6.0, 15.0);
        let mut p = target.cell_center();
        e.integrate(&mut p, target);
        assert_eq!(p, target.cell_center());
    }

    #[test]
    fn fractional_target_is_shifted_by_half() {
        // Commute midpoints may be fractional; the half-tile offset still applies.
        let e = MobilityEngine::with_speed(1.0).unwrap();
        let mut p = GridPoint::default();
        e.integrate(&mut p, GridPoint::new(8.5, 8.5));
        assert_eq!(p, GridPoint::new(9.0, 9.0));
    }
}
