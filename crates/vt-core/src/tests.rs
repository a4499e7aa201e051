//! Unit tests for vt-core primitives.

#[cfg(test)]
mod ids {
    use crate::VillagerId;

    #[test]
    fn index_roundtrip() {
        let id = VillagerId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(VillagerId::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn too_large_index_rejected() {
        assert!(VillagerId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(VillagerId(2).to_string(), "VillagerId(2)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GridPoint;

    #[test]
    fn midpoint_is_mean() {
        let m = GridPoint::new(2.0, 12.0).midpoint(GridPoint::new(15.0, 5.0));
        assert_eq!(m, GridPoint::new(8.5, 8.5));
    }

    #[test]
    fn cell_center_offsets_half() {
        assert_eq!(GridPoint::new(4.0, 4.0).cell_center(), GridPoint::new(4.5, 4.5));
    }

    #[test]
    fn distance_pythagorean() {
        let d = GridPoint::new(0.0, 0.0).distance(GridPoint::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn cell_floors() {
        assert_eq!(GridPoint::new(3.9, 0.1).cell(), (3, 0));
    }
}

#[cfg(test)]
mod time {
    use crate::{MINUTES_PER_DAY, Tick, TownClock, TownConfig, VtError};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(10).offset(3), Tick(13));
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn default_clock_is_day_one_six_am() {
        let clock = TownClock::default();
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.minute_of_day(), 360);
        assert_eq!(clock.timestamp(), "06:00");
    }

    #[test]
    fn advance_within_day() {
        let mut clock = TownClock::at(1, 360);
        assert!(!clock.advance(10));
        assert_eq!(clock.minute_of_day(), 370);
        assert_eq!(clock.day(), 1);
    }

    #[test]
    fn wraparound_reports_rollover() {
        let mut clock = TownClock::at(1, 1435);
        assert!(clock.advance(10));
        assert_eq!(clock.minute_of_day(), 5);
        assert_eq!(clock.day(), 2);
    }

    #[test]
    fn landing_exactly_on_midnight_rolls_over() {
        let mut clock = TownClock::at(3, 1430);
        assert!(clock.advance(10));
        assert_eq!(clock.minute_of_day(), 0);
        assert_eq!(clock.day(), 4);
    }

    #[test]
    fn full_day_of_ticks_rolls_exactly_once() {
        let mut clock = TownClock::at(1, 360);
        let rollovers = (0..MINUTES_PER_DAY / 10).filter(|_| clock.advance(10)).count();
        assert_eq!(rollovers, 1);
        assert_eq!(clock, TownClock::at(2, 360));
    }

    #[test]
    #[should_panic]
    fn zero_step_panics() {
        let _ = TownClock::default().advance(0);
    }

    #[test]
    #[should_panic]
    fn out_of_range_minute_panics() {
        TownClock::at(1, MINUTES_PER_DAY);
    }

    #[test]
    fn hour_is_fractional() {
        assert_eq!(TownClock::at(1, 8 * 60).hour(), 8.0);
        assert!((TownClock::at(1, 8 * 60 + 30).hour() - 8.5).abs() < 1e-12);
    }

    #[test]
    fn elapsed_and_display() {
        let clock = TownClock::at(2, 65);
        assert_eq!(clock.elapsed_minutes(), 1440 + 65);
        assert_eq!(clock.to_string(), "day 2 01:05");
    }

    #[test]
    fn default_config_validates() {
        let cfg = TownConfig::default();
        cfg.validate().unwrap();
        assert!((cfg.tick_speed() - 0.08).abs() < 1e-12);
        assert_eq!(cfg.make_clock(), TownClock::default());
    }

    #[test]
    fn invalid_configs_rejected() {
        let bad_step = TownConfig { step_minutes: 0, ..TownConfig::default() };
        assert!(bad_step.validate().is_err());

        let bad_minute = TownConfig { start_minute: 1440, ..TownConfig::default() };
        assert!(bad_minute.validate().is_err());

        let overshoot = TownConfig { movement_rate: 0.2, ..TownConfig::default() };
        assert!(overshoot.validate().is_err());

        let no_journal = TownConfig { journal_capacity: 0, ..TownConfig::default() };
        assert!(no_journal.validate().is_err());
    }

    #[test]
    fn validation_errors_carry_the_field() {
        let cfg = TownConfig { start_day: 0, ..TownConfig::default() };
        let VtError::Config(msg) = cfg.validate().unwrap_err();
        assert!(msg.contains("start_day"), "{msg}");
    }
}
