//! Unit tests for vt-schedule.

use std::io::Cursor;

use crate::{
    DaySchedule, Phase, STANDARD_BLOCKS, ScheduleBlock, ScheduleError, load_schedule_reader,
    phase_for,
};

// ── phase_for ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod phase_for_tests {
    use super::*;

    #[test]
    fn boundaries_are_half_open() {
        assert_eq!(phase_for(7.999), Phase::Home);
        assert_eq!(phase_for(8.0), Phase::CommuteMorning);
        assert_eq!(phase_for(8.999), Phase::CommuteMorning);
        assert_eq!(phase_for(9.0), Phase::Work);
        assert_eq!(phase_for(12.0), Phase::SocialLunch);
        assert_eq!(phase_for(13.0), Phase::Work);
        assert_eq!(phase_for(17.0), Phase::CommuteEvening);
        assert_eq!(phase_for(18.0), Phase::SocialEvening);
        assert_eq!(phase_for(20.999), Phase::SocialEvening);
        assert_eq!(phase_for(21.0), Phase::Home);
    }

    #[test]
    fn night_and_early_morning_are_home() {
        assert_eq!(phase_for(0.0), Phase::Home);
        assert_eq!(phase_for(3.5), Phase::Home);
        assert_eq!(phase_for(6.0), Phase::Home);
        assert_eq!(phase_for(23.99), Phase::Home);
    }

    #[test]
    fn hour_reduced_mod_24() {
        assert_eq!(phase_for(24.0 + 10.0), Phase::Work);
        assert_eq!(phase_for(-1.0), Phase::Home); // 23:00
    }

    #[test]
    fn non_finite_hour_is_home() {
        assert_eq!(phase_for(f64::NAN), Phase::Home);
        assert_eq!(phase_for(f64::INFINITY), Phase::Home);
    }

    #[test]
    fn every_standard_block_starts_its_phase() {
        for block in STANDARD_BLOCKS {
            assert_eq!(phase_for(block.start_hour), block.phase, "{block:?}");
        }
        assert_eq!(DaySchedule::standard().blocks(), &STANDARD_BLOCKS[..]);
    }

    #[test]
    fn every_minute_maps_to_exactly_one_phase() {
        let mut counts = std::collections::HashMap::new();
        for minute in 0..24 * 60 {
            *counts.entry(phase_for(minute as f64 / 60.0)).or_insert(0) += 1;
        }
        // 11 h home, 1 h each commute, 7 h work, 1 h lunch, 3 h evening.
        assert_eq!(counts[&Phase::Home], 11 * 60);
        assert_eq!(counts[&Phase::CommuteMorning], 60);
        assert_eq!(counts[&Phase::Work], 7 * 60);
        assert_eq!(counts[&Phase::SocialLunch], 60);
        assert_eq!(counts[&Phase::CommuteEvening], 60);
        assert_eq!(counts[&Phase::SocialEvening], 3 * 60);
    }
}

// ── Phase labels ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod phase_labels {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for phase in Phase::ALL {
            assert_eq!(phase.as_str().parse::<Phase>().unwrap(), phase);
        }
    }

    #[test]
    fn unknown_label_is_parse_error() {
        assert!(matches!("nap".parse::<Phase>(), Err(ScheduleError::Parse(_))));
    }

    #[test]
    fn commute_predicate() {
        assert!(Phase::CommuteMorning.is_commute());
        assert!(Phase::CommuteEvening.is_commute());
        assert!(!Phase::Work.is_commute());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Phase::SocialEvening.to_string(), "social_evening");
    }
}

// ── DaySchedule ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod day_schedule {
    use super::*;

    #[test]
    fn standard_agrees_with_phase_for() {
        let schedule = DaySchedule::standard();
        for minute in 0..24 * 60 {
            let hour = minute as f64 / 60.0;
            assert_eq!(schedule.phase_at(hour), phase_for(hour), "hour {hour}");
        }
    }

    #[test]
    fn new_sorts_blocks() {
        let schedule = DaySchedule::new(vec![
            ScheduleBlock::new(12.0, Phase::Work),
            ScheduleBlock::new(0.0, Phase::Home),
        ])
        .unwrap();
        let starts: Vec<f64> = schedule.blocks().iter().map(|b| b.start_hour).collect();
        assert_eq!(starts, vec![0.0, 12.0]);
    }

    #[test]
    fn before_first_block_wraps_to_last() {
        let schedule = DaySchedule::new(vec![
            ScheduleBlock::new(7.0, Phase::Work),
            ScheduleBlock::new(19.0, Phase::SocialEvening),
        ])
        .unwrap();
        assert_eq!(schedule.phase_at(3.0), Phase::SocialEvening);
        assert_eq!(schedule.phase_at(7.0), Phase::Work);
    }

    #[test]
    fn next_block_wraps() {
        let schedule = DaySchedule::standard();
        assert_eq!(schedule.next_block(10.0).phase, Phase::SocialLunch);
        assert_eq!(schedule.next_block(22.0).start_hour, 0.0);
    }

    #[test]
    fn empty_and_out_of_range_rejected() {
        assert!(matches!(DaySchedule::new(vec![]), Err(ScheduleError::Empty)));
        assert!(DaySchedule::new(vec![ScheduleBlock::new(24.0, Phase::Home)]).is_err());
        assert!(DaySchedule::new(vec![ScheduleBlock::new(-0.5, Phase::Home)]).is_err());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_unordered_rows() {
        let csv = "start_hour,phase\n9,work\n0,home\n17.5,social_evening\n";
        let schedule = load_schedule_reader(Cursor::new(csv)).unwrap();
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.phase_at(8.0), Phase::Home);
        assert_eq!(schedule.phase_at(9.0), Phase::Work);
        assert_eq!(schedule.phase_at(17.5), Phase::SocialEvening);
    }

    #[test]
    fn unknown_phase_rejected() {
        let csv = "start_hour,phase\n0,siesta\n";
        assert!(matches!(
            load_schedule_reader(Cursor::new(csv)),
            Err(ScheduleError::Parse(_))
        ));
    }

    #[test]
    fn header_only_is_empty() {
        let csv = "start_hour,phase\n";
        assert!(matches!(load_schedule_reader(Cursor::new(csv)), Err(ScheduleError::Empty)));
    }

    #[test]
    fn malformed_hour_rejected() {
        let csv = "start_hour,phase\nnoon,work\n";
        assert!(load_schedule_reader(Cursor::new(csv)).is_err());
    }
}
