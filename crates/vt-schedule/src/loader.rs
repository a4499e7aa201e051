//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per block.  Rows may appear in any order.
//!
//! ```csv
//! start_hour,phase
//! 0,home
//! 7.5,commute_morning
//! 8.5,work
//! 17,commute_evening
//! 18,social_evening
//! 22,home
//! ```
//!
//! `phase` is one of the labels produced by [`Phase::as_str`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{DaySchedule, Phase, ScheduleBlock, ScheduleError};

#[derive(Deserialize)]
struct ScheduleRecord {
    start_hour: f64,
    phase:      String,
}

/// Load a [`DaySchedule`] from a CSV file.
pub fn load_schedule_csv(path: &Path) -> Result<DaySchedule, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_schedule_reader(file)
}

/// Like [`load_schedule_csv`] but accepts any `Read` source.
pub fn load_schedule_reader<R: Read>(reader: R) -> Result<DaySchedule, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let blocks = csv_reader
        .deserialize::<ScheduleRecord>()
        .map(|result| {
            let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
            let phase: Phase = row.phase.parse()?;
            Ok(ScheduleBlock::new(row.start_hour, phase))
        })
        .collect::<Result<Vec<_>, ScheduleError>>()?;

    DaySchedule::new(blocks)
}
