//! `ScheduleBlock` and `DaySchedule` — a 24-hour table of phases.
//!
//! # Cycle model
//!
//! A `DaySchedule` is an ordered list of blocks, each starting at a
//! fractional hour in `[0, 24)`.  For an hour `h` the active block is the one
//! with the largest `start_hour ≤ h`.  If `h` falls before the first block's
//! start, the last block of the previous day is still active.
//!
//! [`DaySchedule::standard`] and [`phase_for`][crate::phase_for] both read
//! [`STANDARD_BLOCKS`]; custom schedules come from
//! [`load_schedule_reader`][crate::load_schedule_reader].

use crate::{Phase, ScheduleError, ScheduleResult};

// ── ScheduleBlock ─────────────────────────────────────────────────────────────

/// One row of a daily schedule.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleBlock {
    /// Hour of day at which this block begins, in `[0, 24)`.
    pub start_hour: f64,
    pub phase:      Phase,
}

impl ScheduleBlock {
    #[inline]
    pub const fn new(start_hour: f64, phase: Phase) -> Self {
        Self { start_hour, phase }
    }
}

// ── Standard table ────────────────────────────────────────────────────────────

/// The reference day: home, commute, work, lunch, work, commute, evening
/// social, home.
pub const STANDARD_BLOCKS: [ScheduleBlock; 8] = [
    ScheduleBlock::new(0.0,  Phase::Home),
    ScheduleBlock::new(8.0,  Phase::CommuteMorning),
    ScheduleBlock::new(9.0,  Phase::Work),
    ScheduleBlock::new(12.0, Phase::SocialLunch),
    ScheduleBlock::new(13.0, Phase::Work),
    ScheduleBlock::new(17.0, Phase::CommuteEvening),
    ScheduleBlock::new(18.0, Phase::SocialEvening),
    ScheduleBlock::new(21.0, Phase::Home),
];

/// Index of the block active at `hour` in `blocks`, which must be non-empty
/// and sorted by start hour.
pub(crate) fn block_index(blocks: &[ScheduleBlock], hour: f64) -> usize {
    let h = hour.rem_euclid(24.0);
    // First index whose start is after h.
    let idx = blocks.partition_point(|b| b.start_hour <= h);
    if idx == 0 {
        // Before the first block: still in yesterday's last block.
        blocks.len() - 1
    } else {
        idx - 1
    }
}

// ── DaySchedule ───────────────────────────────────────────────────────────────

/// A cyclic 24-hour schedule shared by every villager.
///
/// Blocks are stored sorted by `start_hour` so lookups are binary searches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySchedule {
    blocks: Vec<ScheduleBlock>,
}

impl DaySchedule {
    /// Construct a schedule, sorting `blocks` by start hour.
    ///
    /// Fails if `blocks` is empty or any start hour lies outside `[0, 24)`.
    pub fn new(mut blocks: Vec<ScheduleBlock>) -> ScheduleResult<Self> {
        if blocks.is_empty() {
            return Err(ScheduleError::Empty);
        }
        if let Some(bad) = blocks
            .iter()
            .find(|b| !(0.0..24.0).contains(&b.start_hour))
        {
            return Err(ScheduleError::Parse(format!(
                "start_hour {} must be in [0, 24)",
                bad.start_hour
            )));
        }
        blocks.sort_by(|a, b| a.start_hour.total_cmp(&b.start_hour));
        Ok(Self { blocks })
    }

    /// The reference schedule, built from [`STANDARD_BLOCKS`].
    pub fn standard() -> Self {
        Self { blocks: STANDARD_BLOCKS.to_vec() }
    }

    /// Read-only slice of all blocks (sorted by start hour).
    pub fn blocks(&self) -> &[ScheduleBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// The phase active at `hour` (reduced modulo 24).
    pub fn phase_at(&self, hour: f64) -> Phase {
        self.blocks[block_index(&self.blocks, hour)].phase
    }

    /// The block that starts after the one active at `hour`, wrapping to the
    /// first block of the next day.
    pub fn next_block(&self, hour: f64) -> &ScheduleBlock {
        let next = (block_index(&self.blocks, hour) + 1) % self.blocks.len();
        &self.blocks[next]
    }
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self::standard()
    }
}
