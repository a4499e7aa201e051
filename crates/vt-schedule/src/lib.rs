//! `vt-schedule` — activity phases and the daily schedule.
//!
//! # Crate layout
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`phase`]   | `Phase` enum, `phase_for(hour)`                      |
//! | [`day`]     | `ScheduleBlock`, `DaySchedule`, `STANDARD_BLOCKS`    |
//! | [`loader`]  | `load_schedule_csv`, `load_schedule_reader`          |
//! | [`error`]   | `ScheduleError`, `ScheduleResult<T>`                 |
//!
//! # Daily cycle (standard schedule)
//!
//! ```text
//! 00:00 ─ home ─ 08:00 commute ─ 09:00 work ─ 12:00 lunch ─ 13:00 work
//!       ─ 17:00 commute ─ 18:00 evening social ─ 21:00 home ─ 24:00
//! ```
//!
//! Every boundary is half-open: a block owns its start hour and ends just
//! before the next block's start.

pub mod day;
pub mod error;
pub mod loader;
pub mod phase;

#[cfg(test)]
mod tests;

pub use day::{DaySchedule, STANDARD_BLOCKS, ScheduleBlock};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_schedule_csv, load_schedule_reader};
pub use phase::{Phase, phase_for};
