//! Simulation time model.
//!
//! # Design
//!
//! The town runs on a day/minute clock rather than a wall-clock timestamp:
//!
//!   day ≥ 1, 0 ≤ minute_of_day < 1440
//!
//! Every tick advances the clock by a fixed number of simulated minutes
//! (10 by default).  Crossing midnight wraps `minute_of_day` and increments
//! `day`; `TownClock::advance` reports that edge so the caller can run its
//! day-rollover logic.
//!
//! Simulated time is decoupled from real time.  How often `tick()` is called
//! is the driver's business (`TownConfig::tick_interval_ms` is advisory).
//!
//! A separate monotonically increasing `Tick` counter numbers ticks for
//! observers and output rows.

use std::fmt;

use crate::{VtError, VtResult};

/// Minutes in one simulated day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of ticks processed since the simulation was built (or reset).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TownClock ─────────────────────────────────────────────────────────────────

/// Day counter plus minute-of-day.
///
/// `TownClock` is `Copy` and holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TownClock {
    day:           u32,
    minute_of_day: u32,
}

impl TownClock {
    /// A clock reading `day` at `minute_of_day`.
    ///
    /// # Panics
    ///
    /// Panics if `day == 0` or `minute_of_day >= 1440`.
    pub fn at(day: u32, minute_of_day: u32) -> Self {
        assert!(day >= 1, "day must be >= 1");
        assert!(
            minute_of_day < MINUTES_PER_DAY,
            "minute_of_day {minute_of_day} out of range"
        );
        Self { day, minute_of_day }
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub fn minute_of_day(&self) -> u32 {
        self.minute_of_day
    }

    /// Advance by `step_minutes`.  Returns `true` when midnight was crossed
    /// and `day` was incremented.
    ///
    /// # Panics
    ///
    /// Panics if `step_minutes` is 0 or a full day or more; the rollover
    /// logic assumes at most one midnight per step.
    #[must_use = "a day rollover must be handled by the caller"]
    pub fn advance(&mut self, step_minutes: u32) -> bool {
        assert!(
            step_minutes > 0 && step_minutes < MINUTES_PER_DAY,
            "step_minutes {step_minutes} must be in 1..1440"
        );
        self.minute_of_day += step_minutes;
        if self.minute_of_day >= MINUTES_PER_DAY {
            self.minute_of_day -= MINUTES_PER_DAY;
            self.day += 1;
            true
        } else {
            false
        }
    }

    /// Fractional hour of day in `[0, 24)`.
    #[inline]
    pub fn hour(&self) -> f64 {
        (self.minute_of_day as f64 / 60.0) % 24.0
    }

    /// Minutes since day 1 00:00.
    #[inline]
    pub fn elapsed_minutes(&self) -> u64 {
        (self.day as u64 - 1) * MINUTES_PER_DAY as u64 + self.minute_of_day as u64
    }

    /// `"HH:MM"`, the journal timestamp format.
    pub fn timestamp(&self) -> String {
        format_hhmm(self.minute_of_day)
    }
}

impl Default for TownClock {
    /// Day 1, 06:00.
    fn default() -> Self {
        Self::at(1, 6 * 60)
    }
}

impl fmt::Display for TownClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} {}", self.day, self.timestamp())
    }
}

/// Format a minute-of-day as zero-padded `"HH:MM"`.
pub fn format_hhmm(minute_of_day: u32) -> String {
    let m = minute_of_day % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}

// ── TownConfig ────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Loaded from JSON by the demo application (with the `serde` feature) and
/// passed to the simulation builder.  Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TownConfig {
    /// Day shown when the simulation starts.  Default: 1.
    pub start_day: u32,

    /// Minute of day at start.  Default: 360 (06:00).
    pub start_minute: u32,

    /// Simulated minutes per tick.  Default: 10.
    pub step_minutes: u32,

    /// Suggested real-time cadence for drivers, in milliseconds.  Default: 900.
    pub tick_interval_ms: u64,

    /// Movement rate per simulated minute.  `rate * step_minutes` is the
    /// per-tick interpolation factor.  Default: 0.008.
    pub movement_rate: f64,

    /// Maximum journal length.  Default: 6.
    pub journal_capacity: usize,

    /// Total ticks for `Sim::run`.  `None` runs until the driver stops.
    pub total_ticks: Option<u64>,

    /// Emit a snapshot every N ticks.  0 disables snapshots.  Default: 1.
    pub output_interval_ticks: u64,
}

impl Default for TownConfig {
    fn default() -> Self {
        Self {
            start_day:             1,
            start_minute:          6 * 60,
            step_minutes:          10,
            tick_interval_ms:      900,
            movement_rate:         0.008,
            journal_capacity:      6,
            total_ticks:           None,
            output_interval_ticks: 1,
        }
    }
}

impl TownConfig {
    /// Check every field against its documented range.
    pub fn validate(&self) -> VtResult<()> {
        if self.start_day == 0 {
            return Err(VtError::Config("start_day must be >= 1".into()));
        }
        if self.start_minute >= MINUTES_PER_DAY {
            return Err(VtError::Config(format!(
                "start_minute {} must be < {MINUTES_PER_DAY}",
                self.start_minute
            )));
        }
        if self.step_minutes == 0 || self.step_minutes >= MINUTES_PER_DAY {
            return Err(VtError::Config(format!(
                "step_minutes {} must be in 1..{MINUTES_PER_DAY}",
                self.step_minutes
            )));
        }
        let speed = self.tick_speed();
        if !(speed > 0.0 && speed <= 1.0) {
            return Err(VtError::Config(format!(
                "movement_rate * step_minutes = {speed} must be in (0, 1]"
            )));
        }
        if self.journal_capacity == 0 {
            return Err(VtError::Config("journal_capacity must be >= 1".into()));
        }
        Ok(())
    }

    /// Interpolation factor applied each tick.
    #[inline]
    pub fn tick_speed(&self) -> f64 {
        self.movement_rate * self.step_minutes as f64
    }

    /// Construct a `TownClock` at this run's start time.
    pub fn make_clock(&self) -> TownClock {
        TownClock::at(self.start_day, self.start_minute)
    }
}
