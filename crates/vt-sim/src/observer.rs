//! Simulation observer trait for progress reporting and data collection.

use vt_core::{Tick, TownClock, VillagerId};
use vt_schedule::Phase;
use vt_villager::Roster;

use crate::JournalEntry;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — rollover printer
///
/// ```rust,ignore
/// struct DayPrinter;
///
/// impl SimObserver for DayPrinter {
///     fn on_day_rollover(&mut self, _tick: Tick, day: u32, focus: VillagerId) {
///         println!("day {day} begins, following {focus}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the clock advances.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after midnight is crossed, once the focus has rotated and the
    /// journal has been reseeded.
    fn on_day_rollover(&mut self, _tick: Tick, _day: u32, _focus: VillagerId) {}

    /// Called for every villager whose phase changed this tick.
    fn on_transition(&mut self, _tick: Tick, _villager: VillagerId, _from: Phase, _to: Phase) {}

    /// Called for every entry added to the journal, including the reseed
    /// entry at rollover.
    fn on_journal_entry(&mut self, _tick: Tick, _clock: &TownClock, _entry: &JournalEntry) {}

    /// Called at the end of each tick.
    ///
    /// `transitions` is the number of villagers that changed phase this tick.
    fn on_tick_end(&mut self, _tick: Tick, _transitions: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to the roster so output writers can record
    /// positions without the sim knowing about any output format.
    fn on_snapshot(&mut self, _tick: Tick, _clock: &TownClock, _roster: &Roster) {}

    /// Called once after [`Sim::run`][crate::Sim::run] completes its last tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
