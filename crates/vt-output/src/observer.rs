//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use vt_core::{Tick, TownClock};
use vt_sim::{JournalEntry, SimObserver};
use vt_villager::Roster;

use crate::row::{JournalRow, VillagerSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes villager snapshots and journal entries to
/// any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  `Sim::run` does this through `on_sim_end`; call it
    /// yourself after driving the town with `tick_with`/`run_ticks`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_journal_entry(&mut self, tick: Tick, clock: &TownClock, entry: &JournalEntry) {
        let row = JournalRow {
            tick:      tick.0,
            day:       clock.day(),
            timestamp: entry.timestamp.clone(),
            text:      entry.text.clone(),
        };
        let result = self.writer.write_journal_entry(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, clock: &TownClock, roster: &Roster) {
        let rows: Vec<VillagerSnapshotRow> = roster
            .iter()
            .map(|(_, profile, state)| VillagerSnapshotRow {
                tick:          tick.0,
                day:           clock.day(),
                minute_of_day: clock.minute_of_day(),
                villager:      profile.name.clone(),
                x:             state.position.x,
                y:             state.position.y,
                activity:      state.current_activity.as_str(),
                energy:        state.energy,
                mood:          state.mood.as_str(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
