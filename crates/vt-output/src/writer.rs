//! The `OutputWriter` trait.

use crate::{JournalRow, OutputResult, VillagerSnapshotRow};

/// A sink for simulation rows.
///
/// Errors are returned here but swallowed by the observer, which keeps the
/// first one for [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one snapshot batch (every villager at one tick).
    fn write_snapshots(&mut self, rows: &[VillagerSnapshotRow]) -> OutputResult<()>;

    fn write_journal_entry(&mut self, row: &JournalRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
