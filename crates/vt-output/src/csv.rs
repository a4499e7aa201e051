//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `villager_snapshots.csv`
//! - `journal.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{JournalRow, OutputResult, VillagerSnapshotRow};

pub const SNAPSHOT_FILE: &str = "villager_snapshots.csv";
pub const JOURNAL_FILE: &str = "journal.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    journal:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (truncating) both CSV files, and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record([
            "tick", "day", "minute_of_day", "villager", "x", "y", "activity", "energy", "mood",
        ])?;

        let mut journal = Writer::from_path(dir.join(JOURNAL_FILE))?;
        journal.write_record(["tick", "day", "timestamp", "text"])?;

        Ok(Self {
            snapshots,
            journal,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[VillagerSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.day.to_string(),
                row.minute_of_day.to_string(),
                row.villager.clone(),
                format!("{:.4}", row.x),
                format!("{:.4}", row.y),
                row.activity.to_owned(),
                row.energy.to_string(),
                row.mood.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_journal_entry(&mut self, row: &JournalRow) -> OutputResult<()> {
        self.journal.write_record(&[
            row.tick.to_string(),
            row.day.to_string(),
            row.timestamp.clone(),
            row.text.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.journal.flush()?;
        Ok(())
    }
}
