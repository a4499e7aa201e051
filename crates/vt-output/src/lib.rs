//! `vt-output` — CSV export of what happened in town.
//!
//! | File                      | One row per                                 |
//! |---------------------------|---------------------------------------------|
//! | `villager_snapshots.csv`  | villager, every `output_interval_ticks`     |
//! | `journal.csv`             | journal entry, including rollover reseeds   |
//!
//! The writer implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `vt_sim::SimObserver`.  Files are
//! write-only observations; nothing in the workspace reads them back.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vt_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{JournalRow, VillagerSnapshotRow};
pub use writer::OutputWriter;
