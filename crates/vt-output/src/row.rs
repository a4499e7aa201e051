//! Plain data row types written by output backends.

/// One villager at one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VillagerSnapshotRow {
    pub tick:          u64,
    pub day:           u32,
    pub minute_of_day: u32,
    pub villager:      String,
    pub x:             f64,
    pub y:             f64,
    /// Phase label, e.g. `"commute_morning"`.
    pub activity:      &'static str,
    pub energy:        u8,
    pub mood:          &'static str,
}

/// One journal entry as it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalRow {
    pub tick:      u64,
    pub day:       u32,
    /// `"HH:MM"` clock time at which the entry was written.
    pub timestamp: String,
    pub text:      String,
}
