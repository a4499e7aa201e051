//! The activity journal: a short, newest-first log of phase changes.
//!
//! Entries are rendered text, not structured events.  The journal holds at
//! most `capacity` entries (6 by default); recording past that silently drops
//! the oldest.

use std::collections::VecDeque;
use std::fmt;

use vt_schedule::Phase;

// ── JournalEntry ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalEntry {
    /// `"HH:MM"`.
    pub timestamp: String,
    pub text:      String,
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.timestamp, self.text)
    }
}

// ── Templates ─────────────────────────────────────────────────────────────────

/// Journal sentence for `name` entering `phase`.  Only the work template
/// mentions the job title.
pub fn describe(name: &str, job_title: &str, phase: Phase) -> String {
    match phase {
        Phase::Home => format!("{name} relaxes at home, sharing a quiet moment with family."),
        Phase::CommuteMorning => {
            format!("{name} strolls briskly down the main street, ready to start the day.")
        }
        Phase::Work => format!("{name} puts their talent to work as a {job_title}."),
        Phase::SocialLunch => format!("{name} swaps ideas with friends in the square over lunch."),
        Phase::CommuteEvening => format!(
            "{name} wraps up a busy day and follows the street back toward familiar lights."
        ),
        Phase::SocialEvening => {
            format!("{name} meets up with close friends to talk about the day's small joys.")
        }
    }
}

/// [`describe`] keyed by a phase label.  Unknown labels get a generic line.
pub fn describe_label(name: &str, job_title: &str, label: &str) -> String {
    match label.parse::<Phase>() {
        Ok(phase) => describe(name, job_title, phase),
        Err(_) => format!("{name} enjoys the quiet night of the town."),
    }
}

// ── Journal ───────────────────────────────────────────────────────────────────

/// Bounded, newest-first list of [`JournalEntry`].
#[derive(Clone, Debug)]
pub struct Journal {
    entries:  VecDeque<JournalEntry>,
    capacity: usize,
}

impl Journal {
    /// An empty journal holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "journal capacity must be >= 1");
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record `name` entering `phase` at `timestamp` and return the new entry.
    pub fn record(&mut self, name: &str, job_title: &str, phase: Phase, timestamp: &str) -> &JournalEntry {
        self.push(timestamp, describe(name, job_title, phase))
    }

    /// Like [`record`][Self::record] for a free-form phase label.
    pub fn record_label(&mut self, name: &str, job_title: &str, label: &str, timestamp: &str) -> &JournalEntry {
        self.push(timestamp, describe_label(name, job_title, label))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Clear, then record `name` at home at `timestamp`.
    pub fn reseed(&mut self, name: &str, job_title: &str, timestamp: &str) -> &JournalEntry {
        self.clear();
        self.record(name, job_title, Phase::Home, timestamp)
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &JournalEntry> + '_ {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&JournalEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&mut self, timestamp: &str, text: String) -> &JournalEntry {
        self.entries.push_front(JournalEntry { timestamp: timestamp.to_owned(), text });
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(6)
    }
}
