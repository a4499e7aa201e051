//! The six activity phases of a villager's day.

use std::fmt;
use std::str::FromStr;

use crate::ScheduleError;
use crate::day::{STANDARD_BLOCKS, block_index};

/// What every villager is supposed to be doing at a given hour.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// At home.  Also the night-time phase.
    #[default]
    Home,
    /// On the way from home toward the workplace.
    CommuteMorning,
    /// At the job location.
    Work,
    /// Lunch break at the hobby spot.
    SocialLunch,
    /// On the way from work toward the hobby spot.
    CommuteEvening,
    /// Evening with friends.
    SocialEvening,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Home,
        Phase::CommuteMorning,
        Phase::Work,
        Phase::SocialLunch,
        Phase::CommuteEvening,
        Phase::SocialEvening,
    ];

    /// Stable snake_case label, used in CSV files and output rows.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Home           => "home",
            Phase::CommuteMorning => "commute_morning",
            Phase::Work           => "work",
            Phase::SocialLunch    => "social_lunch",
            Phase::CommuteEvening => "commute_evening",
            Phase::SocialEvening  => "social_evening",
        }
    }

    #[inline]
    pub fn is_commute(self) -> bool {
        matches!(self, Phase::CommuteMorning | Phase::CommuteEvening)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| ScheduleError::Parse(format!("unknown phase {s:?}")))
    }
}

/// Map a fractional hour of day to the standard schedule's phase.
///
/// Looks `hour` up in [`STANDARD_BLOCKS`] after reducing it modulo 24.
/// Boundaries are half-open, so `phase_for(8.0)` is `CommuteMorning` and
/// `phase_for(7.999)` is `Home`.  Non-finite input falls through to `Home`.
pub fn phase_for(hour: f64) -> Phase {
    STANDARD_BLOCKS[block_index(&STANDARD_BLOCKS, hour)].phase
}
