//! Per-villager mutable simulation state.

use std::fmt;

use vt_core::GridPoint;
use vt_schedule::Phase;

use crate::VillagerProfile;

/// Upper bound of `VillagerState::energy`.
pub const MAX_ENERGY: u8 = 100;

/// How a villager feels.  Updated on every phase transition.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mood {
    /// Starting mood, before the first transition.
    #[default]
    Calm,
    Peaceful,
    Focused,
    Inspired,
    Relaxed,
    Excited,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Calm     => "calm",
            Mood::Peaceful => "peaceful",
            Mood::Focused  => "focused",
            Mood::Inspired => "inspired",
            Mood::Relaxed  => "relaxed",
            Mood::Excited  => "excited",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The part of a villager the simulation mutates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VillagerState {
    /// Continuous position in tile units.
    pub position:         GridPoint,
    pub current_activity: Phase,
    /// Always in `[0, MAX_ENERGY]`.
    pub energy:           u8,
    pub mood:             Mood,
}

impl VillagerState {
    /// Fresh state: standing in the centre of the home tile, at home, full
    /// energy, calm.
    pub fn at_home(profile: &VillagerProfile) -> Self {
        Self {
            position:         profile.home.cell_center(),
            current_activity: Phase::Home,
            energy:           MAX_ENERGY,
            mood:             Mood::Calm,
        }
    }

    /// Add `amount` energy, saturating at [`MAX_ENERGY`].
    #[inline]
    pub fn gain_energy(&mut self, amount: u8) {
        self.energy = self.energy.saturating_add(amount).min(MAX_ENERGY);
    }
}
