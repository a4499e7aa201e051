//! `Roster` — every villager in town.
//!
//! # Why two arrays?
//!
//! The tick loop resolves targets from profiles (including the *focus*
//! villager's profile) while writing positions and moods into states.  With
//! profiles and states in separate `Vec`s that is a plain split borrow:
//!
//! ```ignore
//! let (profiles, states) = roster.split_mut();
//! let focus = &profiles[focus.index()];
//! for (profile, state) in profiles.iter().zip(states.iter_mut()) { ... }
//! ```

use rustc_hash::FxHashMap;
use vt_core::VillagerId;

use crate::{VillagerProfile, VillagerState};

/// Parallel profile/state storage indexed by [`VillagerId`].
///
/// Built by [`RosterBuilder`][crate::RosterBuilder], which guarantees a
/// non-empty roster with unique names.
#[derive(Clone, Debug)]
pub struct Roster {
    profiles: Vec<VillagerProfile>,
    states:   Vec<VillagerState>,
    by_name:  FxHashMap<String, VillagerId>,
}

impl Roster {
    pub(crate) fn new(profiles: Vec<VillagerProfile>, by_name: FxHashMap<String, VillagerId>) -> Self {
        let states = profiles.iter().map(VillagerState::at_home).collect();
        Self { profiles, states, by_name }
    }

    /// Number of villagers.  Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// `true` if `id` indexes a villager.
    #[inline]
    pub fn contains(&self, id: VillagerId) -> bool {
        id.index() < self.len()
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = VillagerId> + '_ {
        (0..self.len() as u16).map(VillagerId)
    }

    /// Look up a villager by exact name.
    pub fn find(&self, name: &str) -> Option<VillagerId> {
        self.by_name.get(name).copied()
    }

    // ── Access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn profile(&self, id: VillagerId) -> &VillagerProfile {
        &self.profiles[id.index()]
    }

    #[inline]
    pub fn state(&self, id: VillagerId) -> &VillagerState {
        &self.states[id.index()]
    }

    pub fn profiles(&self) -> &[VillagerProfile] {
        &self.profiles
    }

    pub fn states(&self) -> &[VillagerState] {
        &self.states
    }

    /// Read profiles and write states at the same time.
    pub fn split_mut(&mut self) -> (&[VillagerProfile], &mut [VillagerState]) {
        (&self.profiles, &mut self.states)
    }

    /// `(id, profile, state)` triples in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VillagerId, &VillagerProfile, &VillagerState)> + '_ {
        self.ids()
            .zip(self.profiles.iter().zip(self.states.iter()))
            .map(|(id, (p, s))| (id, p, s))
    }

    /// Put every villager back at home with fresh state.
    pub fn reset_states(&mut self) {
        for (state, profile) in self.states.iter_mut().zip(&self.profiles) {
            *state = VillagerState::at_home(profile);
        }
    }
}
