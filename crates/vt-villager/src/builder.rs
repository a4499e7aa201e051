//! Fluent builder for constructing a validated [`Roster`].
//!
//! # Usage
//!
//! ```rust
//! use vt_core::GridPoint;
//! use vt_villager::{Job, RosterBuilder, VillagerProfile};
//!
//! let roster = RosterBuilder::new()
//!     .villager(VillagerProfile::new(
//!         "Ada",
//!         GridPoint::new(2.0, 12.0),
//!         Job::new("Baker", GridPoint::new(16.0, 7.0)),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(roster.len(), 1);
//! ```

use rustc_hash::FxHashMap;
use tracing::debug;
use vt_core::VillagerId;

use crate::{Roster, RosterError, RosterResult, VillagerProfile};

/// Collects profiles and checks them before building a [`Roster`].
#[derive(Default)]
pub struct RosterBuilder {
    profiles: Vec<VillagerProfile>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one villager.  Ids are assigned in insertion order.
    pub fn villager(mut self, profile: VillagerProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Append several villagers.
    pub fn villagers(mut self, profiles: impl IntoIterator<Item = VillagerProfile>) -> Self {
        self.profiles.extend(profiles);
        self
    }

    /// Validate names and build the roster with every villager at home.
    ///
    /// Friend and family names that match nobody on the roster are allowed;
    /// they are logged at debug level.
    pub fn build(self) -> RosterResult<Roster> {
        if self.profiles.is_empty() {
            return Err(RosterError::Empty);
        }
        if self.profiles.len() > VillagerId::INVALID.index() {
            return Err(RosterError::TooMany(self.profiles.len()));
        }

        let mut by_name: FxHashMap<String, VillagerId> = FxHashMap::default();
        for (i, profile) in self.profiles.iter().enumerate() {
            if profile.name.trim().is_empty() {
                return Err(RosterError::BlankName(i));
            }
            if by_name.insert(profile.name.clone(), VillagerId(i as u16)).is_some() {
                return Err(RosterError::DuplicateName(profile.name.clone()));
            }
        }

        for profile in &self.profiles {
            for other in profile.friends.iter().chain(&profile.family) {
                if !by_name.contains_key(other) {
                    debug!(villager = %profile.name, unknown = %other, "relation names nobody on the roster");
                }
            }
        }

        Ok(Roster::new(self.profiles, by_name))
    }
}
