//! Fluent builder for constructing a [`Sim`].

use tracing::info;
use vt_behavior::BehaviorModel;
use vt_core::{TownConfig, VillagerId};
use vt_mobility::MobilityEngine;
use vt_schedule::DaySchedule;
use vt_villager::Roster;

use crate::{Journal, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`TownConfig`] — start time, step, movement rate, journal size, …
/// - [`Roster`] — from [`vt_villager::RosterBuilder`]
/// - `B: BehaviorModel` — usually [`vt_behavior::StandardBehavior`]
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                     |
/// |-----------------|-----------------------------|
/// | `.schedule(s)`  | `DaySchedule::standard()`   |
/// | `.focus(id)`    | `VillagerId(0)`             |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, roster, StandardBehavior)
///     .schedule(load_schedule_csv(path)?)
///     .focus(roster_focus)
///     .build()?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:   TownConfig,
    roster:   Roster,
    schedule: Option<DaySchedule>,
    focus:    VillagerId,
    behavior: B,
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(config: TownConfig, roster: Roster, behavior: B) -> Self {
        Self {
            config,
            roster,
            schedule: None,
            focus:    VillagerId(0),
            behavior,
        }
    }

    /// Replace the standard daily schedule.
    pub fn schedule(mut self, schedule: DaySchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// The villager followed by the journal and the info panel at start.
    pub fn focus(mut self, focus: VillagerId) -> Self {
        self.focus = focus;
        self
    }

    /// Validate the configuration and focus, then return a [`Sim`] at its
    /// start time with every villager at home and the journal seeded.
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;
        let mobility = MobilityEngine::from_config(&self.config)?;

        if !self.roster.contains(self.focus) {
            return Err(SimError::FocusOutOfRange {
                focus: self.focus,
                count: self.roster.len(),
            });
        }

        let journal = Journal::new(self.config.journal_capacity);
        let schedule = self.schedule.unwrap_or_default();

        info!(
            villagers = self.roster.len(),
            blocks = schedule.len(),
            speed = mobility.speed(),
            "town built"
        );

        Ok(Sim::new(
            self.config,
            self.roster,
            schedule,
            mobility,
            journal,
            self.focus,
            self.behavior,
        ))
    }
}
