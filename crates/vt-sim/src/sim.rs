//! The `Sim` struct and its tick loop.

use tracing::{debug, info};
use vt_behavior::BehaviorModel;
use vt_core::{GridPoint, Tick, TownClock, TownConfig, VillagerId};
use vt_mobility::MobilityEngine;
use vt_schedule::{DaySchedule, Phase};
use vt_villager::Roster;

use crate::{Journal, NoopObserver, SimError, SimObserver, SimResult, sprite_contains};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The town simulation.
///
/// `Sim<B>` owns every piece of mutable state: the clock, the roster, the
/// journal and the focus.  Readers get shared references through the
/// accessors; only [`tick`][Self::tick], [`reset`][Self::reset],
/// [`set_focus`][Self::set_focus] and [`select_at`][Self::select_at] mutate.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    config:        TownConfig,
    clock:         TownClock,
    /// Ticks processed since build or the last reset.
    tick:          Tick,
    roster:        Roster,
    schedule:      DaySchedule,
    mobility:      MobilityEngine,
    journal:       Journal,
    focus:         VillagerId,
    /// Focus restored by `reset`.
    initial_focus: VillagerId,
    behavior:      B,
}

impl<B: BehaviorModel> Sim<B> {
    pub(crate) fn new(
        config:   TownConfig,
        roster:   Roster,
        schedule: DaySchedule,
        mobility: MobilityEngine,
        journal:  Journal,
        focus:    VillagerId,
        behavior: B,
    ) -> Self {
        let mut sim = Self {
            clock: config.make_clock(),
            tick: Tick::ZERO,
            config,
            roster,
            schedule,
            mobility,
            journal,
            focus,
            initial_focus: focus,
            behavior,
        };
        sim.seed_journal();
        sim
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &TownConfig {
        &self.config
    }

    pub fn clock(&self) -> &TownClock {
        &self.clock
    }

    /// Ticks processed so far.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn schedule(&self) -> &DaySchedule {
        &self.schedule
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn focus(&self) -> VillagerId {
        self.focus
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// The phase the whole town is in at the current clock time.
    pub fn phase(&self) -> Phase {
        self.schedule.phase_at(self.clock.hour())
    }

    /// Where `villager` is heading right now.
    pub fn target_of(&self, villager: VillagerId) -> GridPoint {
        let focus = self.roster.profile(self.focus);
        self.behavior.target(self.roster.profile(villager), self.phase(), focus)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the town by one tick with no observer.
    pub fn tick(&mut self) -> usize {
        self.tick_with(&mut NoopObserver)
    }

    /// Advance the town by one tick.  Returns the number of villagers that
    /// changed phase.
    pub fn tick_with<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.tick + 1;
        observer.on_tick_start(now);

        // ── ① Clock / ② rollover ─────────────────────────────────────────
        if self.clock.advance(self.config.step_minutes) {
            self.roll_over_day(now, observer);
        }

        // ── ③ Phase ───────────────────────────────────────────────────────
        let phase = self.phase();
        let timestamp = self.clock.timestamp();

        // ── ④ Villagers ───────────────────────────────────────────────────
        //
        // Profiles are read (including the focus villager's) while states are
        // written; the roster's split borrow keeps them disjoint.
        let (profiles, states) = self.roster.split_mut();
        let focus = &profiles[self.focus.index()];
        let mut transitions = 0;

        for (i, (profile, state)) in profiles.iter().zip(states.iter_mut()).enumerate() {
            let target = self.behavior.target(profile, phase, focus);
            self.mobility.integrate(&mut state.position, target);

            if let Some(from) = self.behavior.transition(profile, state, phase) {
                let id = VillagerId(i as u16);
                debug!(
                    villager = %profile.name,
                    %from,
                    to = %phase,
                    energy = state.energy,
                    mood = %state.mood,
                    "phase transition"
                );
                observer.on_transition(now, id, from, phase);
                let entry = self.journal.record(&profile.name, &profile.job.title, phase, &timestamp);
                observer.on_journal_entry(now, &self.clock, entry);
                transitions += 1;
            }
        }

        self.tick = now;
        observer.on_tick_end(now, transitions);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.clock, &self.roster);
        }
        transitions
    }

    /// Run exactly `n` ticks from the current position.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick_with(observer);
        }
    }

    /// Run `config.total_ticks` ticks, then call
    /// [`SimObserver::on_sim_end`].
    ///
    /// Fails with [`SimError::NoTickLimit`] when no limit is configured.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let total = self.config.total_ticks.ok_or(SimError::NoTickLimit)?;
        let remaining = total.saturating_sub(self.tick.0);
        self.run_ticks(remaining, observer);
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Return to the state right after build: start time, everybody at
    /// home, build-time focus, freshly seeded journal.
    pub fn reset(&mut self) {
        self.clock = self.config.make_clock();
        self.tick = Tick::ZERO;
        self.roster.reset_states();
        self.focus = self.initial_focus;
        self.seed_journal();
        info!(clock = %self.clock, "town reset");
    }

    /// Follow `villager` in the journal and info panel.
    ///
    /// The journal is left as is; it only reseeds at day rollover.
    ///
    /// # Panics
    ///
    /// Panics if `villager` is not on the roster.
    pub fn set_focus(&mut self, villager: VillagerId) {
        assert!(
            self.roster.contains(villager),
            "focus {villager} out of range for {} villagers",
            self.roster.len()
        );
        self.focus = villager;
        info!(focus = %self.roster.profile(villager).name, "focus changed");
    }

    /// Villager whose sprite covers `point`, lowest id first.
    pub fn villager_at(&self, point: GridPoint) -> Option<VillagerId> {
        self.roster
            .iter()
            .find(|(_, _, state)| sprite_contains(state.position, point))
            .map(|(id, _, _)| id)
    }

    /// Hit-test `point` and focus the villager found there, if any.
    pub fn select_at(&mut self, point: GridPoint) -> Option<VillagerId> {
        let hit = self.villager_at(point)?;
        self.set_focus(hit);
        Some(hit)
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn roll_over_day<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let next = (self.focus.index() + 1) % self.roster.len();
        self.focus = VillagerId(next as u16);

        let profile = self.roster.profile(self.focus);
        let entry = self.journal.reseed(&profile.name, &profile.job.title, &self.clock.timestamp());
        info!(day = self.clock.day(), focus = %profile.name, "new day");

        observer.on_day_rollover(now, self.clock.day(), self.focus);
        observer.on_journal_entry(now, &self.clock, entry);
    }

    fn seed_journal(&mut self) {
        let profile = self.roster.profile(self.focus);
        self.journal.clear();
        self.journal
            .record(&profile.name, &profile.job.title, Phase::Home, &self.clock.timestamp());
    }
}
