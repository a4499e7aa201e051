//! `vt-sim` — tick loop orchestrator for `villagetown`.
//!
//! # Tick loop
//!
//! ```text
//! every tick:
//!   ① Clock     — advance by config.step_minutes.
//!   ② Rollover  — on crossing midnight: rotate focus, clear the journal,
//!                 reseed it with the new focus villager at home.
//!   ③ Phase     — one phase for the whole town, from the new clock hour.
//!   ④ Villagers — in ascending VillagerId order:
//!                   target   = BehaviorModel::target(v, phase, focus)
//!                   position → MobilityEngine::integrate(position, target)
//!                   if phase changed: energy, mood, journal entry
//! ```
//!
//! There is no terminal state: the town cycles until the driver stops
//! calling [`Sim::tick`].  The driver owns the timer; `Sim` never sleeps.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vt_behavior::StandardBehavior;
//! use vt_core::TownConfig;
//! use vt_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(TownConfig::default(), roster, StandardBehavior)
//!     .build()?;
//! sim.run_ticks(24, &mut NoopObserver);
//! println!("{}", sim.clock()); // day 1 10:00
//! ```

pub mod builder;
pub mod error;
pub mod journal;
pub mod observer;
pub mod pick;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use journal::{Journal, JournalEntry, describe, describe_label};
pub use observer::{NoopObserver, SimObserver};
pub use pick::{SPRITE_SIZE, sprite_contains};
pub use sim::Sim;
