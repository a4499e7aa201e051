//! `vt-behavior` — where villagers go and how they feel about it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`target`]  | `target_for` — phase → destination tile                      |
//! | [`mood`]    | `derive_mood`, `apply_transition` — edge-triggered updates   |
//! | [`model`]   | `BehaviorModel` trait, `StandardBehavior`                    |
//!
//! Everything here is a pure function of its arguments.  The focus villager
//! is always passed in explicitly; nothing reads simulation state behind the
//! caller's back.

pub mod model;
pub mod mood;
pub mod target;


pub use model::{BehaviorModel, StandardBehavior};
pub use mood::{ENERGY_PER_TRANSITION, apply_transition, derive_mood, is_teacher};
pub use target::{target_for, target_for_label};
