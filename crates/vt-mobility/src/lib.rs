//! `vt-mobility` — villager movement toward a target tile.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`engine`]  | `MobilityEngine` — per-tick exponential approach         |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                     |
//!
//! # Movement model (interpolated approach)
//!
//! Villagers do not route.  Each tick every coordinate closes a fixed
//! fraction of the remaining gap to the target tile's centre:
//!
//! ```text
//! position += (target + 0.5 - position) * speed
//! speed     = movement_rate * step_minutes
//! ```
//!
//! For `speed` in `(0, 1)` the distance shrinks geometrically and never
//! reaches zero.  `speed == 1` snaps to the centre in one tick.  There is no
//! clamping and no obstacle avoidance: villagers walk straight over water.

pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
