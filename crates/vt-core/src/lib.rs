//! `vt-core` — foundational types for the `villagetown` simulation.
//!
//! This crate is a dependency of every other `vt-*` crate.  It has no `vt-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`ids`]    | `VillagerId`                                    |
//! | [`geo`]    | `GridPoint`, midpoint, cell centre              |
//! | [`time`]   | `Tick`, `TownClock`, `TownConfig`               |
//! | [`error`]  | `VtError`, `VtResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{VtError, VtResult};
pub use geo::GridPoint;
pub use ids::VillagerId;
pub use time::{MINUTES_PER_DAY, Tick, TownClock, TownConfig};
