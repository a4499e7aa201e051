//! `vt-villager` — villager storage for `villagetown`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`profile`]  | `Job`, `VillagerProfile` — static, authored attributes    |
//! | [`state`]    | `Mood`, `VillagerState` — mutable simulation state        |
//! | [`store`]    | `Roster` (profiles + states + name index)                 |
//! | [`builder`]  | `RosterBuilder` (validated construction)                  |
//! | [`error`]    | `RosterError`, `RosterResult<T>`                          |
//!
//! Profiles and states live in two parallel `Vec`s so the tick loop can read
//! every profile while mutating every state.

pub mod builder;
pub mod error;
pub mod profile;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::RosterBuilder;
pub use error::{RosterError, RosterResult};
pub use profile::{Job, VillagerProfile};
pub use state::{MAX_ENERGY, Mood, VillagerState};
pub use store::Roster;
