//! Per-tick movement integrator.

use vt_core::{GridPoint, TownConfig};

use crate::{MobilityError, MobilityResult};

/// Moves positions a fixed fraction of the way to their target each tick.
///
/// The engine is stateless apart from the interpolation factor; positions
/// live in `VillagerState` and are passed in by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MobilityEngine {
    speed: f64,
}

impl MobilityEngine {
    /// Engine with `speed = movement_rate * step_minutes`.
    ///
    /// Speeds outside `(0, 1]` are rejected.
    pub fn new(movement_rate: f64, step_minutes: u32) -> MobilityResult<Self> {
        Self::with_speed(movement_rate * step_minutes as f64)
    }

    /// Engine with an explicit per-tick interpolation factor.
    pub fn with_speed(speed: f64) -> MobilityResult<Self> {
        if speed > 0.0 && speed <= 1.0 {
            Ok(Self { speed })
        } else {
            Err(MobilityError::InvalidSpeed(speed))
        }
    }

    pub fn from_config(config: &TownConfig) -> MobilityResult<Self> {
        Self::new(config.movement_rate, config.step_minutes)
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Move `position` one tick toward the centre of the `target` tile.
    #[inline]
    pub fn integrate(&self, position: &mut GridPoint, target: GridPoint) {
        let goal = target.cell_center();
        position.x += (goal.x - position.x) * self.speed;
        position.y += (goal.y - position.y) * self.speed;
    }

    /// Distance from `position` to the centre of the `target` tile.
    #[inline]
    pub fn distance_to_target(&self, position: GridPoint, target: GridPoint) -> f64 {
        position.distance(target.cell_center())
    }

    /// `true` once `position` is within `epsilon` tiles of the target centre.
    #[inline]
    pub fn has_settled(&self, position: GridPoint, target: GridPoint, epsilon: f64) -> bool {
        self.distance_to_target(position, target) <= epsilon
    }
}
