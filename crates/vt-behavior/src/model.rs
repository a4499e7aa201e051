//! The `BehaviorModel` trait — the extension point for custom town rules.

use vt_core::GridPoint;
use vt_schedule::Phase;
use vt_villager::{VillagerProfile, VillagerState};

use crate::{apply_transition, target_for};

/// Pluggable villager behavior.
///
/// Both methods have defaults that implement the standard town rules, so
/// [`StandardBehavior`] is an empty impl.  Override one to experiment, e.g.
/// a model that sends everybody to the plaza at lunch:
///
/// ```rust,ignore
/// struct PlazaLunch(GridPoint);
///
/// impl BehaviorModel for PlazaLunch {
///     fn target(&self, v: &VillagerProfile, phase: Phase, focus: &VillagerProfile) -> GridPoint {
///         match phase {
///             Phase::SocialLunch => self.0,
///             _ => target_for(v, phase, focus),
///         }
///     }
/// }
/// ```
pub trait BehaviorModel {
    /// Destination tile for `villager` during `phase`.
    fn target(&self, villager: &VillagerProfile, phase: Phase, focus: &VillagerProfile) -> GridPoint {
        target_for(villager, phase, focus)
    }

    /// Called every tick with the scheduled phase.  Must only change `state`
    /// when `phase` differs from `state.current_activity`; returns the
    /// previous phase in that case.
    fn transition(
        &self,
        villager: &VillagerProfile,
        state:    &mut VillagerState,
        phase:    Phase,
    ) -> Option<Phase> {
        apply_transition(villager, state, phase)
    }
}

/// The reference town rules.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardBehavior;

impl BehaviorModel for StandardBehavior {}
