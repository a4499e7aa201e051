//! Mood and energy rules applied when a villager changes phase.

use vt_schedule::Phase;
use vt_villager::{Mood, VillagerProfile, VillagerState};

/// Energy gained on every phase transition.
pub const ENERGY_PER_TRANSITION: u8 = 5;

/// Job-title fragments that mark an educator.  Matched case-insensitively.
const TEACHER_MARKERS: [&str; 2] = ["teacher", "educator"];

/// `true` if the job title names a teaching role.
pub fn is_teacher(job_title: &str) -> bool {
    let title = job_title.to_lowercase();
    TEACHER_MARKERS.iter().any(|m| title.contains(m))
}

/// Mood a villager settles into on entering `phase`.
pub fn derive_mood(villager: &VillagerProfile, phase: Phase) -> Mood {
    match phase {
        Phase::Work if is_teacher(&villager.job.title) => Mood::Inspired,
        Phase::Work          => Mood::Focused,
        Phase::SocialLunch   => Mood::Relaxed,
        Phase::SocialEvening => Mood::Excited,
        Phase::Home          => Mood::Peaceful,
        Phase::CommuteMorning | Phase::CommuteEvening => Mood::Focused,
    }
}

/// Enter `phase` if it differs from the villager's current activity.
///
/// Returns the previous phase when a transition happened, `None` otherwise.
/// A repeated call with the same phase leaves `state` untouched.
pub fn apply_transition(villager: &VillagerProfile, state: &mut VillagerState, phase: Phase) -> Option<Phase> {
    if state.current_activity == phase {
        return None;
    }
    let previous = state.current_activity;
    state.current_activity = phase;
    state.gain_energy(ENERGY_PER_TRANSITION);
    state.mood = derive_mood(villager, phase);
    Some(previous)
}
