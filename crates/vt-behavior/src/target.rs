//! Target resolution: which tile a villager heads for during a phase.

use vt_core::GridPoint;
use vt_schedule::Phase;
use vt_villager::VillagerProfile;

/// Destination tile (corner coordinates) for `villager` during `phase`.
///
/// `focus` is the villager currently shown in the detail card.  In the
/// evening a villager who lists the focus villager as a friend visits the
/// focus villager's home; everybody else goes to their own hobby spot.  The
/// check reads only `villager.friends`.
pub fn target_for(villager: &VillagerProfile, phase: Phase, focus: &VillagerProfile) -> GridPoint {
    match phase {
        Phase::Home           => villager.home,
        Phase::Work           => villager.job.location,
        Phase::SocialLunch    => villager.hobby_spot,
        Phase::SocialEvening  => {
            if villager.counts_as_friend(&focus.name) {
                focus.home
            } else {
                villager.hobby_spot
            }
        }
        Phase::CommuteMorning => villager.home.midpoint(villager.job.location),
        Phase::CommuteEvening => villager.job.location.midpoint(villager.hobby_spot),
    }
}

/// [`target_for`] keyed by a phase label.  Unknown labels resolve to home.
pub fn target_for_label(villager: &VillagerProfile, label: &str, focus: &VillagerProfile) -> GridPoint {
    match label.parse::<Phase>() {
        Ok(phase) => target_for(villager, phase, focus),
        Err(_) => villager.home,
    }
}
