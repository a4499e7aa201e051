//! Unit tests for vt-villager.

use vt_core::{GridPoint, VillagerId};
use vt_schedule::Phase;

use crate::{Job, MAX_ENERGY, Mood, RosterBuilder, RosterError, VillagerProfile, VillagerState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn profile(name: &str, home: (f64, f64)) -> VillagerProfile {
    VillagerProfile::new(
        name,
        GridPoint::new(home.0, home.1),
        Job::new("Baker", GridPoint::new(16.0, 7.0)),
    )
}

#[cfg(test)]
mod profile_tests {
    use super::*;

    #[test]
    fn builder_methods_fill_fields() {
        let p = profile("Ada", (2.0, 12.0))
            .with_color("#ff9cdc")
            .with_family(["Ben"])
            .with_friends(["Cy", "Di"])
            .with_hobby_spot(GridPoint::new(4.0, 4.0))
            .with_personality("Sees colour everywhere.");
        assert_eq!(p.color, "#ff9cdc");
        assert_eq!(p.family, vec!["Ben".to_owned()]);
        assert_eq!(p.friends.len(), 2);
        assert_eq!(p.hobby_spot, GridPoint::new(4.0, 4.0));
        assert!(!p.personality.is_empty());
    }

    #[test]
    fn hobby_spot_defaults_to_home() {
        let p = profile("Ada", (2.0, 12.0));
        assert_eq!(p.hobby_spot, p.home);
    }

    #[test]
    fn friendship_is_one_directional() {
        let ada = profile("Ada", (0.0, 0.0)).with_friends(["Ben"]);
        let ben = profile("Ben", (1.0, 1.0));
        assert!(ada.counts_as_friend("Ben"));
        assert!(!ben.counts_as_friend("Ada"));
    }
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn fresh_state_is_home_centre() {
        let s = VillagerState::at_home(&profile("Ada", (2.0, 12.0)));
        assert_eq!(s.position, GridPoint::new(2.5, 12.5));
        assert_eq!(s.current_activity, Phase::Home);
        assert_eq!(s.energy, MAX_ENERGY);
        assert_eq!(s.mood, Mood::Calm);
    }

    #[test]
    fn energy_saturates() {
        let mut s = VillagerState::at_home(&profile("Ada", (0.0, 0.0)));
        s.energy = 97;
        s.gain_energy(5);
        assert_eq!(s.energy, 100);
        s.energy = 250;
        s.gain_energy(5);
        assert_eq!(s.energy, 100);
    }

    #[test]
    fn mood_labels() {
        assert_eq!(Mood::Inspired.to_string(), "inspired");
        assert_eq!(Mood::default(), Mood::Calm);
    }
}

#[cfg(test)]
mod roster_tests {
    use super::*;

    #[test]
    fn builds_with_ids_in_order() {
        let roster = RosterBuilder::new()
            .villager(profile("Ada", (0.0, 0.0)))
            .villager(profile("Ben", (1.0, 1.0)))
            .build()
            .unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find("Ben"), Some(VillagerId(1)));
        assert_eq!(roster.find("Zed"), None);
        assert_eq!(roster.profile(VillagerId(0)).name, "Ada");
        let ids: Vec<_> = roster.ids().collect();
        assert_eq!(ids, vec![VillagerId(0), VillagerId(1)]);
    }

    #[test]
    fn empty_roster_rejected() {
        assert!(matches!(RosterBuilder::new().build(), Err(RosterError::Empty)));
    }

    #[test]
    fn duplicate_name_rejected() {
        let result = RosterBuilder::new()
            .villagers([profile("Ada", (0.0, 0.0)), profile("Ada", (1.0, 1.0))])
            .build();
        assert!(matches!(result, Err(RosterError::DuplicateName(n)) if n == "Ada"));
    }

    #[test]
    fn blank_name_rejected() {
        let result = RosterBuilder::new().villager(profile("  ", (0.0, 0.0))).build();
        assert!(matches!(result, Err(RosterError::BlankName(0))));
    }

    #[test]
    fn unknown_friend_is_allowed() {
        let roster = RosterBuilder::new()
            .villager(profile("Ada", (0.0, 0.0)).with_friends(["Nobody"]))
            .build();
        assert!(roster.is_ok());
    }

    #[test]
    fn split_mut_and_reset() {
        let mut roster = RosterBuilder::new()
            .villager(profile("Ada", (2.0, 2.0)))
            .build()
            .unwrap();
        {
            let (profiles, states) = roster.split_mut();
            assert_eq!(profiles.len(), states.len());
            states[0].position = GridPoint::new(9.0, 9.0);
            states[0].mood = Mood::Excited;
        }
        assert_eq!(roster.state(VillagerId(0)).mood, Mood::Excited);
        roster.reset_states();
        assert_eq!(roster.state(VillagerId(0)).position, GridPoint::new(2.5, 2.5));
        assert_eq!(roster.state(VillagerId(0)).mood, Mood::Calm);
    }

    #[test]
    fn contains_checks_range() {
        let roster = RosterBuilder::new().villager(profile("Ada", (0.0, 0.0))).build().unwrap();
        assert!(roster.contains(VillagerId(0)));
        assert!(!roster.contains(VillagerId(1)));
    }
}
