//! Plain-text stand-ins for the canvas, the info panel, and the journal list.

use vt_behavior::BehaviorModel;
use vt_sim::Sim;

use crate::town::{GRID_SIZE, TownLayout};

/// The map with each villager drawn as the first letter of their name.  The
/// focus villager is marked with `<`.
pub fn map<B: BehaviorModel>(layout: &TownLayout, sim: &Sim<B>) -> String {
    let mut cells: Vec<Vec<String>> = (0..GRID_SIZE)
        .map(|y| (0..GRID_SIZE).map(|x| layout.tile(x, y).glyph().to_owned()).collect())
        .collect();

    for (id, profile, state) in sim.roster().iter() {
        let (cx, cy) = state.position.cell();
        if !(0..GRID_SIZE as i64).contains(&cx) || !(0..GRID_SIZE as i64).contains(&cy) {
            continue;
        }
        let initial = profile.name.chars().next().unwrap_or('?');
        let marker = if id == sim.focus() { '<' } else { ' ' };
        cells[cy as usize][cx as usize] = format!("{initial}{marker}");
    }

    let border = format!("+{}+\n", "-".repeat(GRID_SIZE * 2));
    let rows: String = cells.iter().map(|row| format!("|{}|\n", row.concat())).collect();
    format!("{border}{rows}{border}")
}

/// Clock readout plus the focus villager's card.
pub fn panel<B: BehaviorModel>(sim: &Sim<B>) -> String {
    let clock = sim.clock();
    let profile = sim.roster().profile(sim.focus());
    let state = sim.roster().state(sim.focus());

    format!(
        "Day {}  {}  ({})\n{} | {}\n  mood: {} | energy: {}%\n  family: {}\n  friends: {}\n  trait: {}\n",
        clock.day(),
        clock.timestamp(),
        sim.phase(),
        profile.name,
        profile.job.title,
        state.mood,
        state.energy,
        profile.family.join(", "),
        profile.friends.join(", "),
        profile.personality,
    )
}

/// Journal, newest first.
pub fn journal<B: BehaviorModel>(sim: &Sim<B>) -> String {
    let lines: String = sim.journal().entries().map(|entry| format!("  {entry}\n")).collect();
    format!("Journal\n{lines}")
}
