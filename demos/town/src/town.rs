//! The fixed 20 × 20 town and its six residents.
//!
//! West: five houses (roof one tile north of each door).  East: four
//! workplaces.  South: community buildings around the plaza.  North-west:
//! a stream and the park.  Two double-width roads cross at the centre.

use vt_core::GridPoint;
use vt_villager::{Job, Roster, RosterBuilder, RosterResult, VillagerProfile};

pub const GRID_SIZE: usize = 20;

// ── Tiles ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Tile {
    Grass,
    Water,
    Road,
    House,
    Roof,
    Work,
    Community,
    Plaza,
    Tree,
}

impl Tile {
    /// Two-character map glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Tile::Grass     => "  ",
            Tile::Water     => "~~",
            Tile::Road      => "..",
            Tile::House     => "[]",
            Tile::Roof      => "/\\",
            Tile::Work      => "##",
            Tile::Community => "++",
            Tile::Plaza     => "**",
            Tile::Tree      => "^^",
        }
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

pub struct TownLayout {
    /// Row-major: `grid[y][x]`.
    pub grid:       [[Tile; GRID_SIZE]; GRID_SIZE],
    pub houses:     Vec<GridPoint>,
    pub workplaces: Vec<GridPoint>,
    pub park:       GridPoint,
    pub cafe:       GridPoint,
    pub plaza:      GridPoint,
}

const HOUSES: [(usize, usize); 5] = [(2, 12), (3, 14), (5, 13), (6, 15), (4, 16)];
const WORKPLACES: [(usize, usize); 4] = [(15, 5), (16, 7), (14, 12), (17, 14)];
const COMMUNITY: [(usize, usize); 3] = [(12, 16), (13, 15), (15, 17)];

fn point((x, y): (usize, usize)) -> GridPoint {
    GridPoint::new(x as f64, y as f64)
}

impl TownLayout {
    pub fn standard() -> Self {
        let mut grid = [[Tile::Grass; GRID_SIZE]; GRID_SIZE];
        let mut mark = |x: usize, y: usize, tile: Tile| {
            if x < GRID_SIZE && y < GRID_SIZE {
                grid[y][x] = tile;
            }
        };

        for i in 0..GRID_SIZE {
            mark(i, 9, Tile::Road);
            mark(i, 10, Tile::Road);
            mark(9, i, Tile::Road);
            mark(10, i, Tile::Road);
        }
        for y in 2..=6 {
            mark(3, y, Tile::Water);
        }
        mark(4, 4, Tile::Community);
        mark(4, 5, Tile::Tree);
        mark(5, 5, Tile::Tree);

        for &(x, y) in &HOUSES {
            mark(x, y, Tile::House);
            mark(x, y - 1, Tile::Roof);
        }
        for &(x, y) in &WORKPLACES {
            mark(x, y, Tile::Work);
        }
        for &(x, y) in &COMMUNITY {
            mark(x, y, Tile::Community);
        }
        mark(12, 15, Tile::Plaza);

        Self {
            grid,
            houses:     HOUSES.into_iter().map(point).collect(),
            workplaces: WORKPLACES.into_iter().map(point).collect(),
            park:       GridPoint::new(4.0, 4.0),
            cafe:       GridPoint::new(13.0, 15.0),
            plaza:      GridPoint::new(12.0, 15.0),
        }
    }

    pub fn tile(&self, x: usize, y: usize) -> Tile {
        self.grid[y][x]
    }
}

// ── Residents ─────────────────────────────────────────────────────────────────

/// The six villagers, in focus-rotation order.
pub fn residents(layout: &TownLayout) -> RosterResult<Roster> {
    let h = &layout.houses;
    let w = &layout.workplaces;

    RosterBuilder::new()
        .villager(
            VillagerProfile::new("Dora", h[0], Job::new("pixel artist", w[0]))
                .with_color("#ff9cdc")
                .with_family(["Ruben"])
                .with_friends(["Brook", "Stella"])
                .with_hobby_spot(layout.park)
                .with_personality("Notices every colour; finds new ideas on each street corner."),
        )
        .villager(
            VillagerProfile::new("Ruben", h[0], Job::new("independent baker", w[1]))
                .with_color("#ffc46f")
                .with_family(["Dora"])
                .with_friends(["Stella"])
                .with_hobby_spot(layout.cafe)
                .with_personality("His morning bread is the reason the town gets out of bed."),
        )
        .villager(
            VillagerProfile::new("Brook", h[2], Job::new("eco designer", w[2]))
                .with_color("#7ee7b7")
                .with_family(["Summer"])
                .with_friends(["Dora", "Marina"])
                .with_hobby_spot(layout.park)
                .with_personality("Tends the riverbank planting and runs talks on green living."),
        )
        .villager(
            VillagerProfile::new("Summer", h[2], Job::new("community teacher", w[3]))
                .with_color("#9aa8ff")
                .with_family(["Brook"])
                .with_friends(["Marina"])
                .with_hobby_spot(layout.plaza)
                .with_personality("Rehearses plays with the children in the square."),
        )
        .villager(
            VillagerProfile::new("Stella", h[3], Job::new("astronomy writer", layout.park))
                .with_color("#f28dcd")
                .with_family(["Marina"])
                .with_friends(["Dora", "Ruben"])
                .with_hobby_spot(layout.plaza)
                .with_personality("Writes at night and tells the neighbours stories of the stars."),
        )
        .villager(
            VillagerProfile::new("Marina", h[4], Job::new("harbor navigator", GridPoint::new(3.0, 3.0)))
                .with_color("#64a1ff")
                .with_family(["Stella"])
                .with_friends(["Brook", "Summer"])
                .with_hobby_spot(layout.cafe)
                .with_personality("Keeps the stream's lighthouse burning day and night."),
        )
        .build()
}
