//! Grid coordinate type.
//!
//! Positions are measured in tile units.  Integral values name the top-left
//! corner of a tile; a villager standing "in" tile `(3, 4)` sits at its
//! centre `(3.5, 4.5)`.

/// A point on the town grid.  May be fractional.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Arithmetic mean of two points.
    #[inline]
    pub fn midpoint(self, other: GridPoint) -> GridPoint {
        GridPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Centre of the tile whose corner is `self`.
    #[inline]
    pub fn cell_center(self) -> GridPoint {
        GridPoint::new(self.x + 0.5, self.y + 0.5)
    }

    /// Euclidean distance in tile units.
    #[inline]
    pub fn distance(self, other: GridPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Integer tile containing this point (floor on both axes).
    #[inline]
    pub fn cell(self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
