//! Sprite hit testing.
//!
//! A villager is drawn as a square sprite [`SPRITE_SIZE`] tiles wide,
//! centred on its position.  Edges count as inside.

use vt_core::GridPoint;

/// Side length of a villager sprite, in tiles.
pub const SPRITE_SIZE: f64 = 0.6;

/// `true` if `point` lies inside the sprite of a villager standing at
/// `position`.
#[inline]
pub fn sprite_contains(position: GridPoint, point: GridPoint) -> bool {
    let half = SPRITE_SIZE / 2.0;
    (point.x - position.x).abs() <= half && (point.y - position.y).abs() <= half
}
