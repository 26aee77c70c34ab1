//! # Offset Module
//!
//! The five directions inspected around a hole's floor cell: the four horizontal
//! cardinals and straight down. Up is never inspected because a hole must be open
//! above by construction.

use cgmath::{Point3, Vector3};

/// A direction from a floor cell to one of its guarding neighbors.
///
/// The discriminants double as indices into fixed-size per-side arrays.
///
/// Axis convention: north is -Z, south is +Z, east is +X, west is -X.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum Offset {
    /// Towards negative Z
    North = 0,

    /// Towards positive Z
    South = 1,

    /// Towards positive X
    East = 2,

    /// Towards negative X
    West = 3,

    /// Towards negative Y
    Down = 4,
}

impl Offset {
    /// Number of inspected directions.
    pub const COUNT: usize = 5;

    /// Returns all five offsets in discriminant order.
    pub fn all() -> [Offset; Offset::COUNT] {
        let [north, south, east, west] = Self::horizontal();
        [north, south, east, west, Offset::Down]
    }

    /// Returns the four horizontal offsets.
    pub fn horizontal() -> [Offset; 4] {
        [Offset::North, Offset::South, Offset::East, Offset::West]
    }

    /// The unit step this offset represents.
    pub fn vector(self) -> Vector3<i32> {
        match self {
            Offset::North => Vector3::new(0, 0, -1),
            Offset::South => Vector3::new(0, 0, 1),
            Offset::East => Vector3::new(1, 0, 0),
            Offset::West => Vector3::new(-1, 0, 0),
            Offset::Down => Vector3::new(0, -1, 0),
        }
    }

    /// The position one block away from `position` in this direction.
    pub fn offset(self, position: Point3<i32>) -> Point3<i32> {
        position + self.vector()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_match_positions_in_all() {
        for (index, offset) in Offset::all().iter().enumerate() {
            assert_eq!(*offset as usize, index);
        }
    }

    #[test]
    fn horizontal_offsets_stay_on_the_same_level() {
        let origin = Point3::new(3, 64, -2);
        for offset in Offset::horizontal() {
            let moved = offset.offset(origin);
            assert_eq!(moved.y, origin.y);
            assert_eq!((moved - origin).x.abs() + (moved - origin).z.abs(), 1);
        }
        assert_eq!(Offset::Down.offset(origin), Point3::new(3, 63, -2));
        assert!(!Offset::horizontal().contains(&Offset::Down));
    }
}
