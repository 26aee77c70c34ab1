//! # Voxel Sampler
//!
//! Enumerates the floor cells worth classifying around a reference point.

use cgmath::{Point3, Vector3};

use crate::engine_state::voxels::world_query::WorldQuery;

/// Radii above this are clamped. Far beyond any configurable range, it only keeps
/// the squared-distance arithmetic inside `i32`.
pub const MAX_SAMPLE_RADIUS: u32 = 1024;

/// Every block position strictly inside a sphere.
///
/// A position is included when its squared distance from `center` is less than
/// `radius²`. Iteration order is X, then Z, then Y, each ascending, so two calls with
/// the same arguments yield the same sequence.
pub fn sphere(center: Point3<i32>, radius: u32) -> impl Iterator<Item = Point3<i32>> {
    let r = radius.min(MAX_SAMPLE_RADIUS) as i32;
    let r_sq = r * r;

    (-r..=r).flat_map(move |dx| {
        (-r..=r).flat_map(move |dz| {
            (-r..=r).filter_map(move |dy| {
                (dx * dx + dy * dy + dz * dz < r_sq).then(|| center + Vector3::new(dx, dy, dz))
            })
        })
    })
}

/// Whether `position` could be the floor cell of a hole.
///
/// The cell itself must be air with a non-air block below it and two blocks of air
/// above it. The checks run in that order and stop at the first failure.
pub fn is_candidate<W: WorldQuery + ?Sized>(world: &W, position: Point3<i32>) -> bool {
    world.is_air(position)
        && !world.is_air(position + Vector3::new(0, -1, 0))
        && world.is_air(position + Vector3::new(0, 1, 0))
        && world.is_air(position + Vector3::new(0, 2, 0))
}

/// Candidate floor cells within `radius` of `center`.
///
/// Lazily evaluated and single-pass: the world is only queried as the iterator is
/// driven. No position is produced twice.
pub fn candidates<'w, W: WorldQuery + ?Sized>(
    world: &'w W,
    center: Point3<i32>,
    radius: u32,
) -> impl Iterator<Item = Point3<i32>> + 'w {
    sphere(center, radius).filter(move |position| is_candidate(world, *position))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::engine_state::voxels::{
        block::block_kind::BlockKind, block::block_type::BlockType, world::World,
    };

    struct Column {
        below: BlockKind,
        cell: BlockKind,
        above: BlockKind,
        two_above: BlockKind,
    }

    impl WorldQuery for Column {
        fn kind_at(&self, position: Point3<i32>) -> BlockKind {
            match (position.x, position.y, position.z) {
                (0, -1, 0) => self.below,
                (0, 0, 0) => self.cell,
                (0, 1, 0) => self.above,
                (0, 2, 0) => self.two_above,
                _ => BlockKind::Other,
            }
        }
    }

    #[test]
    fn radius_one_is_only_the_center() {
        let center = Point3::new(4, 64, -9);
        let points: Vec<_> = sphere(center, 1).collect();
        assert_eq!(points, vec![center]);
    }

    #[test]
    fn sphere_has_no_duplicates_and_stays_inside() {
        let center = Point3::new(0, 0, 0);
        let points: Vec<_> = sphere(center, 5).collect();
        let unique: HashSet<_> = points.iter().copied().collect();

        assert_eq!(points.len(), unique.len());
        assert!(points
            .iter()
            .all(|p| p.x * p.x + p.y * p.y + p.z * p.z < 25));
        assert!(unique.contains(&Point3::new(4, 0, 0)));
        assert!(!unique.contains(&Point3::new(5, 0, 0)));
        assert!(unique.contains(&Point3::new(0, -4, 0)));
    }

    #[test]
    fn every_filter_is_required() {
        use BlockKind::*;

        let passing = Column {
            below: Resistant,
            cell: Air,
            above: Air,
            two_above: Air,
        };
        assert!(is_candidate(&passing, Point3::new(0, 0, 0)));

        let failing = [
            Column { below: Air, ..passing },
            Column { cell: Breakable, ..passing },
            Column { above: Resistant, ..passing },
            Column { two_above: Other, ..passing },
        ];
        for column in &failing {
            assert!(!is_candidate(column, Point3::new(0, 0, 0)));
        }
    }

    #[test]
    fn unknown_floor_still_bounds_a_candidate() {
        let column = Column {
            below: BlockKind::Other,
            cell: BlockKind::Air,
            above: BlockKind::Air,
            two_above: BlockKind::Air,
        };
        assert!(is_candidate(&column, Point3::new(0, 0, 0)));
    }

    #[test]
    fn candidates_finds_the_floor_cell_of_a_shaft() {
        let mut world = World::new();
        for x in -3..=3 {
            for z in -3..=3 {
                world.set_block(Point3::new(x, 63, z), BlockType::Stone);
                for y in 64..=66 {
                    world.set_block(Point3::new(x, y, z), BlockType::Air);
                }
            }
        }

        let found: Vec<_> = candidates(&world, Point3::new(0, 64, 0), 3).collect();
        assert!(!found.is_empty());
        assert!(found.iter().all(|p| p.y == 64));
        assert!(found.contains(&Point3::new(0, 64, 0)));
    }
}
