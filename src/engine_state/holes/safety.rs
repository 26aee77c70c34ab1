//! # Safety Classifier
//!
//! Looks at the five guarding neighbors of a floor cell and records the ones that do
//! not fully protect it.
//!
//! ## Tiers
//!
//! | Neighbor        | Safety      | In the map? | Effect                                   |
//! |-----------------|-------------|-------------|------------------------------------------|
//! | Resistant block | `Resistant` | no          | none                                     |
//! | Breakable block | `Breakable` | yes         | discounted, hole drops to the weak tier  |
//! | Air             | `Open`      | yes         | never discounted; an open side           |
//! | Unknown         | `Breakable` | yes         | as breakable                             |

use cgmath::Point3;

use crate::engine_state::voxels::{
    block::{block_kind::BlockKind, offset::Offset},
    world_query::WorldQuery,
};

/// How well one neighbor protects a floor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Safety {
    /// Nothing is there.
    Open,
    /// A block is there but an explosion can remove it.
    Breakable,
    /// A blast-proof block is there.
    Resistant,
}

impl Safety {
    /// Maps a block kind to its protection tier.
    ///
    /// Unknown blocks are solid but unproven, so they rank as breakable.
    pub fn of(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Air => Safety::Open,
            BlockKind::Breakable | BlockKind::Other => Safety::Breakable,
            BlockKind::Resistant => Safety::Resistant,
        }
    }
}

/// The unprotected sides of one floor cell.
///
/// Immutable once built; every narrowing operation returns a new map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafetyMap {
    sides: [Option<Safety>; Offset::COUNT],
}

/// The outcome of discounting the breakable sides of a `SafetyMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discount {
    /// Sides left after discounting. Only open sides remain.
    pub remaining: SafetyMap,
    /// How many sides the map had before discounting.
    pub before: usize,
}

impl Discount {
    /// Whether at least one breakable side was discounted.
    pub fn removed_weak(&self) -> bool {
        self.remaining.len() != self.before
    }
}

impl SafetyMap {
    /// Inspects the neighbors of `position`.
    pub fn classify<W: WorldQuery + ?Sized>(world: &W, position: Point3<i32>) -> Self {
        Self::from_sides(
            Offset::all()
                .into_iter()
                .map(|offset| (offset, Safety::of(world.kind_at(offset.offset(position))))),
        )
    }

    /// Builds a map from explicit sides. Resistant sides are dropped; later entries for
    /// the same offset replace earlier ones.
    pub fn from_sides(sides: impl IntoIterator<Item = (Offset, Safety)>) -> Self {
        let mut map = SafetyMap::default();
        for (offset, safety) in sides {
            map.sides[offset as usize] = match safety {
                Safety::Resistant => None,
                exposed => Some(exposed),
            };
        }
        map
    }

    /// The recorded safety of one side, `None` if it is fully protected.
    pub fn get(&self, offset: Offset) -> Option<Safety> {
        self.sides[offset as usize]
    }

    /// Whether `offset` is an unprotected side.
    pub fn contains(&self, offset: Offset) -> bool {
        self.get(offset).is_some()
    }

    /// Number of unprotected sides.
    pub fn len(&self) -> usize {
        self.sides.iter().filter(|side| side.is_some()).count()
    }

    /// Whether every side is protected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unprotected sides in `Offset` order.
    pub fn iter(&self) -> impl Iterator<Item = (Offset, Safety)> + '_ {
        Offset::all()
            .into_iter()
            .filter_map(|offset| self.get(offset).map(|safety| (offset, safety)))
    }

    /// A copy of this map with `offset` treated as protected.
    pub fn without(&self, offset: Offset) -> Self {
        let mut map = *self;
        map.sides[offset as usize] = None;
        map
    }

    /// Removes every breakable side, keeping count of what was there before.
    pub fn discount_weak(&self) -> Discount {
        let remaining = SafetyMap::from_sides(
            self.iter()
                .filter(|(_, safety)| *safety == Safety::Open),
        );
        Discount {
            remaining,
            before: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resistant_sides_are_not_recorded() {
        let map = SafetyMap::from_sides([
            (Offset::North, Safety::Resistant),
            (Offset::East, Safety::Breakable),
            (Offset::Down, Safety::Open),
        ]);

        assert_eq!(map.len(), 2);
        assert!(!map.contains(Offset::North));
        assert_eq!(map.get(Offset::East), Some(Safety::Breakable));
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(Offset::East, Safety::Breakable), (Offset::Down, Safety::Open)]
        );
    }

    #[test]
    fn discount_keeps_only_open_sides() {
        let map = SafetyMap::from_sides([
            (Offset::West, Safety::Breakable),
            (Offset::South, Safety::Open),
        ]);
        let discount = map.discount_weak();

        assert!(discount.removed_weak());
        assert_eq!(discount.before, 2);
        assert_eq!(discount.remaining.len(), 1);
        assert_eq!(discount.remaining.get(Offset::South), Some(Safety::Open));
        // The source map is untouched.
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn discount_without_breakable_sides_changes_nothing() {
        let map = SafetyMap::from_sides([(Offset::North, Safety::Open)]);
        let discount = map.discount_weak();
        assert!(!discount.removed_weak());
        assert_eq!(discount.remaining, map);
    }

    #[test]
    fn without_clears_a_single_side() {
        let map = SafetyMap::from_sides([
            (Offset::Down, Safety::Breakable),
            (Offset::North, Safety::Open),
        ]);
        let cleared = map.without(Offset::Down);
        assert_eq!(cleared.len(), 1);
        assert!(map.contains(Offset::Down));
    }

    #[test]
    fn unknown_blocks_rank_as_breakable() {
        assert_eq!(Safety::of(BlockKind::Other), Safety::Breakable);
        assert_eq!(Safety::of(BlockKind::Air), Safety::Open);
        assert_eq!(Safety::of(BlockKind::Resistant), Safety::Resistant);
    }
}
