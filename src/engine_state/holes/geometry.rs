//! # Hole Geometry
//!
//! Bounding volumes and color tags for classified holes.
//!
//! Volumes are kept in whole block coordinates so they can be compared, hashed and
//! ordered exactly. The render side converts them to floating point boxes and derives
//! the display shape from there.

use cgmath::Point3;
use serde::Serialize;

use crate::engine_state::{rendering::Aabb, voxels::block::offset::Offset};

/// An axis-aligned box on the block grid. `min` is inclusive, `max` exclusive.
///
/// The derived ordering compares `min_x`, `min_y`, `min_z`, then the maxima, which
/// gives snapshots a stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub struct BlockBox {
    pub min_x: i32,
    pub min_y: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_y: i32,
    pub max_z: i32,
}

impl BlockBox {
    /// The single block at `position`.
    pub fn unit(position: Point3<i32>) -> Self {
        BlockBox {
            min_x: position.x,
            min_y: position.y,
            min_z: position.z,
            max_x: position.x + 1,
            max_y: position.y + 1,
            max_z: position.z + 1,
        }
    }

    /// The one-block-tall box covering both cells horizontally, at `origin`'s level.
    pub fn spanning(origin: Point3<i32>, other: Point3<i32>) -> Self {
        BlockBox {
            min_x: origin.x.min(other.x),
            min_y: origin.y,
            min_z: origin.z.min(other.z),
            max_x: origin.x.max(other.x) + 1,
            max_y: origin.y + 1,
            max_z: origin.z.max(other.z) + 1,
        }
    }

    /// Extent along X in blocks.
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    /// Extent along Y in blocks.
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Extent along Z in blocks.
    pub fn depth(&self) -> i32 {
        self.max_z - self.min_z
    }

    /// Whether this box covers exactly one block.
    pub fn is_unit(&self) -> bool {
        self.width() == 1 && self.height() == 1 && self.depth() == 1
    }

    /// The same box in floating point world coordinates.
    pub fn to_aabb(&self) -> Aabb {
        Aabb::new(
            Point3::new(self.min_x as f64, self.min_y as f64, self.min_z as f64),
            Point3::new(self.max_x as f64, self.max_y as f64, self.max_z as f64),
        )
    }
}

/// Which configured color a hole is drawn with.
///
/// Variants are declared in ascending priority; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ColorTag {
    /// Every guarding block is blast-proof.
    Resistant,
    /// At least one guarding block can be blown away.
    Weak,
    /// A two-wide hole whose second cell has no dependable floor.
    Custom,
}

impl ColorTag {
    /// The higher-priority of the two tags. Tags only ever move up.
    pub fn upgrade(self, other: ColorTag) -> ColorTag {
        self.max(other)
    }
}

/// The shape category of a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HoleCategory {
    /// One cell with no open side.
    Full,
    /// Two cells open to each other.
    Wide,
    /// Two cells where the second one has a gap in its floor.
    CustomWide,
}

/// One entry of a hole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedHole {
    /// The volume of air making up the hole.
    pub bounds: BlockBox,
    /// The color the hole is drawn with.
    pub color: ColorTag,
}

impl ClassifiedHole {
    /// Pairs a volume with its color.
    pub fn new(bounds: BlockBox, color: ColorTag) -> Self {
        ClassifiedHole { bounds, color }
    }

    /// A one-cell hole at `position`.
    pub fn full(position: Point3<i32>, color: ColorTag) -> Self {
        Self::new(BlockBox::unit(position), color)
    }

    /// A two-cell hole made of `origin` and its neighbor across `open_side`.
    pub fn wide(origin: Point3<i32>, open_side: Offset, color: ColorTag) -> Self {
        Self::new(BlockBox::spanning(origin, open_side.offset(origin)), color)
    }

    /// Recovers the shape category from the volume and color.
    pub fn category(&self) -> HoleCategory {
        if self.bounds.is_unit() {
            HoleCategory::Full
        } else if self.color == ColorTag::Custom {
            HoleCategory::CustomWide
        } else {
            HoleCategory::Wide
        }
    }
}
