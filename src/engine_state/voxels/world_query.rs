//! # World Query
//!
//! The one question the hole pipeline asks of a host world.

use cgmath::Point3;

use super::block::block_kind::BlockKind;

/// Reports the blast behavior of the block at a coordinate.
///
/// Implementations must be safe to call from the update pass while the host keeps
/// running. Coordinates the host knows nothing about (unloaded chunks, out of build
/// range) must report a non-air kind, normally `BlockKind::Other`, so that an unknown
/// region is never mistaken for open space.
pub trait WorldQuery {
    /// The kind of block at `position`.
    fn kind_at(&self, position: Point3<i32>) -> BlockKind;

    /// Shorthand for `kind_at(position).is_air()`.
    fn is_air(&self, position: Point3<i32>) -> bool {
        self.kind_at(position).is_air()
    }
}
