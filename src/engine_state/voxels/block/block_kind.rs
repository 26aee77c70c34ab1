//! Blast behavior of a block, as seen by the hole pipeline.

/// How a block at some coordinate matters to hole detection.
///
/// This is the only information the hole pipeline ever asks of a world. It is
/// recomputed on every query and never cached across ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Passable and empty.
    Air,
    /// Solid, but an explosion can remove it.
    Breakable,
    /// Solid and immune to explosions.
    Resistant,
    /// Nothing is known about this coordinate, e.g. its chunk is not loaded.
    ///
    /// Never treated as passable.
    Other,
}

impl BlockKind {
    /// Whether this block can be walked through.
    pub fn is_air(self) -> bool {
        self == BlockKind::Air
    }
}
