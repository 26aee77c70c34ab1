//! # Block Type Module
//!
//! This module defines the concrete materials that can occupy a voxel and how each
//! one responds to explosions.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::{block_kind::BlockKind, BlockTypeSize};

/// Enumerates all possible block types in the voxel world.
///
/// The `FromPrimitive` derive allows conversion from the compact `BlockTypeSize`
/// stored inside each chunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, which is non-solid and passable.
    Air = 0,

    /// Common terrain. Any explosion removes it.
    Dirt = 1,

    /// Common terrain with a higher hardness than dirt, still blown apart by explosions.
    Stone = 2,

    /// Soft nether terrain.
    Netherrack = 3,

    /// Minable by players, but immune to explosions.
    Obsidian = 4,

    /// A container with the same blast immunity as obsidian.
    EnderChest = 5,

    /// A heavy utility block immune to explosions.
    Anvil = 6,

    /// Indestructible world boundary.
    Bedrock = 7,
}

impl BlockType {
    /// Every solid block type, in declaration order.
    pub const SOLIDS: [BlockType; 7] = [
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Netherrack,
        BlockType::Obsidian,
        BlockType::EnderChest,
        BlockType::Anvil,
        BlockType::Bedrock,
    ];

    /// Converts a `BlockTypeSize` back into a `BlockType`.
    ///
    /// # Returns
    /// `None` if the value does not name a known block type.
    pub fn from_int(btype: BlockTypeSize) -> Option<Self> {
        FromPrimitive::from_u8(btype)
    }

    /// Picks a random solid block type.
    ///
    /// Used by the terrain generators and the randomized classification tests.
    pub fn random_solid(rng: &mut fastrand::Rng) -> Self {
        Self::SOLIDS[rng.usize(..Self::SOLIDS.len())]
    }

    /// Reports how this material behaves when judging hole safety.
    pub fn kind(self) -> BlockKind {
        match self {
            BlockType::Air => BlockKind::Air,
            BlockType::Obsidian | BlockType::EnderChest | BlockType::Anvil | BlockType::Bedrock => {
                BlockKind::Resistant
            }
            BlockType::Dirt | BlockType::Stone | BlockType::Netherrack => BlockKind::Breakable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_compact_storage() {
        for block_type in BlockType::SOLIDS {
            assert_eq!(
                BlockType::from_int(block_type as BlockTypeSize),
                Some(block_type)
            );
        }
        assert_eq!(BlockType::from_int(200), None);
    }

    #[test]
    fn blast_proof_materials_are_resistant() {
        assert_eq!(BlockType::Bedrock.kind(), BlockKind::Resistant);
        assert_eq!(BlockType::Obsidian.kind(), BlockKind::Resistant);
        assert_eq!(BlockType::EnderChest.kind(), BlockKind::Resistant);
        assert_eq!(BlockType::Anvil.kind(), BlockKind::Resistant);
        assert_eq!(BlockType::Stone.kind(), BlockKind::Breakable);
        assert_eq!(BlockType::Air.kind(), BlockKind::Air);
    }

    #[test]
    fn random_solid_never_returns_air() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..256 {
            assert_ne!(BlockType::random_solid(&mut rng), BlockType::Air);
        }
    }
}
