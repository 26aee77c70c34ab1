//! # Block Module
//!
//! Block-related building blocks: concrete materials, their blast behavior, and the
//! directions inspected around a hole.

use block_kind::BlockKind;
use block_type::BlockType;

pub mod block_kind;
pub mod block_type;
pub mod offset;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Represents a single voxel block in the world.
///
/// # Memory Layout
/// `#[repr(C)]` keeps the layout stable so a chunk's block array can be handed to
/// `bytemuck` as raw bytes.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq, Eq)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// The zeroed block, which is air.
    pub const AIR: Block = Block {
        block_type: BlockType::Air as BlockTypeSize,
    };

    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Decodes the stored type.
    ///
    /// # Returns
    /// `None` if the stored byte does not name a known block type, which can only
    /// happen for blocks built from foreign raw bytes.
    pub fn block_type(&self) -> Option<BlockType> {
        BlockType::from_int(self.block_type)
    }

    /// The blast behavior of this block. Unknown encodings report `BlockKind::Other`.
    pub fn kind(&self) -> BlockKind {
        self.block_type()
            .map(BlockType::kind)
            .unwrap_or(BlockKind::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_block_is_air() {
        let zeroed: Block = bytemuck::Zeroable::zeroed();
        assert_eq!(zeroed, Block::AIR);
        assert_eq!(zeroed.kind(), BlockKind::Air);
    }

    #[test]
    fn unknown_encoding_is_other() {
        let foreign: Block = bytemuck::cast(250u8);
        assert_eq!(foreign.block_type(), None);
        assert_eq!(foreign.kind(), BlockKind::Other);
    }
}
