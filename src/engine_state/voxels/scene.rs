//! # Scene Module
//!
//! Builds small worlds from stacked text layers. Each layer is one Y level, listed
//! bottom to top; inside a layer, rows run along +Z and columns along +X.
//!
//! ```text
//! ###      y = origin.y      (floor)
//! ###
//! ###
//!
//! #o#      y = origin.y + 1  (the hole, with one obsidian wall)
//! #.#
//! ###
//! ```
//!
//! Every character written by a layer becomes a block, air included, so the space a
//! scene describes is fully defined.

use cgmath::{Point3, Vector3};
use phf::phf_map;

use super::{block::block_type::BlockType, world::World};
use crate::error::{HoleError, HoleResult};

/// Characters accepted in scene layers.
static SCENE_PALETTE: phf::Map<char, BlockType> = phf_map! {
    '.' => BlockType::Air,
    'd' => BlockType::Dirt,
    's' => BlockType::Stone,
    'n' => BlockType::Netherrack,
    'o' => BlockType::Obsidian,
    'e' => BlockType::EnderChest,
    'a' => BlockType::Anvil,
    '#' => BlockType::Bedrock,
};

/// A parsed scene: a list of blocks with absolute positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    blocks: Vec<(Point3<i32>, BlockType)>,
}

impl Scene {
    /// Parses stacked layers into a scene whose first character sits at `origin`.
    ///
    /// Leading and trailing whitespace on each row is ignored, as are blank rows, so
    /// layers can be written as indented raw strings.
    ///
    /// # Errors
    /// `HoleError::Scene` for a character outside the palette.
    pub fn parse(origin: Point3<i32>, layers: &[&str]) -> HoleResult<Self> {
        let mut blocks = Vec::new();

        for (y, layer) in layers.iter().enumerate() {
            let rows = layer.lines().map(str::trim).filter(|row| !row.is_empty());
            for (z, row) in rows.enumerate() {
                for (x, symbol) in row.chars().enumerate() {
                    let block_type = SCENE_PALETTE.get(&symbol).copied().ok_or_else(|| {
                        HoleError::scene(format!(
                            "unknown block '{symbol}' in layer {y}, row {z}, column {x}"
                        ))
                    })?;
                    let position = origin + Vector3::new(x as i32, y as i32, z as i32);
                    blocks.push((position, block_type));
                }
            }
        }

        Ok(Scene { blocks })
    }

    /// Writes every block of the scene into `world`.
    pub fn paint(&self, world: &mut World) {
        for (position, block_type) in &self.blocks {
            world.set_block(*position, *block_type);
        }
    }

    /// Builds a fresh world containing only this scene.
    pub fn build(&self) -> World {
        let mut world = World::new();
        self.paint(&mut world);
        world
    }

    /// Number of blocks the scene defines.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the scene defines no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
