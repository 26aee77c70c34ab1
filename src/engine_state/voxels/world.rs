//! # World Module
//!
//! This module provides the `World` struct which manages a collection of chunks in the
//! voxel world and answers block queries for the hole scanner.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks that have been generated
//! or written to are kept in memory. Any coordinate inside a missing chunk reports
//! `BlockKind::Other`: the scanner treats it as solid but never as safe.
//!
//! ## Chunk Generation
//!
//! - Perlin noise for natural-looking terrain
//! - Solid chunks (all blocks one material)
//! - Empty chunks (all blocks air)

use std::collections::HashMap;

use cgmath::Point3;
use log::debug;
use noise::Perlin;

use super::{
    block::{block_kind::BlockKind, block_type::BlockType},
    chunk::{Chunk, CHUNK_DIMENSION},
    world_query::WorldQuery,
};

/// How a newly added chunk is filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChunkGeneration {
    /// Perlin-noise terrain with materials picked from a seeded generator.
    Perlin {
        /// Seed for both the noise field and the material picker.
        seed: u32,
    },
    /// Every block is the given material.
    Solid(BlockType),
    /// Every block is air.
    Empty,
}

/// Represents a voxel world composed of multiple chunks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use hole_esp::engine_state::voxels::{
///     block::{block_kind::BlockKind, block_type::BlockType},
///     world::World,
///     world_query::WorldQuery,
/// };
///
/// let mut world = World::new();
/// world.set_block(Point3::new(0, 64, 0), BlockType::Bedrock);
///
/// assert_eq!(world.kind_at(Point3::new(0, 64, 0)), BlockKind::Resistant);
/// assert_eq!(world.kind_at(Point3::new(1, 64, 0)), BlockKind::Air);
/// // Nothing has been loaded this far away.
/// assert_eq!(world.kind_at(Point3::new(500, 64, 0)), BlockKind::Other);
/// ```
#[derive(Default)]
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    pub chunks: HashMap<Point3<i32>, Chunk>,
}

impl World {
    /// Creates a new, empty world with no chunks loaded.
    pub fn new() -> Self {
        World {
            chunks: HashMap::new(),
        }
    }

    /// Splits a block coordinate into its chunk coordinate and chunk-relative coordinate.
    pub fn locate(position: Point3<i32>) -> (Point3<i32>, Point3<usize>) {
        let chunk = Point3::new(
            position.x.div_euclid(CHUNK_DIMENSION),
            position.y.div_euclid(CHUNK_DIMENSION),
            position.z.div_euclid(CHUNK_DIMENSION),
        );
        let local = Point3::new(
            position.x.rem_euclid(CHUNK_DIMENSION) as usize,
            position.y.rem_euclid(CHUNK_DIMENSION) as usize,
            position.z.rem_euclid(CHUNK_DIMENSION) as usize,
        );
        (chunk, local)
    }

    /// Adds a new chunk at the specified chunk coordinates if one doesn't already exist.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates where the new chunk should be added
    /// * `generation` - How to fill the chunk
    pub fn add_chunk_at(&mut self, position: Point3<i32>, generation: ChunkGeneration) {
        if self.chunks.contains_key(&position) {
            return;
        }

        let chunk = match generation {
            ChunkGeneration::Perlin { seed } => {
                let perlin = Perlin::new(seed);
                let mut rng = fastrand::Rng::with_seed(Self::chunk_seed(seed, position));
                Chunk::perlin(position, &perlin, &mut rng)
            }
            ChunkGeneration::Solid(block_type) => Chunk::filled(position, block_type),
            ChunkGeneration::Empty => Chunk::empty(position),
        };

        debug!(
            "Generated chunk {:?} with {} solid blocks",
            position,
            chunk.solid_count()
        );
        self.chunks.insert(position, chunk);
    }

    /// Mixes a world seed with a chunk position so every chunk draws its own materials.
    fn chunk_seed(seed: u32, position: Point3<i32>) -> u64 {
        let mut mixed = u64::from(seed);
        for component in [position.x, position.y, position.z] {
            mixed = mixed
                .wrapping_mul(0x9E37_79B9_7F4A_7C15)
                .wrapping_add(component as u32 as u64);
        }
        mixed
    }

    /// Retrieves the chunk at the specified chunk coordinates.
    pub fn get_chunk_at(&self, pos: Point3<i32>) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    /// Writes a block, creating an empty chunk around it if needed.
    pub fn set_block(&mut self, position: Point3<i32>, block_type: BlockType) {
        let (chunk_position, local) = Self::locate(position);
        self.chunks
            .entry(chunk_position)
            .or_insert_with(|| Chunk::empty(chunk_position))
            .set_block_at(local, block_type);
    }

    /// Reads a block.
    ///
    /// # Returns
    /// `None` if the containing chunk is not loaded or the stored byte is unknown.
    pub fn block_at(&self, position: Point3<i32>) -> Option<BlockType> {
        let (chunk_position, local) = Self::locate(position);
        self.get_chunk_at(chunk_position).and_then(|chunk| chunk.block_at(local).block_type())
    }
}

impl WorldQuery for World {
    fn kind_at(&self, position: Point3<i32>) -> BlockKind {
        let (chunk_position, local) = Self::locate(position);
        match self.get_chunk_at(chunk_position) {
            Some(chunk) if !chunk.is_block_solid(local) => BlockKind::Air,
            Some(chunk) => chunk.block_at(local).kind(),
            None => BlockKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_handles_negative_coordinates() {
        let (chunk, local) = World::locate(Point3::new(-1, 15, -17));
        assert_eq!(chunk, Point3::new(-1, 0, -2));
        assert_eq!(local, Point3::new(15, 15, 15));
    }

    #[test]
    fn set_then_read_back() {
        let mut world = World::new();
        let position = Point3::new(-5, 70, 33);
        world.set_block(position, BlockType::Anvil);

        assert_eq!(world.block_at(position), Some(BlockType::Anvil));
        assert_eq!(world.kind_at(position), BlockKind::Resistant);
        assert!(world.is_air(Point3::new(-4, 70, 33)));
    }

    #[test]
    fn unloaded_chunks_are_never_air() {
        let world = World::new();
        assert_eq!(world.kind_at(Point3::new(0, 0, 0)), BlockKind::Other);
        assert!(!world.is_air(Point3::new(0, 0, 0)));
        assert_eq!(world.block_at(Point3::new(0, 0, 0)), None);
    }

    #[test]
    fn add_chunk_does_not_overwrite() {
        let mut world = World::new();
        let position = Point3::new(0, 0, 0);
        world.add_chunk_at(position, ChunkGeneration::Solid(BlockType::Stone));
        world.add_chunk_at(position, ChunkGeneration::Empty);

        assert_eq!(world.block_at(Point3::new(4, 4, 4)), Some(BlockType::Stone));
    }

    #[test]
    fn perlin_chunks_depend_only_on_seed_and_position() {
        let mut first = World::new();
        let mut second = World::new();
        let position = Point3::new(2, 0, -1);
        first.add_chunk_at(position, ChunkGeneration::Perlin { seed: 9 });
        second.add_chunk_at(position, ChunkGeneration::Perlin { seed: 9 });

        assert_eq!(
            first.get_chunk_at(position).unwrap().as_bytes(),
            second.get_chunk_at(position).unwrap().as_bytes()
        );
    }
}
