//! # Chunk Module
//!
//! This module provides the `Chunk` struct for storing a 16x16x16 block of voxel data,
//! plus the generators used to fill new chunks.
//!
//! ## Storage
//!
//! Each chunk keeps two parallel views of its contents:
//! - `solid_array`: a bit vector (1 bit per block) answering "is this air?" without
//!   touching block data. Hole sampling asks this question far more often than any other.
//! - `blocks`: a dense vector of `Block` values, indexed the same way, for lookups that
//!   need the actual material.
//!
//! Both are indexed in x-major order: `x + CHUNK_DIMENSION * y + CHUNK_PLANE_SIZE * z`.

use bitvec::prelude::BitVec;
use cgmath::Point3;
use noise::{NoiseFn, Perlin};

use super::block::block_type::BlockType;
use super::block::Block;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of blocks in a single 2D plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of blocks in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_SIZE: i32 = CHUNK_PLANE_SIZE * CHUNK_DIMENSION;

/// Threshold above which Perlin noise is considered solid for terrain generation.
pub const PERLIN_POSITIVE_THRESHOLD: f64 = 0.2;
/// Threshold below which Perlin noise is considered solid for terrain generation.
pub const PERLIN_NEGATIVE_THRESHOLD: f64 = -0.2;
/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;

/// Represents a 16x16x16 collection of voxel blocks in the world.
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: Point3<i32>,

    /// One bit per block: 1 if solid, 0 if air.
    pub solid_array: BitVec,

    /// Every block in the chunk, air included.
    pub blocks: Vec<Block>,
}

impl Chunk {
    /// Creates a new chunk with every block set to `block_type`.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates of the new chunk
    /// * `block_type` - The material to fill the chunk with
    pub fn filled(position: Point3<i32>, block_type: BlockType) -> Self {
        let is_solid = block_type != BlockType::Air;
        Chunk {
            position,
            solid_array: BitVec::repeat(is_solid, CHUNK_SIZE as usize),
            blocks: vec![Block::new(block_type); CHUNK_SIZE as usize],
        }
    }

    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: Point3<i32>) -> Self {
        Self::filled(position, BlockType::Air)
    }

    /// Generates a chunk using Perlin noise for natural-looking terrain.
    ///
    /// Solid blocks get a random material drawn from `rng`, so the same seed and
    /// the same chunk position always produce the same chunk.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates where the chunk will be placed
    /// * `perlin` - The noise source shared by every chunk of the world
    /// * `rng` - Material picker
    pub fn perlin(position: Point3<i32>, perlin: &Perlin, rng: &mut fastrand::Rng) -> Self {
        let mut chunk = Self::empty(position);

        for k in 0..CHUNK_DIMENSION {
            for j in 0..CHUNK_DIMENSION {
                for i in 0..CHUNK_DIMENSION {
                    let bposition = Point3::new(
                        i + CHUNK_DIMENSION * position.x,
                        j + CHUNK_DIMENSION * position.y,
                        k + CHUNK_DIMENSION * position.z,
                    );
                    let perlin_sample =
                        perlin.get(Self::to_perlin_pos(bposition, PERLIN_SCALE_FACTOR));
                    if !(PERLIN_NEGATIVE_THRESHOLD..=PERLIN_POSITIVE_THRESHOLD)
                        .contains(&perlin_sample)
                    {
                        let local = Point3::new(i as usize, j as usize, k as usize);
                        chunk.set_block_at(local, BlockType::random_solid(rng));
                    }
                }
            }
        }

        chunk
    }

    /// Converts world block coordinates to Perlin sample coordinates.
    fn to_perlin_pos(pos: Point3<i32>, scale_factor: f64) -> [f64; 3] {
        [
            (pos.x as f64 * scale_factor),
            (pos.y as f64 * scale_factor),
            (pos.z as f64 * scale_factor),
        ]
    }

    /// Flat index of a chunk-relative coordinate.
    ///
    /// # Panics
    /// Debug builds panic if any component is outside `0..CHUNK_DIMENSION`.
    fn index(local: Point3<usize>) -> usize {
        let dimension = CHUNK_DIMENSION as usize;
        debug_assert!(local.x < dimension && local.y < dimension && local.z < dimension);
        local.x + dimension * local.y + (CHUNK_PLANE_SIZE as usize) * local.z
    }

    /// Gets the block at the specified chunk-relative coordinates.
    pub fn block_at(&self, local: Point3<usize>) -> Block {
        self.blocks[Self::index(local)]
    }

    /// Replaces the block at the specified chunk-relative coordinates.
    pub fn set_block_at(&mut self, local: Point3<usize>, block_type: BlockType) {
        let index = Self::index(local);
        self.blocks[index] = Block::new(block_type);
        self.solid_array.set(index, block_type != BlockType::Air);
    }

    /// Checks if the block at the specified chunk-relative coordinates is solid.
    pub fn is_block_solid(&self, local: Point3<usize>) -> bool {
        self.solid_array[Self::index(local)]
    }

    /// Number of non-air blocks in the chunk.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }

    /// The block array as raw bytes, one byte per block.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }
}
