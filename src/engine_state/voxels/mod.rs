//! # Voxel World
//!
//! Everything the hole scanner needs to know about blocks.
//!
//! ## Architecture
//!
//! * **Block**: Materials, their blast behavior, and the inspected directions
//! * **Chunk**: Fixed-size 3D arrays of blocks with a solidity bitmask
//! * **World**: Sparse chunk storage implementing `WorldQuery`
//! * **WorldQuery**: The narrow interface the scanner reads through, so a host can
//!   plug in its own world instead of `World`
//! * **Scene**: Text-layer world builder for demos and tests

pub mod block;
pub mod chunk;
pub mod scene;
pub mod world;
pub mod world_query;
