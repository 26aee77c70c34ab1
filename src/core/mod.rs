//! # Core Module
//!
//! Concurrency primitives shared by the update pass and the render side.
//!
//! ## Key Components
//! - `MtResource`: Thread-safe reference-counted resource with read-write locking
//! - `SnapshotCell`: Replace-the-pointer publication of immutable values
//!
//! ## Usage
//! ```rust
//! use hole_esp::core::{MtResource, SnapshotCell};
//!
//! let counter = MtResource::new(0);
//! *counter.get_mut() += 1;
//! assert_eq!(*counter.get(), 1);
//!
//! let cell = SnapshotCell::new(String::from("old"));
//! cell.publish(String::from("new"));
//! assert_eq!(cell.latest().as_str(), "new");
//! ```

pub mod mt_resource;
pub mod snapshot_cell;

pub use mt_resource::MtResource;
pub use snapshot_cell::SnapshotCell;
