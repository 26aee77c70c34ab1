//! # Hole Detection
//!
//! The classification pipeline run once per tick:
//!
//! 1. `sampler` enumerates candidate floor cells in a sphere around the reference point
//! 2. `safety` records which guarding neighbors of a cell leave it exposed
//! 3. `classifier` decides full holes and pairs two-wide holes
//! 4. `geometry` gives every hole its volume and color tag
//! 5. `snapshot` collects the result into one immutable value
//!
//! Every stage is a pure function of the world and the configuration. Nothing is
//! carried over from the previous tick.

use cgmath::Point3;
use log::debug;
use web_time::Instant;

use crate::{config::HoleConfig, engine_state::voxels::world_query::WorldQuery};

pub mod classifier;
pub mod geometry;
pub mod safety;
pub mod sampler;
pub mod snapshot;

use classifier::HoleClassifier;
use snapshot::HoleSnapshot;

/// Finds every hole within `config.radius` of `center`.
///
/// # Arguments
/// * `world` - Block source, read only
/// * `center` - The block the sampling sphere is centered on
/// * `config` - Radius and show mode are read from here
pub fn scan<W: WorldQuery + ?Sized>(
    world: &W,
    center: Point3<i32>,
    config: &HoleConfig,
) -> HoleSnapshot {
    let started = Instant::now();

    let classifier = HoleClassifier::new(config.show);
    let classification =
        classifier.classify(world, sampler::candidates(world, center, config.radius));
    let snapshot = HoleSnapshot::from_holes(classification.holes);

    let stats = classification.stats;
    debug!(
        "Scanned {} cells around {:?} in {:?}: {} full, {} wide, {} custom, {} rejected",
        stats.sampled,
        center,
        started.elapsed(),
        stats.full,
        stats.wide,
        stats.custom,
        stats.rejected
    );

    snapshot
}
