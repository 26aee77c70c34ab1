//! # Engine State Module
//!
//! The host-facing side of the hole scanner.
//!
//! ## Key Components
//!
//! * `HoleEsp` - Owns the configuration and the published snapshot; the host calls
//!   `on_update` once per tick and `on_render` once per frame
//! * `SnapshotReader` - A cheap handle render threads use to read the latest snapshot
//! * `holes` - The classification pipeline
//! * `rendering` - Turns a snapshot into draw commands
//! * `voxels` - Block types, chunk storage and the world query seam
//!
//! ## Threading
//!
//! Ticks and frames run on their own schedules. A tick builds a complete snapshot
//! before publishing it, and a frame only ever reads whole published snapshots. The
//! configuration may be replaced from any thread; a tick or frame already in progress
//! keeps the copy it started with.

use std::sync::Arc;

use cgmath::Point3;
use holes::{sampler::MAX_SAMPLE_RADIUS, snapshot::HoleSnapshot};
use log::{debug, trace};
use rendering::{Aabb, DrawTarget, RenderPlan};
use voxels::world_query::WorldQuery;

use crate::{
    config::HoleConfig,
    core::{MtResource, SnapshotCell},
    error::HoleResult,
};

pub mod holes;
pub mod rendering;
pub mod voxels;

/// Scanner state shared between the tick and frame callbacks.
///
/// Cloning yields another handle to the same configuration and snapshot.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use hole_esp::{config::HoleConfig, engine_state::HoleEsp};
/// use hole_esp::engine_state::voxels::world::World;
///
/// let esp = HoleEsp::new(HoleConfig::default()).unwrap();
/// esp.on_update(Some(&World::new()), Some(Point3::new(0.5, 64.0, 0.5)));
/// assert!(esp.latest().is_empty());
/// ```
#[derive(Clone)]
pub struct HoleEsp {
    config: MtResource<HoleConfig>,
    snapshot: SnapshotCell<HoleSnapshot>,
}

impl HoleEsp {
    /// Creates the scanner with an empty snapshot.
    ///
    /// # Errors
    /// `HoleError::InvalidConfig` when `config` fails validation.
    pub fn new(config: HoleConfig) -> HoleResult<Self> {
        config.validate()?;
        Ok(HoleEsp {
            config: MtResource::new(config),
            snapshot: SnapshotCell::new(HoleSnapshot::empty()),
        })
    }

    /// A copy of the current configuration.
    pub fn config(&self) -> HoleConfig {
        self.config.get().clone()
    }

    /// Replaces the configuration. Takes effect from the next tick or frame.
    ///
    /// # Errors
    /// `HoleError::InvalidConfig` when `config` fails validation; the previous
    /// configuration stays in place.
    pub fn set_config(&self, config: HoleConfig) -> HoleResult<()> {
        config.validate()?;
        *self.config.get_mut() = config;
        Ok(())
    }

    /// A read-only handle for render threads.
    pub fn reader(&self) -> SnapshotReader {
        SnapshotReader {
            snapshot: self.snapshot.clone(),
        }
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> Arc<HoleSnapshot> {
        self.snapshot.latest()
    }

    /// Runs one scan and publishes the result.
    ///
    /// Without a world or a reference point an empty snapshot is published, so
    /// nothing from a previous session lingers on screen.
    ///
    /// # Arguments
    /// * `world` - Block source, if one is loaded
    /// * `reference` - Position of the entity the scan is centered on
    pub fn on_update<W: WorldQuery + ?Sized>(
        &self,
        world: Option<&W>,
        reference: Option<Point3<f64>>,
    ) {
        let (world, reference) = match (world, reference) {
            (Some(world), Some(reference)) => (world, reference),
            _ => {
                trace!("No world or reference entity, publishing an empty snapshot");
                self.snapshot.publish(HoleSnapshot::empty());
                return;
            }
        };

        let center = match block_center(reference) {
            Some(center) => center,
            None => {
                debug!(
                    "Reference {:?} is outside the scannable range, publishing an empty snapshot",
                    reference
                );
                self.snapshot.publish(HoleSnapshot::empty());
                return;
            }
        };

        let config = self.config();
        let snapshot = holes::scan(world, center, &config);
        debug!("Published {} holes around {:?}", snapshot.len(), center);
        self.snapshot.publish(snapshot);
    }

    /// Draws the latest snapshot.
    ///
    /// # Arguments
    /// * `viewer` - The viewer's bounding box; without one nothing is drawn
    /// * `target` - Host drawing primitives
    ///
    /// # Returns
    /// The number of draw commands issued.
    pub fn on_render<T: DrawTarget + ?Sized>(
        &self,
        viewer: Option<&Aabb>,
        target: &mut T,
    ) -> usize {
        match viewer {
            Some(viewer) => self.reader().render(&self.config(), Some(viewer), target),
            None => 0,
        }
    }
}

/// Read access to the published snapshots of a `HoleEsp`.
#[derive(Clone)]
pub struct SnapshotReader {
    snapshot: SnapshotCell<HoleSnapshot>,
}

impl SnapshotReader {
    /// The most recently published snapshot.
    pub fn latest(&self) -> Arc<HoleSnapshot> {
        self.snapshot.latest()
    }

    /// Draws the latest snapshot with `config`.
    ///
    /// # Returns
    /// The number of draw commands issued.
    pub fn render<T: DrawTarget + ?Sized>(
        &self,
        config: &HoleConfig,
        viewer: Option<&Aabb>,
        target: &mut T,
    ) -> usize {
        let snapshot = self.latest();
        RenderPlan::new(config, viewer).render(&snapshot, target)
    }
}

/// The block containing `reference`.
///
/// # Returns
/// `None` for non-finite coordinates, or when a scan around the block could step past
/// the `i32` range.
fn block_center(reference: Point3<f64>) -> Option<Point3<i32>> {
    let margin = f64::from(MAX_SAMPLE_RADIUS + 2);
    let lowest = f64::from(i32::MIN) + margin;
    let highest = f64::from(i32::MAX) - margin;
    let component = |value: f64| {
        let floored = value.floor();
        (floored.is_finite() && (lowest..=highest).contains(&floored)).then(|| floored as i32)
    };
    Some(Point3::new(
        component(reference.x)?,
        component(reference.y)?,
        component(reference.z)?,
    ))
}
