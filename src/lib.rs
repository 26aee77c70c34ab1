#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Hole ESP
//!
//! Finds and draws the spots in a block world where a player is protected from
//! explosions: one-block pits walled in on every side, and two-block variants open
//! only towards each other.
//!
//! ## Key Modules
//!
//! * `config` - Scan radius, hole shapes, colors and draw styles
//! * `core` - Concurrency primitives shared by the tick and frame callbacks
//! * `engine_state` - The classification pipeline, the render adaptor and the voxel
//!   world the scans read from
//! * `error` - Errors raised outside of the classification pass
//!
//! ## Architecture
//!
//! The host drives two independent schedules:
//! * Once per tick, `HoleEsp::on_update` samples the area around the player,
//!   classifies every candidate cell and publishes an immutable snapshot
//! * Once per frame, `HoleEsp::on_render` turns the latest snapshot into draw commands
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use hole_esp::{
//!     engine_state::{rendering::DrawCommand, voxels::scene::Scene},
//!     HoleConfig, HoleEsp,
//! };
//!
//! let world = Scene::parse(
//!     Point3::new(-1, 63, -1),
//!     &["ooo\nooo\nooo", "ooo\no.o\nooo", "...\n...\n...", "...\n...\n..."],
//! )
//! .unwrap()
//! .build();
//!
//! let esp = HoleEsp::new(HoleConfig::default()).unwrap();
//! esp.on_update(Some(&world), Some(Point3::new(0.5, 64.0, 0.5)));
//! assert_eq!(esp.latest().len(), 1);
//!
//! let viewer = hole_esp::engine_state::rendering::Aabb::new(
//!     Point3::new(4.0, 64.0, 4.0),
//!     Point3::new(4.6, 65.8, 4.6),
//! );
//! let mut commands: Vec<DrawCommand> = Vec::new();
//! esp.on_render(Some(&viewer), &mut commands);
//! assert_eq!(commands.len(), 2);
//! ```

use std::{thread, time::Duration};

use cgmath::Point3;
use log::{error, info};

pub mod config;
pub mod core;
pub mod engine_state;
pub mod error;

pub use config::HoleConfig;
pub use engine_state::{HoleEsp, SnapshotReader};
pub use error::{HoleError, HoleResult};

use crate::{
    config::{GeometryMode, HoleShowMode},
    core::MtResource,
    engine_state::{
        rendering::{vertex::HoleVertex, Aabb, MeshTarget},
        voxels::{
            scene::Scene,
            world::{ChunkGeneration, World},
        },
    },
};

/// Environment variable holding an optional JSON configuration for `run`.
pub const CONFIG_ENV: &str = "HOLE_ESP_CONFIG";

const DEMO_SEED: u32 = 42;
const DEMO_TICKS: u32 = 20;
const TICK_INTERVAL: Duration = Duration::from_millis(50);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Hand-built holes placed around the demo player, bottom layer first.
const DEMO_SCENE: [&str; 4] = [
    "#######
     #######
     #######",
    "#o#o.o#
     #.#o.o#
     ###ooo#",
    ".......
     .......
     .......",
    ".......
     .......
     .......",
];

/// Runs a standalone demo: a generated world, a tick thread scanning it and a frame
/// loop tessellating the results.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();
    info!("Logger initialized");

    if let Err(err) = run_demo() {
        error!("Demo aborted: {err}");
    }
}

fn demo_config() -> HoleResult<HoleConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(json) => HoleConfig::from_json_str(&json),
        Err(_) => Ok(HoleConfig::default()
            .with_radius(8)
            .with_show(HoleShowMode::Custom)
            .with_geometry(GeometryMode::Slab)
            .with_own_hole(false, true)),
    }
}

fn demo_world() -> HoleResult<World> {
    let mut world = World::new();
    for x in -1..=0 {
        for y in 3..=4 {
            for z in -1..=0 {
                world.add_chunk_at(
                    Point3::new(x, y, z),
                    ChunkGeneration::Perlin { seed: DEMO_SEED },
                );
            }
        }
    }
    Scene::parse(Point3::new(-1, 63, -1), &DEMO_SCENE)?.paint(&mut world);
    Ok(world)
}

fn run_demo() -> HoleResult<()> {
    let esp = HoleEsp::new(demo_config()?)?;
    let world = MtResource::new(demo_world()?);
    let player = Point3::new(0.5, 64.0, 0.5);

    let updater = {
        let esp = esp.clone();
        let world = world.clone();
        thread::spawn(move || {
            for _ in 0..DEMO_TICKS {
                esp.on_update(Some(&*world.get()), Some(player));
                thread::sleep(TICK_INTERVAL);
            }
        })
    };

    let viewer = Aabb::new(
        Point3::new(player.x - 0.3, player.y, player.z - 0.3),
        Point3::new(player.x + 0.3, player.y + 1.8, player.z + 0.3),
    );
    let mut target = MeshTarget::new();
    while !updater.is_finished() {
        target.clear();
        let issued = esp.on_render(Some(&viewer), &mut target);
        info!(
            "Frame: {} commands, {} triangle vertices ({} bytes), {} line vertices",
            issued,
            target.triangles().len(),
            HoleVertex::as_bytes(target.triangles()).len(),
            target.line_vertex_count()
        );
        thread::sleep(FRAME_INTERVAL);
    }

    if updater.join().is_err() {
        error!("Update thread panicked");
    }

    let snapshot = esp.latest();
    info!("Final snapshot: {}", snapshot.to_json()?);
    Ok(())
}
