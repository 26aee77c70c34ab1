//! # Render Plan
//!
//! The per-frame decision table. Each hole goes through two lookups:
//!
//! 1. `HoleShape::resolve` maps (geometry mode, flatten) to a box and a face mask
//! 2. the display mode picks the outline and fill commands for that shape
//!
//! Alphas form a vertical gradient. Fills start at `fill_alpha` and end at
//! `ufo_alpha * fill_alpha / 255`; outlines start opaque and end at `ufo_alpha`.
//! The ground shape sits under the hole, so its gradient runs the other way.

use super::{Aabb, DrawCommand, DrawTarget, QuadMask};
use crate::{
    config::{GeometryMode, HoleConfig},
    engine_state::holes::{
        geometry::{BlockBox, ClassifiedHole},
        snapshot::HoleSnapshot,
    },
};

/// The drawable shape of one hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleShape {
    /// Box to draw.
    pub bounds: Aabb,
    /// Faces to draw.
    pub mask: QuadMask,
    /// Whether the alpha gradient runs top to bottom.
    pub inverted: bool,
}

impl HoleShape {
    /// Derives the drawn shape from a hole volume.
    ///
    /// # Arguments
    /// * `bounds` - The hole volume
    /// * `geometry` - Configured geometry mode
    /// * `flatten` - Collapse to the bottom face; ignored by `Ground`
    /// * `slab_height` - Height of the `Slab` shape
    pub fn resolve(
        bounds: &BlockBox,
        geometry: GeometryMode,
        flatten: bool,
        slab_height: f64,
    ) -> Self {
        let volume = bounds.to_aabb();
        let (bounds, mask, inverted) = match (geometry, flatten) {
            (GeometryMode::Ground, _) => (volume.offset_y(-1.0), QuadMask::All, true),
            (GeometryMode::Flat, _) | (_, true) => (volume, QuadMask::Down, false),
            (GeometryMode::Air, false) => (volume, QuadMask::All, false),
            (GeometryMode::Slab, false) => (
                volume.with_max_y(volume.min.y + slab_height),
                QuadMask::All,
                false,
            ),
            (GeometryMode::Double, false) => {
                (volume.with_max_y(volume.max.y + 1.0), QuadMask::All, false)
            }
        };
        HoleShape {
            bounds,
            mask,
            inverted,
        }
    }
}

/// Draw decisions for one frame.
///
/// Borrowed from the configuration and the viewer's box; build a new plan per frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderPlan<'a> {
    config: &'a HoleConfig,
    viewer: Option<&'a Aabb>,
}

impl<'a> RenderPlan<'a> {
    /// Creates a plan for the given configuration and viewer box.
    pub fn new(config: &'a HoleConfig, viewer: Option<&'a Aabb>) -> Self {
        RenderPlan { config, viewer }
    }

    fn contains_viewer(&self, bounds: &BlockBox) -> bool {
        self.viewer
            .is_some_and(|viewer| viewer.intersects(&bounds.to_aabb()))
    }

    /// The commands for one hole, outline first.
    pub fn commands_for(&self, hole: &ClassifiedHole) -> Vec<DrawCommand> {
        let config = self.config;
        let own = self.contains_viewer(&hole.bounds);
        if own && config.hide_own {
            return Vec::new();
        }

        let shape = HoleShape::resolve(
            &hole.bounds,
            config.geometry,
            own && config.flat_own,
            config.slab_height,
        );
        let color = config.color_for(hole.color);
        let mut commands = Vec::with_capacity(2);

        if config.display.draws_outline() {
            let (base, top) = gradient(255, config.ufo_alpha, shape.inverted);
            commands.push(DrawCommand::Outline {
                bounds: shape.bounds,
                line_width: config.line_width as f32,
                color: color.with_alpha(base),
                top_alpha: top,
                mask: shape.mask,
            });
        }
        if config.display.draws_fill() {
            let faded = (config.ufo_alpha as u32 * config.fill_alpha as u32 / 255) as u8;
            let (base, top) = gradient(config.fill_alpha, faded, shape.inverted);
            commands.push(DrawCommand::Fill {
                bounds: shape.bounds,
                color: color.with_alpha(base),
                top_alpha: top,
                mask: shape.mask,
            });
        }

        commands
    }

    /// Issues the commands for every hole in `snapshot`, in snapshot order.
    ///
    /// # Returns
    /// The number of commands issued.
    pub fn render<T: DrawTarget + ?Sized>(
        &self,
        snapshot: &HoleSnapshot,
        target: &mut T,
    ) -> usize {
        let mut issued = 0;
        for hole in snapshot.iter() {
            for command in self.commands_for(&hole) {
                target.draw(&command);
                issued += 1;
            }
        }
        issued
    }
}

fn gradient(base: u8, top: u8, inverted: bool) -> (u8, u8) {
    if inverted {
        (top, base)
    } else {
        (base, top)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;

    use super::*;
    use crate::{
        config::DisplayMode,
        engine_state::{holes::geometry::ColorTag, rendering::Rgba},
    };

    fn hole() -> ClassifiedHole {
        ClassifiedHole::full(Point3::new(0, 64, 0), ColorTag::Resistant)
    }

    fn viewer_inside() -> Aabb {
        Aabb::new(Point3::new(0.2, 64.0, 0.2), Point3::new(0.8, 65.8, 0.8))
    }

    #[test]
    fn shapes_per_geometry_mode() {
        let bounds = hole().bounds;

        let air = HoleShape::resolve(&bounds, GeometryMode::Air, false, 0.5);
        assert_eq!(air.bounds, bounds.to_aabb());
        assert_eq!(air.mask, QuadMask::All);

        let ground = HoleShape::resolve(&bounds, GeometryMode::Ground, true, 0.5);
        assert_eq!(ground.bounds.min.y, 63.0);
        assert_eq!(ground.bounds.max.y, 64.0);
        assert_eq!(ground.mask, QuadMask::All);
        assert!(ground.inverted);

        let flat = HoleShape::resolve(&bounds, GeometryMode::Flat, false, 0.5);
        assert_eq!(flat.mask, QuadMask::Down);

        let slab = HoleShape::resolve(&bounds, GeometryMode::Slab, false, 0.25);
        assert_eq!(slab.bounds.max.y, 64.25);

        let double = HoleShape::resolve(&bounds, GeometryMode::Double, false, 0.5);
        assert_eq!(double.bounds.max.y, 66.0);

        let flattened = HoleShape::resolve(&bounds, GeometryMode::Double, true, 0.5);
        assert_eq!(flattened.bounds, bounds.to_aabb());
        assert_eq!(flattened.mask, QuadMask::Down);
    }

    #[test]
    fn both_draws_outline_then_fill_with_gradients() {
        let config = HoleConfig {
            ufo_alpha: 102,
            ..HoleConfig::default()
        };
        let commands = RenderPlan::new(&config, None).commands_for(&hole());

        assert_eq!(commands.len(), 2);
        match commands[0] {
            DrawCommand::Outline {
                color,
                top_alpha,
                line_width,
                ..
            } => {
                assert_eq!(color, Rgba::rgb(0, 255, 0));
                assert_eq!(top_alpha, 102);
                assert_eq!(line_width, 1.0);
            }
            other => panic!("expected an outline, got {:?}", other),
        }
        match commands[1] {
            DrawCommand::Fill {
                color, top_alpha, ..
            } => {
                assert_eq!(color.a, 50);
                assert_eq!(top_alpha, 20);
            }
            other => panic!("expected a fill, got {:?}", other),
        }
    }

    #[test]
    fn ground_swaps_the_gradient() {
        let config = HoleConfig::default()
            .with_geometry(GeometryMode::Ground)
            .with_display(DisplayMode::Fill);
        let config = HoleConfig {
            ufo_alpha: 0,
            ..config
        };
        let commands = RenderPlan::new(&config, None).commands_for(&hole());

        assert_eq!(
            commands,
            vec![DrawCommand::Fill {
                bounds: hole().bounds.to_aabb().offset_y(-1.0),
                color: Rgba::new(0, 255, 0, 0),
                top_alpha: 50,
                mask: QuadMask::All,
            }]
        );
    }

    #[test]
    fn own_hole_is_hidden_or_flattened() {
        let viewer = viewer_inside();

        let hidden = HoleConfig::default().with_own_hole(true, true);
        assert!(RenderPlan::new(&hidden, Some(&viewer))
            .commands_for(&hole())
            .is_empty());

        let flat = HoleConfig::default()
            .with_own_hole(false, true)
            .with_display(DisplayMode::Outline);
        let commands = RenderPlan::new(&flat, Some(&viewer)).commands_for(&hole());
        assert!(matches!(
            commands[..],
            [DrawCommand::Outline {
                mask: QuadMask::Down,
                ..
            }]
        ));

        let elsewhere = Aabb::new(Point3::new(5.0, 64.0, 5.0), Point3::new(5.6, 65.8, 5.6));
        assert_eq!(
            RenderPlan::new(&hidden, Some(&elsewhere))
                .commands_for(&hole())
                .len(),
            2
        );
    }

    #[test]
    fn render_counts_issued_commands() {
        let snapshot = HoleSnapshot::from_holes([
            hole(),
            ClassifiedHole::full(Point3::new(3, 64, 0), ColorTag::Weak),
        ]);
        let config = HoleConfig::default().with_display(DisplayMode::Outline);
        let mut recorded: Vec<DrawCommand> = Vec::new();

        let issued = RenderPlan::new(&config, None).render(&snapshot, &mut recorded);

        assert_eq!(issued, 2);
        assert_eq!(recorded.len(), 2);
    }
}
