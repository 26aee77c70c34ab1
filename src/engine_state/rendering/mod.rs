//! # Render Adaptor
//!
//! Turns the latest hole snapshot into draw calls once per frame.
//!
//! The drawing primitives belong to the host; this module decides *what* to draw and
//! hands it over as `DrawCommand`s through the `DrawTarget` trait.
//!
//! ## Components
//! - `RenderPlan`: the decision table from (geometry mode, display mode, viewer) to
//!   commands
//! - `DrawTarget`: the host's primitive drawing interface
//! - `MeshTarget`: a `DrawTarget` that tessellates commands into vertex lists ready
//!   for upload

use cgmath::Point3;
use serde::{Deserialize, Serialize};

pub mod mesh_target;
pub mod plan;
pub mod vertex;

pub use mesh_target::MeshTarget;
pub use plan::{HoleShape, RenderPlan};

/// An 8-bit-per-channel color.
///
/// Serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
#[allow(missing_docs)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Normalized channels for vertex data.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

/// An axis-aligned box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Smallest corner.
    pub min: Point3<f64>,
    /// Largest corner.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Creates a box from two opposite corners, in any order.
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Aabb {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// The box moved vertically by `dy`.
    pub fn offset_y(&self, dy: f64) -> Self {
        Aabb {
            min: Point3::new(self.min.x, self.min.y + dy, self.min.z),
            max: Point3::new(self.max.x, self.max.y + dy, self.max.z),
        }
    }

    /// The box with its top moved to `max_y`.
    pub fn with_max_y(&self, max_y: f64) -> Self {
        Aabb {
            min: self.min,
            max: Point3::new(self.max.x, max_y, self.max.z),
        }
    }

    /// Whether the interiors of the two boxes overlap. Touching faces do not count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// All eight corners. Bit 0 of the index selects max X, bit 1 max Y, bit 2 max Z.
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let mut corners = [self.min; 8];
        for (index, corner) in corners.iter_mut().enumerate() {
            if index & 1 != 0 {
                corner.x = self.max.x;
            }
            if index & 2 != 0 {
                corner.y = self.max.y;
            }
            if index & 4 != 0 {
                corner.z = self.max.z;
            }
        }
        corners
    }
}

/// Which faces of a box a command covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadMask {
    /// Every face.
    All,
    /// The bottom face only.
    Down,
}

/// One primitive draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A translucent filled box with a vertical alpha gradient.
    Fill {
        /// Box to fill.
        bounds: Aabb,
        /// Color at the bottom of the box.
        color: Rgba,
        /// Alpha at the top of the box.
        top_alpha: u8,
        /// Faces to fill.
        mask: QuadMask,
    },
    /// A line box with a vertical alpha gradient.
    Outline {
        /// Box to outline.
        bounds: Aabb,
        /// Line width in pixels.
        line_width: f32,
        /// Color at the bottom of the box.
        color: Rgba,
        /// Alpha at the top of the box.
        top_alpha: u8,
        /// Faces whose edges are drawn.
        mask: QuadMask,
    },
}

/// The host's drawing primitives.
///
/// Called from the render thread once per command, in plan order.
pub trait DrawTarget {
    /// Issues one draw call.
    fn draw(&mut self, command: &DrawCommand);
}

/// Records commands instead of drawing them.
impl DrawTarget for Vec<DrawCommand> {
    fn draw(&mut self, command: &DrawCommand) {
        self.push(*command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f64, y: f64, z: f64) -> Aabb {
        Aabb::new(Point3::new(x, y, z), Point3::new(x + 1.0, y + 1.0, z + 1.0))
    }

    #[test]
    fn touching_boxes_do_not_intersect() {
        let a = unit_at(0.0, 64.0, 0.0);
        assert!(!a.intersects(&unit_at(1.0, 64.0, 0.0)));
        assert!(a.intersects(&unit_at(0.5, 64.5, 0.0)));
    }

    #[test]
    fn corner_bits_select_max_components() {
        let corners = unit_at(0.0, 0.0, 0.0).corners();
        assert_eq!(corners[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(corners[3], Point3::new(1.0, 1.0, 0.0));
        assert_eq!(corners[7], Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn colors_serialize_as_arrays() {
        let json = serde_json::to_string(&Rgba::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, "[1,2,3,4]");
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba::new(1, 2, 3, 4));
    }
}
