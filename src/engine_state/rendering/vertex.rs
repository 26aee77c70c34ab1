//! Vertex data for tessellated hole boxes.
//!
//! The layout is plain `#[repr(C)]` data so a GPU layer can upload the slices
//! returned by `as_bytes` without conversion.

use cgmath::Point3;

/// A colored vertex of a hole box.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Color: 4x f32, normalized RGBA (16 bytes)
///
/// Total size: 28 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HoleVertex {
    /// Position in world space
    pub position: [f32; 3],
    /// Normalized RGBA color
    pub color: [f32; 4],
}

impl HoleVertex {
    /// Creates a vertex at `pos` with a normalized color.
    ///
    /// World coordinates are narrowed to `f32`.
    pub fn new(pos: Point3<f64>, color: [f32; 4]) -> Self {
        HoleVertex {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            color,
        }
    }

    /// Views a vertex slice as raw bytes.
    pub fn as_bytes(vertices: &[HoleVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<HoleVertex>(), 28);
        let vertices = [HoleVertex::new(Point3::new(1.0, 2.0, 3.0), [1.0; 4]); 2];
        assert_eq!(HoleVertex::as_bytes(&vertices).len(), 56);
    }
}
