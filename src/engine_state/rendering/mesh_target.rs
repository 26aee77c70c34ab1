//! A `DrawTarget` that tessellates draw commands into vertex lists.
//!
//! Fills become triangle lists, outlines become line lists batched by width.
//! Vertices on the bottom of a box carry the command's base alpha and vertices on
//! the top carry its gradient alpha.

use super::{vertex::HoleVertex, Aabb, DrawCommand, DrawTarget, QuadMask, Rgba};

/// Corner indices of each face, in the bit order of `Aabb::corners`.
const DOWN_FACE: [usize; 4] = [0, 1, 5, 4];
const FACES: [[usize; 4]; 6] = [
    DOWN_FACE,
    [2, 6, 7, 3],
    [0, 2, 3, 1],
    [4, 5, 7, 6],
    [0, 4, 6, 2],
    [1, 3, 7, 5],
];

const DOWN_EDGES: [[usize; 2]; 4] = [[0, 1], [1, 5], [5, 4], [4, 0]];
const UPPER_EDGES: [[usize; 2]; 8] = [
    [2, 3],
    [3, 7],
    [7, 6],
    [6, 2],
    [0, 2],
    [1, 3],
    [5, 7],
    [4, 6],
];

/// Line vertices drawn with one width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineBatch {
    /// Line width shared by the batch.
    pub width: f32,
    /// Pairs of vertices, one pair per segment.
    pub vertices: Vec<HoleVertex>,
}

/// Accumulates the geometry of one frame.
#[derive(Debug, Clone, Default)]
pub struct MeshTarget {
    triangles: Vec<HoleVertex>,
    lines: Vec<LineBatch>,
}

impl MeshTarget {
    /// Creates an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangle list of every fill, three vertices per triangle.
    pub fn triangles(&self) -> &[HoleVertex] {
        &self.triangles
    }

    /// Line lists of every outline, one batch per width.
    pub fn line_batches(&self) -> &[LineBatch] {
        &self.lines
    }

    /// Total number of line vertices across all batches.
    pub fn line_vertex_count(&self) -> usize {
        self.lines.iter().map(|batch| batch.vertices.len()).sum()
    }

    /// Whether nothing has been drawn since the last clear.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.lines.is_empty()
    }

    /// Drops all geometry, keeping allocations for the next frame.
    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    fn batch_for(&mut self, width: f32) -> &mut Vec<HoleVertex> {
        let index = match self.lines.iter().position(|batch| batch.width == width) {
            Some(index) => index,
            None => {
                self.lines.push(LineBatch {
                    width,
                    vertices: Vec::new(),
                });
                self.lines.len() - 1
            }
        };
        &mut self.lines[index].vertices
    }
}

fn box_vertices(bounds: &Aabb, color: Rgba, top_alpha: u8) -> [HoleVertex; 8] {
    let bottom = color.to_f32_array();
    let top = color.with_alpha(top_alpha).to_f32_array();
    let corners = bounds.corners();
    std::array::from_fn(|index| {
        let color = if index & 2 != 0 { top } else { bottom };
        HoleVertex::new(corners[index], color)
    })
}

impl DrawTarget for MeshTarget {
    fn draw(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Fill {
                bounds,
                color,
                top_alpha,
                mask,
            } => {
                let vertices = box_vertices(&bounds, color, top_alpha);
                let faces: &[[usize; 4]] = match mask {
                    QuadMask::All => &FACES,
                    QuadMask::Down => &FACES[..1],
                };
                for [a, b, c, d] in faces.iter().copied() {
                    self.triangles.extend(
                        [a, b, c, a, c, d].into_iter().map(|corner| vertices[corner]),
                    );
                }
            }
            DrawCommand::Outline {
                bounds,
                line_width,
                color,
                top_alpha,
                mask,
            } => {
                let vertices = box_vertices(&bounds, color, top_alpha);
                let upper: &[[usize; 2]] = match mask {
                    QuadMask::All => &UPPER_EDGES,
                    QuadMask::Down => &[],
                };
                let batch = self.batch_for(line_width);
                for [a, b] in DOWN_EDGES.iter().chain(upper).copied() {
                    batch.push(vertices[a]);
                    batch.push(vertices[b]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;

    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Point3::new(0.0, 64.0, 0.0), Point3::new(1.0, 65.0, 1.0))
    }

    fn fill(mask: QuadMask) -> DrawCommand {
        DrawCommand::Fill {
            bounds: unit_box(),
            color: Rgba::new(255, 0, 0, 50),
            top_alpha: 0,
            mask,
        }
    }

    fn outline(line_width: f32, mask: QuadMask) -> DrawCommand {
        DrawCommand::Outline {
            bounds: unit_box(),
            line_width,
            color: Rgba::rgb(0, 255, 0),
            top_alpha: 255,
            mask,
        }
    }

    #[test]
    fn fills_tessellate_to_triangles() {
        let mut target = MeshTarget::new();
        target.draw(&fill(QuadMask::All));
        assert_eq!(target.triangles().len(), 36);

        target.clear();
        target.draw(&fill(QuadMask::Down));
        assert_eq!(target.triangles().len(), 6);
        assert!(target.triangles().iter().all(|v| v.position[1] == 64.0));
    }

    #[test]
    fn gradient_follows_height() {
        let mut target = MeshTarget::new();
        target.draw(&fill(QuadMask::All));
        for vertex in target.triangles() {
            let expected = if vertex.position[1] == 65.0 {
                0.0
            } else {
                50.0 / 255.0
            };
            assert_eq!(vertex.color[3], expected);
        }
    }

    #[test]
    fn outlines_are_batched_by_width() {
        let mut target = MeshTarget::new();
        target.draw(&outline(1.0, QuadMask::All));
        target.draw(&outline(1.0, QuadMask::Down));
        target.draw(&outline(3.0, QuadMask::All));

        let batches = target.line_batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].vertices.len(), 24 + 8);
        assert_eq!(batches[1].width, 3.0);
        assert_eq!(target.line_vertex_count(), 56);
        assert!(target.triangles().is_empty());
    }
}
