use tracing::debug;

use crate::error::{BoardError, Result};
use crate::geometry::Winding;
use crate::math::{Point2, Point3};
use crate::tessellation::{FaceRanges, MeshVertex, SolidMesh, Triangulation};

/// Extrudes a triangulated outline downwards into a closed board solid.
///
/// The top cap lies at y = 0 and the bottom cap at y = -thickness. Outline
/// point `(x, z)` becomes top vertex `i` and bottom vertex `i + n`. Triangle
/// `(a, b, c)` faces along `(b - a) × (c - a)`; caps face ±Y and side walls
/// face away from the interior, whichever winding the outline has.
pub struct ExtrudeBoard<'a> {
    triangulation: &'a Triangulation,
    thickness: f64,
}

impl<'a> ExtrudeBoard<'a> {
    /// Creates a new `ExtrudeBoard` operation.
    #[must_use]
    pub fn new(triangulation: &'a Triangulation, thickness: f64) -> Self {
        Self {
            triangulation,
            thickness,
        }
    }

    /// Executes the extrusion.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidThickness`] if the thickness is not a
    /// finite positive number.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<SolidMesh> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(BoardError::InvalidThickness(self.thickness));
        }

        let points = self.triangulation.points();
        let triangles = self.triangulation.triangles();
        let n = points.len();
        let ring = n as u32;

        // Counter-clockwise outline triangles face -Y once lifted into X-Z.
        let ccw = self.triangulation.winding() == Winding::CounterClockwise;

        let mut indices = Vec::with_capacity(6 * triangles.len() + 6 * n);

        for t in triangles {
            let top = if ccw { t.reversed() } else { *t };
            indices.extend_from_slice(&top.indices());
        }
        let top_end = indices.len();

        for i in 0..n as u32 {
            let j = (i + 1) % ring;
            let (bi, bj) = (i + ring, j + ring);
            if ccw {
                indices.extend_from_slice(&[i, j, bj, i, bj, bi]);
            } else {
                indices.extend_from_slice(&[i, bj, j, i, bi, bj]);
            }
        }
        let side_end = indices.len();

        for t in triangles {
            let bottom = t.offset(ring);
            let bottom = if ccw { bottom } else { bottom.reversed() };
            indices.extend_from_slice(&bottom.indices());
        }

        let vertices = build_vertices(points, self.thickness);

        debug!(
            vertices = vertices.len(),
            indices = indices.len(),
            thickness = self.thickness,
            "extruded board"
        );

        Ok(SolidMesh {
            vertices,
            ranges: FaceRanges {
                top: 0..top_end,
                side: top_end..side_end,
                bottom: side_end..indices.len(),
            },
            indices,
        })
    }
}

/// Lays out the top ring then the bottom ring and assigns both UV channels.
fn build_vertices(points: &[Point2], thickness: f64) -> Vec<MeshVertex> {
    let (mut min, mut max) = (points[0], points[0]);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    let shift = Point2::new(min.x.abs(), min.y.abs());

    let make = |p: &Point2, y: f64| MeshVertex {
        position: Point3::new(p.x, y, p.y),
        uv_absolute: Point2::new(p.x + shift.x, p.y + shift.y),
        uv_normalized: Point2::new(
            normalize(p.x, min.x, max.x),
            normalize(p.y, min.y, max.y),
        ),
    };

    points
        .iter()
        .map(|p| make(p, 0.0))
        .chain(points.iter().map(|p| make(p, -thickness)))
        .collect()
}

/// Maps `value` from `[min, max]` onto `[0, 1]`; a zero-width range maps to 0.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let extent = max - min;
    if extent > 0.0 {
        (value - min) / extent
    } else {
        0.0
    }
}
