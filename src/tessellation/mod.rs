mod triangulate;
pub mod vertex_layout;

pub use triangulate::Triangulate;
pub use vertex_layout::{VertexAttribute, VertexAttributeKind, VERTEX_LAYOUT, VERTEX_STRIDE};

use std::ops::Range;

use crate::geometry::Winding;
use crate::math::polygon_2d::triangle_area;
use crate::math::{Point2, Point3};

/// Three indices into an outline's point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub [u32; 3]);

impl Triangle {
    #[must_use]
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self([a, b, c])
    }

    #[must_use]
    pub fn indices(&self) -> [u32; 3] {
        self.0
    }

    /// The same triangle with opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [a, b, c] = self.0;
        Self([a, c, b])
    }

    /// Shifts every index by `offset`.
    #[must_use]
    pub fn offset(&self, offset: u32) -> Self {
        let [a, b, c] = self.0;
        Self([a + offset, b + offset, c + offset])
    }
}

/// A decomposition of one outline into non-overlapping triangles.
///
/// Triangles reference the outline's points by index and share its winding.
/// Built by [`Triangulate`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    points: Vec<Point2>,
    winding: Winding,
    triangles: Vec<Triangle>,
}

impl Triangulation {
    pub(crate) fn new(points: Vec<Point2>, winding: Winding, triangles: Vec<Triangle>) -> Self {
        Self {
            points,
            winding,
            triangles,
        }
    }

    /// The outline points the triangles index into.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Winding of the source outline, shared by every triangle.
    #[must_use]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Resolves a triangle's indices to coordinates.
    #[must_use]
    pub fn corners(&self, triangle: &Triangle) -> [Point2; 3] {
        triangle.0.map(|i| self.points[i as usize])
    }

    /// Sum of the unsigned triangle areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = self.corners(t);
                triangle_area(&a, &b, &c)
            })
            .sum()
    }
}

/// A vertex of the extruded board: position plus two texture channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: Point3,
    /// `(X, Z)` shifted so the texture stays fixed in world space.
    pub uv_absolute: Point2,
    /// `(X, Z)` mapped onto `[0, 1]` across the board's extent.
    pub uv_normalized: Point2,
}

/// Contiguous index ranges for the three face groups of a [`SolidMesh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceRanges {
    pub top: Range<usize>,
    pub side: Range<usize>,
    pub bottom: Range<usize>,
}

/// A closed, UV-mapped triangle mesh of an extruded outline.
///
/// Vertices `0..n` form the top ring (y = 0) and `n..2n` the bottom ring
/// (y = -thickness); vertex `i` and `i + n` share their X and Z. Indices are a
/// flat triangle list laid out as top, then side walls, then bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidMesh {
    pub(crate) vertices: Vec<MeshVertex>,
    pub(crate) indices: Vec<u32>,
    pub(crate) ranges: FaceRanges,
}

impl SolidMesh {
    #[must_use]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// All indices; every three form one triangle.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[must_use]
    pub fn ranges(&self) -> &FaceRanges {
        &self.ranges
    }

    /// Number of points in one ring (the outline's point count).
    #[must_use]
    pub fn ring_len(&self) -> usize {
        self.vertices.len() / 2
    }

    #[must_use]
    pub fn top_indices(&self) -> &[u32] {
        &self.indices[self.ranges.top.clone()]
    }

    #[must_use]
    pub fn side_indices(&self) -> &[u32] {
        &self.indices[self.ranges.side.clone()]
    }

    #[must_use]
    pub fn bottom_indices(&self) -> &[u32] {
        &self.indices[self.ranges.bottom.clone()]
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
