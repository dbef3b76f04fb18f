use crate::math::polygon_2d::{area_tolerance, orient, point_in_triangle};
use crate::math::{Point2, TOLERANCE};
use crate::tessellation::Triangulation;

/// Answers point-in-polygon queries in the outline's `(x, z)` plane.
///
/// Points on the boundary count as inside.
pub trait PointLocator {
    fn is_inside(&self, point: &Point2) -> bool;
}

/// Point-in-polygon index over a triangulation.
///
/// Queries test triangles one by one after a bounding-box rejection, which is
/// linear in the triangle count. Triangles never overlap, so the answer does
/// not depend on their order.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainmentIndex {
    triangles: Vec<[Point2; 3]>,
    min: Point2,
    max: Point2,
}

impl ContainmentIndex {
    /// Resolves the triangulation into coordinates, dropping zero-area triangles.
    #[must_use]
    pub fn new(triangulation: &Triangulation) -> Self {
        let points = triangulation.points();
        let (mut min, mut max) = (points[0], points[0]);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        let flat = area_tolerance(points);
        let triangles = triangulation
            .triangles()
            .iter()
            .map(|t| triangulation.corners(t))
            .filter(|[a, b, c]| orient(a, b, c).abs() > flat)
            .collect();

        Self { triangles, min, max }
    }

    /// Number of triangles tested per query.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn in_bounds(&self, p: &Point2) -> bool {
        p.x >= self.min.x - TOLERANCE
            && p.x <= self.max.x + TOLERANCE
            && p.y >= self.min.y - TOLERANCE
            && p.y <= self.max.y + TOLERANCE
    }
}

impl PointLocator for ContainmentIndex {
    fn is_inside(&self, point: &Point2) -> bool {
        self.in_bounds(point)
            && self
                .triangles
                .iter()
                .any(|[a, b, c]| point_in_triangle(point, a, b, c, TOLERANCE))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PolygonOutline;
    use crate::tessellation::Triangulate;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn index(points: Vec<Point2>) -> (PolygonOutline, ContainmentIndex) {
        let outline = PolygonOutline::new(points).unwrap();
        let tri = Triangulate::new(&outline).execute().unwrap();
        let index = ContainmentIndex::new(&tri);
        (outline, index)
    }

    fn assert_centroid_in_far_point_out(points: Vec<Point2>) {
        let (outline, index) = index(points);
        assert!(index.is_inside(&outline.centroid()));
        let (min, max) = outline.bounds();
        assert!(!index.is_inside(&p(max.x + 10.0, max.y + 10.0)));
        assert!(!index.is_inside(&p(min.x - 10.0, min.y)));
    }

    #[test]
    fn unit_square() {
        assert_centroid_in_far_point_out(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]);
    }

    #[test]
    fn l_shape() {
        let pts = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
        ];
        assert_centroid_in_far_point_out(pts.clone());

        // Inside the bounding box but in the missing quadrant.
        let (_, index) = index(pts);
        assert!(!index.is_inside(&p(3.0, 3.0)));
        assert!(index.is_inside(&p(1.0, 3.0)));
        assert!(index.is_inside(&p(3.0, 1.0)));
    }

    #[test]
    fn triangle() {
        assert_centroid_in_far_point_out(vec![p(0.0, 0.0), p(3.0, 0.0), p(0.0, 3.0)]);
    }

    #[test]
    fn boundary_counts_as_inside() {
        let (_, index) = index(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]);
        assert!(index.is_inside(&p(0.0, 0.0)));
        assert!(index.is_inside(&p(0.5, 0.0)));
        assert!(index.is_inside(&p(1.0, 0.5)));
        // On the internal diagonal.
        assert!(index.is_inside(&p(0.5, 0.5)));
        assert!(!index.is_inside(&p(1.0 + 1e-6, 0.5)));
    }

    #[test]
    fn reentrant_corner_of_notch() {
        let outline = PolygonOutline::standard_board();
        let tri = Triangulate::new(&outline).execute().unwrap();
        let index = ContainmentIndex::new(&tri);
        assert!(index.is_inside(&p(0.0, 0.0)));
        assert!(index.is_inside(&p(0.0, 1.0)));
        assert!(!index.is_inside(&p(0.0, 3.0)));
        assert!(index.is_inside(&p(-4.9, 4.8)));
    }

    #[test]
    fn tiny_outline_keeps_its_triangles() {
        let (outline, index) =
            index(vec![p(0.0, 0.0), p(1e-6, 0.0), p(1e-6, 1e-6), p(0.0, 1e-6)]);
        assert_eq!(index.triangle_count(), 2);
        assert!(index.is_inside(&outline.centroid()));
        assert!(!index.is_inside(&p(2e-6, 0.5e-6)));
    }

    #[test]
    fn zero_area_triangles_are_dropped() {
        let (_, index) = index(vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
        ]);
        assert!(index.triangle_count() <= 4);
        assert!(index.is_inside(&p(1.0, 0.0)));
        assert!(!index.is_inside(&p(3.0, 0.0)));
    }
}
