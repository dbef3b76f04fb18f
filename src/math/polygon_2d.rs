use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Twice the signed area of the triangle `(o, a, b)`.
///
/// Positive when `b` lies to the left of the directed line `o -> a`.
#[must_use]
pub fn orient(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Unsigned area of the triangle `(a, b, c)`.
#[must_use]
pub fn triangle_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    orient(a, b, c).abs() * 0.5
}

/// Threshold below which an area (or a cross product) over `points` counts as
/// zero: [`TOLERANCE`] times the squared extent of their bounding box.
#[must_use]
pub fn area_tolerance(points: &[Point2]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (mut min, mut max) = (*first, *first);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    let extent = (max.x - min.x).max(max.y - min.y);
    TOLERANCE * extent * extent
}

/// Area-weighted centroid of a simple polygon.
///
/// Returns `None` for polygons with (near) zero area.
#[must_use]
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    let area = signed_area(points);
    if area.abs() <= area_tolerance(points) {
        return None;
    }
    let n = points.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        let w = p.x * q.y - q.x * p.y;
        cx += (p.x + q.x) * w;
        cy += (p.y + q.y) * w;
    }
    let scale = 1.0 / (6.0 * area);
    Some(Point2::new(cx * scale, cy * scale))
}

/// Boundary-inclusive point-in-triangle test for either winding.
///
/// A point counts as inside when its signed distance to every edge is no
/// further than `tolerance` on the outer side. Degenerate triangles, whose
/// height over the longest edge is within [`TOLERANCE`], contain nothing.
#[must_use]
pub fn point_in_triangle(p: &Point2, a: &Point2, b: &Point2, c: &Point2, tolerance: f64) -> bool {
    let area2 = orient(a, b, c);
    let longest = (b - a).norm().max((c - b).norm()).max((a - c).norm());
    if area2.abs() <= TOLERANCE * longest {
        return false;
    }
    let sign = area2.signum();
    for (u, v) in [(a, b), (b, c), (c, a)] {
        let len = (v - u).norm();
        if orient(u, v, p) * sign / len < -tolerance {
            return false;
        }
    }
    true
}
