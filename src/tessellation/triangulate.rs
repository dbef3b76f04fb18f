use tracing::{debug, warn};

use crate::error::{PolygonError, Result};
use crate::geometry::PolygonOutline;
use crate::math::polygon_2d::{area_tolerance, orient, point_in_triangle};
use crate::math::{Point2, TOLERANCE};

use super::{Triangle, Triangulation};

/// Triangulates a simple outline by ear clipping.
///
/// Works for convex and concave outlines of either winding. Only the outline's
/// own points are used, and every emitted triangle keeps the outline's winding.
pub struct Triangulate<'a> {
    outline: &'a PolygonOutline,
}

impl<'a> Triangulate<'a> {
    /// Creates a new `Triangulate` operation.
    #[must_use]
    pub fn new(outline: &'a PolygonOutline) -> Self {
        Self { outline }
    }

    /// Executes the triangulation.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::NoEarFound`] if clipping stalls, which only
    /// happens for outlines that are not simple within floating-point
    /// precision.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<Triangulation> {
        let points = self.outline.points();
        let winding = self.outline.winding();
        let sign = winding.sign();
        let flat = area_tolerance(points);

        let mut remaining: Vec<usize> = (0..points.len()).collect();
        let mut triangles = Vec::with_capacity(points.len() - 2);

        while remaining.len() > 3 {
            let m = remaining.len();
            let k = match (0..m).find(|&k| is_ear(points, &remaining, k, sign, flat)) {
                Some(k) => k,
                None => {
                    // Straight-angle vertices are never ears; clipping one emits a
                    // zero-area triangle and keeps the cap free of T-junctions.
                    let Some(k) = (0..m).find(|&k| is_straight(points, &remaining, k, flat)) else {
                        return Err(PolygonError::NoEarFound { remaining: m }.into());
                    };
                    warn!(vertex = remaining[k], "clipping straight-angle vertex");
                    k
                }
            };

            let (prev, cur, next) = corner(&remaining, k);
            triangles.push(Triangle::new(prev as u32, cur as u32, next as u32));
            remaining.remove(k);
        }

        triangles.push(Triangle::new(
            remaining[0] as u32,
            remaining[1] as u32,
            remaining[2] as u32,
        ));

        debug!(
            points = points.len(),
            triangles = triangles.len(),
            "triangulated outline"
        );

        Ok(Triangulation::new(points.to_vec(), winding, triangles))
    }
}

/// Outline indices of the corner at position `k` of the working list.
fn corner(remaining: &[usize], k: usize) -> (usize, usize, usize) {
    let m = remaining.len();
    (remaining[(k + m - 1) % m], remaining[k], remaining[(k + 1) % m])
}

/// A corner is an ear when it turns with the outline's winding by more than
/// `flat` and no other remaining vertex lies inside or on the triangle it cuts
/// off.
fn is_ear(points: &[Point2], remaining: &[usize], k: usize, sign: f64, flat: f64) -> bool {
    let (prev, cur, next) = corner(remaining, k);
    let (a, b, c) = (&points[prev], &points[cur], &points[next]);

    if orient(a, b, c) * sign <= flat {
        return false;
    }

    !remaining
        .iter()
        .filter(|&&i| i != prev && i != cur && i != next)
        .any(|&i| point_in_triangle(&points[i], a, b, c, TOLERANCE))
}

fn is_straight(points: &[Point2], remaining: &[usize], k: usize, flat: f64) -> bool {
    let (prev, cur, next) = corner(remaining, k);
    orient(&points[prev], &points[cur], &points[next]).abs() <= flat
}
