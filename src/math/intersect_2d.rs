use super::polygon_2d::orient;
use super::{Point2, TOLERANCE};

/// Classifies `p` against the directed line `a -> b`.
///
/// Returns `1` (left), `-1` (right) or `0` when `p` is within [`TOLERANCE`]
/// of the line.
fn side(a: &Point2, b: &Point2, p: &Point2) -> i8 {
    let len = (b - a).norm();
    if len < TOLERANCE {
        return 0;
    }
    let dist = orient(a, b, p) / len;
    if dist > TOLERANCE {
        1
    } else if dist < -TOLERANCE {
        -1
    } else {
        0
    }
}

/// Returns `true` if `p` lies on the closed segment `a -> b`.
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    side(a, b, p) == 0
        && p.x >= a.x.min(b.x) - TOLERANCE
        && p.x <= a.x.max(b.x) + TOLERANCE
        && p.y >= a.y.min(b.y) - TOLERANCE
        && p.y <= a.y.max(b.y) + TOLERANCE
}

/// Closed segment-segment intersection test in 2D.
///
/// Touching endpoints and collinear overlaps both count as intersecting.
#[must_use]
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = side(b0, b1, a0);
    let d2 = side(b0, b1, a1);
    let d3 = side(a0, a1, b0);
    let d4 = side(a0, a1, b1);

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    (d1 == 0 && point_on_segment(a0, b0, b1))
        || (d2 == 0 && point_on_segment(a1, b0, b1))
        || (d3 == 0 && point_on_segment(b0, a0, a1))
        || (d4 == 0 && point_on_segment(b1, a0, a1))
}
