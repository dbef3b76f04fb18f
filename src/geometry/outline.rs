use crate::error::{PolygonError, Result};
use crate::math::intersect_2d::{point_on_segment, segments_intersect};
use crate::math::polygon_2d::{area_tolerance, centroid, signed_area};
use crate::math::{Point2, TOLERANCE};

/// Half-size of the default board outline.
const STANDARD_BOARD_SIZE: f64 = 5.0;

/// Vertex ordering of an outline in its own `(x, y)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// `1.0` for counter-clockwise, `-1.0` for clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

/// The closed boundary of a board in the horizontal plane.
///
/// Each point's `x` is world X and its `y` is world Z. The last point connects
/// back to the first. An outline is only constructible when it is a simple
/// polygon: at least three finite points, no repeated consecutive points, a
/// non-zero area and no edge crossing or touching a non-adjacent edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonOutline {
    points: Vec<Point2>,
    signed_area: f64,
}

impl PolygonOutline {
    /// Validates and wraps an ordered list of boundary points.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError`] (as `BoardError::InvalidPolygon`) if the points
    /// do not describe a simple polygon.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(PolygonError::TooFewPoints { count: n }.into());
        }

        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(PolygonError::NonFinite { index }.into());
        }

        for i in 0..n {
            let prev = &points[(i + n - 1) % n];
            if (points[i] - prev).norm() < TOLERANCE {
                return Err(PolygonError::DuplicatePoint { index: i }.into());
            }
        }

        check_simple(&points)?;

        let signed_area = signed_area(&points);
        if signed_area.abs() <= area_tolerance(&points) {
            return Err(PolygonError::ZeroArea.into());
        }

        Ok(Self {
            points,
            signed_area,
        })
    }

    /// The default board: a square of half-size 5 with a notch cut into one side.
    #[must_use]
    pub fn standard_board() -> Self {
        let s = STANDARD_BOARD_SIZE;
        let points = vec![
            Point2::new(-s, -s),
            Point2::new(-s, s),
            Point2::new(-1.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(s, s),
            Point2::new(s, -s),
        ];
        let signed_area = signed_area(&points);
        Self {
            points,
            signed_area,
        }
    }

    /// The boundary points in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of boundary points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a valid outline has at least three points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed shoelace area, positive for counter-clockwise outlines.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.signed_area
    }

    /// Unsigned enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area.abs()
    }

    #[must_use]
    pub fn winding(&self) -> Winding {
        if self.signed_area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// Area-weighted centroid.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        // A constructed outline has non-zero area, so the fallback is unreachable.
        centroid(&self.points).unwrap_or(self.points[0])
    }

    /// Axis-aligned bounds as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> (Point2, Point2) {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }
}

/// Rejects outlines whose edges cross, touch or fold back onto each other.
fn check_simple(points: &[Point2]) -> Result<()> {
    let n = points.len();

    // Adjacent edges may only share their common vertex.
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let c = &points[(i + 2) % n];
        if point_on_segment(c, a, b) || point_on_segment(a, b, c) {
            return Err(PolygonError::SelfIntersection {
                first: i,
                second: (i + 1) % n,
            }
            .into());
        }
    }

    for i in 0..n {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let b0 = &points[j];
            let b1 = &points[(j + 1) % n];
            if segments_intersect(a0, a1, b0, b1) {
                return Err(PolygonError::SelfIntersection {
                    first: i,
                    second: j,
                }
                .into());
            }
        }
    }

    Ok(())
}
