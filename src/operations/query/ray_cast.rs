use crate::error::{BoardError, RayError, Result};
use crate::geometry::Ray;
use crate::math::{Point2, Point3};

use super::PointLocator;

/// Point where a ray first samples inside the board, if any.
pub type HitResult = Option<Point3>;

/// Resolution of a fixed-step ray march.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCastParams {
    /// Distance covered by the march along the normalized direction.
    pub max_length: f64,
    /// Number of samples taken over `max_length`.
    pub step_count: u32,
}

impl Default for RayCastParams {
    fn default() -> Self {
        Self {
            max_length: 500.0,
            step_count: 10_000,
        }
    }
}

impl RayCastParams {
    #[must_use]
    pub fn with_max_length(mut self, max_length: f64) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_step_count(mut self, step_count: u32) -> Self {
        self.step_count = step_count;
        self
    }

    /// Distance between consecutive samples.
    #[must_use]
    pub fn step_length(&self) -> f64 {
        self.max_length / f64::from(self.step_count)
    }
}

/// Marches a ray through the board slab `-thickness <= y <= 0` in fixed steps.
///
/// The march advances `step_count` times by `max_length / step_count` along the
/// normalized direction and returns the first sample that is inside the slab
/// and whose `(x, z)` lies inside the outline. It can step over features
/// thinner than one step; the cost per call is bounded by `step_count`.
pub struct CastRay {
    ray: Ray,
    params: RayCastParams,
}

impl CastRay {
    /// Creates a new `CastRay` query.
    #[must_use]
    pub fn new(ray: Ray, params: RayCastParams) -> Self {
        Self { ray, params }
    }

    /// Executes the march against `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidRay`] for a zero or non-finite direction, a
    /// non-finite origin, a non-positive length or a zero step count, and
    /// [`BoardError::InvalidThickness`] for a non-positive thickness.
    #[allow(clippy::float_cmp)]
    pub fn execute<L: PointLocator + ?Sized>(&self, locator: &L, thickness: f64) -> Result<HitResult> {
        let Ray { origin, direction } = self.ray;

        if !origin.coords.iter().chain(direction.iter()).all(|c| c.is_finite()) {
            return Err(RayError::NonFinite.into());
        }
        if direction.iter().all(|&c| c == 0.0) {
            return Err(RayError::ZeroDirection.into());
        }
        if !self.params.max_length.is_finite() || self.params.max_length <= 0.0 {
            return Err(RayError::InvalidLength(self.params.max_length).into());
        }
        if self.params.step_count == 0 {
            return Err(RayError::ZeroSteps.into());
        }
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(BoardError::InvalidThickness(thickness));
        }

        let in_slab = |y: f64| (-thickness..=0.0).contains(&y);

        // Parallel to the slab and outside it: no sample can ever enter.
        if direction.y == 0.0 && !in_slab(origin.y) {
            return Ok(None);
        }

        // Rescaled first so that tiny directions do not underflow in the norm.
        let step = (direction / direction.amax()).normalize() * self.params.step_length();
        let mut position = origin;
        for _ in 0..self.params.step_count {
            position += step;
            if in_slab(position.y) && locator.is_inside(&Point2::new(position.x, position.z)) {
                return Ok(Some(position));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::geometry::PolygonOutline;
    use crate::math::Vector3;
    use crate::operations::query::ContainmentIndex;
    use crate::tessellation::Triangulate;
    use approx::assert_relative_eq;

    const THICKNESS: f64 = 0.1;

    fn square_index() -> (PolygonOutline, ContainmentIndex) {
        let outline = PolygonOutline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap();
        let tri = Triangulate::new(&outline).execute().unwrap();
        let index = ContainmentIndex::new(&tri);
        (outline, index)
    }

    fn fine() -> RayCastParams {
        RayCastParams::default()
            .with_max_length(5.0)
            .with_step_count(5_000)
    }

    /// Counts how often the march consults the locator.
    struct CountingLocator {
        calls: Cell<usize>,
    }

    impl PointLocator for CountingLocator {
        fn is_inside(&self, _point: &Point2) -> bool {
            self.calls.set(self.calls.get() + 1);
            false
        }
    }

    #[test]
    fn straight_down_over_centroid_hits_top() {
        let (outline, index) = square_index();
        let c = outline.centroid();
        let ray = Ray::downward(Point3::new(c.x, 1.0, c.y));
        let hit = CastRay::new(ray, fine()).execute(&index, THICKNESS).unwrap().unwrap();
        assert!((-THICKNESS..=0.0).contains(&hit.y), "hit y = {}", hit.y);
        assert_relative_eq!(hit.x, c.x, epsilon = 1e-9);
        assert_relative_eq!(hit.z, c.y, epsilon = 1e-9);
        // First sample at or below the top face.
        assert!(hit.y > -fine().step_length() - 1e-9);
    }

    #[test]
    fn unnormalized_direction_marches_the_same() {
        let (_, index) = square_index();
        let origin = Point3::new(1.0, 1.0, 1.0);
        let a = CastRay::new(Ray::new(origin, Vector3::new(0.0, -1.0, 0.0)), fine())
            .execute(&index, THICKNESS)
            .unwrap();
        let b = CastRay::new(Ray::new(origin, Vector3::new(0.0, -7.5, 0.0)), fine())
            .execute(&index, THICKNESS)
            .unwrap();
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn tiny_direction_is_not_zero() {
        let (_, index) = square_index();
        let origin = Point3::new(1.0, 1.0, 1.0);
        let unit = CastRay::new(Ray::downward(origin), fine())
            .execute(&index, THICKNESS)
            .unwrap()
            .unwrap();
        for dy in [-1e-12, -1e-300, -f64::MIN_POSITIVE / 4.0] {
            let hit = CastRay::new(Ray::new(origin, Vector3::new(0.0, dy, 0.0)), fine())
                .execute(&index, THICKNESS)
                .unwrap()
                .unwrap();
            assert_relative_eq!(hit.y, unit.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn below_slab_pointing_down_misses() {
        let (_, index) = square_index();
        let ray = Ray::downward(Point3::new(1.0, -1.0, 1.0));
        assert_eq!(CastRay::new(ray, fine()).execute(&index, THICKNESS).unwrap(), None);
    }

    #[test]
    fn outside_outline_misses() {
        let (_, index) = square_index();
        let ray = Ray::downward(Point3::new(5.0, 1.0, 5.0));
        assert_eq!(CastRay::new(ray, fine()).execute(&index, THICKNESS).unwrap(), None);
    }

    #[test]
    fn slanted_ray_hits_inside_outline() {
        let (_, index) = square_index();
        let ray = Ray::new(Point3::new(-1.0, 1.0, 1.0), Vector3::new(1.0, -1.0, 0.0));
        let hit = CastRay::new(ray, fine()).execute(&index, THICKNESS).unwrap().unwrap();
        assert!((-THICKNESS..=0.0).contains(&hit.y));
        assert!(index.is_inside(&Point2::new(hit.x, hit.z)));
        assert_relative_eq!(hit.x, 0.0, epsilon = 0.01);
    }

    #[test]
    fn too_short_ray_misses() {
        let (_, index) = square_index();
        let ray = Ray::downward(Point3::new(1.0, 10.0, 1.0));
        assert_eq!(CastRay::new(ray, fine()).execute(&index, THICKNESS).unwrap(), None);
    }

    #[test]
    fn horizontal_outside_slab_skips_sampling() {
        let locator = CountingLocator { calls: Cell::new(0) };
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let hit = CastRay::new(ray, fine()).execute(&locator, THICKNESS).unwrap();
        assert_eq!(hit, None);
        assert_eq!(locator.calls.get(), 0);
    }

    #[test]
    fn horizontal_inside_slab_marches() {
        let (_, index) = square_index();
        let ray = Ray::new(Point3::new(-1.0, -0.05, 1.0), Vector3::new(1.0, 0.0, 0.0));
        let hit = CastRay::new(ray, fine()).execute(&index, THICKNESS).unwrap().unwrap();
        assert_relative_eq!(hit.y, -0.05);
        assert_relative_eq!(hit.x, 0.0, epsilon = 2.0 * fine().step_length());
    }

    #[test]
    fn samples_step_count_times() {
        let locator = CountingLocator { calls: Cell::new(0) };
        let ray = Ray::new(Point3::new(0.0, -0.05, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let params = RayCastParams::default().with_max_length(1.0).with_step_count(64);
        let hit = CastRay::new(ray, params).execute(&locator, THICKNESS).unwrap();
        assert_eq!(hit, None);
        assert_eq!(locator.calls.get(), 64);
    }

    #[test]
    fn deterministic() {
        let (_, index) = square_index();
        let ray = Ray::new(Point3::new(-0.3, 0.7, 0.4), Vector3::new(0.6, -0.5, 0.3));
        let a = CastRay::new(ray, fine()).execute(&index, THICKNESS).unwrap();
        let b = CastRay::new(ray, fine()).execute(&index, THICKNESS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_inputs_rejected() {
        let (_, index) = square_index();
        let origin = Point3::new(1.0, 1.0, 1.0);
        let cast = |ray: Ray, params: RayCastParams, thickness: f64| {
            CastRay::new(ray, params).execute(&index, thickness).unwrap_err()
        };

        assert_eq!(
            cast(Ray::new(origin, Vector3::zeros()), fine(), THICKNESS),
            BoardError::InvalidRay(RayError::ZeroDirection)
        );
        assert_eq!(
            cast(Ray::new(origin, Vector3::new(f64::NAN, -1.0, 0.0)), fine(), THICKNESS),
            BoardError::InvalidRay(RayError::NonFinite)
        );
        assert_eq!(
            cast(Ray::downward(origin), fine().with_step_count(0), THICKNESS),
            BoardError::InvalidRay(RayError::ZeroSteps)
        );
        assert_eq!(
            cast(Ray::downward(origin), fine().with_max_length(-1.0), THICKNESS),
            BoardError::InvalidRay(RayError::InvalidLength(-1.0))
        );
        assert_eq!(
            cast(Ray::downward(origin), fine(), 0.0),
            BoardError::InvalidThickness(0.0)
        );
    }
}
