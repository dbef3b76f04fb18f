use crate::math::{Point3, Vector3};

/// A half-line used for picking, typically unprojected from the cursor.
///
/// The direction does not need to be normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    /// Creates a new ray.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// A ray pointing straight down (-Y) from `origin`.
    #[must_use]
    pub fn downward(origin: Point3) -> Self {
        Self::new(origin, -Vector3::y())
    }

    /// `origin + direction * t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
