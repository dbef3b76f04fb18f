//! A board built from one outline revision: the outline, its triangulation,
//! the extruded render mesh and the picking index, published together.

use tracing::debug;

use crate::error::{BoardError, Result};
use crate::geometry::{PolygonOutline, Ray};
use crate::math::{Point2, Point3};
use crate::operations::query::{CastRay, ContainmentIndex, HitResult, PointLocator, RayCastParams};
use crate::operations::shaping::ExtrudeBoard;
use crate::tessellation::{SolidMesh, Triangulate, Triangulation};

/// Thickness of a board when none is configured.
pub const STANDARD_THICKNESS: f64 = 0.1;

/// Construction parameters for a [`BoardSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardParams {
    /// Distance between the top face (y = 0) and the bottom face.
    pub thickness: f64,
}

impl Default for BoardParams {
    fn default() -> Self {
        Self {
            thickness: STANDARD_THICKNESS,
        }
    }
}

impl BoardParams {
    #[must_use]
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }
}

/// Every derived artifact of one board outline.
///
/// The snapshot is immutable. A shape change builds a new snapshot; sharing it
/// behind an `Arc` and swapping the whole value keeps the render mesh and the
/// picking index from ever coming from different outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    outline: PolygonOutline,
    thickness: f64,
    triangulation: Triangulation,
    mesh: SolidMesh,
    index: ContainmentIndex,
}

impl BoardSnapshot {
    /// Triangulates, extrudes and indexes `outline`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidThickness`] for a non-positive thickness, or
    /// [`BoardError::InvalidPolygon`] if the outline cannot be triangulated.
    pub fn build(outline: PolygonOutline, params: BoardParams) -> Result<Self> {
        let triangulation = Triangulate::new(&outline).execute()?;
        let mesh = ExtrudeBoard::new(&triangulation, params.thickness).execute()?;
        let index = ContainmentIndex::new(&triangulation);

        debug!(
            points = outline.len(),
            triangles = triangulation.triangles().len(),
            thickness = params.thickness,
            "built board snapshot"
        );

        Ok(Self {
            outline,
            thickness: params.thickness,
            triangulation,
            mesh,
            index,
        })
    }

    /// Validates raw outline points and builds the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPolygon`] for a non-simple outline and
    /// [`BoardError::InvalidThickness`] for a non-positive thickness.
    pub fn from_points(points: Vec<Point2>, params: BoardParams) -> Result<Self> {
        Self::build(PolygonOutline::new(points)?, params)
    }

    /// The default board shape at the default thickness.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in outline; the `Result` mirrors [`Self::build`].
    pub fn standard() -> Result<Self> {
        Self::build(PolygonOutline::standard_board(), BoardParams::default())
    }

    #[must_use]
    pub fn outline(&self) -> &PolygonOutline {
        &self.outline
    }

    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    #[must_use]
    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    #[must_use]
    pub fn mesh(&self) -> &SolidMesh {
        &self.mesh
    }

    #[must_use]
    pub fn index(&self) -> &ContainmentIndex {
        &self.index
    }

    /// Returns `true` if `point` lies within the solid, boundary included.
    #[must_use]
    pub fn contains_point(&self, point: &Point3) -> bool {
        (-self.thickness..=0.0).contains(&point.y)
            && self.index.is_inside(&Point2::new(point.x, point.z))
    }

    /// Marches `ray` through this board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidRay`] if the ray or march parameters are
    /// invalid.
    pub fn cast_ray(&self, ray: &Ray, params: RayCastParams) -> Result<HitResult> {
        CastRay::new(*ray, params).execute(&self.index, self.thickness)
    }
}

impl TryFrom<PolygonOutline> for BoardSnapshot {
    type Error = BoardError;

    fn try_from(outline: PolygonOutline) -> Result<Self> {
        Self::build(outline, BoardParams::default())
    }
}
