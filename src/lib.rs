//! Board geometry: triangulates a simple polygon outline, extrudes it into a
//! UV-mapped solid and answers picking queries (point containment and
//! fixed-step ray marching) against the result.

pub mod board;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use board::{BoardParams, BoardSnapshot};
pub use error::{BoardError, PolygonError, RayError, Result};
