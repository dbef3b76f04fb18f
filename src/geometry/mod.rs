pub mod outline;
pub mod ray;

pub use outline::{PolygonOutline, Winding};
pub use ray::Ray;
