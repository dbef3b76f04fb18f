mod containment;
mod ray_cast;

pub use containment::{ContainmentIndex, PointLocator};
pub use ray_cast::{CastRay, HitResult, RayCastParams};
