use thiserror::Error;

/// Top-level error type for board construction and picking queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(#[from] PolygonError),

    #[error("invalid thickness {0}: must be finite and greater than zero")]
    InvalidThickness(f64),

    #[error("invalid ray: {0}")]
    InvalidRay(#[from] RayError),

    #[error("{vertex_count} vertices cannot be addressed by 16-bit indices")]
    IndexOverflow { vertex_count: usize },
}

/// Reasons an outline is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonError {
    #[error("outline needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("point {index} duplicates the point before it")]
    DuplicatePoint { index: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("outline encloses no area")]
    ZeroArea,

    #[error("edge {first} intersects edge {second}")]
    SelfIntersection { first: usize, second: usize },

    #[error("no ear found with {remaining} vertices left")]
    NoEarFound { remaining: usize },
}

/// Reasons a ray cast is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RayError {
    #[error("direction is the zero vector")]
    ZeroDirection,

    #[error("origin or direction has a non-finite component")]
    NonFinite,

    #[error("max length {0} must be finite and greater than zero")]
    InvalidLength(f64),

    #[error("step count must be greater than zero")]
    ZeroSteps,
}

/// Convenience type alias for results using [`BoardError`].
pub type Result<T> = std::result::Result<T, BoardError>;
