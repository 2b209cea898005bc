use thiserror::Error;

pub type Result<T> = std::result::Result<T, InterpolationError>;

/// Errors raised while building an interpolator or solving for its coefficients.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("At least 2 points are required for interpolation, got {count}")]
    InvalidInput { count: usize },

    #[error("Duplicate x-coordinates found: {duplicates:?}. Each x-coordinate must be unique for interpolation.")]
    DuplicateCoordinate { duplicates: Vec<f64> },

    #[error("Singular matrix detected (determinant = {determinant:e}). The points may be too close together or collinear.")]
    SingularMatrix { determinant: f64 },

    #[error("The matrix is rank deficient (rank {rank}, expected {expected}). Cannot find unique polynomial coefficients.")]
    RankDeficient { rank: usize, expected: usize },

    #[error("Linear algebra error during polynomial coefficient calculation: {0}")]
    Numerical(String),

    #[error("Invalid interpolation request: {0}")]
    InvalidRequest(String),
}

impl From<serde_json::Error> for InterpolationError {
    fn from(err: serde_json::Error) -> Self {
        InterpolationError::InvalidRequest(err.to_string())
    }
}
