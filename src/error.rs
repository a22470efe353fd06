use thiserror::Error;

/// Top-level error type for the biarc approximation crate.
#[derive(Debug, Error)]
pub enum BiarcError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric constructions.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}

/// Errors related to approximation operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("segment limit of {limit} exceeded before the tolerance was met")]
    SegmentLimitExceeded { limit: usize },
}

/// Convenience type alias for results using [`BiarcError`].
pub type Result<T> = std::result::Result<T, BiarcError>;
