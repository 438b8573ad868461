use thiserror::Error;

/// Top-level error type for polyhedron volume computation.
#[derive(Debug, Error)]
pub enum PolyvolError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to polyhedron input data.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("face {face} references vertex {index}, but only {len} vertices exist")]
    IndexOutOfRange { face: usize, index: u32, len: usize },

    #[error("{what} buffer length {len} is not a multiple of 3")]
    MalformedBuffer { what: &'static str, len: usize },
}

/// Errors related to operations on a polyhedron.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PolyvolError`].
pub type Result<T> = std::result::Result<T, PolyvolError>;
