//! Error types for PatchLink

use thiserror::Error;

/// Main error type for PatchLink operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid grid dimensions: a {rows} x {cols} grid cannot hold {len} cells")]
    InvalidDimensions { rows: usize, cols: usize, len: usize },

    #[error("index out of bounds: ({row}, {col}) in grid of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Result type alias for PatchLink operations
pub type Result<T> = std::result::Result<T, Error>;
