//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid grid dimensions and shapes, out-of-range slices, sampling on empty grids,
//! region requests that do not fit their source grid, and invalid scene configuration.
//!
//! All of these come from mismatched constants (grid density vs. requested region sizes)
//! and abort the current generation pass. Nothing is clamped silently.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Grid axis, used to report which dimension a region request failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Columns (`amount_x`).
    X,
    /// Rows (`amount_y`).
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid grid dimension: {0}")]
    InvalidDimension(String),

    #[error(
        "slice rows {start_row}..={stop_row}, cols {start_col}..={stop_col} out of range for {amount_x}x{amount_y} grid"
    )]
    IndexOutOfRange {
        start_row: usize,
        stop_row: usize,
        start_col: usize,
        stop_col: usize,
        amount_x: usize,
        amount_y: usize,
    },

    #[error("invalid cell shape: {0}")]
    InvalidShape(String),

    #[error("cannot sample a point from an empty grid")]
    EmptyGrid,

    #[error("region with minimum {min} cells along {axis} does not fit a grid of {amount} cells")]
    RegionTooLarge {
        axis: Axis,
        min: usize,
        amount: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
