//! Construction and access errors for the core types.
//!
//! All of these are fatal for the query that raised them: the engine is
//! deterministic and pure, so nothing here is retried internally.

use thiserror::Error;

use crate::geom::Coord;

/// Errors from [`CostGrid`](crate::CostGrid) construction and access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A supplied cell cost is negative.
    #[error("negative cell cost {value}")]
    NegativeCost { value: i32 },
    /// A parsed character is not a decimal digit.
    #[error("invalid cost digit {found:?} in row {row}")]
    InvalidDigit { found: char, row: usize },
    /// Cell data does not match the declared dimensions.
    #[error("expected {expected} cells for a {width}x{height} grid, got {got}")]
    Dimensions {
        width: i32,
        height: i32,
        expected: usize,
        got: usize,
    },
    /// Parsed rows have unequal lengths.
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// The input describes a grid with no cells.
    #[error("grid is empty")]
    Empty,
    /// A coordinate access fell outside the grid. Reaching a caller with
    /// this indicates a defect in edge generation, not bad user input.
    #[error("{coord} out of bounds for {width}x{height} grid")]
    OutOfBounds {
        coord: Coord,
        width: i32,
        height: i32,
    },
}

/// Errors from [`MovementPolicy`](crate::MovementPolicy) construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Run bounds must satisfy `1 <= min_run <= max_run`.
    #[error("invalid movement policy: min_run {min_run}, max_run {max_run}")]
    InvalidPolicy { min_run: i32, max_run: i32 },
}
