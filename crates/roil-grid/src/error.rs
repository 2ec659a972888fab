//! Error types for grid construction and field access.

use std::fmt;

/// Errors arising from grid construction or checked field access.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Attempted to construct a grid with zero interior cells.
    EmptyGrid,
    /// The interior resolution exceeds the supported maximum.
    DimensionTooLarge {
        /// The requested resolution.
        value: u32,
        /// The maximum supported resolution.
        max: u32,
    },
    /// A rate parameter is negative or non-finite.
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A coordinate lies outside the padded grid `[0, n+1] x [0, n+1]`.
    IndexOutOfBounds {
        /// The offending row.
        row: u32,
        /// The offending column.
        col: u32,
        /// The padded side length of the grid (`n + 2`).
        side: usize,
    },
    /// An impulse targeted a boundary cell. Boundary cells are derived
    /// from interior neighbours and are never driven directly.
    BoundaryInjection {
        /// The offending row.
        row: u32,
        /// The offending column.
        col: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one interior cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "resolution {value} exceeds maximum {max}")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "{name} must be finite and >= 0, got {value}")
            }
            Self::IndexOutOfBounds { row, col, side } => {
                write!(f, "cell ({row}, {col}) out of bounds: [0, {side}) x [0, {side})")
            }
            Self::BoundaryInjection { row, col } => {
                write!(f, "cell ({row}, {col}) is a boundary cell; impulses must target interior cells")
            }
        }
    }
}

impl std::error::Error for GridError {}
