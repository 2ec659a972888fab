//! Errors surfaced by [`Simulation::step`](crate::Simulation::step).

use std::fmt;

use roil_grid::FluidField;

/// Errors from advancing the simulation.
///
/// A failed step leaves the grid in an unspecified mixed state; there is
/// no partial-failure recovery, and retrying cannot resume mid-pipeline.
/// The simulation latches into a corrupted state that only
/// [`reset`](crate::Simulation::reset) clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    /// A NaN or infinity appeared in a field during the step.
    NonFiniteDetected {
        /// The field containing the first non-finite value, in registry
        /// order.
        field: FluidField,
        /// Flat index of the first offending cell.
        cell: usize,
    },
    /// A previous step failed and the grid has not been reset since.
    Corrupted,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteDetected { field, cell } => {
                write!(f, "non-finite value detected in field {field} at cell {cell}")
            }
            Self::Corrupted => {
                write!(f, "grid is corrupted by an earlier failed step; reset() required")
            }
        }
    }
}

impl std::error::Error for StepError {}
