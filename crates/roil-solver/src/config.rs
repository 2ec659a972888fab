//! Simulation configuration and validation.

use std::error::Error;
use std::fmt;

use roil_grid::{FluidGrid, GridError, VelocityInjection};

/// Errors detected during [`FluidConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The grid parameters are invalid.
    Grid(GridError),
    /// `dt` is zero, negative, or non-finite.
    InvalidTimeStep {
        /// The rejected value.
        value: f64,
    },
    /// The relaxation sweep count is zero.
    ZeroRelaxSweeps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidTimeStep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::ZeroRelaxSweeps => write!(f, "relax_sweeps must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Complete configuration for a [`Simulation`](crate::Simulation).
///
/// [`new`](Self::new) fills in rates that behave well for interactive
/// smoke-like flows; override fields directly for anything else.
#[derive(Clone, Debug, PartialEq)]
pub struct FluidConfig {
    /// Interior grid resolution `n`. The padded grid is `(n+2) x (n+2)`.
    pub resolution: u32,
    /// Density decay rate per unit time.
    pub dissipation: f64,
    /// Diffusion constant for the density field.
    pub diffusion: f64,
    /// Kinematic viscosity for the velocity field.
    pub viscosity: f64,
    /// Simulation time step. The method is stable for any positive value.
    pub dt: f64,
    /// Gauss-Seidel sweeps per linear solve. The classic trade-off is 4;
    /// raising it buys accuracy, not stability.
    pub relax_sweeps: u32,
    /// How velocity impulses route their components.
    pub velocity_injection: VelocityInjection,
    /// Scan all fields for non-finite values after each step and fail
    /// the step if one appears.
    pub check_finite: bool,
}

impl FluidConfig {
    /// Configuration with default rates at the given resolution.
    pub fn new(resolution: u32) -> Self {
        Self {
            resolution,
            dissipation: 0.01,
            diffusion: 0.0001,
            viscosity: 0.0001,
            dt: 0.1,
            relax_sweeps: 4,
            velocity_injection: VelocityInjection::default(),
            check_finite: true,
        }
    }

    /// Validate all structural invariants without building a grid.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: grid parameter errors
    /// (zero/oversized resolution, negative or non-finite rates), a
    /// non-positive or non-finite `dt`, or a zero sweep count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(GridError::EmptyGrid.into());
        }
        if self.resolution > FluidGrid::MAX_RESOLUTION {
            return Err(GridError::DimensionTooLarge {
                value: self.resolution,
                max: FluidGrid::MAX_RESOLUTION,
            }
            .into());
        }
        for (name, value) in [
            ("dissipation", self.dissipation),
            ("diffusion", self.diffusion),
            ("viscosity", self.viscosity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::InvalidParameter { name, value }.into());
            }
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimeStep { value: self.dt });
        }
        if self.relax_sweeps == 0 {
            return Err(ConfigError::ZeroRelaxSweeps);
        }
        Ok(())
    }

    /// Build the grid described by this configuration.
    pub(crate) fn build_grid(&self) -> Result<FluidGrid, GridError> {
        Ok(
            FluidGrid::new(self.resolution, self.dissipation, self.diffusion, self.viscosity)?
                .with_velocity_injection(self.velocity_injection),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(FluidConfig::new(46).validate().is_ok());
    }

    #[test]
    fn zero_resolution_rejected() {
        let cfg = FluidConfig::new(0);
        assert_eq!(cfg.validate(), Err(ConfigError::Grid(GridError::EmptyGrid)));
    }

    #[test]
    fn negative_viscosity_rejected() {
        let mut cfg = FluidConfig::new(16);
        cfg.viscosity = -1.0;
        match cfg.validate() {
            Err(ConfigError::Grid(GridError::InvalidParameter { name, .. })) => {
                assert_eq!(name, "viscosity");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_dt_rejected() {
        for dt in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let mut cfg = FluidConfig::new(16);
            cfg.dt = dt;
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidTimeStep { .. })),
                "dt {dt} should be rejected"
            );
        }
    }

    #[test]
    fn zero_sweeps_rejected() {
        let mut cfg = FluidConfig::new(16);
        cfg.relax_sweeps = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroRelaxSweeps));
    }

    #[test]
    fn error_display_names_the_parameter() {
        let mut cfg = FluidConfig::new(16);
        cfg.diffusion = f64::NAN;
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("diffusion"), "message was: {msg}");
    }
}
