//! The simulation handle: impulse routing and the step pipeline.

use std::time::Instant;

use roil_grid::{Cell, FluidField, FluidGrid, GridError};

use crate::advect::advect;
use crate::boundary::WallRule;
use crate::config::{ConfigError, FluidConfig};
use crate::dissipate::dissipate;
use crate::error::StepError;
use crate::metrics::StepReport;
use crate::project::{max_divergence, project};
use crate::relax::diffuse;

/// A single input event targeting the grid.
///
/// Drivers that translate UI events (a mouse drag, a scripted emitter)
/// can buffer these and feed them through [`Simulation::apply`] between
/// steps instead of calling the injection methods directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Impulse {
    /// Add density at an interior cell.
    Density {
        /// Target interior cell.
        cell: Cell,
        /// Amount added to the cell's density.
        amount: f64,
    },
    /// Add a velocity impulse at an interior cell.
    Velocity {
        /// Target interior cell.
        cell: Cell,
        /// X component of the impulse.
        dx: f64,
        /// Y component of the impulse.
        dy: f64,
    },
}

/// A stable-fluids simulation: one [`FluidGrid`] plus the fixed time step
/// that advances it.
///
/// All mutable state lives in the grid; the handle itself only carries
/// configuration, the tick counter, and the corruption latch. Invocation
/// is strictly sequential: injections, [`step`](Self::step), and field
/// reads must not interleave.
///
/// # Examples
///
/// ```
/// use roil_grid::Cell;
/// use roil_solver::{FluidConfig, Simulation};
///
/// let mut sim = Simulation::new(FluidConfig::new(32)).unwrap();
/// sim.inject_density(Cell::new(16, 16), 120.0).unwrap();
/// sim.inject_velocity(Cell::new(16, 16), 4.0, -2.0).unwrap();
///
/// let report = sim.step().unwrap();
/// assert_eq!(report.tick, 1);
/// assert!(report.total_density > 0.0);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: FluidConfig,
    grid: FluidGrid,
    tick: u64,
    corrupted: bool,
}

impl Simulation {
    /// Validate `config` and build a zero-filled simulation from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any invariant fails; see
    /// [`FluidConfig::validate`].
    pub fn new(config: FluidConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.build_grid()?;
        Ok(Self {
            config,
            grid,
            tick: 0,
            corrupted: false,
        })
    }

    /// The grid this simulation advances.
    pub fn grid(&self) -> &FluidGrid {
        &self.grid
    }

    /// The configuration the simulation was built with.
    pub fn config(&self) -> &FluidConfig {
        &self.config
    }

    /// The fixed time step.
    pub fn dt(&self) -> f64 {
        self.config.dt
    }

    /// Number of successfully completed steps since creation or the last
    /// [`reset`](Self::reset).
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Whether an earlier failed step has latched the grid as corrupted.
    pub fn is_corrupted(&self) -> bool {
        self.corrupted
    }

    /// Add density at an interior cell.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range and boundary coordinates; see
    /// [`FluidGrid::add_density`].
    pub fn inject_density(&mut self, cell: Cell, amount: f64) -> Result<(), GridError> {
        self.grid.add_density(cell, amount)
    }

    /// Add a velocity impulse at an interior cell.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range and boundary coordinates; see
    /// [`FluidGrid::add_velocity`].
    pub fn inject_velocity(&mut self, cell: Cell, dx: f64, dy: f64) -> Result<(), GridError> {
        self.grid.add_velocity(cell, dx, dy)
    }

    /// Route a buffered [`Impulse`] to the matching injection.
    ///
    /// # Errors
    ///
    /// Same coordinate checks as the direct injection methods.
    pub fn apply(&mut self, impulse: Impulse) -> Result<(), GridError> {
        match impulse {
            Impulse::Density { cell, amount } => self.inject_density(cell, amount),
            Impulse::Velocity { cell, dx, dy } => self.inject_velocity(cell, dx, dy),
        }
    }

    /// Advance the fluid state by exactly one time step.
    ///
    /// Velocity first: diffuse both components into the previous-step
    /// buffers, project, self-advect back into the current buffers,
    /// project again. Then density: diffuse into scratch, advect along
    /// the corrected velocity, dissipate. The previous-step buffers
    /// double as projection scratch (pressure and divergence), so between
    /// steps they hold solver residue, not physical state.
    ///
    /// # Errors
    ///
    /// [`StepError::Corrupted`] if an earlier step failed and the grid
    /// has not been reset. [`StepError::NonFiniteDetected`] if the
    /// post-step sentinel scan finds a NaN or infinity (only when
    /// `check_finite` is set); the step is then considered failed and the
    /// corruption latch engages.
    pub fn step(&mut self) -> Result<StepReport, StepError> {
        if self.corrupted {
            return Err(StepError::Corrupted);
        }
        let n = self.grid.resolution();
        let dt = self.config.dt;
        let sweeps = self.config.relax_sweeps;
        let viscosity = self.grid.viscosity();
        let diffusion = self.grid.diffusion();
        let dissipation = self.grid.dissipation();

        let started = Instant::now();
        let mut stage_us: Vec<(&'static str, u64)> = Vec::with_capacity(9);

        {
            let f = self.grid.fields_mut();
            let mut timer = Instant::now();
            let mut lap = |name: &'static str| {
                stage_us.push((name, timer.elapsed().as_micros() as u64));
                timer = Instant::now();
            };

            diffuse(f.velocity_x_prev, &*f.velocity_x, viscosity, dt, WallRule::FlipRows, sweeps, n);
            lap("diffuse_velocity_x");
            diffuse(f.velocity_y_prev, &*f.velocity_y, viscosity, dt, WallRule::FlipCols, sweeps, n);
            lap("diffuse_velocity_y");

            project(f.velocity_x_prev, f.velocity_y_prev, f.velocity_x, f.velocity_y, sweeps, n);
            lap("project_diffused");

            advect(
                f.velocity_x,
                &*f.velocity_x_prev,
                &*f.velocity_x_prev,
                &*f.velocity_y_prev,
                dt,
                WallRule::FlipRows,
                n,
            );
            lap("advect_velocity_x");
            advect(
                f.velocity_y,
                &*f.velocity_y_prev,
                &*f.velocity_x_prev,
                &*f.velocity_y_prev,
                dt,
                WallRule::FlipCols,
                n,
            );
            lap("advect_velocity_y");

            project(f.velocity_x, f.velocity_y, f.velocity_x_prev, f.velocity_y_prev, sweeps, n);
            lap("project_advected");

            diffuse(f.density_prev, &*f.density, diffusion, dt, WallRule::Scalar, sweeps, n);
            lap("diffuse_density");
            advect(
                f.density,
                &*f.density_prev,
                &*f.velocity_x,
                &*f.velocity_y,
                dt,
                WallRule::Scalar,
                n,
            );
            lap("advect_density");

            dissipate(f.density, dissipation, dt);
            lap("dissipate");
        }

        if self.config.check_finite {
            if let Some((field, cell)) = self.first_non_finite() {
                self.corrupted = true;
                return Err(StepError::NonFiniteDetected { field, cell });
            }
        }

        self.tick += 1;
        let divergence_residual = max_divergence(
            self.grid.field(FluidField::VelocityX),
            self.grid.field(FluidField::VelocityY),
            n,
        );
        let total_density = self.grid.density().iter().sum();

        Ok(StepReport {
            tick: self.tick,
            total_us: started.elapsed().as_micros() as u64,
            stage_us,
            divergence_residual,
            total_density,
        })
    }

    /// Zero all fields, clear the corruption latch, and restart the tick
    /// counter. Configuration is preserved.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.tick = 0;
        self.corrupted = false;
    }

    /// First non-finite cell across all fields, in registry order.
    fn first_non_finite(&self) -> Option<(FluidField, usize)> {
        for (kind, field) in self.grid.fields() {
            if let Some(i) = field.as_slice().iter().position(|v| !v.is_finite()) {
                return Some((kind, i));
            }
        }
        None
    }
}
