//! Roil: a 2D incompressible fluid solver for real-time interactive use.
//!
//! Implements the "stable fluids" semi-Lagrangian method: a velocity
//! field and a passively advected density field on a padded square grid,
//! advanced by implicit diffusion, backward-traced advection, and a
//! Hodge-decomposition projection. Every stage is unconditionally stable,
//! so arbitrary time steps cannot blow the simulation up.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Roil sub-crates. For most users, adding `roil` as a single
//! dependency is sufficient. Rendering, input handling, and frame pacing
//! are deliberately out of scope: an external driver injects impulses,
//! calls [`Simulation::step`](solver::Simulation::step) once per tick,
//! and reads the density view for display.
//!
//! # Quick start
//!
//! ```rust
//! use roil::prelude::*;
//!
//! let mut sim = Simulation::new(FluidConfig::new(32)).unwrap();
//!
//! // An external driver maps input events to impulses.
//! sim.inject_density(Cell::new(16, 16), 150.0).unwrap();
//! sim.inject_velocity(Cell::new(16, 16), 4.0, -2.0).unwrap();
//!
//! let report = sim.step().unwrap();
//! assert_eq!(report.tick, 1);
//! assert!(report.total_density > 0.0);
//!
//! // The renderer reads the padded (n+2) x (n+2) density view.
//! let density = sim.grid().density();
//! assert_eq!(density.len(), 34 * 34);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid data model: fields, cells, injection, and views (`roil-grid`).
///
/// Contains [`grid::FluidGrid`], the checked [`grid::Cell`] coordinate,
/// and the [`grid::Field`] storage type.
pub use roil_grid as grid;

/// Solver stages and the step pipeline (`roil-solver`).
///
/// [`solver::Simulation`] is the main entry point; the individual stages
/// ([`solver::diffuse`], [`solver::advect`], [`solver::project`],
/// [`solver::dissipate`]) are exported for reuse and benchmarking.
pub use roil_solver as solver;

/// Common imports for typical Roil usage.
///
/// ```rust
/// use roil::prelude::*;
/// ```
pub mod prelude {
    pub use roil_grid::{Cell, Field, FluidField, FluidGrid, GridError, VelocityInjection};
    pub use roil_solver::{
        ConfigError, FluidConfig, Impulse, Simulation, StepError, StepReport, WallRule,
    };
}
