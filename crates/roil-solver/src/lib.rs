//! Stable-fluids solver for the Roil fluid simulator.
//!
//! Implements the four physical stages of the semi-Lagrangian
//! "stable fluids" method over a [`roil_grid::FluidGrid`]:
//!
//! 1. **Diffusion** — implicit spreading solved by Gauss-Seidel
//!    relaxation ([`relax`]), unconditionally stable for any time step.
//! 2. **Advection** — backward tracing along the velocity field with
//!    bilinear interpolation ([`advect`]).
//! 3. **Projection** — incompressibility enforcement via a Hodge
//!    decomposition: divergence, a Poisson solve, and a gradient
//!    subtraction ([`project`]).
//! 4. **Dissipation** — uniform density decay ([`dissipate`]).
//!
//! [`Simulation::step`] composes the stages into one tick (velocity
//! diffusion, projection, self-advection, projection again, then density
//! diffusion, advection, dissipation), applying the shared wall fixup
//! ([`apply_boundary`]) after every sweep. All execution is
//! single-threaded and synchronous; a step runs to completion before the
//! next impulse or read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advect;
pub mod boundary;
pub mod config;
pub mod dissipate;
pub mod error;
pub mod metrics;
pub mod project;
pub mod relax;
pub mod simulation;

pub use advect::advect;
pub use boundary::{apply_boundary, WallRule};
pub use config::{ConfigError, FluidConfig};
pub use dissipate::dissipate;
pub use error::StepError;
pub use metrics::StepReport;
pub use project::{max_divergence, project};
pub use relax::{diffuse, relax};
pub use simulation::{Impulse, Simulation};
