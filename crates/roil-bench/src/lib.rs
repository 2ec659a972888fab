//! Benchmark profiles for the Roil fluid solver.
//!
//! Provides pre-built [`FluidConfig`] profiles shared by the benches:
//!
//! - [`reference_profile`]: 100x100 interior (10K cells), default rates
//! - [`stress_profile`]: 316x316 interior (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use roil_solver::FluidConfig;

/// Reference benchmark profile: 100x100 interior cells, default rates.
pub fn reference_profile() -> FluidConfig {
    FluidConfig::new(100)
}

/// Stress benchmark profile: 316x316 interior cells (~100K), same rates
/// as [`reference_profile`] at 10x the cell count.
pub fn stress_profile() -> FluidConfig {
    FluidConfig::new(316)
}
