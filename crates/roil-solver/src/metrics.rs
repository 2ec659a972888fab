//! Per-step diagnostics.

/// Diagnostics for a single completed step.
///
/// Populated by [`Simulation::step`](crate::Simulation::step); consumers
/// (telemetry, frame pacing, debugging overlays) read them from the most
/// recent tick. All durations are in microseconds.
#[derive(Clone, Debug, Default)]
pub struct StepReport {
    /// Tick counter after this step; the first successful step reports 1.
    pub tick: u64,
    /// Wall-clock time for the whole step.
    pub total_us: u64,
    /// Per-stage execution times in pipeline order: `(name, microseconds)`.
    pub stage_us: Vec<(&'static str, u64)>,
    /// Largest interior divergence magnitude after the final projection.
    /// The fixed sweep count leaves a residual; this tracks its size.
    pub divergence_residual: f64,
    /// Sum of the density field over the full padded grid.
    pub total_density: f64,
}
