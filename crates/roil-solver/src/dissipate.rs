//! Uniform density decay.

use roil_grid::Field;

/// Divide every cell of `density` by `1 + dt * rate`.
///
/// Unlike the other stages this runs over the full padded array,
/// boundary ring included, so the decayed boundary values stay
/// consistent with what a renderer reading the raw field sees.
pub fn dissipate(density: &mut Field, rate: f64, dt: f64) {
    let factor = 1.0 + dt * rate;
    for v in density.values_mut() {
        *v /= factor;
    }
}
