//! Gauss-Seidel relaxation and the implicit diffusion stage.

use crate::boundary::{apply_boundary, WallRule};
use roil_grid::Field;

/// Gauss-Seidel relaxation over the interior of `x`.
///
/// Performs exactly `sweeps` full sweeps. Each sweep updates every
/// interior cell in row-major order (outer loop over rows, inner over
/// columns) as
///
/// ```text
/// x[r,c] = (x0[r,c] + weight * (x[r-1,c] + x[r+1,c] + x[r,c-1] + x[r,c+1])) / norm
/// ```
///
/// reading already-updated neighbours within the same sweep, then applies
/// the wall fixup. The fixed low sweep count trades accuracy for
/// per-frame cost (Foster & Metaxas); convergence is not checked.
pub fn relax(x: &mut Field, x0: &Field, weight: f64, norm: f64, rule: WallRule, sweeps: u32, n: u32) {
    debug_assert_eq!(x.side(), n as usize + 2);
    debug_assert_eq!(x0.side(), n as usize + 2);
    for _ in 0..sweeps {
        for r in 1..=n {
            for c in 1..=n {
                let stencil = x.at(r - 1, c) + x.at(r + 1, c) + x.at(r, c - 1) + x.at(r, c + 1);
                x.set(r, c, (x0.at(r, c) + weight * stencil) / norm);
            }
        }
        apply_boundary(x, rule, n);
    }
}

/// Implicit diffusion: solve `target = source + rate * n^2 * dt *
/// Laplacian(target)` by relaxation.
///
/// The implicit formulation cannot overshoot or blow up for any
/// non-negative `rate` and positive `dt`, which is what makes large
/// time steps safe.
pub fn diffuse(
    target: &mut Field,
    source: &Field,
    rate: f64,
    dt: f64,
    rule: WallRule,
    sweeps: u32,
    n: u32,
) {
    let diff_rate = dt * rate * f64::from(n) * f64::from(n);
    relax(target, source, diff_rate, 1.0 + 4.0 * diff_rate, rule, sweeps, n);
}
