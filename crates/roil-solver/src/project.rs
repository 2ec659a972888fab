//! Incompressibility projection.
//!
//! Hodge decomposition: any velocity field `w` splits into a
//! divergence-free part plus a gradient field, `w = u + grad(p)`.
//! Computing the divergence of `w`, solving the Poisson equation
//! `Laplacian(p) = div` by relaxation, and subtracting `grad(p)` leaves
//! the mass-conserving part `u`.

use crate::boundary::{apply_boundary, WallRule};
use crate::relax::relax;
use roil_grid::Field;

/// Project the velocity field onto its divergence-free component.
///
/// `pressure` and `divergence` are caller-provided scratch buffers of the
/// same dimensions; their previous contents are discarded. With the small
/// fixed sweep count the Poisson solve is approximate, so a residual
/// divergence remains: each application shrinks it rather than zeroing
/// it.
pub fn project(
    vel_x: &mut Field,
    vel_y: &mut Field,
    pressure: &mut Field,
    divergence: &mut Field,
    sweeps: u32,
    n: u32,
) {
    debug_assert_eq!(vel_x.side(), n as usize + 2);
    let nf = f64::from(n);

    for r in 1..=n {
        for c in 1..=n {
            let div = -0.5
                * (vel_x.at(r + 1, c) - vel_x.at(r - 1, c) + vel_y.at(r, c + 1)
                    - vel_y.at(r, c - 1))
                / nf;
            divergence.set(r, c, div);
            pressure.set(r, c, 0.0);
        }
    }
    apply_boundary(divergence, WallRule::Scalar, n);
    apply_boundary(pressure, WallRule::Scalar, n);

    relax(pressure, divergence, 1.0, 4.0, WallRule::Scalar, sweeps, n);

    for r in 1..=n {
        for c in 1..=n {
            *vel_x.at_mut(r, c) -= 0.5 * nf * (pressure.at(r + 1, c) - pressure.at(r - 1, c));
            *vel_y.at_mut(r, c) -= 0.5 * nf * (pressure.at(r, c + 1) - pressure.at(r, c - 1));
        }
    }
    apply_boundary(vel_x, WallRule::FlipRows, n);
    apply_boundary(vel_y, WallRule::FlipCols, n);
}

/// Largest interior divergence magnitude of a velocity field, using the
/// same central-difference stencil as [`project`]. Diagnostic only.
pub fn max_divergence(vel_x: &Field, vel_y: &Field, n: u32) -> f64 {
    let nf = f64::from(n);
    let mut max = 0.0f64;
    for r in 1..=n {
        for c in 1..=n {
            let div = -0.5
                * (vel_x.at(r + 1, c) - vel_x.at(r - 1, c) + vel_y.at(r, c + 1)
                    - vel_y.at(r, c - 1))
                / nf;
            max = max.max(div.abs());
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: u32 = 12;
    const SIDE: usize = N as usize + 2;

    /// A smooth, strongly divergent field: outflow from the grid centre.
    fn radial_outflow() -> (Field, Field) {
        let mut vel_x = Field::zeroed(SIDE);
        let mut vel_y = Field::zeroed(SIDE);
        let centre = (N as f64 + 1.0) / 2.0;
        for r in 1..=N {
            for c in 1..=N {
                vel_x.set(r, c, (f64::from(r) - centre) * 0.1);
                vel_y.set(r, c, (f64::from(c) - centre) * 0.1);
            }
        }
        apply_boundary(&mut vel_x, WallRule::FlipRows, N);
        apply_boundary(&mut vel_y, WallRule::FlipCols, N);
        (vel_x, vel_y)
    }

    #[test]
    fn projection_reduces_divergence() {
        let (mut vel_x, mut vel_y) = radial_outflow();
        let before = max_divergence(&vel_x, &vel_y, N);
        assert!(before > 0.0, "fixture must start divergent");

        let mut pressure = Field::zeroed(SIDE);
        let mut divergence = Field::zeroed(SIDE);
        project(&mut vel_x, &mut vel_y, &mut pressure, &mut divergence, 4, N);

        let after = max_divergence(&vel_x, &vel_y, N);
        assert!(after.is_finite());
        assert!(
            after < before,
            "projection should shrink divergence: before={before}, after={after}"
        );
    }

    #[test]
    fn divergence_free_field_is_preserved() {
        // Uniform flow along one axis has zero divergence; projection
        // should leave the interior essentially untouched.
        let mut vel_x = Field::zeroed(SIDE);
        let mut vel_y = Field::zeroed(SIDE);
        for r in 1..=N {
            for c in 1..=N {
                vel_x.set(r, c, 1.0);
            }
        }
        apply_boundary(&mut vel_x, WallRule::FlipRows, N);
        apply_boundary(&mut vel_y, WallRule::FlipCols, N);

        let mut pressure = Field::zeroed(SIDE);
        let mut divergence = Field::zeroed(SIDE);
        project(&mut vel_x, &mut vel_y, &mut pressure, &mut divergence, 4, N);

        // Wall-adjacent cells feel the no-slip mirror; check the deep interior.
        for r in 3..=N - 2 {
            for c in 3..=N - 2 {
                assert!(
                    (vel_x.at(r, c) - 1.0).abs() < 0.2,
                    "interior flow disturbed at ({r}, {c}): {}",
                    vel_x.at(r, c)
                );
            }
        }
    }

    #[test]
    fn scratch_contents_are_overwritten() {
        let (mut vel_x, mut vel_y) = radial_outflow();
        let mut pressure = Field::zeroed(SIDE);
        let mut divergence = Field::zeroed(SIDE);
        for r in 0..SIDE as u32 {
            for c in 0..SIDE as u32 {
                pressure.set(r, c, f64::from(r * c));
                divergence.set(r, c, -5.0);
            }
        }
        let (mut vx2, mut vy2) = radial_outflow();
        let mut p2 = Field::zeroed(SIDE);
        let mut d2 = Field::zeroed(SIDE);

        project(&mut vel_x, &mut vel_y, &mut pressure, &mut divergence, 4, N);
        project(&mut vx2, &mut vy2, &mut p2, &mut d2, 4, N);

        // Stale scratch data must not leak into the corrected velocities.
        for r in 1..=N {
            for c in 1..=N {
                assert_eq!(vel_x.at(r, c), vx2.at(r, c));
                assert_eq!(vel_y.at(r, c), vy2.at(r, c));
            }
        }
    }
}
