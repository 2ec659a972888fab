//! Semi-Lagrangian advection.

use crate::boundary::{apply_boundary, WallRule};
use roil_grid::Field;

/// Transport `source` along the velocity field into `target`.
///
/// For each interior cell the trajectory is traced backward by
/// `dt * n` times the local velocity, the landing point is clamped to
/// `[0.5, n + 0.5]` so the interpolation window stays inside the padded
/// grid, and `source` is sampled there bilinearly. Backward tracing plus
/// interpolation can only blend existing source values, never amplify
/// them, so the stage is stable for any time step.
///
/// `source` may alias the carrier fields (velocity self-advection passes
/// the same buffer as both `source` and `vel_x`).
pub fn advect(
    target: &mut Field,
    source: &Field,
    vel_x: &Field,
    vel_y: &Field,
    dt: f64,
    rule: WallRule,
    n: u32,
) {
    debug_assert_eq!(target.side(), n as usize + 2);
    let nf = f64::from(n);
    for r in 1..=n {
        for c in 1..=n {
            let x = (f64::from(r) - dt * nf * vel_x.at(r, c)).clamp(0.5, nf + 0.5);
            let y = (f64::from(c) - dt * nf * vel_y.at(r, c)).clamp(0.5, nf + 0.5);

            let r0 = x.floor();
            let c0 = y.floor();
            let s1 = x - r0;
            let s0 = 1.0 - s1;
            let t1 = y - c0;
            let t0 = 1.0 - t1;

            let (r0, r1) = (r0 as u32, r0 as u32 + 1);
            let (c0, c1) = (c0 as u32, c0 as u32 + 1);
            target.set(
                r,
                c,
                s0 * (t0 * source.at(r0, c0) + t1 * source.at(r0, c1))
                    + s1 * (t0 * source.at(r1, c0) + t1 * source.at(r1, c1)),
            );
        }
    }
    apply_boundary(target, rule, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const N: u32 = 6;
    const SIDE: usize = N as usize + 2;

    fn interior_field(values: &[f64]) -> Field {
        let mut f = Field::zeroed(SIDE);
        let mut it = values.iter().copied().cycle();
        for r in 1..=N {
            for c in 1..=N {
                f.set(r, c, it.next().unwrap());
            }
        }
        f
    }

    fn constant_field(v: f64) -> Field {
        let mut f = Field::zeroed(SIDE);
        for r in 0..SIDE as u32 {
            for c in 0..SIDE as u32 {
                f.set(r, c, v);
            }
        }
        f
    }

    #[test]
    fn zero_velocity_is_identity_on_interior() {
        let source = interior_field(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0]);
        let still = constant_field(0.0);
        let mut target = Field::zeroed(SIDE);
        advect(&mut target, &source, &still, &still, 0.1, WallRule::Scalar, N);
        for r in 1..=N {
            for c in 1..=N {
                assert_eq!(target.at(r, c), source.at(r, c));
            }
        }
    }

    #[test]
    fn unit_displacement_shifts_by_one_cell() {
        // dt * n * v = 0.1 * 6 * (5/3) = 1.0, an exact one-cell backtrace.
        let source = interior_field(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let carrier = constant_field(5.0 / 3.0);
        let mut target = Field::zeroed(SIDE);
        advect(&mut target, &source, &carrier, &carrier, 0.1, WallRule::Scalar, N);
        for r in 2..=N {
            for c in 2..=N {
                assert!(
                    (target.at(r, c) - source.at(r - 1, c - 1)).abs() < 1e-12,
                    "cell ({r}, {c}) should carry the value from ({}, {})",
                    r - 1,
                    c - 1
                );
            }
        }
    }

    #[test]
    fn half_cell_displacement_blends_two_cells() {
        // dt * n * v = 0.5: the backtrace lands midway between two rows.
        let mut source = Field::zeroed(SIDE);
        source.set(3, 3, 10.0);
        source.set(2, 3, 20.0);
        let carrier_x = constant_field(0.5 / (0.1 * 6.0));
        let still = constant_field(0.0);
        let mut target = Field::zeroed(SIDE);
        advect(&mut target, &source, &carrier_x, &still, 0.1, WallRule::Scalar, N);
        assert!(
            (target.at(3, 3) - 15.0).abs() < 1e-12,
            "expected even blend of 10 and 20, got {}",
            target.at(3, 3)
        );
    }

    proptest! {
        // Bilinear interpolation cannot overshoot its four inputs, so no
        // advected value may leave the source value range.
        #[test]
        fn no_overshoot_beyond_source_range(
            values in prop::collection::vec(-1e3f64..1e3, (N as usize) * (N as usize)),
            vels in prop::collection::vec(-10.0f64..10.0, (N as usize) * (N as usize) * 2),
            dt in 0.001f64..1.0,
        ) {
            let source = interior_field(&values);
            let vel_x = interior_field(&vels[..(N as usize) * (N as usize)]);
            let vel_y = interior_field(&vels[(N as usize) * (N as usize)..]);
            let lo = source.values().fold(f64::INFINITY, |m, &v| m.min(v));
            let hi = source.values().fold(f64::NEG_INFINITY, |m, &v| m.max(v));
            let mut target = Field::zeroed(SIDE);
            advect(&mut target, &source, &vel_x, &vel_y, dt, WallRule::Scalar, N);
            for r in 1..=N {
                for c in 1..=N {
                    let v = target.at(r, c);
                    prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9,
                        "advected value {v} outside source range [{lo}, {hi}]");
                }
            }
        }

        // Spot-check the interpolation against the four corner samples of
        // the backtraced position.
        #[test]
        fn value_within_corner_extremes(
            values in prop::collection::vec(0.0f64..100.0, (N as usize) * (N as usize)),
            vx in -3.0f64..3.0,
            vy in -3.0f64..3.0,
        ) {
            let dt = 0.1;
            let source = interior_field(&values);
            let vel_x = constant_field(vx);
            let vel_y = constant_field(vy);
            let mut target = Field::zeroed(SIDE);
            advect(&mut target, &source, &vel_x, &vel_y, dt, WallRule::Scalar, N);

            let nf = N as f64;
            for r in 1..=N {
                for c in 1..=N {
                    let x = (r as f64 - dt * nf * vx).clamp(0.5, nf + 0.5);
                    let y = (c as f64 - dt * nf * vy).clamp(0.5, nf + 0.5);
                    let (r0, c0) = (x.floor() as u32, y.floor() as u32);
                    let corners = [
                        source.at(r0, c0),
                        source.at(r0, c0 + 1),
                        source.at(r0 + 1, c0),
                        source.at(r0 + 1, c0 + 1),
                    ];
                    let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
                    let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    let v = target.at(r, c);
                    prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9,
                        "cell ({r}, {c}): {v} outside corner range [{lo}, {hi}]");
                }
            }
        }
    }
}
