//! Seeded field generators.

use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roil_grid::{Field, FluidGrid};

/// A ChaCha8 RNG seeded from `seed`. The same seed always yields the
/// same stream, keeping fixture-driven tests reproducible.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fill the interior of `field` with uniform samples from `[lo, hi)`.
///
/// Boundary cells are left untouched; callers that need a consistent
/// ring apply their wall fixup afterwards. Cells are visited in
/// row-major order so the mapping from seed to field is stable.
pub fn fill_interior(field: &mut Field, rng: &mut ChaCha8Rng, lo: f64, hi: f64) {
    let n = field.side() as u32 - 2;
    for r in 1..=n {
        for c in 1..=n {
            field.set(r, c, rng.random_range(lo..hi));
        }
    }
}

/// Seed both velocity components of `grid` with uniform noise in
/// `[-scale, scale)`.
pub fn seed_random_flow(grid: &mut FluidGrid, seed: u64, scale: f64) {
    let mut rng = seeded_rng(seed);
    let fields = grid.fields_mut();
    fill_interior(fields.velocity_x, &mut rng, -scale, scale);
    fill_interior(fields.velocity_y, &mut rng, -scale, scale);
}

/// Seed the velocity field of `grid` with a solid-body swirl around the
/// grid centre, `strength` at the rim. A mostly divergence-free flow
/// that keeps projection benchmarks from collapsing to zero work.
pub fn central_vortex(grid: &mut FluidGrid, strength: f64) {
    let n = grid.resolution();
    let centre = (f64::from(n) + 1.0) / 2.0;
    let rim = f64::from(n) / 2.0;
    let fields = grid.fields_mut();
    for r in 1..=n {
        for c in 1..=n {
            let dr = f64::from(r) - centre;
            let dc = f64::from(c) - centre;
            fields.velocity_x.set(r, c, -dc / rim * strength);
            fields.velocity_y.set(r, c, dr / rim * strength);
        }
    }
}
