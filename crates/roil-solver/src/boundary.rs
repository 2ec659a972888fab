//! Wall fixup for the closed rectangular box.
//!
//! The padded ring of cells is never driven directly; after every
//! relaxation sweep, advection pass, and projection phase it is rebuilt
//! from the adjacent interior cells. Scalars mirror their neighbour;
//! velocity components reverse sign across the walls they would
//! otherwise flow through, giving solid, no-slip, impermeable walls.

use roil_grid::Field;

/// Which walls reverse the sign of the mirrored value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallRule {
    /// Scalar quantities (density, pressure, divergence): mirror the
    /// interior neighbour on every wall, no sign change.
    Scalar,
    /// Quantities that reverse across the walls at the row extremes
    /// (the x component of velocity).
    FlipRows,
    /// Quantities that reverse across the walls at the column extremes
    /// (the y component of velocity).
    FlipCols,
}

/// Rebuild the boundary ring of `field` from its interior neighbours.
///
/// Edge cells mirror the adjacent interior cell, negated on the walls
/// named by `rule`. Corner cells are set to the mean of their two
/// adjacent edge cells. `n` is the interior resolution; `field` must
/// have side `n + 2`.
pub fn apply_boundary(field: &mut Field, rule: WallRule, n: u32) {
    debug_assert_eq!(field.side(), n as usize + 2);
    let top = n + 1;
    for i in 1..=n {
        let flip_rows = rule == WallRule::FlipRows;
        let v = field.at(1, i);
        field.set(0, i, if flip_rows { -v } else { v });
        let v = field.at(n, i);
        field.set(top, i, if flip_rows { -v } else { v });

        let flip_cols = rule == WallRule::FlipCols;
        let v = field.at(i, 1);
        field.set(i, 0, if flip_cols { -v } else { v });
        let v = field.at(i, n);
        field.set(i, top, if flip_cols { -v } else { v });
    }

    field.set(0, 0, 0.5 * (field.at(1, 0) + field.at(0, 1)));
    field.set(0, top, 0.5 * (field.at(1, top) + field.at(0, n)));
    field.set(top, 0, 0.5 * (field.at(n, 0) + field.at(top, 1)));
    field.set(top, top, 0.5 * (field.at(n, top) + field.at(top, n)));
}
