//! The fluid grid: six dense fields plus the rate parameters that travel
//! with them.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::GridError;
use crate::field::Field;

/// How [`FluidGrid::add_velocity`] routes its two components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VelocityInjection {
    /// `dx` lands on the x-velocity field, `dy` on the y-velocity field.
    #[default]
    Symmetric,
    /// Both components land on the x-velocity field; y-velocity is never
    /// injected. Matches solvers that fold the whole drag impulse into
    /// one axis, producing a uniform flow bias.
    XOnly,
}

/// Identifies one of the six fields owned by a [`FluidGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FluidField {
    /// The advected density field.
    Density,
    /// Previous-step density, reused as diffusion scratch.
    DensityPrev,
    /// X component of the velocity field.
    VelocityX,
    /// Y component of the velocity field.
    VelocityY,
    /// Previous-step x-velocity, reused as projection scratch.
    VelocityXPrev,
    /// Previous-step y-velocity, reused as projection scratch.
    VelocityYPrev,
}

impl FluidField {
    /// All six fields in registry order.
    pub const ALL: [FluidField; 6] = [
        FluidField::Density,
        FluidField::VelocityX,
        FluidField::VelocityY,
        FluidField::DensityPrev,
        FluidField::VelocityXPrev,
        FluidField::VelocityYPrev,
    ];

    /// Stable name used for registry lookup and error reporting.
    pub fn name(self) -> &'static str {
        match self {
            FluidField::Density => "density",
            FluidField::DensityPrev => "density_prev",
            FluidField::VelocityX => "velocity_x",
            FluidField::VelocityY => "velocity_y",
            FluidField::VelocityXPrev => "velocity_x_prev",
            FluidField::VelocityYPrev => "velocity_y_prev",
        }
    }
}

impl std::fmt::Display for FluidField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One mutable reference per field, for solver stages that borrow several
/// fields in different roles at once.
///
/// Obtained from [`FluidGrid::fields_mut`]. Splitting the borrow here keeps
/// each stage's signature honest about which buffers it touches.
pub struct FieldsMut<'a> {
    /// X component of the velocity field.
    pub velocity_x: &'a mut Field,
    /// Y component of the velocity field.
    pub velocity_y: &'a mut Field,
    /// Previous-step x-velocity / projection scratch.
    pub velocity_x_prev: &'a mut Field,
    /// Previous-step y-velocity / projection scratch.
    pub velocity_y_prev: &'a mut Field,
    /// The advected density field.
    pub density: &'a mut Field,
    /// Previous-step density / diffusion scratch.
    pub density_prev: &'a mut Field,
}

/// The padded 2D grid holding all per-cell fluid state.
///
/// An interior of `n x n` cells carries the physics; one extra layer on
/// each edge holds boundary values derived from interior neighbours by
/// the solver's wall fixup. All six fields share the same `(n+2) x (n+2)`
/// dimensions. Impulse injection targets interior cells only.
///
/// # Examples
///
/// ```
/// use roil_grid::{Cell, FluidGrid};
///
/// let mut grid = FluidGrid::new(16, 0.01, 0.0001, 0.0001).unwrap();
/// assert_eq!(grid.side(), 18);
///
/// grid.add_density(Cell::new(8, 8), 100.0).unwrap();
/// let i = grid.index(Cell::new(8, 8)).unwrap();
/// assert_eq!(grid.density()[i], 100.0);
/// ```
#[derive(Debug)]
pub struct FluidGrid {
    resolution: u32,
    side: usize,
    dissipation: f64,
    diffusion: f64,
    viscosity: f64,
    velocity_injection: VelocityInjection,
    velocity_x: Field,
    velocity_y: Field,
    velocity_x_prev: Field,
    velocity_y_prev: Field,
    density: Field,
    density_prev: Field,
    registry: IndexMap<&'static str, FluidField>,
}

impl FluidGrid {
    /// Maximum interior resolution. Keeps `side * side` comfortably inside
    /// `usize` and the allocation within reason.
    pub const MAX_RESOLUTION: u32 = 65_534;

    /// Create a zero-filled grid with interior resolution `n` and the
    /// given rate parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if `resolution` is zero,
    /// [`GridError::DimensionTooLarge`] if it exceeds
    /// [`MAX_RESOLUTION`](Self::MAX_RESOLUTION), and
    /// [`GridError::InvalidParameter`] if any rate is negative or
    /// non-finite.
    pub fn new(
        resolution: u32,
        dissipation: f64,
        diffusion: f64,
        viscosity: f64,
    ) -> Result<Self, GridError> {
        if resolution == 0 {
            return Err(GridError::EmptyGrid);
        }
        if resolution > Self::MAX_RESOLUTION {
            return Err(GridError::DimensionTooLarge {
                value: resolution,
                max: Self::MAX_RESOLUTION,
            });
        }
        for (name, value) in [
            ("dissipation", dissipation),
            ("diffusion", diffusion),
            ("viscosity", viscosity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::InvalidParameter { name, value });
            }
        }

        let side = resolution as usize + 2;
        let registry = FluidField::ALL.iter().map(|&f| (f.name(), f)).collect();
        Ok(Self {
            resolution,
            side,
            dissipation,
            diffusion,
            viscosity,
            velocity_injection: VelocityInjection::default(),
            velocity_x: Field::zeroed(side),
            velocity_y: Field::zeroed(side),
            velocity_x_prev: Field::zeroed(side),
            velocity_y_prev: Field::zeroed(side),
            density: Field::zeroed(side),
            density_prev: Field::zeroed(side),
            registry,
        })
    }

    /// Set the velocity injection mode, consuming and returning the grid.
    pub fn with_velocity_injection(mut self, mode: VelocityInjection) -> Self {
        self.velocity_injection = mode;
        self
    }

    /// Interior resolution `n`.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Padded side length `n + 2`.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Dissipation rate applied to density each step.
    pub fn dissipation(&self) -> f64 {
        self.dissipation
    }

    /// Diffusion constant for the density field.
    pub fn diffusion(&self) -> f64 {
        self.diffusion
    }

    /// Kinematic viscosity for the velocity field.
    pub fn viscosity(&self) -> f64 {
        self.viscosity
    }

    /// The active velocity injection mode.
    pub fn velocity_injection(&self) -> VelocityInjection {
        self.velocity_injection
    }

    /// Flat index of a cell, `row + col * side`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if either coordinate is
    /// outside the padded range `[0, n + 1]`.
    pub fn index(&self, cell: Cell) -> Result<usize, GridError> {
        if (cell.row as usize) < self.side && (cell.col as usize) < self.side {
            Ok(cell.row as usize + cell.col as usize * self.side)
        } else {
            Err(GridError::IndexOutOfBounds {
                row: cell.row,
                col: cell.col,
                side: self.side,
            })
        }
    }

    /// Reject coordinates that are out of range or on the boundary ring.
    fn check_interior(&self, cell: Cell) -> Result<(), GridError> {
        self.index(cell)?;
        if !cell.is_interior(self.resolution) {
            return Err(GridError::BoundaryInjection {
                row: cell.row,
                col: cell.col,
            });
        }
        Ok(())
    }

    /// Add `amount` to the density at an interior cell.
    ///
    /// The result is not clamped; any visual ceiling is the renderer's
    /// concern.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] for coordinates outside the
    /// padded grid and [`GridError::BoundaryInjection`] for boundary cells.
    pub fn add_density(&mut self, cell: Cell, amount: f64) -> Result<(), GridError> {
        self.check_interior(cell)?;
        *self.density.at_mut(cell.row, cell.col) += amount;
        Ok(())
    }

    /// Add a velocity impulse at an interior cell.
    ///
    /// Routing of `dx` and `dy` depends on the grid's
    /// [`VelocityInjection`] mode.
    ///
    /// # Errors
    ///
    /// Same coordinate checks as [`add_density`](Self::add_density).
    pub fn add_velocity(&mut self, cell: Cell, dx: f64, dy: f64) -> Result<(), GridError> {
        self.check_interior(cell)?;
        match self.velocity_injection {
            VelocityInjection::Symmetric => {
                *self.velocity_x.at_mut(cell.row, cell.col) += dx;
                *self.velocity_y.at_mut(cell.row, cell.col) += dy;
            }
            VelocityInjection::XOnly => {
                *self.velocity_x.at_mut(cell.row, cell.col) += dx;
                *self.velocity_x.at_mut(cell.row, cell.col) += dy;
            }
        }
        Ok(())
    }

    /// Replace all six fields with freshly zeroed arrays.
    ///
    /// Dimensions, rate parameters, and the injection mode are preserved.
    pub fn reset(&mut self) {
        self.velocity_x = Field::zeroed(self.side);
        self.velocity_y = Field::zeroed(self.side);
        self.velocity_x_prev = Field::zeroed(self.side);
        self.velocity_y_prev = Field::zeroed(self.side);
        self.density = Field::zeroed(self.side);
        self.density_prev = Field::zeroed(self.side);
    }

    /// Read-only view of the density field as a flat slice.
    pub fn density(&self) -> &[f64] {
        self.density.as_slice()
    }

    /// Read-only view of the x-velocity field as a flat slice.
    pub fn velocity_x(&self) -> &[f64] {
        self.velocity_x.as_slice()
    }

    /// Read-only view of the y-velocity field as a flat slice.
    pub fn velocity_y(&self) -> &[f64] {
        self.velocity_y.as_slice()
    }

    /// Borrow a field by kind.
    pub fn field(&self, kind: FluidField) -> &Field {
        match kind {
            FluidField::Density => &self.density,
            FluidField::DensityPrev => &self.density_prev,
            FluidField::VelocityX => &self.velocity_x,
            FluidField::VelocityY => &self.velocity_y,
            FluidField::VelocityXPrev => &self.velocity_x_prev,
            FluidField::VelocityYPrev => &self.velocity_y_prev,
        }
    }

    /// Look up a field by its registry name (`"density"`, `"velocity_x"`,
    /// ...). Scratch buffers are exposed read-only under their
    /// `*_prev` names for diagnostics.
    pub fn field_named(&self, name: &str) -> Option<&Field> {
        self.registry.get(name).map(|&kind| self.field(kind))
    }

    /// Registered field names, in registry order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.keys().copied()
    }

    /// Iterate over all fields in registry order.
    pub fn fields(&self) -> impl Iterator<Item = (FluidField, &Field)> + '_ {
        self.registry.values().map(move |&kind| (kind, self.field(kind)))
    }

    /// In-bounds 4-neighbourhood of a cell within the padded grid.
    ///
    /// Interior cells have four neighbours; edge and corner cells of the
    /// padded ring have three and two.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if the cell itself is out
    /// of range.
    pub fn neighbours(&self, cell: Cell) -> Result<SmallVec<[Cell; 4]>, GridError> {
        self.index(cell)?;
        let side = self.side as i64;
        let offsets: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut result = SmallVec::new();
        for (dr, dc) in offsets {
            let nr = cell.row as i64 + dr;
            let nc = cell.col as i64 + dc;
            if (0..side).contains(&nr) && (0..side).contains(&nc) {
                result.push(Cell::new(nr as u32, nc as u32));
            }
        }
        Ok(result)
    }

    /// One mutable reference per field, for the solver's stage pipeline.
    pub fn fields_mut(&mut self) -> FieldsMut<'_> {
        FieldsMut {
            velocity_x: &mut self.velocity_x,
            velocity_y: &mut self.velocity_y,
            velocity_x_prev: &mut self.velocity_x_prev,
            velocity_y_prev: &mut self.velocity_y_prev,
            density: &mut self.density,
            density_prev: &mut self.density_prev,
        }
    }
}
