//! Padded 2D field storage for the Roil fluid solver.
//!
//! This is the leaf crate with zero internal dependencies. It owns the
//! grid data model: six dense scalar fields over an `(n+2) x (n+2)`
//! padded grid (one boundary layer per edge), checked cell coordinates,
//! point-impulse injection, and read-only field views for renderers.
//!
//! The solver crate mutates fields through [`FluidGrid::fields_mut`],
//! which hands out one mutable reference per field so stages can borrow
//! several fields in different roles at once.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod field;
pub mod fluid;

pub use cell::Cell;
pub use error::GridError;
pub use field::Field;
pub use fluid::{FieldsMut, FluidField, FluidGrid, VelocityInjection};
