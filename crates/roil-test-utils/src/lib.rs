//! Deterministic fixtures for the Roil test suites and benchmarks.
//!
//! Everything here is seeded: identical seeds produce identical fields,
//! so tests built on these fixtures can assert bitwise reproducibility.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod fixtures;

pub use fixtures::{central_vortex, fill_interior, seed_random_flow, seeded_rng};
