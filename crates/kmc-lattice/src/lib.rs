//! Periodic ghost-bordered occupancy lattice for the kmc engine.
//!
//! [`Lattice`] stores the square 2-D grid of occupancy bits with a
//! one-cell ghost border mirroring the opposite edge, so every
//! interior site reads its four orthogonal neighbours in O(1) with no
//! edge special-casing. The border is re-mirrored eagerly on every
//! mutation; the grid behaves as a torus at all times.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod lattice;

pub use error::LatticeError;
pub use lattice::Lattice;
