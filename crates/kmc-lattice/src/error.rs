//! Error types for lattice construction.

use std::error::Error;
use std::fmt;

/// Errors arising from lattice construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// Attempted to construct a lattice with zero interior sites.
    EmptyLattice,
    /// The requested side length exceeds the supported maximum.
    LengthTooLarge {
        /// The requested side length.
        value: u32,
        /// The maximum supported side length.
        max: u32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice side length must be at least 1"),
            Self::LengthTooLarge { value, max } => {
                write!(f, "lattice side length {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for LatticeError {}
