//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the builder-input for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](RunConfig::validate)
//! checks all structural invariants at construction time, so the step
//! loop itself never revalidates parameters.

use std::error::Error;
use std::fmt;

use kmc_lattice::{Lattice, LatticeError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`RunConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The lattice side length is zero or exceeds the supported maximum.
    Lattice(LatticeError),
    /// A rate or interaction parameter is negative, NaN, or infinite.
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::InvalidParameter { name, value } => {
                write!(f, "{name} must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            Self::InvalidParameter { .. } => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
///
/// The default reproduces the canonical sodium-on-foil parameter set:
/// a 32-site lattice, 5000 steps, non-interacting (`alpha = 1`),
/// absorption rate 4 and desorption rate 2.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Interior side length `L` of the periodic lattice.
    pub lattice_length: u32,
    /// Number of KMC steps to execute.
    pub steps: u64,
    /// RNG seed for deterministic replay.
    pub seed: u64,
    /// Absorption (empty-site fill) rate. Finite and `>= 0`.
    pub absorption_rate: f64,
    /// Base desorption rate. Finite and `>= 0`.
    pub desorption_rate: f64,
    /// Near-neighbour interaction strength `alpha`. Finite and `>= 0`.
    pub interaction_strength: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lattice_length: 32,
            steps: 5000,
            seed: 42,
            absorption_rate: 4.0,
            desorption_rate: 2.0,
            interaction_strength: 1.0,
        }
    }
}

impl RunConfig {
    /// Validate all structural invariants.
    ///
    /// A pure validation pass; [`Simulation::new`](crate::Simulation::new)
    /// calls it before allocating anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Lattice side length must be constructible.
        Lattice::check_length(self.lattice_length)?;

        // 2. Rates and interaction strength must be finite and
        //    non-negative. Zero is allowed: an all-zero rate table is
        //    structurally valid and surfaces as DegenerateState on the
        //    first step instead.
        let params = [
            ("absorption_rate", self.absorption_rate),
            ("desorption_rate", self.desorption_rate),
            ("interaction_strength", self.interaction_strength),
        ];
        for (name, value) in params {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }

        Ok(())
    }
}
