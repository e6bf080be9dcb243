//! kmc: kinetic Monte Carlo simulation of reversible adsorption and
//! desorption on a 2-D periodic lattice.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the kmc sub-crates. For most users, adding `kmc` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use kmc::prelude::*;
//!
//! let config = RunConfig {
//!     lattice_length: 8,
//!     steps: 100,
//!     seed: 42,
//!     absorption_rate: 4.0,
//!     desorption_rate: 2.0,
//!     interaction_strength: 1.0,
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let trajectory = sim.run().unwrap();
//!
//! assert_eq!(trajectory.len(), 100);
//! assert!(trajectory.samples().iter().all(|c| (0.0..=1.0).contains(c)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `kmc-core` | Sites, event classes, rate table, selection errors |
//! | [`lattice`] | `kmc-lattice` | The periodic ghost-bordered occupancy grid |
//! | [`engine`] | `kmc-engine` | Classification, selection, the `Simulation` driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`kmc-core`).
///
/// Contains [`types::Site`], [`types::EventClass`],
/// [`types::RateTable`], and [`types::SelectError`].
pub use kmc_core as types;

/// The periodic occupancy grid (`kmc-lattice`).
///
/// [`lattice::Lattice`] keeps a ghost border mirroring the opposite
/// edge so neighbour reads are O(1) with no wrapping arithmetic.
pub use kmc_lattice as lattice;

/// The simulation engine (`kmc-engine`).
///
/// [`engine::Simulation`] drives the classify → select → apply →
/// record loop; [`engine::Classification`] and
/// [`engine::select_event`] expose the per-step machinery for
/// callers that want to drive it themselves.
pub use kmc_engine as engine;

/// Common imports for typical kmc usage.
///
/// ```rust
/// use kmc::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use kmc_core::{EventClass, RateTable, SelectError, Site};

    // Lattice
    pub use kmc_lattice::{Lattice, LatticeError};

    // Engine
    pub use kmc_engine::{
        ConfigError, RunConfig, Simulation, StepError, StepMetrics, StepOutcome, Trajectory,
    };
}
