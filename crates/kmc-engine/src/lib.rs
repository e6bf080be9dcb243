//! Rejection-free kinetic Monte Carlo simulation engine.
//!
//! The engine advances a periodic occupancy lattice one discrete event
//! at a time: classify every interior site into one of six event
//! classes, build the cumulative probability distribution weighted by
//! `count * rate`, draw a class and a uniformly random site within it,
//! apply the transition, and record the fractional coverage.
//!
//! [`Simulation`] is the driver owning the lattice, rate table, RNG,
//! and trajectory. The loop is intrinsically serial: each step's
//! classification must see the lattice exactly as the previous step's
//! transition left it. Identical seed and configuration produce
//! bit-identical trajectories.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod apply;
mod classify;
mod config;
mod driver;
mod metrics;
mod select;

pub use apply::apply_transition;
pub use classify::Classification;
pub use config::{ConfigError, RunConfig};
pub use driver::{Simulation, StepError, StepOutcome, Trajectory};
pub use metrics::StepMetrics;
pub use select::{cumulative_probabilities, select_event, total_rate, SelectedEvent};
