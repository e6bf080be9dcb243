//! Core types for the kmc kinetic Monte Carlo engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared across the kmc workspace: interior lattice
//! coordinates, the six-way event classification, the transition rate
//! table, and the selection error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod class;
mod error;
mod rates;
mod site;

pub use class::EventClass;
pub use error::SelectError;
pub use rates::RateTable;
pub use site::Site;
