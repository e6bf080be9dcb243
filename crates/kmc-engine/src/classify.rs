//! Per-step site classification.
//!
//! One full pass over the `L x L` interior buckets every site into one
//! of the six event classes: empty sites into the absorption class,
//! occupied sites into the desorption class for their occupied
//! orthogonal neighbour count. The ghost border guarantees neighbour
//! reads need no edge special-casing.
//!
//! The O(L^2) rescan every step is intentional and is the dominant
//! cost of the simulation. An incremental variant that patches
//! neighbour counts around the last transition could sit behind the
//! same contract, provided it produces identical snapshots.

use kmc_core::{EventClass, Site};
use kmc_lattice::Lattice;

/// Classification snapshot for one simulation step.
///
/// Holds the per-class occurrence counts and the list of sites in
/// each class, in row-major scan order. Rebuilt fresh every step and
/// discarded after the event is applied; never persisted.
#[derive(Clone, Debug)]
pub struct Classification {
    counts: [usize; EventClass::COUNT],
    sites: [Vec<Site>; EventClass::COUNT],
}

impl Classification {
    /// Classify every interior site of `lattice` in a single pass.
    pub fn scan(lattice: &Lattice) -> Self {
        let mut counts = [0usize; EventClass::COUNT];
        let mut sites: [Vec<Site>; EventClass::COUNT] = Default::default();

        for site in lattice.interior_sites() {
            let class = if lattice.occupied(site) {
                EventClass::desorption(lattice.neighbour_count(site))
            } else {
                EventClass::absorption()
            };
            counts[class.index()] += 1;
            sites[class.index()].push(site);
        }

        Self { counts, sites }
    }

    /// Number of sites in `class`.
    pub fn count(&self, class: EventClass) -> usize {
        self.counts[class.index()]
    }

    /// The sites in `class`, in row-major scan order.
    pub fn class_sites(&self, class: EventClass) -> &[Site] {
        &self.sites[class.index()]
    }

    /// Total classified sites. Always equals `L^2`.
    pub fn total_sites(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Total occupied sites: the sum over the five desorption classes.
    pub fn occupied_total(&self) -> usize {
        self.counts[1..].iter().sum()
    }
}
