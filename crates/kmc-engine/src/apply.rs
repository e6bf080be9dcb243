//! Transition application.

use kmc_lattice::Lattice;

use crate::select::SelectedEvent;

/// Apply a selected transition to the lattice.
///
/// Absorption fills the site, desorption empties it. Ghost-border
/// mirroring happens inside [`Lattice::set_occupancy`], so the
/// lattice is torus-consistent again the moment this returns. No
/// failure modes.
pub fn apply_transition(lattice: &mut Lattice, event: SelectedEvent) {
    lattice.set_occupancy(event.site, event.class.is_absorption());
}
