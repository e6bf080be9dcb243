//! The periodic occupancy grid.

use crate::error::LatticeError;
use kmc_core::Site;

/// A square 2-D occupancy lattice with a periodic ghost border.
///
/// Storage is an `(L + 2) x (L + 2)` row-major grid of occupancy
/// bits. Rows and columns `1..=L` are the physical interior; row and
/// column `0` and `L + 1` are ghost copies of row/column `L` and `1`
/// respectively, so every interior site reads its four orthogonal
/// neighbours without wrapping arithmetic.
///
/// Invariant: ghost cells always equal their interior counterparts.
/// [`set_occupancy`](Lattice::set_occupancy) re-mirrors immediately
/// after every mutation; there is no lazy synchronisation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    length: u32,
    cells: Vec<u8>,
}

impl Lattice {
    /// Maximum interior side length. Keeps `(L + 2)^2` cells well
    /// within `usize` on 32-bit targets.
    pub const MAX_LENGTH: u32 = 1 << 15;

    /// Create an all-empty lattice with interior side length `length`.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if `length == 0`, or
    /// `Err(LatticeError::LengthTooLarge)` above [`Lattice::MAX_LENGTH`].
    pub fn new(length: u32) -> Result<Self, LatticeError> {
        Self::check_length(length)?;
        let side = (length + 2) as usize;
        Ok(Self {
            length,
            cells: vec![0; side * side],
        })
    }

    /// Validate a side length without allocating.
    ///
    /// Shared with `RunConfig::validate()` in `kmc-engine` so that
    /// configuration checks and construction cannot disagree.
    pub fn check_length(length: u32) -> Result<(), LatticeError> {
        if length == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        if length > Self::MAX_LENGTH {
            return Err(LatticeError::LengthTooLarge {
                value: length,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(())
    }

    /// Interior side length `L`.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Number of interior sites, `L^2`.
    pub fn site_count(&self) -> usize {
        (self.length as usize) * (self.length as usize)
    }

    fn idx(&self, row: u32, col: u32) -> usize {
        let side = (self.length + 2) as usize;
        row as usize * side + col as usize
    }

    fn debug_check_interior(&self, site: Site) {
        debug_assert!(
            (1..=self.length).contains(&site.row) && (1..=self.length).contains(&site.col),
            "site {site} outside interior [1, {}]^2",
            self.length
        );
    }

    /// Whether the interior site is occupied.
    pub fn occupied(&self, site: Site) -> bool {
        self.debug_check_interior(site);
        self.cells[self.idx(site.row, site.col)] == 1
    }

    /// Number of occupied orthogonal neighbours of `site`, in `[0, 4]`.
    ///
    /// Ghost cells stand in for the periodic wrap, so edge sites read
    /// their neighbours exactly like bulk sites.
    pub fn neighbour_count(&self, site: Site) -> usize {
        self.debug_check_interior(site);
        let (r, c) = (site.row, site.col);
        (self.cells[self.idx(r - 1, c)]
            + self.cells[self.idx(r + 1, c)]
            + self.cells[self.idx(r, c - 1)]
            + self.cells[self.idx(r, c + 1)]) as usize
    }

    /// Set the occupancy of an interior site and re-mirror the ghost
    /// border.
    ///
    /// Each axis mirrors independently: row `1` copies to ghost row
    /// `L + 1`, row `L` to ghost row `0`, and symmetrically for
    /// columns. A corner site therefore updates one row ghost and one
    /// column ghost; the diagonal ghost corners are never read by a
    /// 4-neighbour scan and stay untouched.
    pub fn set_occupancy(&mut self, site: Site, occupied: bool) {
        self.debug_check_interior(site);
        let bit = u8::from(occupied);
        let (r, c) = (site.row, site.col);
        let l = self.length;

        let i = self.idx(r, c);
        self.cells[i] = bit;

        if r == 1 {
            let i = self.idx(l + 1, c);
            self.cells[i] = bit;
        } else if r == l {
            let i = self.idx(0, c);
            self.cells[i] = bit;
        }
        if c == 1 {
            let i = self.idx(r, l + 1);
            self.cells[i] = bit;
        } else if c == l {
            let i = self.idx(r, 0);
            self.cells[i] = bit;
        }
    }

    /// Count of occupied interior sites.
    pub fn occupied_count(&self) -> usize {
        let mut total = 0usize;
        for r in 1..=self.length {
            for c in 1..=self.length {
                total += self.cells[self.idx(r, c)] as usize;
            }
        }
        total
    }

    /// Fractional coverage: occupied interior sites over `L^2`.
    ///
    /// Always in `[0, 1]`: `0.0` for an all-empty lattice, `1.0` for
    /// a fully occupied one.
    pub fn coverage(&self) -> f64 {
        self.occupied_count() as f64 / self.site_count() as f64
    }

    /// Row-major iterator over all interior sites.
    pub fn interior_sites(&self) -> impl Iterator<Item = Site> + '_ {
        let l = self.length;
        (1..=l).flat_map(move |row| (1..=l).map(move |col| Site::new(row, col)))
    }

    /// Check the ghost border against the interior, returning the
    /// first mismatching ghost cell as `(row, col)`, if any.
    ///
    /// Intended for tests; the engine never needs it because
    /// [`set_occupancy`](Lattice::set_occupancy) re-mirrors eagerly.
    pub fn ghost_mismatch(&self) -> Option<(u32, u32)> {
        let l = self.length;
        for c in 1..=l {
            if self.cells[self.idx(0, c)] != self.cells[self.idx(l, c)] {
                return Some((0, c));
            }
            if self.cells[self.idx(l + 1, c)] != self.cells[self.idx(1, c)] {
                return Some((l + 1, c));
            }
        }
        for r in 1..=l {
            if self.cells[self.idx(r, 0)] != self.cells[self.idx(r, l)] {
                return Some((r, 0));
            }
            if self.cells[self.idx(r, l + 1)] != self.cells[self.idx(r, 1)] {
                return Some((r, l + 1));
            }
        }
        None
    }
}
