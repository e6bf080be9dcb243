//! Interior lattice coordinates.

use std::fmt;

/// A 1-based interior lattice coordinate.
///
/// Valid sites satisfy `1 <= row <= L` and `1 <= col <= L` for a
/// lattice of side length `L`. Row/column `0` and `L + 1` are the
/// periodic ghost border and are never addressed through `Site`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    /// 1-based interior row.
    pub row: u32,
    /// 1-based interior column.
    pub col: u32,
}

impl Site {
    /// Create a site from 1-based interior coordinates.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
