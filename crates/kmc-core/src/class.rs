//! Event classes: the six transition categories of the adsorption model.

use std::fmt;

/// A transition event class.
///
/// Class 0 is absorption onto an empty site. Classes 1..=5 are
/// desorption of an occupied site with `class - 1` occupied orthogonal
/// neighbours (0 to 4 on a square lattice). Every interior site falls
/// into exactly one class, so the classes partition the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventClass(usize);

impl EventClass {
    /// Number of distinct event classes.
    pub const COUNT: usize = 6;

    /// The absorption class (an empty site gaining a particle).
    pub const fn absorption() -> Self {
        Self(0)
    }

    /// The desorption class for a site with `neighbours` occupied
    /// orthogonal neighbours.
    ///
    /// # Panics
    ///
    /// Panics if `neighbours > 4`. A square-lattice site has at most
    /// four orthogonal neighbours, so this is unreachable from the
    /// classifier.
    pub fn desorption(neighbours: usize) -> Self {
        assert!(
            neighbours <= 4,
            "a site has at most 4 orthogonal neighbours, got {neighbours}"
        );
        Self(1 + neighbours)
    }

    /// Construct from a raw class index, `None` if out of `[0, 5]`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// All classes in index order (absorption first).
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self)
    }

    /// The raw class index in `[0, 5]`.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Whether this is the absorption class.
    pub const fn is_absorption(self) -> bool {
        self.0 == 0
    }

    /// For desorption classes, the occupied neighbour count; `None`
    /// for the absorption class.
    pub const fn neighbour_count(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0 - 1)
        }
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.neighbour_count() {
            None => write!(f, "absorption"),
            Some(n) => write!(f, "desorption/{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorption_is_class_zero() {
        let c = EventClass::absorption();
        assert_eq!(c.index(), 0);
        assert!(c.is_absorption());
        assert_eq!(c.neighbour_count(), None);
    }

    #[test]
    fn desorption_offsets_by_one() {
        for n in 0..=4 {
            let c = EventClass::desorption(n);
            assert_eq!(c.index(), n + 1);
            assert!(!c.is_absorption());
            assert_eq!(c.neighbour_count(), Some(n));
        }
    }

    #[test]
    #[should_panic(expected = "at most 4 orthogonal neighbours")]
    fn desorption_rejects_five_neighbours() {
        let _ = EventClass::desorption(5);
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(EventClass::from_index(0), Some(EventClass::absorption()));
        assert_eq!(EventClass::from_index(5), Some(EventClass::desorption(4)));
        assert_eq!(EventClass::from_index(6), None);
    }

    #[test]
    fn all_covers_every_class_in_order() {
        let all: Vec<_> = EventClass::all().collect();
        assert_eq!(all.len(), EventClass::COUNT);
        for (i, c) in all.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn display_names_the_class() {
        assert_eq!(EventClass::absorption().to_string(), "absorption");
        assert_eq!(EventClass::desorption(3).to_string(), "desorption/3");
    }
}
