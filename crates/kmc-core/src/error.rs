//! Error types for event selection.

use crate::EventClass;
use std::error::Error;
use std::fmt;

/// Errors from rejection-free event selection.
///
/// Both variants are logic or configuration defects, never transient:
/// the algorithm is deterministic given its RNG stream, so callers
/// should abort the run rather than retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// The total event rate over the classification snapshot is zero;
    /// no eligible transition exists. Surfaced explicitly instead of
    /// dividing through to NaN probabilities.
    DegenerateState,
    /// The cumulative-probability draw landed on a class with no
    /// candidate sites. The strict-lower-bound boundary convention
    /// makes empty classes unselectable, so this indicates a bug in
    /// cumulative-probability construction.
    InconsistentClassification {
        /// The class chosen by the draw.
        class: EventClass,
    },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateState => {
                write!(f, "total event rate is zero; no eligible transition")
            }
            Self::InconsistentClassification { class } => {
                write!(f, "selected class '{class}' has no candidate sites")
            }
        }
    }
}

impl Error for SelectError {}
