//! Cyclic orientation of three vertex positions.
//!
//! Everything geometric in this crate reduces to one question: walking
//! clockwise around the cycle from `start`, do we meet `mid` before `end`?

use serde::{Deserialize, Serialize};

/// Orientation of an ordered triple of vertex positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turning {
    /// All three positions coincide.
    AllEqual,
    /// `mid` coincides with `start` (and `end` differs).
    MidIsStart,
    /// `mid` coincides with `end` (and `start` differs).
    MidIsEnd,
    /// Some cyclic rotation of the triple is increasing.
    Clockwise,
    /// Some cyclic rotation of the triple is decreasing.
    Counterclockwise,
}

impl Turning {
    /// True for the two non-degenerate orientations.
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Clockwise | Self::Counterclockwise)
    }
}

/// Classify the cyclic order of `(start, mid, end)`.
///
/// Inputs are expected to be reduced into `[0, N)` already; no modulo
/// arithmetic happens here.
pub fn turning(start: usize, mid: usize, end: usize) -> Turning {
    if start == mid && mid == end {
        return Turning::AllEqual;
    }
    if start == mid {
        return Turning::MidIsStart;
    }
    if mid == end {
        return Turning::MidIsEnd;
    }

    // Parity of (start, mid, end) read as a permutation.
    if (start < mid && mid < end) || (mid < end && end < start) || (end < start && start < mid) {
        return Turning::Clockwise;
    }
    // Falls through for start == end with mid elsewhere, since none of the
    // clockwise patterns above can hold.
    Turning::Counterclockwise
}
