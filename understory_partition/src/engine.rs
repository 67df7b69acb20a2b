// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine trait for merge strategies.

use crate::partition::RectanglePartition;
use crate::types::{RectId, Sides};

/// Outcome of one unit of engine work.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// At least one merge happened; `survivor` is the grown rectangle.
    Merged {
        /// Id of the rectangle that absorbed its neighbors.
        survivor: RectId,
        /// Which merge attempts succeeded, relative to the survivor.
        sides: Sides,
    },
    /// The rectangle was examined and could not grow.
    Stable(RectId),
    /// The id had already been retired by an earlier merge.
    Stale(RectId),
    /// No work remains; the partition is at a fixpoint.
    Exhausted,
}

impl Step {
    /// True if the step changed the partition.
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }

    /// True if the engine has no more work.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Merge strategy driven by [`SolverGeneric`](crate::SolverGeneric).
///
/// An engine only mutates the partition through
/// [`RectanglePartition::apply_merge`], so partition invariants hold between
/// any two steps regardless of strategy.
pub trait Engine<L: Copy + PartialEq> {
    /// Prepare internal state for `partition`, discarding any previous state.
    fn seed(&mut self, partition: &RectanglePartition<L>);

    /// Perform one unit of work.
    ///
    /// Once this returns [`Step::Exhausted`] it keeps doing so until reseeded.
    fn step(&mut self, partition: &mut RectanglePartition<L>) -> Step;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_merges_count_as_changes() {
        let merged = Step::Merged {
            survivor: RectId::new(0),
            sides: Sides::RIGHT,
        };
        assert!(merged.changed());
        assert!(!Step::Stable(RectId::new(0)).changed());
        assert!(!Step::Stale(RectId::new(1)).changed());
        assert!(Step::Exhausted.is_exhausted());
        assert!(!merged.is_exhausted());
    }
}
