// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Solver` API and generic implementation over a pluggable engine.

use tracing::debug;

use crate::engine::{Engine, Step};
use crate::engines::frontier::FrontierQueue;
use crate::engines::greedy::Greedy;
use crate::engines::pairwise::Pairwise;
use crate::error::GridResult;
use crate::grid::LabelGrid;
use crate::partition::RectanglePartition;
use crate::rect::Rectangle;
use crate::render::Render;

/// Cumulative counters over every step a solver has taken.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunStats {
    /// Steps taken, not counting the final [`Step::Exhausted`].
    pub steps: usize,
    /// Successful merges. A single step may perform more than one.
    pub merges: usize,
    /// Steps that popped an already retired id.
    pub stale: usize,
}

/// A partition driven to a fixpoint by a merge engine.
#[derive(Clone, Debug)]
pub struct SolverGeneric<L, E> {
    partition: RectanglePartition<L>,
    engine: E,
    stats: RunStats,
}

impl<L, E> SolverGeneric<L, E>
where
    L: Copy + PartialEq,
    E: Engine<L> + Default,
{
    /// Start from one unit rectangle per cell, using the engine's default state.
    pub fn new(grid: LabelGrid<L>) -> Self {
        Self::with_engine(grid, E::default())
    }

    /// Validate `rows` and build a solver for them.
    pub fn from_rows<R: AsRef<[L]>>(rows: &[R]) -> GridResult<Self> {
        Ok(Self::new(LabelGrid::from_rows(rows)?))
    }
}

impl<L, E> SolverGeneric<L, E>
where
    L: Copy + PartialEq,
    E: Engine<L>,
{
    /// Start from one unit rectangle per cell and seed `engine` for it.
    pub fn with_engine(grid: LabelGrid<L>, mut engine: E) -> Self {
        let partition = RectanglePartition::new(grid);
        engine.seed(&partition);
        debug!(
            height = partition.height(),
            width = partition.width(),
            "seeded rectangle partition"
        );
        Self {
            partition,
            engine,
            stats: RunStats::default(),
        }
    }

    /// Step until the engine is exhausted. Returns the number of steps taken.
    ///
    /// Calling this again on a partition already at its fixpoint returns 0.
    pub fn run_to_fixpoint(&mut self) -> usize {
        let mut taken = 0;
        while !self.solve_step().is_exhausted() {
            taken += 1;
        }
        debug!(
            steps = taken,
            rectangles = self.partition.live_count(),
            merges = self.stats.merges,
            "reached fixpoint"
        );
        taken
    }

    /// Perform one engine step.
    pub fn solve_step(&mut self) -> Step {
        let step = self.engine.step(&mut self.partition);
        match step {
            Step::Merged { sides, .. } => self.stats.merges += sides.count(),
            Step::Stale(_) => self.stats.stale += 1,
            Step::Stable(_) | Step::Exhausted => {}
        }
        if !step.is_exhausted() {
            self.stats.steps += 1;
        }
        step
    }

    /// Perform at most `steps` steps, stopping early once exhausted.
    /// Returns the number of steps taken.
    pub fn solve(&mut self, steps: usize) -> usize {
        let mut taken = 0;
        while taken < steps && !self.solve_step().is_exhausted() {
            taken += 1;
        }
        taken
    }
}

impl<L, E> SolverGeneric<L, E> {
    /// Live rectangles in id order.
    ///
    /// Borrowing; call again to iterate again.
    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle<L>> + '_ {
        self.partition.rectangles()
    }

    /// Number of live rectangles.
    pub fn len(&self) -> usize {
        self.partition.live_count()
    }

    /// True if no rectangle is live, which never holds for a valid grid.
    pub fn is_empty(&self) -> bool {
        self.partition.live_count() == 0
    }

    /// A debugging view of the ownership index.
    pub fn render(&self) -> Render<'_> {
        self.partition.render()
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// The partition being solved.
    pub fn partition(&self) -> &RectanglePartition<L> {
        &self.partition
    }

    /// Take the partition, dropping the engine.
    pub fn into_partition(self) -> RectanglePartition<L> {
        self.partition
    }

    /// The engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

/// Default solver type using the frontier engine.
pub type Solver<L> = SolverGeneric<L, FrontierQueue>;

impl<L: Copy + PartialEq> Solver<L> {
    /// Create a solver driven by the brute-force pairwise engine.
    pub fn with_pairwise(grid: LabelGrid<L>) -> SolverGeneric<L, Pairwise> {
        SolverGeneric::with_engine(grid, Pairwise::new())
    }

    /// Create a solver driven by the single-pass block-claiming engine.
    pub fn with_greedy(grid: LabelGrid<L>) -> SolverGeneric<L, Greedy> {
        SolverGeneric::with_engine(grid, Greedy::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RectId, Sides};
    use alloc::vec::Vec;

    #[test]
    fn uniform_square_takes_eight_steps() {
        let mut s = Solver::from_rows(&[[1, 1], [1, 1]]).unwrap();
        assert_eq!(s.run_to_fixpoint(), 8);
        assert_eq!(s.len(), 1);
        assert_eq!(
            s.stats(),
            RunStats {
                steps: 8,
                merges: 3,
                stale: 3
            }
        );
        assert_eq!(s.run_to_fixpoint(), 0);
        assert_eq!(s.stats().steps, 8);
    }

    #[test]
    fn budgeted_solving_resumes() {
        let mut s = Solver::from_rows(&[[1, 1], [1, 1]]).unwrap();
        assert_eq!(s.solve(3), 3);
        assert_eq!(s.len(), 3);
        assert_eq!(
            s.solve_step(),
            Step::Merged {
                survivor: RectId::new(2),
                sides: Sides::RIGHT
            }
        );
        assert_eq!(s.solve(100), 4);
        assert_eq!(s.solve(100), 0);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn zero_budget_does_nothing() {
        let mut s = Solver::from_rows(&[[1, 1]]).unwrap();
        assert_eq!(s.solve(0), 0);
        assert_eq!(s.len(), 2);
        assert_eq!(s.stats(), RunStats::default());
    }

    #[test]
    fn pairwise_solver_agrees_on_small_grid() {
        let rows = [[1, 1, 2], [1, 2, 2], [2, 2, 2]];
        let mut frontier = Solver::from_rows(&rows).unwrap();
        let mut pairwise = Solver::with_pairwise(LabelGrid::from_rows(&rows).unwrap());
        frontier.run_to_fixpoint();
        pairwise.run_to_fixpoint();
        let a: Vec<_> = frontier.rectangles().copied().collect();
        let b: Vec<_> = pairwise.rectangles().copied().collect();
        assert_eq!(a, b);
        assert_eq!(pairwise.stats().merges, pairwise.stats().steps);
    }

    #[test]
    fn greedy_steps_count_merges_and_blocks() {
        let mut s = Solver::with_greedy(LabelGrid::from_rows(&[[1, 1], [1, 1]]).unwrap());
        // Three merges, one claimed block.
        assert_eq!(s.run_to_fixpoint(), 4);
        assert_eq!(
            s.stats(),
            RunStats {
                steps: 4,
                merges: 3,
                stale: 0
            }
        );
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn rectangles_is_restartable() {
        let mut s = Solver::from_rows(&[[0, 0, 1]]).unwrap();
        s.run_to_fixpoint();
        assert_eq!(s.rectangles().count(), 2);
        assert_eq!(s.rectangles().count(), 2);
        let p = s.into_partition();
        assert_eq!(p.check_invariants(), Ok(()));
    }
}
