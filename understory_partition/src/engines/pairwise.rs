// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brute-force pairwise engine. Quadratic per step; a reference for tests and benches.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::engine::{Engine, Step};
use crate::partition::RectanglePartition;
use crate::types::{RectId, Sides};

/// Scans every ordered pair of live rectangles, in id order, and merges the
/// first gluable pair it finds.
///
/// One merge per step. A scan that finds nothing reports [`Step::Exhausted`].
#[derive(Clone, Default)]
pub struct Pairwise {
    scratch: Vec<RectId>,
}

impl Pairwise {
    /// Create the engine.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Debug for Pairwise {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pairwise")
            .field("last_scan", &self.scratch.len())
            .finish_non_exhaustive()
    }
}

impl<L: Copy + PartialEq> Engine<L> for Pairwise {
    fn seed(&mut self, _partition: &RectanglePartition<L>) {
        self.scratch.clear();
    }

    fn step(&mut self, partition: &mut RectanglePartition<L>) -> Step {
        self.scratch.clear();
        self.scratch.extend(partition.rectangles().map(|r| r.id()));
        for &a in &self.scratch {
            let Some(&ra) = partition.rectangle(a) else {
                continue;
            };
            for &b in &self.scratch {
                let Some(&rb) = partition.rectangle(b) else {
                    continue;
                };
                if a == b || !ra.is_gluable_to(&rb) {
                    continue;
                }
                let survivor = partition.apply_merge(a, b);
                let (first, second) = if survivor == a { (ra, rb) } else { (rb, ra) };
                let sides = first.touching_side(&second).map_or(Sides::empty(), Sides::grown_toward);
                return Step::Merged { survivor, sides };
            }
        }
        Step::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::LabelGrid;

    #[test]
    fn merges_first_pair_in_id_order() {
        let grid = LabelGrid::from_rows(&[[1, 1], [1, 1]]).unwrap();
        let mut p = RectanglePartition::new(grid);
        let mut e = Pairwise::new();
        e.seed(&p);
        assert_eq!(
            e.step(&mut p),
            Step::Merged {
                survivor: RectId::new(0),
                sides: Sides::RIGHT
            }
        );
        assert_eq!(
            e.step(&mut p),
            Step::Merged {
                survivor: RectId::new(2),
                sides: Sides::RIGHT
            }
        );
        assert_eq!(
            e.step(&mut p),
            Step::Merged {
                survivor: RectId::new(0),
                sides: Sides::BOTTOM
            }
        );
        assert_eq!(e.step(&mut p), Step::Exhausted);
        assert_eq!(e.step(&mut p), Step::Exhausted);
        assert_eq!(p.check_invariants(), Ok(()));
    }

    #[test]
    fn checkerboard_never_merges() {
        let grid = LabelGrid::from_fn(3, 3, |r, c| (r + c) % 2).unwrap();
        let mut p = RectanglePartition::new(grid);
        let mut e = Pairwise::new();
        e.seed(&p);
        assert_eq!(e.step(&mut p), Step::Exhausted);
        assert_eq!(p.live_count(), 9);
    }
}
