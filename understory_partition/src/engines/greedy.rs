// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block-claiming scanline engine. One pass over the grid; no revisits.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::trace;

use crate::engine::{Engine, Step};
use crate::partition::RectanglePartition;
use crate::rect::Rectangle;
use crate::types::{RectId, Sides};

/// Builds maximal blocks one at a time, in row-major order of their origins.
///
/// At each unclaimed rectangle the engine grows a block right for as long as
/// the neighbor there is gluable and unclaimed. It then grows the block down
/// one strip at a time: the strip directly below must be covered by
/// unclaimed rectangles of the block's label that share one row span and fit
/// the block's column span. A strip made of several pieces is first joined
/// left to right, then glued to the block. When neither direction works the
/// block is claimed for good and reported as [`Step::Stable`].
///
/// Every step performs at most one merge, so partition invariants hold
/// between steps. The result covers the grid with uniform rectangles but can
/// differ from the fixpoint the other engines reach, because a claimed block
/// is never reconsidered.
#[derive(Clone, Default)]
pub struct Greedy {
    cursor: usize,
    block: Option<Block>,
    claimed: Vec<bool>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Block {
    id: RectId,
    growing_right: bool,
}

/// What the strip below a block allows.
enum Strip {
    /// One rectangle spanning the block's columns.
    Whole(RectId),
    /// The first two of several pieces.
    Pieces(RectId, RectId),
    Blocked,
}

impl Greedy {
    /// Create the engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `id` heads a block that is finished.
    pub fn is_claimed(&self, id: RectId) -> bool {
        self.claimed.get(id.index()).copied().unwrap_or(false)
    }

    /// Id of the block currently being grown, if any.
    pub fn current_block(&self) -> Option<RectId> {
        self.block.map(|b| b.id)
    }

    /// Classify the cells directly below `block`.
    fn strip_below<L: Copy + PartialEq>(
        &self,
        partition: &RectanglePartition<L>,
        block: &Rectangle<L>,
    ) -> Strip {
        let row = block.end_row();
        if row >= partition.height() {
            return Strip::Blocked;
        }
        let mut pieces = [None; 2];
        let mut strip_rows = None;
        let mut col = block.offset_col();
        let mut count = 0_usize;
        while col < block.end_col() {
            let Some(piece) = partition.owner_of(row, col) else {
                return Strip::Blocked;
            };
            let fits = !self.is_claimed(piece.id())
                && piece.is_label_compatible(block)
                && piece.offset_row() == row
                && piece.offset_col() == col
                && piece.end_col() <= block.end_col()
                && strip_rows.is_none_or(|rows| rows == piece.rows());
            if !fits {
                return Strip::Blocked;
            }
            strip_rows = Some(piece.rows());
            if let Some(slot) = pieces.get_mut(count) {
                *slot = Some(piece.id());
            }
            count += 1;
            col = piece.end_col();
        }
        match pieces {
            [Some(whole), None] => Strip::Whole(whole),
            [Some(first), Some(second)] => Strip::Pieces(first, second),
            _ => Strip::Blocked,
        }
    }

    /// Perform the next merge for `block`, or `None` once it cannot grow.
    fn grow<L: Copy + PartialEq>(
        &mut self,
        partition: &mut RectanglePartition<L>,
        block: Block,
    ) -> Option<Step> {
        let rect = *partition.rectangle(block.id)?;
        if block.growing_right {
            if let Some(&right) = partition.right_neighbor(&rect)
                && !self.is_claimed(right.id())
                && rect.is_gluable_to(&right)
            {
                partition.apply_merge(block.id, right.id());
                return Some(Step::Merged {
                    survivor: block.id,
                    sides: Sides::RIGHT,
                });
            }
            self.block = Some(Block {
                growing_right: false,
                ..block
            });
        }
        match self.strip_below(partition, &rect) {
            Strip::Whole(strip) => {
                partition.apply_merge(block.id, strip);
                Some(Step::Merged {
                    survivor: block.id,
                    sides: Sides::BOTTOM,
                })
            }
            Strip::Pieces(first, second) => {
                let survivor = partition.apply_merge(first, second);
                Some(Step::Merged {
                    survivor,
                    sides: Sides::RIGHT,
                })
            }
            Strip::Blocked => None,
        }
    }
}

impl Debug for Greedy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Greedy")
            .field("cursor", &self.cursor)
            .field("block", &self.current_block())
            .field("claimed", &self.claimed.iter().filter(|c| **c).count())
            .finish_non_exhaustive()
    }
}

impl<L: Copy + PartialEq> Engine<L> for Greedy {
    fn seed(&mut self, partition: &RectanglePartition<L>) {
        self.cursor = 0;
        self.block = None;
        self.claimed = vec![false; partition.area()];
    }

    fn step(&mut self, partition: &mut RectanglePartition<L>) -> Step {
        if self.block.is_none() {
            while self.cursor < self.claimed.len() {
                let id = RectId::from_index(self.cursor);
                self.cursor += 1;
                if partition.is_live(id) && !self.is_claimed(id) {
                    self.block = Some(Block {
                        id,
                        growing_right: true,
                    });
                    break;
                }
            }
        }
        let Some(block) = self.block else {
            return Step::Exhausted;
        };
        if let Some(step) = self.grow(partition, block) {
            return step;
        }
        self.block = None;
        self.claimed[block.id.index()] = true;
        trace!(id = block.id.get(), "claimed block");
        Step::Stable(block.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::LabelGrid;

    fn seeded(rows: &[&[u8]]) -> (RectanglePartition<u8>, Greedy) {
        let partition = RectanglePartition::new(LabelGrid::from_rows(rows).unwrap());
        let mut greedy = Greedy::new();
        greedy.seed(&partition);
        (partition, greedy)
    }

    fn run(p: &mut RectanglePartition<u8>, g: &mut Greedy) -> usize {
        let mut steps = 0;
        while !g.step(p).is_exhausted() {
            assert_eq!(p.check_invariants(), Ok(()));
            steps += 1;
        }
        steps
    }

    fn shapes(p: &RectanglePartition<u8>) -> Vec<(u32, usize, usize)> {
        p.rectangles()
            .map(|r| (r.id().get(), r.rows(), r.cols()))
            .collect()
    }

    #[test]
    fn uniform_square_grows_right_then_down() {
        let (mut p, mut g) = seeded(&[&[1, 1], &[1, 1]]);
        let id = RectId::new;
        let expected = [
            Step::Merged {
                survivor: id(0),
                sides: Sides::RIGHT,
            },
            Step::Merged {
                survivor: id(2),
                sides: Sides::RIGHT,
            },
            Step::Merged {
                survivor: id(0),
                sides: Sides::BOTTOM,
            },
            Step::Stable(id(0)),
            Step::Exhausted,
        ];
        for want in expected {
            assert_eq!(g.step(&mut p), want);
            assert_eq!(p.check_invariants(), Ok(()));
        }
        assert!(g.is_claimed(id(0)));
        assert_eq!(g.current_block(), None);
        assert_eq!(g.step(&mut p), Step::Exhausted);
    }

    #[test]
    fn quadrants_become_four_blocks() {
        let (mut p, mut g) = seeded(&[&[1, 1, 2, 2], &[1, 1, 2, 2], &[3, 3, 4, 4], &[3, 3, 4, 4]]);
        run(&mut p, &mut g);
        assert_eq!(
            shapes(&p),
            [(0, 2, 2), (2, 2, 2), (8, 2, 2), (10, 2, 2)]
        );
    }

    #[test]
    fn staircase_keeps_rectangular_blocks() {
        let (mut p, mut g) = seeded(&[&[1, 1, 2], &[1, 2, 2], &[2, 2, 2]]);
        run(&mut p, &mut g);
        assert_eq!(
            shapes(&p),
            [(0, 1, 2), (2, 3, 1), (3, 1, 1), (4, 2, 1), (6, 1, 1)]
        );
    }

    #[test]
    fn partial_strip_is_not_joined() {
        // The row below matches only in its first cell, so it stays untouched.
        let (mut p, mut g) = seeded(&[&[1, 1], &[1, 0]]);
        assert_eq!(run(&mut p, &mut g), 4);
        assert_eq!(shapes(&p), [(0, 1, 2), (2, 1, 1), (3, 1, 1)]);
    }

    #[test]
    fn claimed_cells_stop_right_growth() {
        // 1 claims the right column first; 2 must not grow into it.
        let (mut p, mut g) = seeded(&[&[0, 1], &[1, 1]]);
        run(&mut p, &mut g);
        assert_eq!(shapes(&p), [(0, 1, 1), (1, 2, 1), (2, 1, 1)]);
        assert!(g.is_claimed(RectId::new(2)));
    }

    #[test]
    fn right_growth_comes_first() {
        // Row 0 claims both cells, so the column below the origin never
        // joins it. The unclaimed leftovers still glue.
        let (mut p, mut g) = seeded(&[&[1, 1], &[1, 2], &[1, 2]]);
        run(&mut p, &mut g);
        assert_eq!(shapes(&p), [(0, 1, 2), (2, 2, 1), (3, 2, 1)]);
    }

    #[test]
    fn reseeding_a_solved_partition_only_claims() {
        let (mut p, mut g) = seeded(&[&[4, 4, 4], &[4, 4, 4]]);
        run(&mut p, &mut g);
        assert_eq!(p.live_count(), 1);
        g.seed(&p);
        assert!(!g.is_claimed(RectId::new(0)));
        assert_eq!(g.step(&mut p), Step::Stable(RectId::new(0)));
        assert_eq!(g.step(&mut p), Step::Exhausted);
    }
}
