// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live rectangle set, its ownership index, and the merge primitive.

use alloc::vec::Vec;
use tracing::trace;

use crate::error::InvariantError;
use crate::grid::LabelGrid;
use crate::ownership::OwnershipIndex;
use crate::rect::Rectangle;
use crate::render::Render;
use crate::types::RectId;

/// All live rectangles of a grid plus the index of which one owns each cell.
///
/// Rectangles live in an arena indexed by [`RectId`]; retired slots are empty.
/// Between operations the partition always satisfies:
///
/// 1. Coverage: every cell maps to a live rectangle containing it.
/// 2. Disjointness: no two live rectangles overlap.
/// 3. Uniformity: every covered cell carries its rectangle's label.
/// 4. Live ids are unique.
///
/// [`check_invariants`](Self::check_invariants) audits all four.
#[derive(Clone, Debug)]
pub struct RectanglePartition<L> {
    grid: LabelGrid<L>,
    ownership: OwnershipIndex,
    rects: Vec<Option<Rectangle<L>>>,
    live: usize,
}

impl<L: Copy + PartialEq> RectanglePartition<L> {
    /// One 1×1 rectangle per cell, id = row-major index.
    pub fn new(grid: LabelGrid<L>) -> Self {
        let (height, width) = (grid.height(), grid.width());
        let mut rects = Vec::with_capacity(grid.area());
        for row in 0..height {
            for col in 0..width {
                let id = RectId::from_index(rects.len());
                rects.push(Some(Rectangle::unit(id, row, col, grid.label(row, col))));
            }
        }
        Self {
            ownership: OwnershipIndex::new(height, width),
            live: rects.len(),
            rects,
            grid,
        }
    }

    /// True if `a` and `b` are both live and gluable.
    pub fn is_gluable(&self, a: RectId, b: RectId) -> bool {
        match (self.rectangle(a), self.rectangle(b)) {
            (Some(ra), Some(rb)) => a != b && ra.is_gluable_to(rb),
            _ => false,
        }
    }

    /// Merge two live, gluable rectangles and return the survivor's id.
    ///
    /// The top-left rectangle survives with the merged bounds; the other is
    /// retired and its cells are handed to the survivor.
    ///
    /// Panics if either id is retired or the pair is not gluable.
    pub fn apply_merge(&mut self, a: RectId, b: RectId) -> RectId {
        let (Some(&ra), Some(&rb)) = (self.rectangle(a), self.rectangle(b)) else {
            panic!("apply_merge({a}, {b}) on a retired rectangle");
        };
        assert!(
            a != b && ra.is_gluable_to(&rb),
            "apply_merge({a}, {b}) on rectangles that are not gluable"
        );
        let merged = ra.merge(&rb);
        let survivor = merged.id();
        let retired = if survivor == a { rb } else { ra };
        self.ownership.rewrite_ownership(&retired, survivor);
        self.rects[retired.id().index()] = None;
        self.rects[survivor.index()] = Some(merged);
        self.live -= 1;
        trace!(
            survivor = survivor.get(),
            retired = retired.id().get(),
            rows = merged.rows(),
            cols = merged.cols(),
            "merged rectangles"
        );
        survivor
    }

    /// Audit every partition invariant in O(area).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let (height, width) = (self.height(), self.width());
        let mut actual = 0;
        for (slot, rect) in self.rects.iter().enumerate() {
            let Some(rect) = rect else {
                continue;
            };
            actual += 1;
            let id = rect.id();
            if id.index() != slot || rect.offset_row() * width + rect.offset_col() != slot {
                return Err(InvariantError::IdMismatch { slot, id });
            }
            if rect.end_row() > height || rect.end_col() > width {
                return Err(InvariantError::OutOfBounds { id });
            }
            for (row, col) in rect.cells() {
                let owner = self.ownership.at(row, col);
                if owner != id {
                    return Err(InvariantError::Overlap {
                        row,
                        col,
                        owner,
                        claimant: id,
                    });
                }
                if self.grid.label(row, col) != rect.label() {
                    return Err(InvariantError::LabelMismatch { row, col, owner });
                }
            }
        }
        for row in 0..height {
            for col in 0..width {
                let owner = self.ownership.at(row, col);
                if !self.rectangle(owner).is_some_and(|r| r.contains(row, col)) {
                    return Err(InvariantError::Uncovered { row, col, owner });
                }
            }
        }
        if actual != self.live {
            return Err(InvariantError::LiveCount {
                recorded: self.live,
                actual,
            });
        }
        Ok(())
    }
}

impl<L> RectanglePartition<L> {
    /// The base grid.
    pub fn grid(&self) -> &LabelGrid<L> {
        &self.grid
    }

    /// The ownership index.
    pub fn ownership(&self) -> &OwnershipIndex {
        &self.ownership
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of cells (and of id slots).
    pub fn area(&self) -> usize {
        self.grid.area()
    }

    /// Id of the rectangle owning `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> RectId {
        self.ownership.at(row, col)
    }

    /// The live rectangle with this id, or `None` if it was retired.
    pub fn rectangle(&self, id: RectId) -> Option<&Rectangle<L>> {
        self.rects.get(id.index())?.as_ref()
    }

    /// True if `id` still denotes a live rectangle.
    ///
    /// A live id is the row-major index of its rectangle's origin, so this is
    /// a single ownership lookup at that cell.
    pub fn is_live(&self, id: RectId) -> bool {
        let idx = id.index();
        if idx >= self.area() {
            return false;
        }
        let width = self.width();
        let live = self.ownership.at(idx / width, idx % width) == id;
        debug_assert_eq!(
            live,
            self.rects[idx].is_some(),
            "ownership and arena disagree on rectangle {id}"
        );
        live
    }

    /// Number of live rectangles.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Live rectangles in id order. Restartable; does not consume anything.
    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle<L>> + '_ {
        self.rects.iter().flatten()
    }

    /// The rectangle covering `(row, col)`, or `None` when out of range.
    pub fn owner_of(&self, row: usize, col: usize) -> Option<&Rectangle<L>> {
        self.rectangle(self.ownership.get(row, col)?)
    }

    /// The rectangle owning the cell right of `rect`'s top-right corner.
    pub fn right_neighbor(&self, rect: &Rectangle<L>) -> Option<&Rectangle<L>> {
        self.owner_of(rect.offset_row(), rect.end_col())
    }

    /// The rectangle owning the cell below `rect`'s bottom-left corner.
    pub fn bottom_neighbor(&self, rect: &Rectangle<L>) -> Option<&Rectangle<L>> {
        self.owner_of(rect.end_row(), rect.offset_col())
    }

    /// The rectangle owning the cell left of `rect`'s top-left corner.
    pub fn left_neighbor(&self, rect: &Rectangle<L>) -> Option<&Rectangle<L>> {
        self.owner_of(rect.offset_row(), rect.offset_col().checked_sub(1)?)
    }

    /// The rectangle owning the cell above `rect`'s top-left corner.
    pub fn top_neighbor(&self, rect: &Rectangle<L>) -> Option<&Rectangle<L>> {
        self.owner_of(rect.offset_row().checked_sub(1)?, rect.offset_col())
    }

    /// A debugging view of the ownership index.
    pub fn render(&self) -> Render<'_> {
        Render::new(&self.ownership)
    }
}
