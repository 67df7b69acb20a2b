// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense cell → rectangle ownership index.

use alloc::vec::Vec;

use crate::rect::Rectangle;
use crate::types::RectId;

/// Dense `height × width` map from every cell to the id of the rectangle
/// covering it.
///
/// This is the single source of truth for "which rectangle owns this cell";
/// rectangles themselves never refer back into the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipIndex {
    height: usize,
    width: usize,
    owners: Vec<RectId>,
}

impl OwnershipIndex {
    /// Every cell owned by the unit rectangle carrying its row-major index.
    pub(crate) fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            owners: (0..height * width).map(RectId::from_index).collect(),
        }
    }

    /// Id of the rectangle owning `(row, col)`.
    ///
    /// Panics if the cell is out of range.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> RectId {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside ownership index"
        );
        self.owners[row * self.width + col]
    }

    /// Id of the rectangle owning `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<RectId> {
        (row < self.height && col < self.width).then(|| self.owners[row * self.width + col])
    }

    /// Point every cell of `retired` at `survivor`.
    ///
    /// Cost is the retired rectangle's area.
    pub(crate) fn rewrite_ownership<L>(&mut self, retired: &Rectangle<L>, survivor: RectId) {
        debug_assert!(
            retired.end_row() <= self.height && retired.end_col() <= self.width,
            "retired rectangle {} extends past the ownership index",
            retired.id()
        );
        for row in retired.offset_row()..retired.end_row() {
            let start = row * self.width;
            self.owners[start + retired.offset_col()..start + retired.end_col()].fill(survivor);
        }
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// All owners, row-major.
    pub fn as_slice(&self) -> &[RectId] {
        &self.owners
    }

    /// Owners of one row.
    pub fn row(&self, row: usize) -> &[RectId] {
        &self.owners[row * self.width..(row + 1) * self.width]
    }
}
