// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle geometry and the compatibility predicates used by the merge engines.

use crate::types::{RectId, Side};

/// An axis-aligned block of cells carrying a single label.
///
/// Covers rows `offset_row..offset_row + rows` and columns
/// `offset_col..offset_col + cols`. Geometry never changes in place; growing a
/// rectangle goes through [`Rectangle::merge`], which returns a new value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle<L> {
    id: RectId,
    offset_row: usize,
    offset_col: usize,
    rows: usize,
    cols: usize,
    label: L,
}

impl<L> Rectangle<L> {
    /// Create a rectangle. Extents must be non-zero.
    pub fn new(
        id: RectId,
        offset_row: usize,
        offset_col: usize,
        rows: usize,
        cols: usize,
        label: L,
    ) -> Self {
        assert!(rows > 0 && cols > 0, "rectangle extents must be non-zero");
        Self {
            id,
            offset_row,
            offset_col,
            rows,
            cols,
            label,
        }
    }

    /// Identifier of the rectangle.
    pub const fn id(&self) -> RectId {
        self.id
    }

    /// First row covered.
    pub const fn offset_row(&self) -> usize {
        self.offset_row
    }

    /// First column covered.
    pub const fn offset_col(&self) -> usize {
        self.offset_col
    }

    /// Extent along rows (height in cells).
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Extent along columns (width in cells).
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// One past the last row covered.
    pub const fn end_row(&self) -> usize {
        self.offset_row + self.rows
    }

    /// One past the last column covered.
    pub const fn end_col(&self) -> usize {
        self.offset_col + self.cols
    }

    /// Number of cells covered.
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the cell lies inside the rectangle.
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.offset_row
            && row < self.end_row()
            && col >= self.offset_col
            && col < self.end_col()
    }

    /// Iterate covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (r0, r1) = (self.offset_row, self.end_row());
        let (c0, c1) = (self.offset_col, self.end_col());
        (r0..r1).flat_map(move |row| (c0..c1).map(move |col| (row, col)))
    }

    /// The side of `self` on which `other` lies, if their boundaries meet
    /// along a line with positive overlap.
    ///
    /// Partial contact counts; diagonal (corner-only) contact does not.
    pub fn touching_side(&self, other: &Self) -> Option<Side> {
        let rows_overlap = self.offset_row < other.end_row() && other.offset_row < self.end_row();
        let cols_overlap = self.offset_col < other.end_col() && other.offset_col < self.end_col();
        if rows_overlap {
            if self.end_col() == other.offset_col {
                return Some(Side::Right);
            }
            if other.end_col() == self.offset_col {
                return Some(Side::Left);
            }
        }
        if cols_overlap {
            if self.end_row() == other.offset_row {
                return Some(Side::Bottom);
            }
            if other.end_row() == self.offset_row {
                return Some(Side::Top);
            }
        }
        None
    }

    /// True if the two rectangles share a full border segment along exactly
    /// one axis: identical row ranges with abutting columns, or identical
    /// column ranges with abutting rows.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        match self.touching_side(other) {
            Some(side) if side.is_vertical_border() => {
                self.offset_row == other.offset_row && self.rows == other.rows
            }
            Some(_) => self.offset_col == other.offset_col && self.cols == other.cols,
            None => false,
        }
    }

    /// Lengths each rectangle presents along the shared border, as
    /// `(self, other)`.
    ///
    /// Row extents for a vertical border, column extents for a horizontal one.
    /// `None` if the rectangles do not touch along a border.
    pub fn touching_edge_length(&self, other: &Self) -> Option<(usize, usize)> {
        self.touching_side(other).map(|side| {
            if side.is_vertical_border() {
                (self.rows, other.rows)
            } else {
                (self.cols, other.cols)
            }
        })
    }
}

impl<L: Copy> Rectangle<L> {
    pub(crate) fn unit(id: RectId, row: usize, col: usize, label: L) -> Self {
        Self {
            id,
            offset_row: row,
            offset_col: col,
            rows: 1,
            cols: 1,
            label,
        }
    }

    /// The label shared by every covered cell.
    pub const fn label(&self) -> L {
        self.label
    }
}

impl<L: Copy + PartialEq> Rectangle<L> {
    /// True if both rectangles carry the same label.
    pub fn is_label_compatible(&self, other: &Self) -> bool {
        self.label == other.label
    }

    /// True if merging the two rectangles yields a rectangle: they are
    /// adjacent, label-compatible, and the shared border spans each
    /// rectangle's entire adjacent edge.
    pub fn is_gluable_to(&self, other: &Self) -> bool {
        self.is_adjacent(other)
            && self.is_label_compatible(other)
            && matches!(self.touching_edge_length(other), Some((a, b)) if a == b)
    }

    /// Merge two gluable rectangles by bound arithmetic.
    ///
    /// The result starts at the componentwise minimum offset, sums the
    /// lengths along the merge axis, and keeps the orthogonal length. It
    /// carries the id of the top-left operand regardless of argument order.
    ///
    /// Panics if the rectangles are not gluable.
    pub fn merge(&self, other: &Self) -> Self {
        assert!(
            self.is_gluable_to(other),
            "rectangles {} and {} are not gluable",
            self.id,
            other.id
        );
        let (first, second) = if (other.offset_row, other.offset_col)
            < (self.offset_row, self.offset_col)
        {
            (other, self)
        } else {
            (self, other)
        };
        match first.touching_side(second) {
            Some(Side::Right) => Self {
                cols: first.cols + second.cols,
                ..*first
            },
            _ => Self {
                rows: first.rows + second.rows,
                ..*first
            },
        }
    }
}

#[cfg(feature = "kurbo")]
impl<L> Rectangle<L> {
    /// Convert to a [`kurbo::Rect`] with cells of `cell_w` × `cell_h`.
    ///
    /// Columns map to `x` and rows to `y`.
    pub fn to_kurbo_rect(&self, cell_w: f64, cell_h: f64) -> kurbo::Rect {
        let x0 = self.offset_col as f64 * cell_w;
        let y0 = self.offset_row as f64 * cell_h;
        kurbo::Rect::new(
            x0,
            y0,
            x0 + self.cols as f64 * cell_w,
            y0 + self.rows as f64 * cell_h,
        )
    }
}
