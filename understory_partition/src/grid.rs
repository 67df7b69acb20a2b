// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validated base grid of labels.

use alloc::vec::Vec;
use core::fmt;

use crate::error::{GridError, GridResult};

/// A non-empty, rectangular grid of labels stored row-major.
///
/// Labels are opaque to the partition; only equality matters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelGrid<L> {
    height: usize,
    width: usize,
    cells: Vec<L>,
}

impl<L: Copy> LabelGrid<L> {
    /// Build a grid from a slice of rows.
    ///
    /// Fails on an empty grid, an empty row, or rows of unequal length.
    pub fn from_rows<R: AsRef<[L]>>(rows: &[R]) -> GridResult<Self> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let width = first.as_ref().len();
        let height = rows.len();
        let mut cells = Vec::with_capacity(checked_area(height, width)?);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build a grid from a flat row-major buffer.
    pub fn from_vec(height: usize, width: usize, cells: Vec<L>) -> GridResult<Self> {
        if height == 0 {
            return Err(GridError::Empty);
        }
        if width == 0 {
            return Err(GridError::EmptyRow { row: 0 });
        }
        let expected = checked_area(height, width)?;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut f: impl FnMut(usize, usize) -> L,
    ) -> GridResult<Self> {
        if height == 0 {
            return Err(GridError::Empty);
        }
        if width == 0 {
            return Err(GridError::EmptyRow { row: 0 });
        }
        let mut cells = Vec::with_capacity(checked_area(height, width)?);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// The label at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<L> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// The label at `(row, col)`.
    ///
    /// Panics if the cell is out of range.
    pub fn label(&self, row: usize, col: usize) -> L {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        self.cells[row * self.width + col]
    }
}

impl<L> LabelGrid<L> {
    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cells.
    pub const fn area(&self) -> usize {
        self.height * self.width
    }

    /// All labels, row-major.
    pub fn as_slice(&self) -> &[L] {
        &self.cells
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[L]> + '_ {
        self.cells.chunks_exact(self.width)
    }
}

fn checked_area(height: usize, width: usize) -> GridResult<usize> {
    height
        .checked_mul(width)
        .filter(|&area| area <= u32::MAX as usize)
        .ok_or(GridError::TooLarge { height, width })
}

impl<L: fmt::Display> fmt::Display for LabelGrid<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, label) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{label}")?;
            }
        }
        Ok(())
    }
}
