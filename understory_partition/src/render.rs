// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text view of the ownership index for debugging.

use core::fmt;

use crate::ownership::OwnershipIndex;
use crate::types::RectId;

/// Borrowed view of an ownership index that prints as a grid of ids.
///
/// Each row is one line; ids are left-justified to the width of the largest
/// id so columns line up.
///
/// ```
/// use understory_partition::Solver;
///
/// let mut solver = Solver::from_rows(&[[1, 1, 2], [3, 3, 2]]).unwrap();
/// solver.run_to_fixpoint();
/// assert_eq!(solver.render().to_string(), "0 0 2\n3 3 2");
/// ```
#[derive(Copy, Clone)]
pub struct Render<'a> {
    ownership: &'a OwnershipIndex,
}

impl<'a> Render<'a> {
    pub(crate) fn new(ownership: &'a OwnershipIndex) -> Self {
        Self { ownership }
    }

    /// Dense row-major ids.
    pub fn ids(&self) -> &'a [RectId] {
        self.ownership.as_slice()
    }

    /// Ids of one row.
    pub fn row(&self, row: usize) -> &'a [RectId] {
        self.ownership.row(row)
    }

    fn column_width(&self) -> usize {
        let max = self.ids().iter().map(|id| id.get()).max().unwrap_or(0);
        max.checked_ilog10().unwrap_or(0) as usize + 1
    }
}

impl fmt::Debug for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Render")
            .field("height", &self.ownership.height())
            .field("width", &self.ownership.width())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.column_width();
        for row in 0..self.ownership.height() {
            if row > 0 {
                writeln!(f)?;
            }
            let ids = self.row(row);
            for (col, id) in ids.iter().enumerate() {
                if col + 1 == ids.len() {
                    write!(f, "{id}")?;
                } else {
                    write!(f, "{:<w$} ", id.get())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn pads_to_widest_id() {
        let idx = OwnershipIndex::new(3, 4);
        let render = Render::new(&idx);
        assert_eq!(render.to_string(), "0  1  2  3\n4  5  6  7\n8  9  10 11");
        assert_eq!(render.ids().len(), 12);
        assert_eq!(render.row(2)[3], RectId::new(11));
    }

    #[test]
    fn single_cell() {
        let idx = OwnershipIndex::new(1, 1);
        assert_eq!(Render::new(&idx).to_string(), "0");
    }
}
