// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for grid validation and partition audits.

use thiserror::Error;

use crate::types::RectId;

/// Result type for grid construction.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised while validating a base grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GridError {
    /// The grid has no rows.
    #[error("grid has no rows")]
    Empty,

    /// A row has no cells.
    #[error("row {row} has no cells")]
    EmptyRow {
        /// Index of the empty row.
        row: usize,
    },

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A flat cell buffer does not match the requested extents.
    #[error("expected {expected} cells for the given extents, found {found}")]
    LengthMismatch {
        /// `height * width`.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },

    /// The grid has more cells than rectangle ids can address.
    #[error("grid of {height}x{width} cells exceeds the rectangle id space")]
    TooLarge {
        /// Number of rows.
        height: usize,
        /// Number of columns.
        width: usize,
    },
}

/// A broken partition invariant, reported by
/// [`RectanglePartition::check_invariants`](crate::RectanglePartition::check_invariants).
///
/// These indicate an engine bug, never bad input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvariantError {
    /// A cell is owned by an id that is not a live rectangle containing it.
    #[error("cell ({row}, {col}) is owned by {owner}, which is not a live rectangle covering it")]
    Uncovered {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// Id recorded in the ownership index.
        owner: RectId,
    },

    /// A live rectangle's bounds include a cell owned by another rectangle.
    #[error("rectangle {claimant} covers cell ({row}, {col}) owned by {owner}")]
    Overlap {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// Id recorded in the ownership index.
        owner: RectId,
        /// Rectangle whose bounds include the cell.
        claimant: RectId,
    },

    /// A cell's base label differs from its rectangle's label.
    #[error("cell ({row}, {col}) does not carry the label of rectangle {owner}")]
    LabelMismatch {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// Rectangle covering the cell.
        owner: RectId,
    },

    /// A live rectangle's id does not match its arena slot or its origin cell.
    #[error("rectangle {id} is stored in slot {slot} or has a different origin")]
    IdMismatch {
        /// Arena slot holding the rectangle.
        slot: usize,
        /// Id carried by the rectangle.
        id: RectId,
    },

    /// A live rectangle extends past the grid.
    #[error("rectangle {id} extends past the grid")]
    OutOfBounds {
        /// Offending rectangle.
        id: RectId,
    },

    /// The recorded live count disagrees with the arena.
    #[error("partition records {recorded} live rectangles, found {actual}")]
    LiveCount {
        /// Count maintained by merges.
        recorded: usize,
        /// Count found in the arena.
        actual: usize,
    },
}
