// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared across the partition: rectangle identifiers and sides.

use core::fmt;

/// Identifier of a rectangle in a [`RectanglePartition`](crate::RectanglePartition).
///
/// Every cell of a grid starts out as its own 1×1 rectangle whose id is the
/// cell's row-major index.
///
/// ## Semantics
///
/// - When two rectangles merge, the one whose origin is the merged origin
///   (the top-left one) keeps its id and the other id is retired.
/// - A retired id is never reassigned.
/// - It follows that a live rectangle's id is always the row-major index of
///   its top-left cell, which is how stale ids are recognized in O(1).
///
/// Ids order by their raw value, which is row-major order of origins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RectId(u32);

impl RectId {
    /// Create an id from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Grid area is validated against the u32 id space at construction."
    )]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// The raw id value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The id as a slot index (row-major index of the origin cell).
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The side of a rectangle on which another rectangle lies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Lower column indices.
    Left,
    /// Higher column indices.
    Right,
    /// Lower row indices.
    Top,
    /// Higher row indices.
    Bottom,
}

impl Side {
    /// True if the shared border is a vertical line (`Left` or `Right`).
    pub const fn is_vertical_border(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

bitflags::bitflags! {
    /// The sides a surviving rectangle grew toward in one step.
    ///
    /// The survivor of a merge is always the top-left rectangle, so it only
    /// ever grows right or down.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        /// Merged with the neighbor on the right.
        const RIGHT  = 0b0000_0001;
        /// Merged with the neighbor below.
        const BOTTOM = 0b0000_0010;
    }
}

impl Sides {
    /// Number of sides in the set.
    pub const fn count(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// The growth recorded when the survivor's partner lies on `side`.
    ///
    /// `Left` and `Top` give the empty set: a partner there would have been
    /// the survivor.
    pub const fn grown_toward(side: Side) -> Self {
        match side {
            Side::Right => Self::RIGHT,
            Side::Bottom => Self::BOTTOM,
            Side::Left | Side::Top => Self::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_row_major() {
        assert!(RectId::new(3) < RectId::new(4));
        assert_eq!(RectId::from_index(7).index(), 7);
        assert_eq!(RectId::new(9).get(), 9);
    }

    #[test]
    fn sides_grown_toward() {
        let s = Sides::grown_toward(Side::Right) | Sides::grown_toward(Side::Bottom);
        assert_eq!(s, Sides::all());
        assert_eq!(s.count(), 2);
        assert_eq!(Sides::grown_toward(Side::Top), Sides::empty());
        assert_eq!(Sides::grown_toward(Side::Left).count(), 0);
        assert!(Side::Left.is_vertical_border());
        assert!(!Side::Bottom.is_vertical_border());
    }
}
