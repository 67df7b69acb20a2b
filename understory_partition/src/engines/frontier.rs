// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Min-ordered frontier engine. Linear in the grid area; the default.

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Reverse;
use core::fmt::Debug;

use tracing::trace;

use crate::engine::{Engine, Step};
use crate::partition::RectanglePartition;
use crate::types::{RectId, Sides};

/// Frontier of rectangle ids awaiting a grow attempt, smallest id first.
///
/// Each step pops one id and tries to glue its right neighbor, then its
/// bottom neighbor. A neighbor that cannot be glued is queued so that it gets
/// its own attempt. After a merge the survivor is queued again, together with
/// the owners of the cells just left of and above its origin, since those are
/// the only rectangles whose own right or bottom attempt the merge can enable.
///
/// A rectangle whose attempt found nothing to glue is marked stable and is
/// not queued again until a merge touches it as survivor or as one of those
/// two owners. Every queue entry past the seed is then paid for by a merge, so
/// a full run takes at most four steps per cell.
///
/// Retired ids are not removed eagerly; they are reported as
/// [`Step::Stale`] when popped.
#[derive(Clone, Default)]
pub struct FrontierQueue {
    pending: BinaryHeap<Reverse<RectId>>,
    queued: Vec<bool>,
    stable: Vec<bool>,
}

impl FrontierQueue {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued ids, stale ones included.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// True if `id` is currently queued.
    pub fn is_pending(&self, id: RectId) -> bool {
        self.queued.get(id.index()).copied().unwrap_or(false)
    }

    /// True if `id` found nothing to glue and no merge has touched it since.
    pub fn is_stable(&self, id: RectId) -> bool {
        self.stable.get(id.index()).copied().unwrap_or(false)
    }

    /// Queue a neighbor whose glue attempt failed, unless it is already settled.
    fn push_neighbor(&mut self, id: RectId) {
        if !self.is_stable(id) {
            self.push(id);
        }
    }

    /// Clear the stable mark of `id` and queue it.
    fn wake(&mut self, id: RectId) {
        if let Some(flag) = self.stable.get_mut(id.index()) {
            *flag = false;
        }
        self.push(id);
    }

    fn push(&mut self, id: RectId) {
        if let Some(flag) = self.queued.get_mut(id.index())
            && !*flag
        {
            *flag = true;
            self.pending.push(Reverse(id));
        }
    }
}

impl Debug for FrontierQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrontierQueue")
            .field("pending", &self.pending.len())
            .field("next", &self.pending.peek().map(|Reverse(id)| *id))
            .field("stable", &self.stable.iter().filter(|s| **s).count())
            .finish_non_exhaustive()
    }
}

impl<L: Copy + PartialEq> Engine<L> for FrontierQueue {
    fn seed(&mut self, partition: &RectanglePartition<L>) {
        self.pending.clear();
        self.queued = vec![false; partition.area()];
        self.stable = vec![false; partition.area()];
        for rect in partition.rectangles() {
            self.push(rect.id());
        }
    }

    fn step(&mut self, partition: &mut RectanglePartition<L>) -> Step {
        let Some(Reverse(id)) = self.pending.pop() else {
            return Step::Exhausted;
        };
        self.queued[id.index()] = false;
        if !partition.is_live(id) {
            trace!(id = id.get(), "skipped stale frontier entry");
            return Step::Stale(id);
        }
        let Some(&start) = partition.rectangle(id) else {
            return Step::Stale(id);
        };

        let mut rect = start;
        let mut sides = Sides::empty();
        if let Some(&right) = partition.right_neighbor(&rect) {
            if rect.is_gluable_to(&right) {
                partition.apply_merge(id, right.id());
                rect = rect.merge(&right);
                sides |= Sides::RIGHT;
            } else {
                self.push_neighbor(right.id());
            }
        }
        if let Some(&below) = partition.bottom_neighbor(&rect) {
            if rect.is_gluable_to(&below) {
                partition.apply_merge(id, below.id());
                rect = rect.merge(&below);
                sides |= Sides::BOTTOM;
            } else {
                self.push_neighbor(below.id());
            }
        }
        debug_assert!(
            partition.rectangle(id) == Some(&rect),
            "frontier lost track of rectangle {id}"
        );

        if sides.is_empty() {
            self.stable[id.index()] = true;
            return Step::Stable(id);
        }
        self.wake(id);
        if let Some(left) = partition.left_neighbor(&rect).map(|r| r.id()) {
            self.wake(left);
        }
        if let Some(top) = partition.top_neighbor(&rect).map(|r| r.id()) {
            self.wake(top);
        }
        Step::Merged {
            survivor: id,
            sides,
        }
    }
}
