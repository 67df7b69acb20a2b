// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine implementations for different merge strategies.
//!
//! - `frontier`: min-ordered work queue of rectangle ids; the default.
//! - `pairwise`: brute-force scan over all pairs; a reference and benchmark baseline.
//! - `greedy`: claims one maximal block at a time in a single scanline pass.
//!
//! Merge order
//! -----------
//! The frontier and pairwise engines visit rectangles smallest id first and, for a given
//! rectangle, try its right neighbor before its bottom neighbor. A merge can
//! only enable a new merge for the survivor itself or for the rectangles
//! owning the cells just left of and above the survivor's origin, so the
//! frontier re-queues exactly those, and skips rectangles that found nothing
//! to glue until such a merge touches them. The result is that both engines
//! perform the same sequence of merges and end with identical rectangles and
//! ids.
//!
//! The greedy engine follows its own order. It reaches a valid partition in
//! one pass but may end with different rectangles.

pub mod frontier;
pub mod greedy;
pub mod pairwise;
