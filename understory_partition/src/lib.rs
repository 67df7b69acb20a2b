// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_partition --heading-base-level=0

//! Understory Partition: greedy partitioning of a labeled grid into uniform rectangles.
//!
//! Understory Partition turns a dense raster of labels (a tile map, one slice of a voxel
//! layer, a binary mask) into a sparse set of axis-aligned rectangles.
//!
//! - Every cell is covered by exactly one rectangle.
//! - Every rectangle carries a single label shared by all of its cells.
//! - Rectangles are grown by merging neighbors until no two adjacent rectangles can be glued.
//!
//! Labels are opaque: anything `Copy + PartialEq` works. The result is a local fixpoint of a
//! greedy merge, not a minimum rectangle cover.
//!
//! # Example
//!
//! ```rust
//! use understory_partition::{RectId, Solver};
//!
//! let mut solver = Solver::from_rows(&[
//!     [1, 1, 1, 1],
//!     [0, 1, 1, 0],
//!     [0, 0, 0, 0],
//!     [1, 1, 1, 1],
//! ])
//! .unwrap();
//! solver.run_to_fixpoint();
//!
//! // The top row became one 1×4 rectangle that kept the id of its first cell.
//! let top = solver.rectangles().next().unwrap();
//! assert_eq!(top.id(), RectId::new(0));
//! assert_eq!((top.rows(), top.cols(), top.label()), (1, 4, 1));
//! assert_eq!(solver.len(), 6);
//! ```
//!
//! ## Merge rule
//!
//! Two rectangles are gluable when they share a full edge (identical row span with abutting
//! columns, or identical column span with abutting rows) and carry equal labels. Their union is
//! then a rectangle, computed from bounds alone. The top-left rectangle keeps its [`RectId`];
//! the other id is retired for good. As a consequence a live id always equals the row-major
//! index of its rectangle's top-left cell.
//!
//! ## Choosing an engine
//!
//! Engines are pluggable via the [`Engine`] trait, mirroring how [`SolverGeneric`] is generic
//! over its engine and [`Solver`] picks the default.
//!
//! - [`FrontierQueue`] (default): a min-ordered work queue of rectangle ids. Each step tries
//!   one rectangle's right and bottom neighbors.
//! - [`Pairwise`]: scans every pair of live rectangles per step. Quadratic; useful as a
//!   reference in tests and as a benchmark baseline.
//! - [`Greedy`]: claims one block at a time in row-major order, growing it right and then
//!   down, and never revisits a claimed block.
//!
//! [`FrontierQueue`] and [`Pairwise`] perform the same merges in the same order, so they agree
//! on geometry and ids. [`Greedy`] produces a valid partition that may differ from theirs.
//!
//! ## Step budgets
//!
//! [`SolverGeneric::run_to_fixpoint`] runs until the engine is exhausted.
//! [`SolverGeneric::solve_step`] and [`SolverGeneric::solve`] let callers stop early; partition
//! invariants hold between any two steps, and [`RectanglePartition::check_invariants`] audits them.
//!
//! ## Debugging
//!
//! [`SolverGeneric::render`] prints the ownership index as a grid of ids, and [`LabelGrid`]
//! prints its labels the same way. Merges are traced at `trace` level and solver milestones at
//! `debug` level through [`tracing`]; no subscriber is installed.
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to dependencies. The crate itself is `no_std` and uses `alloc`.
//! - `kurbo`: `Rectangle::to_kurbo_rect` for drawing a partition.
//! - `libm`: forwards `libm` to Kurbo for `no_std` builds with the `kurbo` feature.

#![no_std]

extern crate alloc;

pub mod engine;
pub mod engines;
pub mod error;
pub mod grid;
pub mod ownership;
pub mod partition;
pub mod rect;
pub mod render;
pub mod solver;
pub mod types;

pub use engine::{Engine, Step};
pub use engines::frontier::FrontierQueue;
pub use engines::greedy::Greedy;
pub use engines::pairwise::Pairwise;
pub use error::{GridError, GridResult, InvariantError};
pub use grid::LabelGrid;
pub use ownership::OwnershipIndex;
pub use partition::RectanglePartition;
pub use rect::Rectangle;
pub use render::Render;
pub use solver::{RunStats, Solver, SolverGeneric};
pub use types::{RectId, Side, Sides};
