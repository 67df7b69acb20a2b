// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Partition: build a grid, solve, inspect rectangles.

use understory_partition::{LabelGrid, Solver};

fn main() {
    let grid = LabelGrid::from_rows(&[[0, 0, 1], [0, 0, 1], [2, 2, 2]]).unwrap();
    let mut solver = Solver::new(grid);
    let steps = solver.run_to_fixpoint();
    println!("fixpoint after {steps} steps");

    for rect in solver.rectangles() {
        println!(
            "id={} at ({}, {}) size {}x{} label={}",
            rect.id(),
            rect.offset_row(),
            rect.offset_col(),
            rect.rows(),
            rect.cols(),
            rect.label()
        );
    }
    println!("{}", solver.render());
}
