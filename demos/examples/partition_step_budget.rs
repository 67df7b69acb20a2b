// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step budgets.
//!
//! Drive the solver a few steps at a time, printing the ownership index after
//! each chunk, then compare against the pairwise reference engine.
//!
//! Run:
//! - `cargo run -p understory_partition_demos --example partition_step_budget`

use understory_partition::{LabelGrid, Solver, Step};

const BUDGET: usize = 4;

fn main() {
    let rows = [[1, 1, 2, 2], [1, 1, 2, 2], [3, 3, 3, 2]];
    let mut solver = Solver::new(LabelGrid::from_rows(&rows).unwrap());

    let mut chunk = 0;
    loop {
        let taken = solver.solve(BUDGET);
        chunk += 1;
        println!(
            "chunk {chunk}: {taken} steps, {} live rectangles\n{}\n",
            solver.len(),
            solver.render()
        );
        if taken < BUDGET {
            break;
        }
    }

    // Single steps report what happened.
    let mut fresh = Solver::new(LabelGrid::from_rows(&rows).unwrap());
    loop {
        match fresh.solve_step() {
            Step::Merged { survivor, sides } => println!("merged into {survivor} via {sides:?}"),
            Step::Stable(id) => println!("{id} is stable"),
            Step::Stale(id) => println!("{id} was retired earlier"),
            Step::Exhausted => break,
        }
    }

    let mut reference = Solver::with_pairwise(LabelGrid::from_rows(&rows).unwrap());
    reference.run_to_fixpoint();
    assert_eq!(
        reference.render().ids(),
        solver.render().ids(),
        "frontier and pairwise engines should agree"
    );
    println!("\npairwise reference agrees: {} rectangles", reference.len());
}
