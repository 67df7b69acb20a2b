// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition basics.
//!
//! Build a small label grid, run the frontier engine to its fixpoint, and list
//! the resulting rectangles. Then solve the same grid with the single-pass
//! greedy engine for comparison.
//!
//! Run:
//! - `cargo run -p understory_partition_demos --example partition_basics`
//! - `RUST_LOG=understory_partition=trace cargo run -p understory_partition_demos --example partition_basics`

use understory_partition::{LabelGrid, Solver};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let grid = LabelGrid::from_rows(&[
        ['#', '#', '#', '#'],
        ['.', '#', '#', '.'],
        ['.', '.', '.', '.'],
        ['#', '#', '#', '#'],
    ])
    .unwrap();
    println!("grid:\n{grid}\n");

    let mut solver = Solver::new(grid.clone());
    let steps = solver.run_to_fixpoint();
    println!("{} rectangles after {steps} steps", solver.len());
    for rect in solver.rectangles() {
        println!(
            "  id {:>2}: rows {}..{} cols {}..{} label {:?}",
            rect.id(),
            rect.offset_row(),
            rect.end_row(),
            rect.offset_col(),
            rect.end_col(),
            rect.label()
        );
    }
    println!("\nownership:\n{}", solver.render());

    let stats = solver.stats();
    println!(
        "\nsteps={} merges={} stale={}",
        stats.steps, stats.merges, stats.stale
    );
    assert_eq!(solver.len(), 6, "the mixed-band grid settles on six rectangles");

    let mut greedy = Solver::with_greedy(grid);
    let steps = greedy.run_to_fixpoint();
    println!(
        "\ngreedy: {} rectangles after {steps} steps\n{}",
        greedy.len(),
        greedy.render()
    );
}
