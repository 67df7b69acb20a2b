// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kurbo output.
//!
//! Partition a tile map and convert each rectangle into a `kurbo::Rect` in
//! pixel space, as a renderer would before filling them.
//!
//! Run:
//! - `cargo run -p understory_partition_demos --example partition_kurbo`

use kurbo::Rect;
use understory_partition::{LabelGrid, Solver};

const TILE: f64 = 16.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tile {
    Water,
    Sand,
    Grass,
}

fn main() {
    let map = LabelGrid::from_fn(12, 16, |r, c| match (r, c) {
        (0..=2, _) => Tile::Water,
        (_, 0..=3) => Tile::Sand,
        (3..=5, _) => Tile::Sand,
        _ => Tile::Grass,
    })
    .unwrap();

    let mut solver = Solver::new(map);
    solver.run_to_fixpoint();

    let mut total_area = 0.0;
    for rect in solver.rectangles() {
        let px: Rect = rect.to_kurbo_rect(TILE, TILE);
        total_area += px.area();
        println!("{:?} -> {px:?}", rect.label());
    }
    println!(
        "{} rectangles for {} tiles",
        solver.len(),
        solver.partition().area()
    );
    assert_eq!(total_area, 12.0 * 16.0 * TILE * TILE, "rectangles must tile the map");
}
