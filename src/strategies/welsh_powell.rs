//! Welsh–Powell (§4.C): the degree-ordered greedy baseline. Always
//! produces a valid colouring using at most Δ+1 colours.
//!
//! The spec note carried from the source repository (§9 "Open question")
//! applies here: only this implementation is wired by the dispatcher, a
//! stub variant is not re-created.

use crate::coloring::Coloring;
use crate::graph::Graph;
use crate::snapshot::{row_from_partial, SnapshotSink};
use crate::strategies::common::degree_descending_order;

/// Runs Welsh–Powell on `g`, recording a snapshot after every vertex
/// assignment (§4.I trigger table).
pub fn welsh_powell(g: &Graph, sink: &mut dyn SnapshotSink) -> Coloring {
    let n = g.n();
    let order = degree_descending_order(g);
    let mut colored: Vec<Option<usize>> = vec![None; n];
    let mut remaining = n;
    let mut current_color = 0usize;

    while remaining > 0 {
        for &v in &order {
            if colored[v].is_some() {
                continue;
            }
            let blocked = g.neighbours(v).any(|u| colored[u] == Some(current_color));
            if !blocked {
                colored[v] = Some(current_color);
                remaining -= 1;
                sink.record(&row_from_partial(&colored));
            }
        }
        current_color += 1;
    }

    Coloring::new(
        colored
            .into_iter()
            .map(|c| c.expect("every vertex visited"))
            .collect(),
    )
}
