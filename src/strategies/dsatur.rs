//! DSATUR (§4.D): saturation-priority greedy. Always produces a valid
//! colouring; also used by the Exact solver (§4.H step 1) to obtain an
//! initial upper bound.

use std::cmp::Reverse;
use std::collections::HashSet;

use priority_queue::PriorityQueue;

use crate::coloring::Coloring;
use crate::graph::{Graph, VertexId};
use crate::snapshot::{row_from_partial, SnapshotSink};

type Priority = (usize, usize, Reverse<VertexId>);

fn priority_key(saturation: usize, remaining_degree: usize, v: VertexId) -> Priority {
    (saturation, remaining_degree, Reverse(v))
}

/// Runs DSATUR on `g`, recording a snapshot after every vertex assignment.
///
/// Priority order is `(saturation desc, remaining_degree desc, id asc)`;
/// a `PriorityQueue` repositions each uncoloured neighbour of the vertex
/// just coloured whose saturation changed.
pub fn dsatur(g: &Graph, sink: &mut dyn SnapshotSink) -> Coloring {
    let n = g.n();
    let mut colored: Vec<Option<usize>> = vec![None; n];
    if n == 0 {
        return Coloring::new(Vec::new());
    }

    let mut saturation = vec![0usize; n];
    let mut remaining_degree: Vec<usize> = (0..n).map(|v| g.degree(v)).collect();
    let mut seen_neighbor_colors: Vec<HashSet<usize>> = vec![HashSet::new(); n];

    let mut pq: PriorityQueue<VertexId, Priority> = PriorityQueue::with_capacity(n);
    for v in 0..n {
        pq.push(v, priority_key(saturation[v], remaining_degree[v], v));
    }

    for _ in 0..n {
        let (u, _) = pq.pop().expect("queue holds one entry per uncoloured vertex");

        let mut used_by_neighbors = HashSet::new();
        for w in g.neighbours(u) {
            if let Some(cw) = colored[w] {
                used_by_neighbors.insert(cw);
            }
        }
        let mut color = 0usize;
        while used_by_neighbors.contains(&color) {
            color += 1;
        }
        colored[u] = Some(color);
        sink.record(&row_from_partial(&colored));

        for w in g.neighbours(u) {
            if colored[w].is_some() {
                continue;
            }
            remaining_degree[w] -= 1;
            if seen_neighbor_colors[w].insert(color) {
                saturation[w] += 1;
            }
            pq.change_priority(&w, priority_key(saturation[w], remaining_degree[w], w));
        }
    }

    Coloring::new(
        colored
            .into_iter()
            .map(|c| c.expect("every vertex visited"))
            .collect(),
    )
}
