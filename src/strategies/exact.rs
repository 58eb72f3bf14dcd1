//! Exact branch-and-bound (§4.H): DSATUR-seeded search for an optimal
//! colouring, i.e. one using exactly χ(G) colours.
//!
//! The search tree can reach depth `n` (§9 "Recursion in Exact"); this is
//! implemented as an explicit stack of frames rather than native recursion
//! so a pathologically large instance cannot overflow the host stack.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::Instant;

use crate::coloring::Coloring;
use crate::config::ExactConfig;
use crate::graph::{Graph, VertexId};
use crate::snapshot::{row_from_coloring, NullSink, SnapshotSink};
use crate::strategies::dsatur::dsatur;

struct Frame {
    vertex: VertexId,
    /// candidate colours to try, in order: existing colours first (those
    /// with no conflict at `vertex`), then a new colour if it still leaves
    /// room to improve on the incumbent.
    choices: Vec<usize>,
    next_idx: usize,
    /// `current_max_colour` as inherited from the parent, i.e. before
    /// `vertex` is assigned.
    max_before: i64,
    /// whether `vertex` currently holds the colour of `choices[next_idx - 1]`
    /// and needs clearing before the next choice is tried or the frame pops.
    assigned: bool,
}

/// Saturation of an uncoloured vertex equals the number of distinct
/// colours among its coloured neighbours; since no coloured vertex ever
/// holds a colour above `current_max_colour`, restricting the count to
/// `[0, current_max_colour]` (as §4.H phrases it) is equivalent to counting
/// over all colours actually present.
fn select_branch_vertex(g: &Graph, color: &[Option<usize>]) -> VertexId {
    (0..g.n())
        .filter(|&v| color[v].is_none())
        .max_by_key(|&v| {
            let mut distinct = HashSet::new();
            for u in g.neighbours(v) {
                if let Some(c) = color[u] {
                    distinct.insert(c);
                }
            }
            (distinct.len(), g.degree(v), Reverse(v))
        })
        .expect("called only while an uncoloured vertex remains")
}

fn build_choices(
    g: &Graph,
    color: &[Option<usize>],
    vertex: VertexId,
    current_max: i64,
    best_k: usize,
) -> Vec<usize> {
    let mut choices = Vec::new();
    if current_max >= 0 {
        for c in 0..=(current_max as usize) {
            let conflict = g.neighbours(vertex).any(|u| color[u] == Some(c));
            if !conflict {
                choices.push(c);
            }
        }
    }
    if current_max + 2 < best_k as i64 {
        choices.push((current_max + 1) as usize);
    }
    choices
}

fn enter(g: &Graph, color: &[Option<usize>], current_max: i64, best_k: usize) -> Option<Frame> {
    if current_max + 1 >= best_k as i64 {
        return None; // a completion from here cannot beat the incumbent
    }
    let vertex = select_branch_vertex(g, color);
    let choices = build_choices(g, color, vertex, current_max, best_k);
    if choices.is_empty() {
        return None;
    }
    Some(Frame {
        vertex,
        choices,
        next_idx: 0,
        max_before: current_max,
        assigned: false,
    })
}

/// Runs the exact branch-and-bound solver on `g`, returning a colouring
/// using exactly χ(G) colours. `progress` governs how often a diagnostic
/// line is logged (§4.H "Progress reporting"); it never aborts the search.
pub fn exact_solver(g: &Graph, progress: &ExactConfig, sink: &mut dyn SnapshotSink) -> Coloring {
    let n = g.n();
    if n == 0 {
        return Coloring::new(Vec::new());
    }

    let initial = dsatur(g, &mut NullSink);
    let mut best_k = initial.colors_used();
    let mut best_solution: Vec<usize> = initial.into_vec();

    let mut color: Vec<Option<usize>> = vec![None; n];
    let mut coloured_count = 0usize;
    let mut stack: Vec<Frame> = Vec::new();
    if let Some(root) = enter(g, &color, -1, best_k) {
        stack.push(root);
    }

    let start = Instant::now();
    let mut last_log = start;
    let progress_interval = std::time::Duration::from_secs_f64(progress.progress_interval_secs);
    let mut nodes_visited: u64 = 0;

    while let Some(top) = stack.last_mut() {
        if top.assigned {
            color[top.vertex] = None;
            coloured_count -= 1;
            top.assigned = false;
        }
        if top.next_idx >= top.choices.len() {
            stack.pop();
            continue;
        }

        let vertex = top.vertex;
        let max_before = top.max_before;
        let choice = top.choices[top.next_idx];
        top.next_idx += 1;

        color[vertex] = Some(choice);
        coloured_count += 1;
        top.assigned = true;
        nodes_visited += 1;

        if last_log.elapsed() >= progress_interval {
            tracing::info!(
                elapsed_s = start.elapsed().as_secs_f64(),
                coloured = coloured_count,
                total = n,
                palette = max_before.max(choice as i64) + 1,
                best_k,
                nodes = nodes_visited,
                "exact solver progress"
            );
            last_log = Instant::now();
        }

        let new_max = max_before.max(choice as i64);

        if coloured_count == n {
            if new_max + 1 < best_k as i64 {
                best_k = (new_max + 1) as usize;
                best_solution = color
                    .iter()
                    .map(|c| c.expect("full assignment"))
                    .collect();
                sink.record(&row_from_coloring(&Coloring::new(best_solution.clone())));
            }
            continue; // undone at the top of the next iteration
        }

        if let Some(frame) = enter(g, &color, new_max, best_k) {
            stack.push(frame);
        }
        // else: dead branch, undone at the top of the next iteration
    }

    let result = Coloring::new(best_solution);
    sink.record(&row_from_coloring(&result));
    result
}
