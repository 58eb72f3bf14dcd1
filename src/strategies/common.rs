//! Primitives shared by more than one strategy: RNG construction (§5), the
//! conflict-delta arithmetic behind Tabu and SA moves (§4.E, §4.F), and the
//! randomised greedy builder Tabu uses to seed each K-stage.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coloring::Coloring;
use crate::graph::{Graph, VertexId};

/// Builds the per-run RNG: seeded explicitly when the caller supplied a
/// seed (regression testing), otherwise from entropy. Never a shared or
/// global generator (§5).
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Number of neighbours of `v` already assigned `color` in `colors`.
///
/// This is the building block of every local-search move delta: a move
/// only touches edges incident to `v`, so the global conflict-count change
/// from recolouring `v` equals `conflicts_with(new) - conflicts_with(old)`.
pub fn conflicts_with(g: &Graph, colors: &[usize], v: VertexId, color: usize) -> i64 {
    g.neighbours(v).filter(|&u| colors[u] == color).count() as i64
}

/// `max(colors) + 1`, or `0` for an empty slice — the same rule
/// [`Coloring::colors_used`](crate::coloring::Coloring::colors_used) applies,
/// exposed here for strategies still working with a raw `Vec<usize>`.
pub fn colors_used(colors: &[usize]) -> usize {
    colors.iter().copied().max().map_or(0, |m| m + 1)
}

/// Total number of conflicting edges in `colors` (palette-agnostic).
pub fn total_conflicts(g: &Graph, colors: &[usize]) -> i64 {
    g.edges()
        .iter()
        .filter(|&&(u, v)| colors[u] == colors[v])
        .count() as i64
}

/// Descending-degree vertex order, ties broken by vertex id. Used by every
/// strategy that needs a "colour the hardest vertices first" traversal.
pub fn degree_descending_order(g: &Graph) -> Vec<VertexId> {
    let mut order: Vec<VertexId> = (0..g.n()).collect();
    order.sort_by(|&a, &b| g.degree(b).cmp(&g.degree(a)).then(a.cmp(&b)));
    order
}

/// The randomised greedy builder of §4.E step 1: vertices in
/// descending-degree order each uniformly pick a colour unused by any
/// already-coloured neighbour, falling back to the colour minimising
/// same-coloured neighbours when none is free.
pub fn randomized_greedy_build(g: &Graph, k: usize, rng: &mut StdRng) -> Coloring {
    let n = g.n();
    let order = degree_descending_order(g);
    let mut colors = vec![usize::MAX; n];

    for &v in &order {
        let mut allowed: Vec<usize> = (0..k)
            .filter(|&c| {
                g.neighbours(v)
                    .all(|u| colors[u] == usize::MAX || colors[u] != c)
            })
            .collect();
        let chosen = if !allowed.is_empty() {
            let idx = rng.gen_range(0..allowed.len());
            allowed.swap_remove(idx)
        } else {
            (0..k)
                .min_by_key(|&c| {
                    g.neighbours(v)
                        .filter(|&u| colors[u] == c)
                        .count()
                })
                .expect("k >= 1")
        };
        colors[v] = chosen;
    }

    Coloring::new(colors)
}
