//! Greedy repair under a bounded palette (§4.B) — the shared primitive that
//! turns an arbitrary, possibly-invalid seed assignment into a colouring
//! that never uses more than `K` colours. Tabu, SA and GA all legalise
//! their working solutions through this routine.

use crate::coloring::Coloring;
use crate::graph::{Graph, VertexId};

/// Turns `seed` (length `g.n()`, values not necessarily in `[0, k)` and not
/// necessarily conflict-free) into a colouring using only colours in
/// `[0, k)`.
///
/// Vertices are visited in descending-degree order (ties broken by vertex
/// id, for a stable, deterministic traversal). For each vertex, the seed
/// colour is kept when it is both in range and unused among already-visited
/// neighbours; otherwise the smallest unused colour is taken; if every
/// colour in `[0, k)` is already used by a processed neighbour, the colour
/// minimising the number of same-coloured processed neighbours is chosen
/// (ties broken by smaller colour index). This introduces at most one new
/// conflict per affected vertex and never exceeds `k` colours.
///
/// Panics if `seed.len() != g.n()` or if `k == 0` with `g.n() > 0` — both
/// are caller bugs, not data-dependent failures.
pub fn greedy_repair(g: &Graph, seed: &[usize], k: usize) -> Coloring {
    let n = g.n();
    assert_eq!(seed.len(), n, "greedy_repair: seed length must match graph order");
    assert!(k > 0 || n == 0, "greedy_repair: palette size must be >= 1");

    let mut order: Vec<VertexId> = (0..n).collect();
    order.sort_by(|&a, &b| g.degree(b).cmp(&g.degree(a)).then(a.cmp(&b)));

    let mut color: Vec<Option<usize>> = vec![None; n];

    for &v in &order {
        let mut used = vec![false; k];
        for u in g.neighbours(v) {
            if let Some(cu) = color[u] {
                if cu < k {
                    used[cu] = true;
                }
            }
        }
        let chosen = if seed[v] < k && !used[seed[v]] {
            seed[v]
        } else if let Some(c) = (0..k).find(|&c| !used[c]) {
            c
        } else {
            (0..k)
                .min_by_key(|&c| {
                    g.neighbours(v)
                        .filter(|&u| color[u] == Some(c))
                        .count()
                })
                .expect("k >= 1 guaranteed above")
        };
        color[v] = Some(chosen);
    }

    Coloring::new(color.into_iter().map(|c| c.expect("every vertex visited")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn triangle() -> Graph {
        let mut b = GraphBuilder::new(3);
        b.add_edge(0, 1).unwrap();
        b.add_edge(1, 2).unwrap();
        b.add_edge(0, 2).unwrap();
        b.build()
    }

    #[test]
    fn repairs_all_same_seed_into_k_colors() {
        let g = triangle();
        let repaired = greedy_repair(&g, &[0, 0, 0], 3);
        assert!(repaired.is_valid(&g));
        assert!(repaired.iter().all(|&c| c < 3));
    }

    #[test]
    fn never_exceeds_palette_even_when_infeasible() {
        let g = triangle();
        // only 2 colours for a triangle: infeasible, but must still respect K.
        let repaired = greedy_repair(&g, &[0, 0, 0], 2);
        assert!(repaired.iter().all(|&c| c < 2));
        assert_eq!(repaired.conflict_count(&g), 1);
    }

    #[test]
    fn idempotent_on_an_already_valid_coloring() {
        let g = triangle();
        let seed = vec![0usize, 1, 2];
        let repaired = greedy_repair(&g, &seed, 3);
        assert_eq!(repaired.as_slice(), seed.as_slice());
    }

    #[test]
    fn empty_graph_repairs_to_empty_coloring() {
        let g = GraphBuilder::new(0).build();
        let repaired = greedy_repair(&g, &[], 1);
        assert_eq!(repaired.len(), 0);
    }
}
