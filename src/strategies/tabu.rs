//! Tabu Search / TabuCol (§4.E): conflict-repair local search with a tabu
//! list, wrapped in the k-descent outer loop shared with SA and GA.

use rand::rngs::StdRng;

use crate::coloring::Coloring;
use crate::config::TabuConfig;
use crate::graph::{Graph, VertexId};
use crate::snapshot::{row_from_coloring, NullSink, SnapshotSink};
use crate::strategies::common::{conflicts_with, randomized_greedy_build, total_conflicts};
use crate::strategies::welsh_powell::welsh_powell;

/// Runs TabuCol on `g`. `K0 = max_degree + 1`; the k-descent tries smaller
/// palettes until the inner loop fails to reach zero conflicts within its
/// iteration budget, at which point the best (smallest-K) valid colouring
/// found is returned — or a Welsh–Powell fallback when no K-stage ever
/// reached feasibility.
pub fn tabu_search(
    g: &Graph,
    config: &TabuConfig,
    rng: &mut StdRng,
    sink: &mut dyn SnapshotSink,
) -> Coloring {
    let n = g.n();
    if n == 0 {
        return Coloring::new(Vec::new());
    }

    let k0 = g.max_degree() + 1;
    let tenure = config.tenure(n) as i64;
    let max_iterations = config.max_iterations(n);

    let mut best_valid: Option<Vec<usize>> = None;
    let mut k = k0;

    loop {
        let mut colors = randomized_greedy_build(g, k, rng).into_vec();
        let mut conflicts = total_conflicts(g, &colors);

        if conflicts > 0 {
            let mut tabu = vec![vec![i64::MIN; k]; n];
            let mut best_conflicts_this_stage = conflicts;

            for t in 0..max_iterations {
                if conflicts == 0 {
                    break;
                }
                let conflicted: Vec<VertexId> = (0..n)
                    .filter(|&v| conflicts_with(g, &colors, v, colors[v]) > 0)
                    .collect();

                // (vertex, new_color, delta, is_tabu) of the best admissible move found so far
                let mut best_move: Option<(VertexId, usize, i64, bool)> = None;
                for &v in &conflicted {
                    let old_c = colors[v];
                    let cur = conflicts_with(g, &colors, v, old_c);
                    for new_c in 0..k {
                        if new_c == old_c {
                            continue;
                        }
                        let delta = conflicts_with(g, &colors, v, new_c) - cur;
                        let is_tabu = tabu[v][new_c] > t as i64;
                        let aspiration = conflicts + delta < best_conflicts_this_stage;
                        if is_tabu && !aspiration {
                            continue;
                        }
                        best_move = Some(match best_move {
                            None => (v, new_c, delta, is_tabu),
                            Some(cur_best) => {
                                if delta < cur_best.2 {
                                    (v, new_c, delta, is_tabu)
                                } else if delta == cur_best.2 && cur_best.3 && !is_tabu {
                                    (v, new_c, delta, is_tabu)
                                } else {
                                    cur_best
                                }
                            }
                        });
                    }
                }

                match best_move {
                    None => break, // no admissible move: this K-stage is exhausted
                    Some((v, new_c, delta, _)) => {
                        let old_c = colors[v];
                        colors[v] = new_c;
                        conflicts += delta;
                        tabu[v][old_c] = t as i64 + tenure;
                        if delta < 0 {
                            sink.record(&row_from_coloring(&Coloring::new(colors.clone())));
                        }
                        if conflicts < best_conflicts_this_stage {
                            best_conflicts_this_stage = conflicts;
                        }
                    }
                }
            }
        }

        if conflicts == 0 {
            best_valid = Some(colors);
            if k == 1 {
                break;
            }
            k -= 1;
        } else {
            break;
        }
    }

    let result = match best_valid {
        Some(colors) => Coloring::new(colors),
        None => welsh_powell(g, &mut NullSink),
    };
    sink.record(&row_from_coloring(&result));
    result
}
