//! Simulated Annealing (§4.F): temperature-driven moves inside the same
//! k-descent framing as Tabu Search.

use rand::rngs::StdRng;
use rand::Rng;

use crate::coloring::Coloring;
use crate::config::SaConfig;
use crate::graph::Graph;
use crate::repair::greedy_repair;
use crate::snapshot::{row_from_coloring, NullSink, SnapshotSink};
use crate::strategies::common::{colors_used, conflicts_with, total_conflicts};
use crate::strategies::welsh_powell::welsh_powell;

/// Proposes a colour in `[0, k)` different from `current`, uniformly at
/// random. With `k == 1` there is no alternative; `current` is returned
/// (the resulting move always has delta 0).
fn propose_color(rng: &mut StdRng, k: usize, current: usize) -> usize {
    if k <= 1 {
        return current;
    }
    let candidate = rng.gen_range(0..k - 1);
    if candidate >= current {
        candidate + 1
    } else {
        candidate
    }
}

/// Runs Simulated Annealing on `g`. `K0 = max_degree + 1`. Each K-stage
/// legalises a random seed with Greedy Repair, then runs a fixed number of
/// geometric-cooling iterations; the run returns the smallest-K valid
/// colouring found, or (if no stage ever reached zero conflicts) the
/// best-seen state overall by `(conflicts, colours used)`.
pub fn simulated_annealing(
    g: &Graph,
    config: &SaConfig,
    rng: &mut StdRng,
    sink: &mut dyn SnapshotSink,
) -> Coloring {
    let n = g.n();
    if n == 0 {
        return Coloring::new(Vec::new());
    }

    let k0 = g.max_degree() + 1;
    let iters = config.iters(n);

    let mut best_valid: Option<Vec<usize>> = None;
    let mut best_overall: Option<(Vec<usize>, i64, usize)> = None;
    let mut k = k0;

    loop {
        let seed: Vec<usize> = (0..n).map(|_| rng.gen_range(0..k)).collect();
        let mut colors = greedy_repair(g, &seed, k).into_vec();
        let mut conflicts = total_conflicts(g, &colors);

        let alpha = config.alpha(n);
        let mut temperature = config.t0;

        let mut stage_best_state = colors.clone();
        let mut stage_best_conflicts = conflicts;
        let mut stage_best_colors = colors_used(&colors);

        for _ in 0..iters {
            if conflicts == 0 {
                break;
            }
            let v = rng.gen_range(0..n);
            let old_c = colors[v];
            let new_c = propose_color(rng, k, old_c);
            let delta = conflicts_with(g, &colors, v, new_c) - conflicts_with(g, &colors, v, old_c);
            let accept = delta <= 0 || rng.gen::<f64>() < (-(delta as f64) / temperature).exp();
            if accept {
                colors[v] = new_c;
                conflicts += delta;
                sink.record(&row_from_coloring(&Coloring::new(colors.clone())));
            }
            let cu = colors_used(&colors);
            if conflicts < stage_best_conflicts
                || (conflicts == stage_best_conflicts && cu < stage_best_colors)
            {
                stage_best_conflicts = conflicts;
                stage_best_colors = cu;
                stage_best_state = colors.clone();
            }
            temperature *= alpha;
        }

        let better_than_overall = match &best_overall {
            None => true,
            Some((_, c, u)) => {
                stage_best_conflicts < *c || (stage_best_conflicts == *c && stage_best_colors < *u)
            }
        };
        if better_than_overall {
            best_overall = Some((stage_best_state.clone(), stage_best_conflicts, stage_best_colors));
        }

        if stage_best_conflicts == 0 {
            best_valid = Some(stage_best_state);
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
        None => match best_overall {
            Some((colors, _, _)) => Coloring::new(colors),
            None => welsh_powell(g, &mut NullSink),
        },
    };
    sink.record(&row_from_coloring(&result));
    result
}
