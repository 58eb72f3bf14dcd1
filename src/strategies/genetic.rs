//! Genetic Algorithm (§4.G): population + GPX-lite crossover + conflict-
//! focused mutation + greedy repair, inside the shared k-descent loop.

use rand::rngs::StdRng;
use rand::Rng;

use crate::coloring::Coloring;
use crate::config::GaConfig;
use crate::graph::{Graph, VertexId};
use crate::repair::greedy_repair;
use crate::snapshot::{row_from_coloring, NullSink, SnapshotSink};
use crate::strategies::common::{colors_used, total_conflicts};
use crate::strategies::welsh_powell::welsh_powell;

const MUTATION_DECAY: f64 = 0.98;
const MUTATION_FLOOR: f64 = 0.005;
const ELITE_SIZE: usize = 2;

#[derive(Debug, Clone)]
struct Individual {
    colors: Vec<usize>,
    fitness: u64,
}

/// `conflicts * n^2 + colors_used`, lexicographically prioritising a drop
/// in conflicts over a drop in colour count (§4.G "Fitness").
fn fitness(g: &Graph, colors: &[usize], n: usize) -> u64 {
    let conflicts = total_conflicts(g, colors) as u64;
    let n = n as u64;
    conflicts * n * n + colors_used(colors) as u64
}

fn random_individual(g: &Graph, k: usize, rng: &mut StdRng, n: usize) -> Individual {
    let seed: Vec<usize> = (0..n).map(|_| rng.gen_range(0..k)).collect();
    let colors = greedy_repair(g, &seed, k).into_vec();
    let fit = fitness(g, &colors, n);
    Individual { colors, fitness: fit }
}

/// Tournament selection of size 3, uniform sampling with replacement.
fn tournament_select<'a>(population: &'a [Individual], rng: &mut StdRng) -> &'a Individual {
    let mut best: Option<&Individual> = None;
    for _ in 0..3 {
        let idx = rng.gen_range(0..population.len());
        let candidate = &population[idx];
        best = Some(match best {
            None => candidate,
            Some(b) if candidate.fitness < b.fitness => candidate,
            Some(b) => b,
        });
    }
    best.expect("tournament size is 3 > 0")
}

/// GPX-lite crossover: per-position uniform parent choice, any value
/// outside `[0, k)` resampled uniformly (defensive; parents are always
/// already palette-bounded).
fn crossover(parent_a: &[usize], parent_b: &[usize], k: usize, rng: &mut StdRng) -> Vec<usize> {
    parent_a
        .iter()
        .zip(parent_b.iter())
        .map(|(&a, &b)| {
            let chosen = if rng.gen_bool(0.5) { a } else { b };
            if chosen < k {
                chosen
            } else {
                rng.gen_range(0..k)
            }
        })
        .collect()
}

/// Conflict-focused mutation: recolour one random vertex with the colour
/// minimising its number of same-coloured neighbours.
fn mutate(g: &Graph, colors: &mut [usize], k: usize, rng: &mut StdRng) {
    let v: VertexId = rng.gen_range(0..colors.len());
    let best_c = (0..k)
        .min_by_key(|&c| g.neighbours(v).filter(|&u| colors[u] == c).count())
        .expect("k >= 1");
    colors[v] = best_c;
}

/// Runs the Genetic Algorithm on `g`. `K0 = max_degree + 1`; each K-stage
/// evolves a population for up to `config.max_generations` generations,
/// stopping early once a conflict-free individual appears.
pub fn genetic(
    g: &Graph,
    config: &GaConfig,
    rng: &mut StdRng,
    sink: &mut dyn SnapshotSink,
) -> Coloring {
    let n = g.n();
    if n == 0 {
        return Coloring::new(Vec::new());
    }

    let k0 = g.max_degree() + 1;
    let mut best_valid: Option<Vec<usize>> = None;
    let mut best_overall: Option<(Vec<usize>, i64, usize)> = None;
    let mut k = k0;

    loop {
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| random_individual(g, k, rng, n))
            .collect();
        let mut mutation_rate = config.initial_mutation_rate;

        let mut global_best_fitness = population
            .iter()
            .map(|ind| ind.fitness)
            .min()
            .expect("population_size >= 2");
        {
            let best = population.iter().min_by_key(|i| i.fitness).unwrap();
            sink.record(&row_from_coloring(&Coloring::new(best.colors.clone())));
        }

        for _generation in 0..config.max_generations {
            let current_conflicts = population
                .iter()
                .map(|ind| total_conflicts(g, &ind.colors))
                .min()
                .unwrap_or(0);
            if current_conflicts == 0 {
                break;
            }

            let mut indices: Vec<usize> = (0..population.len()).collect();
            indices.sort_by_key(|&i| population[i].fitness);
            let mut next_population: Vec<Individual> = indices
                .iter()
                .take(ELITE_SIZE.min(population.len()))
                .map(|&i| population[i].clone())
                .collect();

            while next_population.len() < population.len() {
                let parent_a = tournament_select(&population, rng);
                let parent_b = tournament_select(&population, rng);
                let mut child_colors = crossover(&parent_a.colors, &parent_b.colors, k, rng);
                if rng.gen::<f64>() < mutation_rate {
                    mutate(g, &mut child_colors, k, rng);
                }
                let repaired = greedy_repair(g, &child_colors, k).into_vec();
                let fit = fitness(g, &repaired, n);
                next_population.push(Individual {
                    colors: repaired,
                    fitness: fit,
                });
            }

            population = next_population;
            mutation_rate = (mutation_rate * MUTATION_DECAY).max(MUTATION_FLOOR);

            let generation_best_fitness = population.iter().map(|i| i.fitness).min().unwrap();
            if generation_best_fitness < global_best_fitness {
                global_best_fitness = generation_best_fitness;
                let best = population.iter().min_by_key(|i| i.fitness).unwrap();
                sink.record(&row_from_coloring(&Coloring::new(best.colors.clone())));
            }
        }

        let stage_best = population
            .into_iter()
            .min_by_key(|i| i.fitness)
            .expect("population_size >= 2");
        let stage_conflicts = total_conflicts(g, &stage_best.colors);
        let stage_colors_used = colors_used(&stage_best.colors);

        let better_than_overall = match &best_overall {
            None => true,
            Some((_, c, u)) => {
                stage_conflicts < *c || (stage_conflicts == *c && stage_colors_used < *u)
            }
        };
        if better_than_overall {
            best_overall = Some((stage_best.colors.clone(), stage_conflicts, stage_colors_used));
        }

        if stage_conflicts == 0 {
            best_valid = Some(stage_best.colors);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::snapshot::{NullSink, VecSink};
    use crate::strategies::common::make_rng;

    fn triangle() -> Graph {
        let mut b = GraphBuilder::new(3);
        b.add_edge(0, 1).unwrap();
        b.add_edge(1, 2).unwrap();
        b.add_edge(0, 2).unwrap();
        b.build()
    }

    #[test]
    fn triangle_reaches_three_colors() {
        let g = triangle();
        let cfg = GaConfig {
            population_size: 20,
            max_generations: 100,
            ..GaConfig::default()
        };
        let mut rng = make_rng(Some(4));
        let mut sink = NullSink;
        let c = genetic(&g, &cfg, &mut rng, &mut sink);
        assert!(c.is_valid(&g));
        assert_eq!(c.colors_used(), 3);
    }

    #[test]
    fn path_reaches_two_colors_with_fixed_seed() {
        let mut b = GraphBuilder::new(5);
        for i in 0..4 {
            b.add_edge(i, i + 1).unwrap();
        }
        let g = b.build();
        let cfg = GaConfig {
            population_size: 20,
            max_generations: 100,
            ..GaConfig::default()
        };
        let mut rng = make_rng(Some(99));
        let mut sink = NullSink;
        let c = genetic(&g, &cfg, &mut rng, &mut sink);
        assert!(c.is_valid(&g));
        assert_eq!(c.colors_used(), 2);
    }

    #[test]
    fn never_exceeds_max_degree_plus_one() {
        let g = triangle();
        let cfg = GaConfig::default();
        let mut rng = make_rng(Some(2));
        let mut sink = NullSink;
        let c = genetic(&g, &cfg, &mut rng, &mut sink);
        assert!(c.colors_used() <= g.max_degree() + 1);
    }

    #[test]
    fn empty_graph_yields_empty_coloring() {
        let g = GraphBuilder::new(0).build();
        let cfg = GaConfig::default();
        let mut rng = make_rng(Some(1));
        let mut sink = NullSink;
        let c = genetic(&g, &cfg, &mut rng, &mut sink);
        assert_eq!(c.len(), 0);
    }

    #[test]
    fn final_snapshot_matches_returned_coloring() {
        let g = triangle();
        let cfg = GaConfig {
            population_size: 20,
            max_generations: 100,
            ..GaConfig::default()
        };
        let mut rng = make_rng(Some(55));
        let mut sink = VecSink::new();
        let c = genetic(&g, &cfg, &mut rng, &mut sink);
        let last = sink.rows.last().unwrap();
        let as_colors: Vec<usize> = last.iter().map(|&v| v as usize).collect();
        assert_eq!(as_colors, c.as_slice());
    }
}
