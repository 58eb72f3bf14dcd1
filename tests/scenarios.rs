//! Concrete seed scenarios (§8 "Concrete scenarios"): triangle, path,
//! cycle, Mycielski-3, queen5_5, and K7 minus a matching edge, run through
//! every applicable strategy.

use graphcolor::config::{CoreConfig, GaConfig};
use graphcolor::graph::{Graph, GraphBuilder};
use graphcolor::snapshot::NullSink;
use graphcolor::strategies::common::make_rng;
use graphcolor::strategies::dsatur::dsatur;
use graphcolor::strategies::exact::exact_solver;
use graphcolor::strategies::genetic::genetic;
use graphcolor::strategies::simulated_annealing::simulated_annealing;
use graphcolor::strategies::tabu::tabu_search;
use graphcolor::strategies::welsh_powell::welsh_powell;

fn triangle() -> Graph {
    let mut b = GraphBuilder::new(3);
    b.add_edge(0, 1).unwrap();
    b.add_edge(1, 2).unwrap();
    b.add_edge(0, 2).unwrap();
    b.build()
}

fn path5() -> Graph {
    let mut b = GraphBuilder::new(5);
    for i in 0..4 {
        b.add_edge(i, i + 1).unwrap();
    }
    b.build()
}

fn cycle5() -> Graph {
    let mut b = GraphBuilder::new(5);
    for i in 0..5 {
        b.add_edge(i, (i + 1) % 5).unwrap();
    }
    b.build()
}

/// Mycielski construction applied once to a triangle: 11 vertices, 20
/// edges, chromatic number 4 (the Grötzsch graph).
fn myciel3() -> Graph {
    let mut b = GraphBuilder::new(11);
    let edges: [(usize, usize); 20] = [
        (0, 1), (0, 2), (0, 3), (0, 4),
        (1, 5), (1, 8),
        (2, 6), (2, 9),
        (3, 7), (3, 5),
        (4, 8), (4, 6),
        (5, 9), (5, 10),
        (6, 7), (6, 10),
        (7, 8), (7, 10),
        (8, 9),
        (9, 10),
    ];
    for (u, v) in edges {
        b.add_edge(u, v).unwrap();
    }
    b.build()
}

/// The 5x5 queens graph: one vertex per square, edges between squares a
/// queen attacks (same row, same column, same diagonal). Chromatic number 5.
fn queen5_5() -> Graph {
    const N: usize = 5;
    let idx = |r: usize, c: usize| r * N + c;
    let mut b = GraphBuilder::new(N * N);
    for r1 in 0..N {
        for c1 in 0..N {
            for r2 in 0..N {
                for c2 in 0..N {
                    let v1 = idx(r1, c1);
                    let v2 = idx(r2, c2);
                    if v1 >= v2 {
                        continue;
                    }
                    let same_row = r1 == r2;
                    let same_col = c1 == c2;
                    let same_diag =
                        (r1 as i64 - r2 as i64).abs() == (c1 as i64 - c2 as i64).abs();
                    if same_row || same_col || same_diag {
                        b.add_edge(v1, v2).unwrap();
                    }
                }
            }
        }
    }
    b.build()
}

/// K7 with one edge removed (a single matching edge; K7 has an odd vertex
/// count, so no perfect matching exists to remove in full). Chromatic
/// number 6.
fn k7_minus_matching_edge() -> Graph {
    let mut b = GraphBuilder::new(7);
    for i in 0..7 {
        for j in (i + 1)..7 {
            if (i, j) == (0, 1) {
                continue;
            }
            b.add_edge(i, j).unwrap();
        }
    }
    b.build()
}

fn assert_greedy_and_exact_optimal(g: &Graph, expected_chi: usize) {
    let mut sink = NullSink;
    let wp = welsh_powell(g, &mut sink);
    assert!(wp.is_valid(g));
    assert!(wp.colors_used() <= g.max_degree() + 1);

    let ds = dsatur(g, &mut sink);
    assert!(ds.is_valid(g));
    assert!(ds.colors_used() <= g.max_degree() + 1);

    let exact = exact_solver(g, &CoreConfig::default().exact, &mut sink);
    assert!(exact.is_valid(g));
    assert_eq!(exact.colors_used(), expected_chi);
    assert!(exact.colors_used() <= ds.colors_used());
}

fn assert_metaheuristics_valid_and_bounded(g: &Graph, seed: u64) {
    let mut sink = NullSink;

    let config = CoreConfig::default();
    let mut rng = make_rng(Some(seed));
    let tabu = tabu_search(g, &config.tabu, &mut rng, &mut sink);
    assert!(tabu.colors_used() <= g.max_degree() + 1);

    let mut rng = make_rng(Some(seed));
    let sa = simulated_annealing(g, &config.sa, &mut rng, &mut sink);
    assert!(sa.colors_used() <= g.max_degree() + 1);

    let ga_cfg = GaConfig {
        population_size: 24,
        max_generations: 150,
        ..GaConfig::default()
    };
    let mut rng = make_rng(Some(seed));
    let ga = genetic(g, &ga_cfg, &mut rng, &mut sink);
    assert!(ga.colors_used() <= g.max_degree() + 1);
}

#[test]
fn triangle_scenario() {
    let g = triangle();
    assert_greedy_and_exact_optimal(&g, 3);
    assert_metaheuristics_valid_and_bounded(&g, 1);
}

#[test]
fn path_scenario() {
    let g = path5();
    assert_greedy_and_exact_optimal(&g, 2);
    assert_metaheuristics_valid_and_bounded(&g, 2);
}

#[test]
fn cycle_scenario() {
    let g = cycle5();
    assert_greedy_and_exact_optimal(&g, 3);
    assert_metaheuristics_valid_and_bounded(&g, 3);
}

#[test]
fn myciel3_scenario() {
    let g = myciel3();
    assert_eq!(g.n(), 11);
    assert_eq!(g.m(), 20);
    assert_greedy_and_exact_optimal(&g, 4);
    assert_metaheuristics_valid_and_bounded(&g, 4);
}

#[test]
fn queen5_5_scenario() {
    let g = queen5_5();
    assert_eq!(g.n(), 25);
    assert_greedy_and_exact_optimal(&g, 5);
}

#[test]
fn k7_minus_matching_edge_scenario() {
    let g = k7_minus_matching_edge();
    assert_greedy_and_exact_optimal(&g, 6);
    assert_metaheuristics_valid_and_bounded(&g, 6);
}
