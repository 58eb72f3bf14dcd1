//! Strategy comparison benchmarks, run on a handful of fixed graphs.
//! Ambient tooling only (§ AMBIENT STACK "Test tooling"); not part of the
//! correctness surface.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use graphcolor::config::CoreConfig;
use graphcolor::graph::{Graph, GraphBuilder};
use graphcolor::snapshot::NullSink;
use graphcolor::strategies::common::make_rng;
use graphcolor::strategies::dsatur::dsatur;
use graphcolor::strategies::genetic::genetic;
use graphcolor::strategies::simulated_annealing::simulated_annealing;
use graphcolor::strategies::tabu::tabu_search;
use graphcolor::strategies::welsh_powell::welsh_powell;

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

fn mycielski3() -> Graph {
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

fn bench_strategies(c: &mut Criterion) {
    let graphs: Vec<(&str, Graph)> = vec![("myciel3", mycielski3()), ("queen5_5", queen5_5())];
    let config = CoreConfig::default();

    let mut group = c.benchmark_group("strategies");
    for (name, g) in &graphs {
        group.bench_with_input(BenchmarkId::new("welsh_powell", name), g, |b, g| {
            b.iter(|| welsh_powell(g, &mut NullSink));
        });
        group.bench_with_input(BenchmarkId::new("dsatur", name), g, |b, g| {
            b.iter(|| dsatur(g, &mut NullSink));
        });
        group.bench_with_input(BenchmarkId::new("tabu_search", name), g, |b, g| {
            b.iter(|| {
                let mut rng = make_rng(Some(1));
                tabu_search(g, &config.tabu, &mut rng, &mut NullSink)
            });
        });
        group.bench_with_input(BenchmarkId::new("simulated_annealing", name), g, |b, g| {
            b.iter(|| {
                let mut rng = make_rng(Some(1));
                simulated_annealing(g, &config.sa, &mut rng, &mut NullSink)
            });
        });
        group.bench_with_input(BenchmarkId::new("genetic", name), g, |b, g| {
            b.iter(|| {
                let mut rng = make_rng(Some(1));
                genetic(g, &config.ga, &mut rng, &mut NullSink)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
