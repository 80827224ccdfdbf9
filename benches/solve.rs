//! Benchmarks for building and solving trusses.
//!
//! ```bash
//! cargo bench --bench solve
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trussjoints::{load, point, Truss};

/// Pratt truss with `panels` panels of unit width and depth, listed as in the demo binary.
fn pratt(panels: usize) -> (Vec<trussjoints::Point>, Vec<Vec<usize>>) {
    let bottom = panels + 1;
    let mut nodes: Vec<_> = (0..bottom).map(|i| point(i as f64, 0.0)).collect();
    nodes.extend((1..panels).map(|i| point(i as f64, 1.0)));

    let top = |i: usize| bottom + i - 1;
    let mut connections = vec![Vec::new(); nodes.len()];
    for i in 0..panels {
        connections[i].push(i + 1);
    }
    connections[0].push(top(1));
    connections[panels].push(top(panels - 1));
    for i in 1..panels {
        connections[i].push(top(i));
        if i + 1 < panels {
            connections[top(i)].push(top(i + 1));
        }
        // Diagonals slope down towards midspan.
        if 2 * i < panels {
            connections[top(i)].push(i + 1);
        } else if 2 * i > panels {
            connections[top(i)].push(i - 1);
        }
    }
    (nodes, connections)
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("pratt_solve");
    for panels in [4, 8, 16, 32] {
        let (nodes, connections) = pratt(panels);
        group.bench_with_input(BenchmarkId::from_parameter(panels), &panels, |b, &panels| {
            b.iter(|| {
                let mut truss = Truss::new(nodes.clone(), connections.clone()).expect("valid");
                truss.set_support(0, [true, true]).expect("support");
                truss.set_support(panels, [false, true]).expect("support");
                for joint in 1..panels {
                    truss.set_load(joint, load(0.0, -1.0)).expect("load");
                }
                black_box(truss.solve());
                black_box(truss.compute_weight().expect("solved"))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
