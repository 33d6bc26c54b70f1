//! Benchmarks for the cut-list optimizer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_cutlist_core::{bill_of_materials, CabinetSpec, CutListOptimizer, PartRequirement};

fn mixed_requirements(kinds: usize) -> Vec<PartRequirement> {
    (0..kinds)
        .map(|i| {
            let a = 6.0 + (i * 7 % 80) as f64;
            let b = 4.0 + (i * 11 % 40) as f64;
            PartRequirement::new(format!("P{}", i), a, b).with_quantity((i % 5 + 1) as i64)
        })
        .collect()
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    let optimizer = CutListOptimizer::default();

    for kinds in [10, 100, 1000] {
        let reqs = mixed_requirements(kinds);
        group.bench_with_input(BenchmarkId::from_parameter(kinds), &reqs, |b, reqs| {
            b.iter(|| optimizer.optimize(black_box(reqs)))
        });
    }

    group.finish();
}

fn bench_kitchen(c: &mut Criterion) {
    let cabinets: Vec<CabinetSpec> = (0..12)
        .map(|i| CabinetSpec::new(format!("Base{}", i), 15.0 + 3.0 * i as f64, 34.5))
        .collect();
    let reqs = bill_of_materials(&cabinets);
    let optimizer = CutListOptimizer::default();

    c.bench_function("kitchen_12_cabinets", |b| {
        b.iter(|| optimizer.optimize(black_box(&reqs)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let jobs: Vec<Vec<PartRequirement>> = (0..32).map(|_| mixed_requirements(100)).collect();
    let optimizer = CutListOptimizer::default();

    c.bench_function("batch_32_jobs", |b| {
        b.iter(|| optimizer.optimize_batch(black_box(&jobs)))
    });
}

criterion_group!(benches, bench_optimize, bench_kitchen, bench_batch);
criterion_main!(benches);
