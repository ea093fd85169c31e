//! Criterion benchmarks for the multiplication strategies.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use strassen_core::strategy::{
    Multiplier, NaiveStrategy, ParallelStrassenStrategy, StrassenStrategy,
};
use strassen_core::{Matrix, Options};

fn operand(side: usize, seed: usize) -> Matrix<f64> {
    Matrix::from_fn(side, side, |r, c| ((r * 31 + c * 17 + seed) % 97) as f64 / 97.0).unwrap()
}

fn bench_strategies(c: &mut Criterion) {
    let opts = Options {
        strassen_threshold: 32,
        ..Default::default()
    };
    let strategies: Vec<Box<dyn Multiplier<f64>>> = vec![
        Box::new(NaiveStrategy::new()),
        Box::new(StrassenStrategy::new(&opts)),
        Box::new(ParallelStrassenStrategy::new(&opts)),
    ];

    let sides: Vec<usize> = vec![64, 100, 128, 256];

    for strat in &strategies {
        let mut group = c.benchmark_group(strat.name());
        for &side in &sides {
            let a = operand(side, 1);
            let b = operand(side, 2);
            group.bench_with_input(BenchmarkId::from_parameter(side), &side, |bench, _| {
                bench.iter(|| strat.multiply(&a, &b).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
