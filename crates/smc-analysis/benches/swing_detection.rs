//! Benchmarks for swing detection and the full analysis pass.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use smc_analysis::{SmcAnalyzer, SwingPointDetector};
use smc_core::{Bar, BarSeries};

fn generate_test_series(size: usize) -> BarSeries {
    BarSeries::from_bars(
        "BENCH",
        (0..size).map(|i| {
            let p = 100.0 + (i as f64 * 0.1).sin() * 10.0 + (i as f64 * 0.73).cos();
            Bar::new(i as i64 * 60_000, p, p + 0.5, p - 0.5, p, 1000.0)
        }),
    )
}

fn benchmark_swings(c: &mut Criterion) {
    let mut group = c.benchmark_group("SwingHighs");

    for size in [1000, 10000, 100000].iter() {
        let series = generate_test_series(*size);

        for swing_length in [2, 5, 10] {
            let detector = SwingPointDetector::new(swing_length).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("w{}", swing_length), size),
                &series,
                |b, series| b.iter(|| detector.find_swing_highs(black_box(series))),
            );
        }
    }

    group.finish();
}

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Analyze");
    let analyzer = SmcAnalyzer::default();

    for size in [1000, 10000].iter() {
        let series = generate_test_series(*size);
        group.bench_with_input(BenchmarkId::new("default", size), &series, |b, series| {
            b.iter(|| analyzer.analyze(black_box(series)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_swings, benchmark_analysis);
criterion_main!(benches);
