//! Evaluator and recompute benchmarks.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use labguard_core::{evaluate, AnalyteRecord, AnalyteSession, ControlConfig, Measurement};

fn history(len: usize) -> Vec<Measurement> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..len)
        .map(|i| {
            let value = 100.0 + ((i * 7) % 13) as f64 - 6.0;
            Measurement::new(format!("m{i:05}"), start + chrono::Days::new(i as u64), value)
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let prior = history(100);
    c.bench_function("evaluate_single_point", |b| {
        b.iter(|| evaluate(black_box(104.0), black_box(&prior), 100.0, 10.0))
    });
}

fn bench_recompute(c: &mut Criterion) {
    let record = AnalyteRecord {
        control: ControlConfig::new("glucose", "Glucose", 100.0, 10.0, "mg/dL"),
        measurements: history(1_000),
    };
    c.bench_function("recompute_1k_history", |b| {
        b.iter(|| AnalyteSession::new(black_box(record.clone())))
    });
}

criterion_group!(benches, bench_evaluate, bench_recompute);
criterion_main!(benches);
