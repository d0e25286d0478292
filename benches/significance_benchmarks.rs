use criterion::{criterion_group, criterion_main, Criterion};
use splitsig::{evaluate, normal_cdf, FormattedReport, SampleGroup, SignificanceConfig};
use std::hint::black_box;

fn bench_evaluate(c: &mut Criterion) {
    let control = SampleGroup::new(10_000, 1_000);
    let variant = SampleGroup::new(10_000, 1_080);

    c.bench_function("evaluate_two_arms", |b| {
        b.iter(|| evaluate(black_box(control), black_box(variant)))
    });

    c.bench_function("evaluate_rejects_zero_visitors", |b| {
        b.iter(|| evaluate(black_box(SampleGroup::new(0, 0)), black_box(variant)))
    });

    let report = evaluate(control, variant).unwrap();
    let config = SignificanceConfig::default();
    c.bench_function("format_report", |b| {
        b.iter(|| FormattedReport::new(black_box(&report), black_box(&config)))
    });
}

fn bench_normal_cdf(c: &mut Criterion) {
    c.bench_function("normal_cdf_1_96", |b| b.iter(|| normal_cdf(black_box(1.96))));
}

criterion_group!(benches, bench_evaluate, bench_normal_cdf);
criterion_main!(benches);
