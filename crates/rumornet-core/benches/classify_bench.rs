// ─────────────────────────────────────────────────────────────────────
// RumorNet Kernel: Classification Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the classify hot path, one per branch plus
//! a long statement that matches nothing.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rumornet_core::{AnalysisPanel, StatementClassifier, SAMPLE_STATEMENTS};

// ── StatementClassifier.classify() ──────────────────────────────────

fn bench_classify_fake(c: &mut Criterion) {
    let clf = StatementClassifier::seeded(42);
    c.bench_function("classify_fake", |b| {
        b.iter(|| clf.classify(black_box(SAMPLE_STATEMENTS[0])))
    });
}

fn bench_classify_real(c: &mut Criterion) {
    let clf = StatementClassifier::seeded(42);
    let text = "According to a peer reviewed study, experts believe the results hold.";
    c.bench_function("classify_real", |b| b.iter(|| clf.classify(black_box(text))));
}

fn bench_classify_uncertain(c: &mut Criterion) {
    let clf = StatementClassifier::seeded(42);
    let text = "Some believe it could possibly happen, allegedly.";
    c.bench_function("classify_uncertain", |b| {
        b.iter(|| clf.classify(black_box(text)))
    });
}

fn bench_classify_fallback_long(c: &mut Criterion) {
    let clf = StatementClassifier::seeded(42);
    let text = "the quiet river ran past the green table ".repeat(200);
    c.bench_function("classify_fallback_8kb", |b| {
        b.iter(|| clf.classify(black_box(&text)))
    });
}

fn bench_classify_rejected(c: &mut Criterion) {
    let clf = StatementClassifier::seeded(42);
    c.bench_function("classify_rejected", |b| b.iter(|| clf.classify(black_box("ok"))));
}

// ── AnalysisPanel.analyze() ─────────────────────────────────────────

fn bench_panel_samples(c: &mut Criterion) {
    let panel = AnalysisPanel::new(Arc::new(StatementClassifier::seeded(42)));
    c.bench_function("panel_all_samples", |b| {
        b.iter(|| {
            for text in SAMPLE_STATEMENTS {
                black_box(panel.analyze(black_box(text)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_classify_fake,
    bench_classify_real,
    bench_classify_uncertain,
    bench_classify_fallback_long,
    bench_classify_rejected,
    bench_panel_samples,
);
criterion_main!(benches);
