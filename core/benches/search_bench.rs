use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docsearch_core::{IndexConfig, SearchEngine, DEFAULT_TOP_K};

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_builtin_index", |b| b.iter(|| SearchEngine::builtin(IndexConfig::default())));
}

fn bench_search(c: &mut Criterion) {
    let engine = SearchEngine::builtin(IndexConfig::default());
    c.bench_function("search_builtin", |b| {
        b.iter(|| engine.search(black_box("metode menghitung data dokumen"), DEFAULT_TOP_K))
    });
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
