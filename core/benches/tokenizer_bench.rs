use criterion::{criterion_group, criterion_main, Criterion};
use docsearch_core::{builtin_collection, tokenize};

fn bench_tokenize(c: &mut Criterion) {
    let text: String = builtin_collection().into_iter().map(|d| d.content).collect::<Vec<_>>().join(" ");
    c.bench_function("tokenize_builtin_collection", |b| b.iter(|| tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
