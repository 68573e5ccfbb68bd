use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use serde_json::json;
use tw_core::{tabular_shape, Document};

fn generate_records(n: usize) -> Vec<Document> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| json!({"id": i, "score": rng.gen_range(0..1000), "name": format!("user{i}")}))
        .collect()
}

fn bench_tabular_shape(c: &mut Criterion) {
    let records_100 = generate_records(100);
    let records_10k = generate_records(10_000);
    c.bench_function("tabular_shape_100", |b| {
        b.iter(|| black_box(tabular_shape(black_box(&records_100))))
    });
    c.bench_function("tabular_shape_10k", |b| {
        b.iter(|| black_box(tabular_shape(black_box(&records_10k))))
    });
}

criterion_group!(benches, bench_tabular_shape);
criterion_main!(benches);
