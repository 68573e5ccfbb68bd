use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use serde_json::json;
use tw_core::Document;
use tw_tabular::{toon, zon};

fn generate_records(n: usize) -> Document {
    let mut rng = rand::thread_rng();
    let roles = ["admin", "user", "guest, read-only"];
    Document::Array(
        (0..n)
            .map(|i| {
                json!({
                    "id": i,
                    "name": format!("user{i}"),
                    "role": roles[rng.gen_range(0..roles.len())],
                    "score": rng.gen_range(0..10_000),
                })
            })
            .collect(),
    )
}

fn bench_codecs(c: &mut Criterion) {
    let records = generate_records(1000);
    let encoded = zon::encode(&records).unwrap();

    c.bench_function("toon_format_1k_records", |b| {
        b.iter(|| black_box(toon::format(black_box(&records), None)))
    });
    c.bench_function("zon_encode_1k_records", |b| {
        b.iter(|| black_box(zon::encode(black_box(&records))))
    });
    c.bench_function("zon_decode_1k_records", |b| {
        b.iter(|| black_box(zon::decode(black_box(&encoded))))
    });
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
