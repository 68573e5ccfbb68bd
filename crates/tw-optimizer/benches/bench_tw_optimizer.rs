use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use tw_optimizer::{ContentKind, TokenOptimizer};

fn generate_json(records: usize) -> String {
    let mut rng = rand::thread_rng();
    let rows: Vec<String> = (0..records)
        .map(|i| format!(r#"{{"id":{i},"name":"user{i}","score":{}}}"#, rng.gen_range(0..1000)))
        .collect();
    format!("[{}]", rows.join(","))
}

fn bench_facade(c: &mut Criterion) {
    let json = generate_json(500);
    let text = "lorem   ipsum\n\n dolor ".repeat(200);

    c.bench_function("optimize_text_cold", |b| {
        b.iter(|| {
            let opt = TokenOptimizer::default();
            black_box(opt.optimize_content(black_box(&text), ContentKind::Text))
        })
    });

    let warm = TokenOptimizer::default();
    warm.optimize_content(&text, ContentKind::Text);
    c.bench_function("optimize_text_cached", |b| {
        b.iter(|| black_box(warm.optimize_content(black_box(&text), ContentKind::Text)))
    });

    c.bench_function("json_to_zon_500_cold", |b| {
        b.iter(|| {
            let opt = TokenOptimizer::default();
            black_box(opt.json_to_zon(black_box(&json)))
        })
    });
}

criterion_group!(benches, bench_facade);
criterion_main!(benches);
