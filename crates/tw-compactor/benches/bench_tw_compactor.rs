use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use tw_compactor::{optimize, ContentKind, OutputFilter};

const REPEATED: &str = "Agent output often repeats itself.\nAgent output often repeats itself.\n";

fn generate_text(size_kb: usize) -> String {
    let words = ["agent", "output", "quick", "brown", "fox", "lazy", "dog", "build", "ok"];
    let gaps = [" ", "   ", "\t", "\n", "\n\n\n", "\n   "];
    let mut rng = rand::thread_rng();
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        if rng.gen_bool(0.05) {
            text.push_str(REPEATED);
        }
        text.push_str(words[rng.gen_range(0..words.len())]);
        text.push_str(gaps[rng.gen_range(0..gaps.len())]);
    }
    text
}

fn generate_json(records: usize) -> String {
    let rows: Vec<String> = (0..records)
        .map(|i| format!(r#"  {{ "id": {i}, "name": "user{i}", "active": true }}"#))
        .collect();
    format!("[\n{}\n]", rows.join(",\n"))
}

fn bench_optimize(c: &mut Criterion) {
    let text_10k = generate_text(10);
    let json_1k = generate_json(1000);
    for &(name, kind) in &[("text", ContentKind::Text), ("markdown", ContentKind::Markdown)] {
        c.bench_function(&format!("optimize_{name}_10kb"), |b| {
            b.iter(|| black_box(optimize(black_box(&text_10k), kind)))
        });
    }
    c.bench_function("optimize_json_1k_records", |b| {
        b.iter(|| black_box(optimize(black_box(&json_1k), ContentKind::Json)))
    });
}

fn bench_filter(c: &mut Criterion) {
    let text_10k = generate_text(10);
    let filter = OutputFilter::compile(&["repeated-lines", "extra-whitespace"]).unwrap();
    c.bench_function("filter_default_10kb", |b| {
        b.iter(|| black_box(filter.apply(black_box(&text_10k))))
    });
}

criterion_group!(benches, bench_optimize, bench_filter);
criterion_main!(benches);
