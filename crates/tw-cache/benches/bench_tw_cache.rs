use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::time::Duration;
use tw_cache::{Cache, CacheKey};

fn bench_cache_churn(c: &mut Criterion) {
    let cache: Cache = Cache::new(100, Duration::from_secs(3600));
    let keys: Vec<CacheKey> = (0..1000)
        .map(|i| CacheKey::new("optimize", "text", format!("content {i}")))
        .collect();
    let mut rng = rand::thread_rng();

    c.bench_function("cache_get_or_insert_1k_keys_cap_100", |b| {
        b.iter(|| {
            let k = keys[rng.gen_range(0..keys.len())].clone();
            let v: Result<String, ()> = cache.get_or_try_insert_with(k, || Ok("value".into()));
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_cache_churn);
criterion_main!(benches);
