use cow_trie::Trie;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn build(n: u32) -> Trie {
    (0..n).fold(Trie::empty(), |trie, i| trie.put(format!("user:{i:06}"), i))
}

fn bench_trie(c: &mut Criterion) {
    let n = 10_000;
    let trie = build(n);
    let key = String::from("user:004242");

    let mut g = c.benchmark_group("trie");

    g.bench_function(BenchmarkId::new("get", n), |b| {
        b.iter(|| black_box(trie.get::<u32>(black_box(key.as_str()))));
    });

    g.bench_function(BenchmarkId::new("put", n), |b| {
        b.iter(|| black_box(trie.put(black_box(key.as_str()), 7u32)));
    });

    g.bench_function(BenchmarkId::new("remove", n), |b| {
        b.iter(|| black_box(trie.remove(black_box(key.as_str()))));
    });

    g.finish();
}

criterion_group!(benches, bench_trie);
criterion_main!(benches);
