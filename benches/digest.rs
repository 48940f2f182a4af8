use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use credential_digest::DigestEngine;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

fn random_text(len: usize) -> String {
    thread_rng().sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

fn bench_compute_digest(c: &mut Criterion) {
    let engine = DigestEngine::sha256();
    let mut group = c.benchmark_group("compute_digest");
    for len in [0usize, 64, 1024, 64 * 1024] {
        let text = random_text(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| engine.compute_digest(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_digest);
criterion_main!(benches);
