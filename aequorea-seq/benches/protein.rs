use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use aequorea_seq::{ProteinSequence, AMINO_ACIDS};

fn random_protein(len: usize) -> Vec<u8> {
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(AMINO_ACIDS[((state >> 33) % 20) as usize]);
    }
    seq
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for len in [100usize, 1_000, 10_000] {
        let seq = random_protein(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &seq, |b, seq| {
            b.iter(|| aequorea_seq::analyze(black_box(seq), 7.0))
        });
    }

    group.finish();
}

fn bench_isoelectric_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("isoelectric_point");

    let seq_10k = ProteinSequence::new(random_protein(10_000)).unwrap();
    group.bench_function("10k", |b| {
        b.iter(|| black_box(&seq_10k).isoelectric_point())
    });

    group.finish();
}

fn bench_instability_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("instability_index");

    let seq_10k = ProteinSequence::new(random_protein(10_000)).unwrap();
    group.bench_function("10k", |b| {
        b.iter(|| black_box(&seq_10k).instability_index())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_analyze,
    bench_isoelectric_point,
    bench_instability_index
);
criterion_main!(benches);
