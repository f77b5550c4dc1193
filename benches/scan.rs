use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dnatopo::libs::features::extract;
use dnatopo::libs::model::NnModel;
use dnatopo::libs::scan::{analyze, ScanOptions};
use dnatopo::libs::thermo::Conditions;

fn random_dna(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn bench_extract(c: &mut Criterion) {
    let model = NnModel::default();
    let cond = Conditions::default();
    let seq = random_dna(15);

    c.bench_function("extract_15bp", |b| {
        b.iter(|| extract(black_box(&seq), &model, &cond))
    });
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let opts = ScanOptions::default();

    for len in [1_000, 10_000, 100_000] {
        let seq = random_dna(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &seq, |b, seq| {
            b.iter(|| analyze(black_box(seq), &opts))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract, bench_analyze);
criterion_main!(benches);
