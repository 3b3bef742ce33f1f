use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use conserv_core::{
    NWayLcsEngine, PairwiseAligner, ResourceBudget, Schedule, SequenceRecord, TripleAligner,
};

fn generate_test_sequence(length: usize, seed: u64) -> Vec<u8> {
    // Small LCG so runs are reproducible without pulling in rand
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..length)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            b"ACGT"[(state >> 62) as usize]
        })
        .collect()
}

fn record(id: &str, length: usize, seed: u64) -> SequenceRecord {
    SequenceRecord::new(id, "", generate_test_sequence(length, seed))
}

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise");
    let aligner = PairwiseAligner::default();

    for length in [100, 500, 1000].iter() {
        let a = record("a", *length, 1);
        let b = record("b", *length, 2);
        group.bench_with_input(BenchmarkId::from_parameter(length), length, |bench, _| {
            bench.iter(|| black_box(aligner.align(black_box(&a), black_box(&b))))
        });
    }

    group.finish();
}

fn bench_triple(c: &mut Criterion) {
    let aligner = TripleAligner::default();
    let a = record("a", 80, 1);
    let b = record("b", 80, 2);
    let c3 = record("c", 80, 3);

    c.bench_function("triple_80", |bench| {
        bench.iter(|| black_box(aligner.align(black_box(&a), black_box(&b), black_box(&c3))))
    });
}

fn bench_nway_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("nway_lcs_4x30");
    let records: Vec<SequenceRecord> = (0..4).map(|i| record("s", 30, i)).collect();

    for schedule in [Schedule::Sequential, Schedule::Wavefront] {
        let engine = NWayLcsEngine::new(ResourceBudget::default()).with_schedule(schedule);
        group.bench_function(format!("{:?}", schedule), |bench| {
            bench.iter(|| black_box(engine.compute(black_box(&records))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pairwise, bench_triple, bench_nway_schedules);
criterion_main!(benches);
