//! Benchmarks de l'assemblage glouton
//!
//! Compare les stratégies séquentielle et parallèle sur des génomes
//! synthétiques de GC% différents.

use asm_core::{AssemblerConfig, DnaSequence, GreedyAssembler, IupacBase, MatchStrategy};
use asm_simulation::sample_fragments;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn benchmark_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("Greedy assembly (5 kb, 400 fragments)");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for gc in [30, 50, 70] {
        let genome = generate_genome(5_000, gc);
        let pool = sample_fragments(&genome, 400, 100, 150, 42).unwrap();

        for strategy in [MatchStrategy::Sequential, MatchStrategy::Parallel] {
            let config = AssemblerConfig::new(10, 100).with_strategy(strategy);
            let assembler = GreedyAssembler::new(config).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), format!("gc{}", gc)),
                &pool,
                |b, pool| b.iter(|| assembler.assemble(black_box(pool)).unwrap()),
            );
        }
    }

    group.finish();
}

/// Génère un génome avec un GC% donné
fn generate_genome(length: usize, gc_percent: u32) -> DnaSequence {
    let mut rng = ChaCha8Rng::seed_from_u64(gc_percent as u64);
    let bases = (0..length)
        .map(|_| match (rng.gen_range(0..100) < gc_percent, rng.gen_bool(0.5)) {
            (true, true) => IupacBase::G,
            (true, false) => IupacBase::C,
            (false, true) => IupacBase::A,
            (false, false) => IupacBase::T,
        })
        .collect();
    DnaSequence::new(bases)
}

criterion_group!{
    name = assembly_benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(3));
    targets = benchmark_assembly
}

criterion_main!(assembly_benches);
