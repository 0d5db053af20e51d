//! Propriétés de l'assemblage sur des pools échantillonnés
//!
//! Chaque base ajoutée provient d'un fragment utilisé, la longueur croît à
//! chaque extension et le résultat ne dépend ni de l'exécution ni de la
//! stratégie de recherche.

use asm_core::{
    AssemblerConfig, AssemblyResult, DnaSequence, FragmentPool, GreedyAssembler, IupacBase,
    MatchStrategy,
};
use asm_simulation::{sample_fragments, AssemblyRun, RunConfig, SamplerConfig};
use proptest::prelude::*;

fn run(pool: &FragmentPool, config: AssemblerConfig) -> AssemblyResult {
    GreedyAssembler::new(config).unwrap().assemble(pool).unwrap()
}

/// Source pseudo-aléatoire avec un GC% contrôlé
fn genome(length: usize, gc_percent: u32, seed: u64) -> DnaSequence {
    use rand::{Rng, SeedableRng};
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);

    let bases = (0..length)
        .map(|_| {
            let strong = rng.gen_range(0..100) < gc_percent;
            match (strong, rng.gen_bool(0.5)) {
                (true, true) => IupacBase::G,
                (true, false) => IupacBase::C,
                (false, true) => IupacBase::A,
                (false, false) => IupacBase::T,
            }
        })
        .collect();
    DnaSequence::new(bases)
}

#[test]
fn test_same_pool_same_result() {
    let source = genome(2_000, 50, 1);
    let pool = sample_fragments(&source, 300, 60, 90, 42).unwrap();
    let config = AssemblerConfig::new(10, 50);

    let first = run(&pool, config.clone());
    let second = run(&pool, config);
    assert_eq!(first, second);
}

#[test]
fn test_run_pipeline_is_reproducible() {
    let source = genome(3_000, 40, 2);
    let config = RunConfig {
        sampler: SamplerConfig::new(400, 80, 120).with_seed(7),
        assembler: AssemblerConfig::new(10, 100),
    };

    let a = AssemblyRun::new("g", &source).execute(&config).unwrap();
    let b = AssemblyRun::new("g", &source).execute(&config).unwrap();

    assert_eq!(a.pool, b.pool);
    assert_eq!(a.result, b.result);
    assert!((a.metrics.gc_percent - source.gc_content()).abs() < 1e-9);
}

#[test]
fn test_dense_sampling_joins_are_faithful() {
    let source = genome(1_500, 50, 3);
    let pool = sample_fragments(&source, 600, 100, 150, 11).unwrap();
    let result = run(&pool, AssemblerConfig::new(20, 100));

    // Sans répétition de 21 bases, aucune jonction n'est fausse
    assert!(result.used_count > 1);
    assert!(source.to_string().contains(&result.reconstruction.to_string()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn property_appended_runs_come_from_used_fragments(
        gc in 20u32..80,
        genome_seed in any::<u64>(),
        sample_seed in any::<u64>(),
    ) {
        let source = genome(800, gc, genome_seed);
        let pool = sample_fragments(&source, 120, 40, 70, sample_seed).unwrap();
        let result = run(&pool, AssemblerConfig::new(8, 60));

        let mut rebuilt = pool[0].bases().to_vec();
        let mut previous_len = rebuilt.len();
        for step in &result.steps {
            let fragment = pool[step.fragment_index].bases();
            prop_assert!(step.overlap_len > 8);
            prop_assert_eq!(step.appended_len, fragment.len() - step.overlap_len);
            prop_assert_eq!(
                &rebuilt[rebuilt.len() - step.overlap_len..],
                &fragment[..step.overlap_len]
            );

            rebuilt.extend_from_slice(&fragment[step.overlap_len..]);
            prop_assert!(rebuilt.len() > previous_len);
            prop_assert_eq!(rebuilt.len(), step.length_after);
            previous_len = rebuilt.len();
        }

        prop_assert_eq!(&rebuilt[..], result.reconstruction.bases());
        prop_assert_eq!(result.used_count, result.steps.len() + 1);

        // Aucun fragment n'est utilisé deux fois, le seed jamais réutilisé
        let mut indices: Vec<usize> = result.steps.iter().map(|s| s.fragment_index).collect();
        indices.sort_unstable();
        indices.dedup();
        prop_assert_eq!(indices.len(), result.steps.len());
        prop_assert!(!indices.contains(&0));
    }

    #[test]
    fn property_parallel_search_is_deterministic(
        gc in 20u32..80,
        genome_seed in any::<u64>(),
        sample_seed in any::<u64>(),
    ) {
        let source = genome(600, gc, genome_seed);
        let pool = sample_fragments(&source, 150, 30, 60, sample_seed).unwrap();

        let sequential = run(&pool, AssemblerConfig::new(6, 40));
        let parallel = run(
            &pool,
            AssemblerConfig::new(6, 40).with_strategy(MatchStrategy::Parallel),
        );
        prop_assert_eq!(sequential, parallel);
    }
}
