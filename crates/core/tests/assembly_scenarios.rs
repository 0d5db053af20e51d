//! Tests d'intégration de l'assembleur glouton
//!
//! Scénarios fixes et propriétés sur des pavages construits à partir d'une
//! source connue.

use asm_core::{
    assemble, AssemblerConfig, AssemblyError, DnaSequence, FragmentPool, GreedyAssembler,
    IupacBase, MatchStrategy, Termination,
};
use proptest::prelude::*;
use std::collections::HashSet;

const MIN_OVERLAP: usize = 10;
const WINDOW: usize = 100;

#[test]
fn test_reconstructs_acgtacgttt() {
    let pool = FragmentPool::from_strs(&["ACGTACG", "GTACGTTT"]).unwrap();
    let result = assemble(&pool, 2, 100).unwrap();

    assert_eq!(result.reconstruction.to_string(), "ACGTACGTTT");
    assert_eq!(result.used_count, 2);
    assert_eq!(result.total_fragments, 2);
}

#[test]
fn test_unrelated_fragments_keep_seed() {
    let pool = FragmentPool::from_strs(&["ACGTACGTAC", "TTTTGGGGCC"]).unwrap();
    let result = assemble(&pool, 3, 100).unwrap();

    assert_eq!(result.used_count, 1);
    assert_eq!(result.reconstruction, pool[0]);
    assert_eq!(result.termination, Termination::NoQualifyingOverlap);
}

#[test]
fn test_empty_pool_is_an_error() {
    let result = assemble(&FragmentPool::default(), 10, 100);
    assert!(matches!(result, Err(AssemblyError::EmptyPool)));
}

#[test]
fn test_threshold_at_fragment_length_stops_after_seed() {
    let pool = FragmentPool::from_strs(&["ACGTACGT", "CGTACGTA", "GTACGTAC"]).unwrap();
    let longest = pool.iter().map(DnaSequence::len).max().unwrap();

    let result = assemble(&pool, longest - 1, 100).unwrap();
    assert_eq!(result.used_count, 1);
    assert_eq!(result.reconstruction, pool[0]);

    // Juste en dessous, les mêmes fragments s'enchaînent
    let result = assemble(&pool, 2, 100).unwrap();
    assert!(result.used_count > 1);
}

#[test]
fn test_position_blind_reordering() {
    // Le seed reste en tête, les autres fragments sont mélangés
    let ordered = ["AACCGGTTAC", "GGTTACGATC", "ACGATCCATG", "TCCATGTTGA"];
    let shuffled = [ordered[0], ordered[3], ordered[1], ordered[2]];

    let a = assemble(&FragmentPool::from_strs(&ordered).unwrap(), 3, 100).unwrap();
    let b = assemble(&FragmentPool::from_strs(&shuffled).unwrap(), 3, 100).unwrap();

    assert_eq!(a.reconstruction.to_string(), "AACCGGTTACGATCCATGTTGA");
    assert_eq!(a.reconstruction, b.reconstruction);
}

/// Découpe `source` en fragments chevauchants, dans l'ordre de la source
fn tile(source: &[IupacBase], shapes: &[(usize, usize)]) -> Vec<DnaSequence> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for &(len, overlap) in shapes.iter().cycle() {
        let end = (start + len).min(source.len());
        fragments.push(DnaSequence::new(source[start..end].to_vec()));
        if end == source.len() {
            break;
        }
        start = end - overlap;
    }

    fragments
}

/// Vrai si tous les k-mers de la source sont distincts
fn kmers_unique(source: &[IupacBase], k: usize) -> bool {
    let mut seen = HashSet::new();
    source.windows(k).all(|w| seen.insert(w))
}

fn source_strategy() -> impl Strategy<Value = Vec<IupacBase>> {
    prop::collection::vec(
        prop::sample::select(vec![IupacBase::A, IupacBase::C, IupacBase::G, IupacBase::T]),
        150..400,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn property_exact_tiling_recovers_source(
        source in source_strategy(),
        shapes in prop::collection::vec((30usize..60, 11usize..25), 1..8),
        order_seed in any::<u64>(),
    ) {
        prop_assume!(kmers_unique(&source, MIN_OVERLAP + 1));

        let mut fragments = tile(&source, &shapes);
        // Seul le seed garde sa place ; le reste est permuté
        let tail_len = fragments.len() - 1;
        if tail_len > 1 {
            let offset = 1 + (order_seed as usize) % (tail_len - 1);
            fragments[1..].rotate_left(offset);
        }

        let pool = FragmentPool::new(fragments);
        for strategy in [MatchStrategy::Sequential, MatchStrategy::Parallel] {
            let config = AssemblerConfig::new(MIN_OVERLAP, WINDOW).with_strategy(strategy);
            let result = GreedyAssembler::new(config).unwrap().assemble(&pool).unwrap();

            prop_assert_eq!(result.reconstruction.bases(), &source[..]);
            prop_assert!(result.is_complete());
        }
    }

    #[test]
    fn property_threshold_boundary(
        fragments in prop::collection::vec(source_strategy(), 1..6),
    ) {
        let pool = FragmentPool::new(fragments.into_iter().map(DnaSequence::new).collect());
        let longest = pool.iter().map(DnaSequence::len).max().unwrap();

        let result = assemble(&pool, longest - 1, WINDOW).unwrap();
        prop_assert_eq!(result.used_count, 1);
        prop_assert_eq!(&result.reconstruction, &pool[0]);
    }
}
