//! Recherche du meilleur chevauchement suffixe/préfixe
//!
//! Réduction en deux niveaux : pour chaque fragment non utilisé, le plus long
//! chevauchement dans la fenêtre ; puis, entre fragments, le plus long
//! chevauchement avec départage par l'index le plus petit. La version
//! parallèle applique la même réduction et donne donc le même résultat.

use crate::sequence::{DnaSequence, FragmentPool, IupacBase};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Meilleur candidat trouvé pour une extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapMatch {
    /// Index du fragment dans le pool
    pub fragment_index: usize,
    /// Longueur du chevauchement (> min_overlap)
    pub overlap_len: usize,
}

impl OverlapMatch {
    /// Garde le meilleur des deux : chevauchement le plus long, puis index le plus petit
    fn best_of(self, other: OverlapMatch) -> OverlapMatch {
        if other.overlap_len > self.overlap_len
            || (other.overlap_len == self.overlap_len && other.fragment_index < self.fragment_index)
        {
            other
        } else {
            self
        }
    }
}

/// Stratégie de parcours des candidats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    #[default]
    Sequential,
    Parallel,
}

/// Fenêtre de fin de la reconstruction effectivement comparée
pub fn trailing_window(current: &[IupacBase], max_overlap_window: usize) -> &[IupacBase] {
    &current[current.len().saturating_sub(max_overlap_window)..]
}

/// Plus long chevauchement entre la fin de `tail` et le début de `fragment`
///
/// Les longueurs testées vont de la plus grande possible jusqu'à
/// `min_overlap + 1`. Un chevauchement couvre au plus `fragment.len() - 1`
/// bases, de sorte qu'une extension ajoute toujours au moins une base.
pub fn longest_overlap(
    tail: &[IupacBase],
    fragment: &[IupacBase],
    min_overlap: usize,
    max_overlap_window: usize,
) -> Option<usize> {
    let lower = min_overlap.checked_add(1)?;
    let upper = max_overlap_window
        .min(tail.len())
        .min(fragment.len().saturating_sub(1));

    (lower..=upper)
        .rev()
        .find(|&k| tail[tail.len() - k..] == fragment[..k])
}

/// Cherche le fragment non utilisé qui prolonge le mieux `current`
///
/// `used[i]` indique si le fragment `i` a déjà été consommé ; un fragment
/// sans entrée dans `used` est ignoré. Retourne `None` si aucun fragment n'atteint
/// `min_overlap + 1`.
pub fn find_best_overlap(
    current: &[IupacBase],
    pool: &FragmentPool,
    used: &[bool],
    min_overlap: usize,
    max_overlap_window: usize,
) -> Option<OverlapMatch> {
    find_best_overlap_with(
        current,
        pool,
        used,
        min_overlap,
        max_overlap_window,
        MatchStrategy::Sequential,
    )
}

/// Variante de [`find_best_overlap`] avec choix de la stratégie
pub fn find_best_overlap_with(
    current: &[IupacBase],
    pool: &FragmentPool,
    used: &[bool],
    min_overlap: usize,
    max_overlap_window: usize,
    strategy: MatchStrategy,
) -> Option<OverlapMatch> {
    // Instantané figé avant toute répartition du travail
    let tail = trailing_window(current, max_overlap_window);

    let candidate = |(index, (fragment, &is_used)): (usize, (&DnaSequence, &bool))| {
        if is_used {
            return None;
        }
        longest_overlap(tail, fragment.bases(), min_overlap, max_overlap_window).map(|overlap_len| {
            OverlapMatch {
                fragment_index: index,
                overlap_len,
            }
        })
    };

    match strategy {
        MatchStrategy::Sequential => pool
            .iter()
            .zip(used)
            .enumerate()
            .filter_map(candidate)
            .reduce(OverlapMatch::best_of),
        MatchStrategy::Parallel => pool
            .as_slice()
            .par_iter()
            .zip(used)
            .enumerate()
            .filter_map(candidate)
            .reduce_with(OverlapMatch::best_of),
    }
}
