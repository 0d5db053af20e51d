//! Assemblage glouton de fragments
//!
//! La reconstruction part du fragment 0 puis est prolongée, tant que c'est
//! possible, par le fragment non utilisé dont le préfixe recouvre le mieux sa
//! fin. L'absence de candidat est un arrêt normal, pas une erreur : le
//! résultat le signale par `used_count < total_fragments`.

use crate::error::{AssemblyError, Result};
use crate::overlap::{find_best_overlap_with, MatchStrategy, OverlapMatch};
use crate::sequence::{DnaSequence, FragmentPool, IupacBase};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Configuration de l'assembleur
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Seuil d'acceptation (borne exclusive) sur la longueur de chevauchement
    pub min_overlap: usize,

    /// Plus long chevauchement testé par candidat
    pub max_overlap_window: usize,

    /// Parcours séquentiel ou parallèle des candidats
    pub strategy: MatchStrategy,

    /// Nombre maximal d'itérations (None = jusqu'à épuisement)
    pub max_iterations: Option<usize>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            min_overlap: 10,
            max_overlap_window: 100,
            strategy: MatchStrategy::Sequential,
            max_iterations: None,
        }
    }
}

impl AssemblerConfig {
    /// Crée une configuration avec seuil et fenêtre
    pub fn new(min_overlap: usize, max_overlap_window: usize) -> Self {
        Self {
            min_overlap,
            max_overlap_window,
            ..Default::default()
        }
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Vérifie la cohérence des paramètres
    pub fn validate(&self) -> Result<()> {
        if self.min_overlap == 0 {
            return Err(AssemblyError::InvalidParameters(
                "min_overlap doit être >= 1".to_string(),
            ));
        }
        if self.max_overlap_window == 0 {
            return Err(AssemblyError::InvalidParameters(
                "max_overlap_window doit être >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Raison de l'arrêt de la boucle d'extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Tous les fragments ont été utilisés
    PoolExhausted,
    /// Aucun fragment restant ne dépasse le seuil
    NoQualifyingOverlap,
    /// Limite d'itérations atteinte
    IterationLimit,
}

/// Trace d'une extension réussie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionStep {
    pub fragment_index: usize,
    pub overlap_len: usize,
    /// Nombre de bases ajoutées (longueur du fragment - chevauchement)
    pub appended_len: usize,
    /// Longueur de la reconstruction après l'ajout
    pub length_after: usize,
}

/// Résultat d'un assemblage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyResult {
    pub reconstruction: DnaSequence,
    pub used_count: usize,
    pub total_fragments: usize,
    /// Nombre d'appels à la recherche de chevauchement
    pub iterations: usize,
    pub steps: Vec<ExtensionStep>,
    pub termination: Termination,
}

impl AssemblyResult {
    /// Fragments jamais utilisés
    pub fn unused_count(&self) -> usize {
        self.total_fragments - self.used_count
    }

    /// Vrai si tous les fragments ont été consommés
    pub fn is_complete(&self) -> bool {
        self.used_count == self.total_fragments
    }
}

/// État mutable d'un assemblage, limité à un appel de `assemble`
struct AssemblyState {
    reconstruction: Vec<IupacBase>,
    used: Vec<bool>,
    used_count: usize,
    steps: Vec<ExtensionStep>,
}

impl AssemblyState {
    fn seed(pool: &FragmentPool) -> Self {
        let mut used = vec![false; pool.len()];
        used[0] = true;

        Self {
            reconstruction: pool[0].bases().to_vec(),
            used,
            used_count: 1,
            steps: Vec::new(),
        }
    }

    fn extend(&mut self, pool: &FragmentPool, found: OverlapMatch) {
        let fragment = pool[found.fragment_index].bases();
        let remainder = &fragment[found.overlap_len..];

        self.reconstruction.extend_from_slice(remainder);
        self.used[found.fragment_index] = true;
        self.used_count += 1;
        self.steps.push(ExtensionStep {
            fragment_index: found.fragment_index,
            overlap_len: found.overlap_len,
            appended_len: remainder.len(),
            length_after: self.reconstruction.len(),
        });
    }

    fn exhausted(&self) -> bool {
        self.used_count == self.used.len()
    }

    fn finish(self, iterations: usize, termination: Termination) -> AssemblyResult {
        AssemblyResult {
            reconstruction: DnaSequence::new(self.reconstruction),
            used_count: self.used_count,
            total_fragments: self.used.len(),
            iterations,
            steps: self.steps,
            termination,
        }
    }
}

/// Assembleur glouton
#[derive(Debug, Clone)]
pub struct GreedyAssembler {
    config: AssemblerConfig,
}

impl GreedyAssembler {
    /// Crée un assembleur après validation de la configuration
    pub fn new(config: AssemblerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Assemble le pool à partir du fragment 0
    #[instrument(skip_all, fields(
        fragments = pool.len(),
        min_overlap = self.config.min_overlap,
        window = self.config.max_overlap_window
    ))]
    pub fn assemble(&self, pool: &FragmentPool) -> Result<AssemblyResult> {
        if pool.is_empty() {
            return Err(AssemblyError::EmptyPool);
        }

        let mut state = AssemblyState::seed(pool);
        let mut iterations = 0;

        let termination = loop {
            if state.exhausted() {
                break Termination::PoolExhausted;
            }
            if self.config.max_iterations.is_some_and(|limit| iterations >= limit) {
                break Termination::IterationLimit;
            }

            iterations += 1;
            let found = find_best_overlap_with(
                &state.reconstruction,
                pool,
                &state.used,
                self.config.min_overlap,
                self.config.max_overlap_window,
                self.config.strategy,
            );

            match found {
                Some(found) => {
                    state.extend(pool, found);
                    debug!(
                        fragment = found.fragment_index,
                        overlap = found.overlap_len,
                        length = state.reconstruction.len(),
                        "extension"
                    );
                }
                None => break Termination::NoQualifyingOverlap,
            }
        };

        info!(
            used = state.used_count,
            iterations,
            length = state.reconstruction.len(),
            ?termination,
            "assemblage terminé"
        );

        Ok(state.finish(iterations, termination))
    }
}

/// Assemble un pool avec la stratégie séquentielle
pub fn assemble(
    pool: &FragmentPool,
    min_overlap: usize,
    max_overlap_window: usize,
) -> Result<AssemblyResult> {
    GreedyAssembler::new(AssemblerConfig::new(min_overlap, max_overlap_window))?.assemble(pool)
}
