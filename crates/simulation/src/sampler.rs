//! Échantillonnage aléatoire de fragments (séquençage shotgun simulé)

use asm_core::{AssemblyError, DnaSequence, FragmentPool, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Configuration de l'échantillonnage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Nombre de fragments tirés
    pub count: usize,

    /// Longueur minimale d'un fragment
    pub min_len: usize,

    /// Longueur maximale d'un fragment
    pub max_len: usize,

    /// Seed pour reproductibilité
    pub seed: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            min_len: 100,
            max_len: 150,
            seed: 42,
        }
    }
}

impl SamplerConfig {
    pub fn new(count: usize, min_len: usize, max_len: usize) -> Self {
        Self {
            count,
            min_len,
            max_len,
            ..Default::default()
        }
    }

    /// Définit le seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Vérifie les bornes d'échantillonnage pour une source de longueur donnée
fn check_parameters(source_len: usize, count: usize, min_len: usize, max_len: usize) -> Result<()> {
    if source_len == 0 {
        return Err(AssemblyError::EmptySource);
    }
    if count < 1 {
        return Err(AssemblyError::InvalidParameters(
            "count doit être >= 1".to_string(),
        ));
    }
    if min_len < 1 {
        return Err(AssemblyError::InvalidParameters(
            "min_len doit être >= 1".to_string(),
        ));
    }
    if min_len > max_len {
        return Err(AssemblyError::InvalidParameters(format!(
            "min_len ({}) > max_len ({})",
            min_len, max_len
        )));
    }
    if max_len > source_len {
        return Err(AssemblyError::InvalidParameters(format!(
            "max_len ({}) > longueur de la source ({})",
            max_len, source_len
        )));
    }
    Ok(())
}

/// Tire `count` fragments de `source`, avec remise
///
/// Longueur uniforme dans `[min_len, max_len]`, position de départ uniforme
/// dans `[0, len - longueur]`. Les doublons et fragments imbriqués sont
/// conservés.
pub fn sample<R: Rng + ?Sized>(
    source: &DnaSequence,
    count: usize,
    min_len: usize,
    max_len: usize,
    rng: &mut R,
) -> Result<FragmentPool> {
    check_parameters(source.len(), count, min_len, max_len)?;

    let fragments = (0..count)
        .map(|_| {
            let length = rng.gen_range(min_len..=max_len);
            let start = rng.gen_range(0..=source.len() - length);
            source.subsequence(start, start + length)
        })
        .collect::<Vec<_>>();

    Ok(FragmentPool::new(fragments))
}

/// Tire des fragments avec un générateur `ChaCha8Rng` initialisé par `seed`
pub fn sample_fragments(
    source: &DnaSequence,
    count: usize,
    min_len: usize,
    max_len: usize,
    seed: u64,
) -> Result<FragmentPool> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    sample(source, count, min_len, max_len, &mut rng)
}

/// Échantillonneur à état : enchaîne les tirages sur un même flux aléatoire
pub struct ShotgunSampler {
    config: SamplerConfig,
    rng: ChaCha8Rng,
}

impl ShotgunSampler {
    /// Crée un nouvel échantillonneur
    pub fn new(config: SamplerConfig) -> Self {
        let seed = config.seed;
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Tire un pool de fragments selon la configuration
    pub fn sample(&mut self, source: &DnaSequence) -> Result<FragmentPool> {
        let SamplerConfig {
            count,
            min_len,
            max_len,
            ..
        } = self.config;
        sample(source, count, min_len, max_len, &mut self.rng)
    }

    /// Réinitialise le RNG
    pub fn reset_rng(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
    }
}
