//! Métriques d'assemblage

use asm_core::{AssemblyResult, DnaSequence, Termination};
use asm_utils::math::{mean, pearson_correlation, std_dev};
use serde::{Deserialize, Serialize};

/// Métriques collectées pour une exécution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Nom du génome
    pub name: String,

    /// Longueur de la source
    pub source_length: usize,

    /// Pourcentage GC de la source (0-100)
    pub gc_percent: f64,

    /// Nombre de fragments échantillonnés
    pub fragments: usize,

    /// Fragments utilisés par l'assemblage
    pub used_count: usize,

    /// Fragments jamais utilisés
    pub unused_count: usize,

    /// Itérations de la boucle d'extension
    pub iterations: usize,

    /// Longueur de la reconstruction
    pub reconstruction_length: usize,

    /// Longueur reconstruite / longueur source
    pub recovered_fraction: f64,

    /// Reconstruction identique à la source
    pub exact_recovery: bool,

    /// Durée de l'assemblage en millisecondes
    pub elapsed_ms: f64,

    pub termination: Termination,
}

impl RunMetrics {
    /// Construit les métriques d'un assemblage de `source`
    pub fn from_result(
        name: &str,
        source: &DnaSequence,
        result: &AssemblyResult,
        elapsed_ms: f64,
    ) -> Self {
        let reconstruction_length = result.reconstruction.len();
        let recovered_fraction = if source.is_empty() {
            0.0
        } else {
            reconstruction_length as f64 / source.len() as f64
        };

        Self {
            name: name.to_string(),
            source_length: source.len(),
            gc_percent: source.gc_content(),
            fragments: result.total_fragments,
            used_count: result.used_count,
            unused_count: result.unused_count(),
            iterations: result.iterations,
            reconstruction_length,
            recovered_fraction,
            exact_recovery: result.reconstruction == *source,
            elapsed_ms,
            termination: result.termination,
        }
    }
}

/// Collecteur de métriques pour plusieurs génomes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsCollector {
    runs: Vec<RunMetrics>,
}

impl MetricsCollector {
    /// Crée un nouveau collecteur
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute des métriques
    pub fn add(&mut self, metrics: RunMetrics) {
        self.runs.push(metrics);
    }

    pub fn runs(&self) -> &[RunMetrics] {
        &self.runs
    }

    /// Durée moyenne d'assemblage
    pub fn average_elapsed_ms(&self) -> Option<f64> {
        let times: Vec<f64> = self.runs.iter().map(|m| m.elapsed_ms).collect();
        mean(&times)
    }

    /// Écart type des durées d'assemblage
    pub fn elapsed_std_dev_ms(&self) -> Option<f64> {
        let times: Vec<f64> = self.runs.iter().map(|m| m.elapsed_ms).collect();
        std_dev(&times)
    }

    /// Exécution la plus rapide
    pub fn fastest(&self) -> Option<&RunMetrics> {
        self.runs
            .iter()
            .min_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }

    /// Exécution la plus lente
    pub fn slowest(&self) -> Option<&RunMetrics> {
        self.runs
            .iter()
            .max_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }

    /// Fraction reconstruite moyenne
    pub fn average_recovered_fraction(&self) -> Option<f64> {
        let fractions: Vec<f64> = self.runs.iter().map(|m| m.recovered_fraction).collect();
        mean(&fractions)
    }

    /// Corrélation de Pearson entre GC% et durée d'assemblage
    pub fn gc_time_correlation(&self) -> Option<f64> {
        let gc: Vec<f64> = self.runs.iter().map(|m| m.gc_percent).collect();
        let times: Vec<f64> = self.runs.iter().map(|m| m.elapsed_ms).collect();
        pearson_correlation(&gc, &times)
    }

    /// Nombre d'exécutions
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Vérifie si vide
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Vide le collecteur
    pub fn clear(&mut self) {
        self.runs.clear();
    }
}
