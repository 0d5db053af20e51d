//! Pipeline d'une exécution : échantillonnage puis assemblage chronométré

use crate::metrics::RunMetrics;
use crate::sampler::{SamplerConfig, ShotgunSampler};
use asm_core::{AssemblerConfig, AssemblyResult, DnaSequence, FragmentPool, GreedyAssembler, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Configuration complète d'une exécution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub sampler: SamplerConfig,
    pub assembler: AssemblerConfig,
}

impl RunConfig {
    /// Charge une configuration JSON ; les champs absents prennent leur valeur par défaut
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Sortie d'une exécution : pool, résultat d'assemblage et métriques
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub pool: FragmentPool,
    pub result: AssemblyResult,
    pub metrics: RunMetrics,
}

/// Exécution d'un génome à travers le pipeline
pub struct AssemblyRun<'a> {
    name: String,
    source: &'a DnaSequence,
}

impl<'a> AssemblyRun<'a> {
    pub fn new(name: impl Into<String>, source: &'a DnaSequence) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Échantillonne, assemble et mesure
    ///
    /// Seul l'assemblage est chronométré.
    pub fn execute(&self, config: &RunConfig) -> Result<RunOutcome> {
        let assembler = GreedyAssembler::new(config.assembler.clone())?;
        let pool = ShotgunSampler::new(config.sampler.clone()).sample(self.source)?;

        let started = Instant::now();
        let result = assembler.assemble(&pool)?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        let metrics = RunMetrics::from_result(&self.name, self.source, &result, elapsed_ms);
        info!(
            genome = %self.name,
            gc = metrics.gc_percent,
            elapsed_ms,
            used = result.used_count,
            "exécution terminée"
        );

        Ok(RunOutcome {
            pool,
            result,
            metrics,
        })
    }
}
