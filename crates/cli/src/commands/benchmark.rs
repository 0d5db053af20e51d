//! Commande de benchmark : durée d'assemblage en fonction du GC%

use crate::display::stats::{display_runs, display_summary};
use crate::{create_progress_bar, OutputFormat};
use asm_simulation::{AssemblyRun, MetricsCollector, RunConfig, RunMetrics};
use asm_utils::{concatenate, read_file};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Rapport JSON d'un benchmark
#[derive(Serialize)]
struct BenchmarkReport<'a> {
    generated_at: DateTime<Utc>,
    config: &'a RunConfig,
    runs: &'a [RunMetrics],
    average_elapsed_ms: Option<f64>,
    elapsed_std_dev_ms: Option<f64>,
    gc_time_correlation: Option<f64>,
}

/// Nom du génome : nom du fichier sans extension
fn genome_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn run(
    inputs: Vec<PathBuf>,
    config: RunConfig,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    println!("🧬 Benchmark sur {} génome(s)", inputs.len());

    let pb = create_progress_bar(inputs.len() as u64, "Assemblage en cours...");
    let mut collector = MetricsCollector::new();

    for path in &inputs {
        let name = genome_name(path);
        pb.set_message(name.clone());

        let records = read_file(path).with_context(|| format!("lecture de {}", path.display()))?;
        let genome = concatenate(&records);

        let outcome = AssemblyRun::new(name.as_str(), &genome)
            .execute(&config)
            .with_context(|| format!("assemblage de {}", name))?;
        pb.println(format!(
            "{}: GC% = {:.2}, Time = {:.2} ms",
            name, outcome.metrics.gc_percent, outcome.metrics.elapsed_ms
        ));
        collector.add(outcome.metrics);
        pb.inc(1);
    }

    pb.finish_with_message(String::from("Benchmark terminé"));

    let report = BenchmarkReport {
        generated_at: Utc::now(),
        config: &config,
        runs: collector.runs(),
        average_elapsed_ms: collector.average_elapsed_ms(),
        elapsed_std_dev_ms: collector.elapsed_std_dev_ms(),
        gc_time_correlation: collector.gc_time_correlation(),
    };

    match format {
        OutputFormat::Table => {
            display_runs(collector.runs());
            display_summary(&collector);
        }
        OutputFormat::Json => {
            if output.is_none() {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
    }

    if let Some(output) = output {
        std::fs::write(&output, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("écriture de {}", output.display()))?;
        println!("JSON écrit dans: {}", output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_name() {
        assert_eq!(genome_name(Path::new("viruses/camelpox.fasta")), "camelpox");
        assert_eq!(genome_name(Path::new("genome")), "genome");
    }
}
