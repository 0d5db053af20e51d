//! Commande d'échantillonnage

use asm_simulation::{SamplerConfig, ShotgunSampler};
use asm_utils::{concatenate, read_file, write_file, FastaRecord};
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;

pub fn run(input: PathBuf, output: PathBuf, config: SamplerConfig) -> Result<()> {
    println!("🧬 Échantillonnage de: {}", input.display());

    // 1. Lire le génome
    let records = read_file(&input)
        .with_context(|| format!("lecture de {}", input.display()))?;
    let genome = concatenate(&records);
    println!(
        "{} enregistrement(s), {} bases, GC {:.2}%",
        records.len(),
        genome.len(),
        genome.gc_content()
    );

    // 2. Tirer les fragments
    let pool = asm_core::log_operation!("sample", {
        ShotgunSampler::new(config.clone()).sample(&genome)
    })?;

    // 3. Écrire le FASTA
    let fragments: Vec<FastaRecord> = pool
        .iter()
        .enumerate()
        .map(|(index, fragment)| {
            FastaRecord::new(format!("frag_{} len={}", index, fragment.len()), fragment.clone())
        })
        .collect();
    write_file(&output, &fragments)
        .with_context(|| format!("écriture de {}", output.display()))?;

    println!(
        "{} {} fragments ({}-{} bases, seed {}) écrits dans {}",
        style("✅").green(),
        pool.len(),
        config.min_len,
        config.max_len,
        config.seed,
        output.display()
    );

    Ok(())
}
