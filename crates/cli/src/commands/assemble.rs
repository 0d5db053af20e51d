//! Commande d'assemblage

use crate::display::stats::display_assembly;
use crate::{create_spinner, OutputFormat};
use asm_core::{AssemblerConfig, FragmentPool, GreedyAssembler};
use asm_utils::{read_file, write_file, FastaRecord};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Instant;

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    config: AssemblerConfig,
    format: OutputFormat,
) -> Result<()> {
    // 1. Lire les fragments, dans l'ordre du fichier
    let records = read_file(&input)
        .with_context(|| format!("lecture de {}", input.display()))?;
    if records.is_empty() {
        bail!("aucun fragment dans {}", input.display());
    }
    let pool = FragmentPool::new(records.into_iter().map(|r| r.sequence).collect());

    // 2. Assembler
    let assembler = GreedyAssembler::new(config)?;
    let spinner = create_spinner(&format!("Assemblage de {} fragments...", pool.len()));
    let started = Instant::now();
    let result = asm_core::log_operation!("assemble", { assembler.assemble(&pool) })?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    spinner.finish_and_clear();

    // 3. Rapport
    match format {
        OutputFormat::Table => display_assembly(&result, elapsed_ms),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    // 4. Reconstruction
    if let Some(output) = output {
        let header = format!(
            "contig_0 len={} fragments={}/{} sha256={}",
            result.reconstruction.len(),
            result.used_count,
            result.total_fragments,
            result.reconstruction.checksum()
        );
        write_file(&output, &[FastaRecord::new(header, result.reconstruction.clone())])
            .with_context(|| format!("écriture de {}", output.display()))?;
        eprintln!("Reconstruction écrite dans: {}", output.display());
    }

    Ok(())
}
