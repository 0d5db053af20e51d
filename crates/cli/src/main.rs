//! CLI pour l'assemblage glouton de fragments

use asm_core::{AssemblerConfig, MatchStrategy};
use asm_simulation::{RunConfig, SamplerConfig};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;

use commands::{assemble, benchmark, sample};

#[derive(Parser)]
#[command(name = "asm")]
#[command(about = "Reconstruction de séquences par assemblage glouton de fragments", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Tire des fragments aléatoires d'un génome FASTA
    Sample {
        /// Génome FASTA (les enregistrements sont concaténés)
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier FASTA de fragments
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        sampler: SamplerArgs,
    },

    /// Assemble des fragments FASTA (le premier enregistrement sert de seed)
    Assemble {
        /// Fichier FASTA de fragments
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier FASTA de la reconstruction
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        assembler: AssemblerArgs,

        /// Format du rapport
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Mesure la durée d'assemblage en fonction du GC% de plusieurs génomes
    Benchmark {
        /// Génomes FASTA
        #[arg(short, long, num_args = 1.., required = true)]
        input: Vec<PathBuf>,

        /// Configuration JSON (remplace les options d'échantillonnage et d'assemblage)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        sampler: SamplerArgs,

        #[command(flatten)]
        assembler: AssemblerArgs,

        /// Format du rapport
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Exporter le rapport JSON en fichier
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Options d'échantillonnage
#[derive(Args, Clone)]
pub struct SamplerArgs {
    /// Nombre de fragments
    #[arg(short = 'n', long, default_value = "2000")]
    count: usize,

    /// Longueur minimale d'un fragment
    #[arg(long, default_value = "100")]
    min_len: usize,

    /// Longueur maximale d'un fragment
    #[arg(long, default_value = "150")]
    max_len: usize,

    /// Seed du générateur
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

impl SamplerArgs {
    pub fn to_config(&self) -> SamplerConfig {
        SamplerConfig::new(self.count, self.min_len, self.max_len).with_seed(self.seed)
    }
}

/// Options d'assemblage
#[derive(Args, Clone)]
pub struct AssemblerArgs {
    /// Seuil de chevauchement (exclusif)
    #[arg(short = 'm', long, default_value = "10")]
    min_overlap: usize,

    /// Plus long chevauchement testé par fragment
    #[arg(short = 'w', long, default_value = "100")]
    window: usize,

    /// Recherche parallèle des candidats
    #[arg(short, long)]
    parallel: bool,

    /// Nombre maximal d'itérations
    #[arg(long)]
    max_iterations: Option<usize>,
}

impl AssemblerArgs {
    pub fn to_config(&self) -> AssemblerConfig {
        let strategy = if self.parallel {
            MatchStrategy::Parallel
        } else {
            MatchStrategy::Sequential
        };
        AssemblerConfig {
            min_overlap: self.min_overlap,
            max_overlap_window: self.window,
            strategy,
            max_iterations: self.max_iterations,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    asm_core::init_logging(cli.verbose);

    match cli.command {
        Commands::Sample {
            input,
            output,
            sampler,
        } => {
            sample::run(input, output, sampler.to_config())?;
        }
        Commands::Assemble {
            input,
            output,
            assembler,
            format,
        } => {
            assemble::run(input, output, assembler.to_config(), format)?;
        }
        Commands::Benchmark {
            input,
            config,
            sampler,
            assembler,
            format,
            output,
        } => {
            let config = match config {
                Some(path) => RunConfig::from_json_file(&path)?,
                None => RunConfig {
                    sampler: sampler.to_config(),
                    assembler: assembler.to_config(),
                },
            };
            benchmark::run(input, config, format, output)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    pb
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
