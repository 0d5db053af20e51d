//! Utilitaires partagés : FASTA et statistiques

pub mod fasta;
pub mod math;

pub use fasta::{concatenate, read_file, read_records, write_file, write_records, FastaRecord};
pub use math::{mean, n50, pearson_correlation, std_dev};
