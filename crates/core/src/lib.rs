//! ASM Core Library
//!
//! Reconstruction d'une séquence à partir de fragments chevauchants, par
//! extension gloutonne sur correspondance exacte suffixe/préfixe.

pub mod assembler;
pub mod error;
pub mod logging;
pub mod overlap;
pub mod sequence;

// Réexportations principales
pub use assembler::{
    assemble, AssemblerConfig, AssemblyResult, ExtensionStep, GreedyAssembler, Termination,
};
pub use error::{AssemblyError, Result};
pub use logging::init_logging;
// La macro log_operation est automatiquement exportée à la racine du crate
pub use overlap::{find_best_overlap, find_best_overlap_with, MatchStrategy, OverlapMatch};
pub use sequence::{gc_content, DnaSequence, FragmentPool, IupacBase};
