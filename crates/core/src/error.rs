//! Types d'erreurs pour l'assemblage de fragments

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("Paramètres invalides: {0}")]
    InvalidParameters(String),

    #[error("Pool de fragments vide: assemblage impossible")]
    EmptyPool,

    #[error("Séquence source vide: échantillonnage impossible")]
    EmptySource,

    #[error("Base IUPAC invalide: {0}")]
    InvalidBase(char),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erreur de lecture: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
