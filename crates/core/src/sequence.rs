//! Séquences ADN et pool de fragments

use crate::error::{AssemblyError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Codes IUPAC pour les nucléotides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IupacBase {
    A,  // Adénine
    C,  // Cytosine
    G,  // Guanine
    T,  // Thymine
    R,  // A ou G (purine)
    Y,  // C ou T (pyrimidine)
    S,  // G ou C (strong)
    W,  // A ou T (weak)
    K,  // G ou T (keto)
    M,  // A ou C (amino)
    B,  // C ou G ou T
    D,  // A ou G ou T
    H,  // A ou C ou T
    V,  // A ou C ou G
    N,  // Any base
}

impl IupacBase {
    /// Convertit un caractère en base IUPAC
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(IupacBase::A),
            'C' => Ok(IupacBase::C),
            'G' => Ok(IupacBase::G),
            'T' => Ok(IupacBase::T),
            'R' => Ok(IupacBase::R),
            'Y' => Ok(IupacBase::Y),
            'S' => Ok(IupacBase::S),
            'W' => Ok(IupacBase::W),
            'K' => Ok(IupacBase::K),
            'M' => Ok(IupacBase::M),
            'B' => Ok(IupacBase::B),
            'D' => Ok(IupacBase::D),
            'H' => Ok(IupacBase::H),
            'V' => Ok(IupacBase::V),
            'N' => Ok(IupacBase::N),
            _ => Err(AssemblyError::InvalidBase(c)),
        }
    }

    /// Convertit une base en caractère
    pub fn as_char(self) -> char {
        match self {
            IupacBase::A => 'A',
            IupacBase::C => 'C',
            IupacBase::G => 'G',
            IupacBase::T => 'T',
            IupacBase::R => 'R',
            IupacBase::Y => 'Y',
            IupacBase::S => 'S',
            IupacBase::W => 'W',
            IupacBase::K => 'K',
            IupacBase::M => 'M',
            IupacBase::B => 'B',
            IupacBase::D => 'D',
            IupacBase::H => 'H',
            IupacBase::V => 'V',
            IupacBase::N => 'N',
        }
    }

    /// Retourne true pour G et C uniquement (les codes ambigus ne comptent pas)
    pub fn is_gc(self) -> bool {
        matches!(self, IupacBase::G | IupacBase::C)
    }
}

impl fmt::Display for IupacBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for IupacBase {
    type Error = AssemblyError;

    fn try_from(c: char) -> Result<Self> {
        IupacBase::from_char(c)
    }
}

/// Calcule le pourcentage de G + C d'une suite de bases, dans [0, 100]
pub fn gc_content(bases: &[IupacBase]) -> f64 {
    if bases.is_empty() {
        return 0.0;
    }

    let gc_count = bases.iter().filter(|b| b.is_gc()).count();
    gc_count as f64 * 100.0 / bases.len() as f64
}

/// Séquence ADN immuable une fois construite
///
/// Sérialisée sous forme de chaîne (`"ACGT"`) plutôt que de liste de bases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DnaSequence {
    bases: Vec<IupacBase>,
}

impl DnaSequence {
    /// Crée une séquence à partir de bases
    pub fn new(bases: Vec<IupacBase>) -> Self {
        Self { bases }
    }

    /// Bases de la séquence
    pub fn bases(&self) -> &[IupacBase] {
        &self.bases
    }

    /// Retourne la longueur de la séquence
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Vérifie si la séquence est vide
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Pourcentage GC (0-100)
    pub fn gc_content(&self) -> f64 {
        gc_content(&self.bases)
    }

    /// Checksum SHA-256 de la forme textuelle
    pub fn checksum(&self) -> String {
        let hash = Sha256::digest(self.to_string().as_bytes());
        format!("{:x}", hash)
    }

    /// Sous-séquence `[start, end)`, copiée
    pub fn subsequence(&self, start: usize, end: usize) -> DnaSequence {
        Self::new(self.bases[start..end].to_vec())
    }

    pub fn into_bases(self) -> Vec<IupacBase> {
        self.bases
    }
}

impl FromStr for DnaSequence {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self> {
        let bases = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(IupacBase::from_char)
            .collect::<Result<Vec<IupacBase>>>()?;
        Ok(Self::new(bases))
    }
}

impl From<Vec<IupacBase>> for DnaSequence {
    fn from(bases: Vec<IupacBase>) -> Self {
        Self::new(bases)
    }
}

impl From<DnaSequence> for String {
    fn from(sequence: DnaSequence) -> Self {
        sequence.to_string()
    }
}

impl TryFrom<String> for DnaSequence {
    type Error = AssemblyError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base.as_char())?;
        }
        Ok(())
    }
}

/// Pool ordonné de fragments, adressés par leur index
///
/// Un fragment ne porte aucune information de position dans la source :
/// l'ordre ne peut être reconstruit qu'à partir des chevauchements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentPool {
    fragments: Vec<DnaSequence>,
}

impl FragmentPool {
    pub fn new(fragments: Vec<DnaSequence>) -> Self {
        Self { fragments }
    }

    /// Parse chaque chaîne comme un fragment
    pub fn from_strs<S: AsRef<str>>(fragments: &[S]) -> Result<Self> {
        let fragments = fragments
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<DnaSequence>>>()?;
        Ok(Self::new(fragments))
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DnaSequence> {
        self.fragments.iter()
    }

    pub fn as_slice(&self) -> &[DnaSequence] {
        &self.fragments
    }
}

impl Index<usize> for FragmentPool {
    type Output = DnaSequence;

    fn index(&self, index: usize) -> &DnaSequence {
        &self.fragments[index]
    }
}

impl From<Vec<DnaSequence>> for FragmentPool {
    fn from(fragments: Vec<DnaSequence>) -> Self {
        Self::new(fragments)
    }
}

impl<'a> IntoIterator for &'a FragmentPool {
    type Item = &'a DnaSequence;
    type IntoIter = std::slice::Iter<'a, DnaSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
