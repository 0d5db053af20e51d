//! Lecture et écriture FASTA
//!
//! Un enregistrement commence par une ligne `>` ; les lignes suivantes sont
//! concaténées telles quelles jusqu'au prochain en-tête.

use asm_core::{AssemblyError, DnaSequence, IupacBase, Result};
use bio::io::fasta;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Enregistrement FASTA : en-tête (sans le `>`) et séquence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: DnaSequence,
}

impl FastaRecord {
    pub fn new(header: impl Into<String>, sequence: DnaSequence) -> Self {
        Self {
            header: header.into(),
            sequence,
        }
    }

    fn from_bio(record: &fasta::Record) -> Result<Self> {
        let header = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };

        let bases = record
            .seq()
            .iter()
            .map(|&b| IupacBase::from_char(b as char))
            .collect::<Result<Vec<IupacBase>>>()
            .map_err(|e| AssemblyError::Parse(format!("enregistrement '{}': {}", header, e)))?;

        Ok(Self::new(header, DnaSequence::new(bases)))
    }
}

/// Lit tous les enregistrements d'un flux FASTA
pub fn read_records<R: Read>(reader: R) -> Result<Vec<FastaRecord>> {
    fasta::Reader::new(reader)
        .records()
        .map(|record| FastaRecord::from_bio(&record?))
        .collect()
}

/// Lit tous les enregistrements d'un fichier FASTA
pub fn read_file(path: &Path) -> Result<Vec<FastaRecord>> {
    let file = File::open(path)?;
    read_records(file)
}

/// Concatène les séquences de tous les enregistrements, dans l'ordre
pub fn concatenate(records: &[FastaRecord]) -> DnaSequence {
    let bases: Vec<IupacBase> = records
        .iter()
        .flat_map(|r| r.sequence.bases().iter().copied())
        .collect();
    DnaSequence::new(bases)
}

/// Écrit des enregistrements au format FASTA (une ligne par séquence)
pub fn write_records<W: Write>(writer: W, records: &[FastaRecord]) -> Result<()> {
    let mut writer = fasta::Writer::new(writer);

    for record in records {
        let (id, desc) = match record.header.split_once(char::is_whitespace) {
            Some((id, desc)) => (id, Some(desc.trim())),
            None => (record.header.as_str(), None),
        };
        writer.write(id, desc, record.sequence.to_string().as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Écrit des enregistrements dans un fichier FASTA
pub fn write_file(path: &Path, records: &[FastaRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_records(file, records)
}
