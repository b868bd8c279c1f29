//! Single-record FASTA input adapter.
//!
//! Extracts exactly one record's header and residue text so it can be fed
//! to the analysis engine; inputs with zero or multiple records are
//! rejected rather than silently truncated.

use std::io::Read;
use std::path::Path;

use aequorea_core::{AequoreaError, Annotated, Result};
use needletail::{parse_fastx_file, parse_fastx_reader, FastxReader};

use crate::protein::ProteinSequence;

/// One FASTA record: identifier, optional description, raw residue bytes.
///
/// The id is the header token up to the first whitespace; anything after
/// it becomes the description. The sequence bytes are unwrapped (newlines
/// removed) but otherwise unvalidated; validation happens when the record
/// is bridged into a [`ProteinSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastaRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    /// Validate the record's residue text as a protein sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AequoreaError::InvalidSequence`] if the body contains
    /// bytes outside the 20 standard amino acid codes.
    pub fn protein(&self) -> Result<ProteinSequence> {
        ProteinSequence::new(&self.sequence)
    }
}

impl Annotated for FastaRecord {
    fn name(&self) -> &str {
        &self.id
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Read exactly one FASTA record from a file.
///
/// # Errors
///
/// Returns [`AequoreaError::Parse`] if the file cannot be opened or
/// parsed, contains no records, or contains more than one record.
///
/// # Example
///
/// ```no_run
/// use aequorea_seq::fasta::read_single_record;
///
/// let record = read_single_record("query.fasta")?;
/// let stats = record.protein()?.stats(7.0)?;
/// # Ok::<(), aequorea_core::AequoreaError>(())
/// ```
pub fn read_single_record(path: impl AsRef<Path>) -> Result<FastaRecord> {
    let mut reader =
        parse_fastx_file(path.as_ref()).map_err(|e| AequoreaError::Parse(e.to_string()))?;
    single_record(reader.as_mut())
}

/// Read exactly one FASTA record from any reader (e.g. an in-memory
/// upload buffer).
///
/// # Errors
///
/// Same contract as [`read_single_record`].
pub fn read_single_record_from<R: Read + Send>(input: R) -> Result<FastaRecord> {
    let mut reader =
        parse_fastx_reader(input).map_err(|e| AequoreaError::Parse(e.to_string()))?;
    single_record(reader.as_mut())
}

fn single_record(reader: &mut dyn FastxReader) -> Result<FastaRecord> {
    let (header, sequence) = {
        let record = match reader.next() {
            Some(r) => r.map_err(|e| AequoreaError::Parse(e.to_string()))?,
            None => {
                return Err(AequoreaError::Parse(
                    "FASTA input contains no records".to_string(),
                ))
            }
        };
        (
            String::from_utf8_lossy(record.id()).into_owned(),
            record.seq().into_owned(),
        )
    };

    if reader.next().is_some() {
        return Err(AequoreaError::Parse(
            "FASTA input contains more than one record; expected exactly one".to_string(),
        ));
    }

    let mut parts = header.splitn(2, char::is_whitespace);
    let id = parts.next().unwrap_or("").to_string();
    let description = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(FastaRecord {
        id,
        description,
        sequence,
    })
}
