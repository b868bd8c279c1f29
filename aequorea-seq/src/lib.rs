//! Protein sequence analysis for the Aequorea toolkit.
//!
//! Provides a strongly-typed, validated protein sequence type plus the
//! physicochemical descriptors ProtParam-style tools report:
//!
//! - **Alphabet** — [`ProteinAlphabet`], the strict 20-symbol standard set
//! - **Sequences** — [`ProteinSequence`] via the generic [`ValidatedSeq`]
//! - **Descriptors** — molecular weight, isoelectric point, net charge,
//!   aromaticity, instability index, GRAVY
//! - **Composition** — [`AminoAcidComposition`] counts and percentages
//! - **One-call analysis** — [`analyze`] from raw text to
//!   ([`ProteinStats`], [`AminoAcidComposition`])
//! - **FASTA input** — single-record extraction via
//!   [`fasta::read_single_record`]
//!
//! # Example
//!
//! ```
//! use aequorea_seq::analyze;
//!
//! // Bovine serum albumin signal peptide
//! let (stats, composition) = analyze("MKWVTFISLLLLFSSAYS", 7.0).unwrap();
//! assert_eq!(stats.length, 18);
//! assert!(stats.molecular_weight > 2000.0 && stats.molecular_weight < 2200.0);
//! assert!(stats.gravy > 0.0); // hydrophobic, as signal peptides are
//! assert_eq!(composition.count_of(b'L').unwrap(), 4);
//! ```

pub mod alphabet;
pub mod dipeptide;
pub mod fasta;
pub mod protein;
pub mod residues;
pub mod seq;

// Re-export alphabet types
pub use alphabet::{Alphabet, ProteinAlphabet};

// Re-export the generic sequence type and its protein alias
pub use protein::ProteinSequence;
pub use seq::ValidatedSeq;

// Re-export analysis results and the entry point
pub use protein::{analyze, AminoAcidComposition, ProteinStats};

// Re-export residue-level configuration and constants
pub use dipeptide::INSTABILITY_THRESHOLD;
pub use residues::{PkaScale, AMINO_ACIDS, WATER_MASS};

// Re-export FASTA types
pub use fasta::{read_single_record, read_single_record_from, FastaRecord};
