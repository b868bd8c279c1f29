//! Alphabet definitions for amino-acid sequence validation.
//!
//! An alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type.

/// Trait for residue alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Sequence
/// constructors uppercase input first, then validate against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "protein").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const SYMBOLS: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::SYMBOLS.contains(&b)
    }
}

/// The strict protein alphabet: the 20 standard amino acids, nothing else.
///
/// Ambiguity and non-standard codes (`X`, `B`, `Z`, `J`, `U`, `O`) and gap
/// characters are rejected rather than substituted: every physicochemical
/// constant table in this crate is defined exactly for the standard residues,
/// so a sequence that validates is a sequence every descriptor is defined on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "protein";
    const SYMBOLS: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_standard_residues() {
        for &b in b"ACDEFGHIKLMNPQRSTVWY" {
            assert!(ProteinAlphabet::is_valid(b), "should accept {}", b as char);
        }
    }

    #[test]
    fn rejects_ambiguity_codes() {
        for &b in b"XBZJUO*" {
            assert!(!ProteinAlphabet::is_valid(b), "should reject {}", b as char);
        }
    }

    #[test]
    fn rejects_gaps_and_noise() {
        assert!(!ProteinAlphabet::is_valid(b'-'));
        assert!(!ProteinAlphabet::is_valid(b'.'));
        assert!(!ProteinAlphabet::is_valid(b'1'));
        assert!(!ProteinAlphabet::is_valid(b' '));
    }
}
