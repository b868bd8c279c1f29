//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction uppercases input, discards ASCII
//! whitespace (sequence text commonly arrives line-wrapped), and validates
//! every remaining byte; empty input is rejected, so a constructed sequence
//! always holds at least one residue. The inner data is always uppercase, so
//! `Deref<Target = [u8]>` and `as_bytes()` are zero-cost and safe to pass to
//! downstream `&[u8]` APIs.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use aequorea_core::{AequoreaError, ContentAddressable, Sequence, Summarizable};

use crate::alphabet::Alphabet;

/// A validated, non-empty residue sequence parameterized by its alphabet.
///
/// The inner bytes are always uppercase members of `A`.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// ASCII whitespace anywhere in the input is skipped; every other byte
    /// is uppercased and checked against the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`AequoreaError::InvalidSequence`] if any non-whitespace byte
    /// is outside the alphabet (the message names the offending character
    /// and its position in the raw input), or if nothing remains after
    /// normalization.
    pub fn new(bytes: impl AsRef<[u8]>) -> aequorea_core::Result<Self> {
        let raw = bytes.as_ref();
        let mut data = Vec::with_capacity(raw.len());
        for (i, &b) in raw.iter().enumerate() {
            if b.is_ascii_whitespace() {
                continue;
            }
            let upper = b.to_ascii_uppercase();
            if !A::is_valid(upper) {
                return Err(AequoreaError::InvalidSequence(format!(
                    "invalid {} residue '{}' (0x{:02X}) at position {}",
                    A::NAME, b as char, b, i
                )));
            }
            data.push(upper);
        }
        if data.is_empty() {
            return Err(AequoreaError::InvalidSequence(format!(
                "empty {} sequence",
                A::NAME
            )));
        }
        Ok(Self {
            data,
            _alphabet: PhantomData,
        })
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> ContentAddressable for ValidatedSeq<A> {
    fn content_hash(&self) -> String {
        aequorea_core::hash::sha256(&self.data)
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = std::str::from_utf8(&self.data[..preview_len]).unwrap_or("???");
        if self.data.len() > 20 {
            format!(
                "{} sequence ({} residues): {}...",
                A::NAME,
                self.data.len(),
                preview
            )
        } else {
            format!(
                "{} sequence ({} residues): {}",
                A::NAME,
                self.data.len(),
                preview
            )
        }
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "{}(\"{}\")", A::NAME, s)
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for ValidatedSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}
