//! Protein physicochemical analysis.
//!
//! Scalar descriptors and residue composition for validated protein
//! sequences:
//!
//! - **Molecular weight** — average mass, one water subtracted per peptide bond
//! - **Net charge** — Henderson-Hasselbalch sum at any pH, selectable pKa set
//! - **Isoelectric point** — pI via bisection on the charge curve
//! - **Aromaticity** — fraction of Phe/Trp/Tyr residues
//! - **Instability index** — dipeptide weight sum, unstable above 40
//! - **GRAVY** — grand average of hydropathicity
//! - **Composition** — per-residue counts and percentages
//!
//! Every descriptor is a pure function of the sequence (plus a pH for the
//! charge), so results are deterministic and freely shareable across
//! threads. The one-stop entry point is [`analyze`], which validates raw
//! text once and derives everything.

use aequorea_core::{AequoreaError, Result, Summarizable};

use crate::alphabet::ProteinAlphabet;
use crate::dipeptide::{instability_weight, INSTABILITY_THRESHOLD};
use crate::residues::{
    aa_index, is_aromatic, PkaScale, PkaSet, AMINO_ACIDS, FREE_MASS, KYTE_DOOLITTLE, WATER_MASS,
};
use crate::seq::ValidatedSeq;

/// A validated protein sequence over the 20 standard amino acids.
pub type ProteinSequence = ValidatedSeq<ProteinAlphabet>;

/// Bisection interval width below which the pI solver accepts the midpoint.
const PI_TOLERANCE: f64 = 1e-4;

/// Iteration cap for the pI solver. Bisection narrows a 14-unit interval
/// below `PI_TOLERANCE` in under 20 iterations, so the cap is never hit
/// in practice.
const PI_MAX_ITERATIONS: usize = 100;

// ── Result types ────────────────────────────────────────────────

/// Amino acid composition of a protein sequence.
///
/// All 20 standard residues are always reported; residues absent from the
/// sequence carry count 0 and percentage 0.0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AminoAcidComposition {
    /// Absolute count for each of the 20 standard amino acids (indexed by
    /// alphabetical one-letter order, A..Y).
    pub counts: [usize; 20],
    /// Percentage (0.0–100.0) for each amino acid, same indexing.
    pub percent: [f64; 20],
    /// Sequence length the counts were taken over.
    pub length: usize,
}

impl AminoAcidComposition {
    /// Count for a single residue, by one-letter code (case-insensitive).
    /// Returns `None` for non-standard codes.
    pub fn count_of(&self, aa: u8) -> Option<usize> {
        aa_index(aa.to_ascii_uppercase()).map(|i| self.counts[i])
    }

    /// Percentage for a single residue, by one-letter code
    /// (case-insensitive). Returns `None` for non-standard codes.
    pub fn percent_of(&self, aa: u8) -> Option<f64> {
        aa_index(aa.to_ascii_uppercase()).map(|i| self.percent[i])
    }

    /// Iterate over `(residue, count, percent)` in A..Y order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize, f64)> + '_ {
        AMINO_ACIDS
            .iter()
            .enumerate()
            .map(move |(i, &aa)| (aa, self.counts[i], self.percent[i]))
    }
}

/// Scalar physicochemical descriptors of a protein sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProteinStats {
    /// Number of residues.
    pub length: usize,
    /// Average molecular weight in g/mol.
    pub molecular_weight: f64,
    /// Isoelectric point (pH of zero net charge).
    pub isoelectric_point: f64,
    /// Fraction (0.0–1.0) of aromatic residues (Phe, Trp, Tyr).
    pub aromaticity: f64,
    /// Guruprasad instability index.
    pub instability_index: f64,
    /// Grand average of hydropathicity (Kyte-Doolittle mean).
    pub gravy: f64,
    /// Net charge at the pH the analysis was requested for.
    pub charge_at_ph: f64,
}

impl ProteinStats {
    /// Whether the instability index classifies the protein as unstable
    /// (index strictly above [`INSTABILITY_THRESHOLD`]).
    pub fn is_unstable(&self) -> bool {
        self.instability_index > INSTABILITY_THRESHOLD
    }
}

impl Summarizable for ProteinStats {
    fn summary(&self) -> String {
        format!(
            "protein of {} residues: {:.1} Da, pI {:.2}, GRAVY {:+.3}",
            self.length, self.molecular_weight, self.isoelectric_point, self.gravy
        )
    }
}

// ── Net charge model ────────────────────────────────────────────

/// Net charge at a given pH via Henderson-Hasselbalch.
///
/// Acidic groups (C-terminus, Asp, Glu, Cys, Tyr) contribute
/// `-1 / (1 + 10^(pKa - pH))`; basic groups (N-terminus, His, Lys, Arg)
/// contribute `+1 / (1 + 10^(pH - pKa))`.
fn net_charge(seq: &[u8], ph: f64, pka: &PkaSet) -> f64 {
    let mut charge = 0.0;

    // N-terminus (positive)
    charge += 1.0 / (1.0 + 10_f64.powf(ph - pka.n_terminus));
    // C-terminus (negative)
    charge -= 1.0 / (1.0 + 10_f64.powf(pka.c_terminus - ph));

    for &aa in seq {
        match aa {
            b'D' => charge -= 1.0 / (1.0 + 10_f64.powf(pka.asp - ph)),
            b'E' => charge -= 1.0 / (1.0 + 10_f64.powf(pka.glu - ph)),
            b'C' => charge -= 1.0 / (1.0 + 10_f64.powf(pka.cys - ph)),
            b'Y' => charge -= 1.0 / (1.0 + 10_f64.powf(pka.tyr - ph)),
            b'H' => charge += 1.0 / (1.0 + 10_f64.powf(ph - pka.his)),
            b'K' => charge += 1.0 / (1.0 + 10_f64.powf(ph - pka.lys)),
            b'R' => charge += 1.0 / (1.0 + 10_f64.powf(ph - pka.arg)),
            _ => {}
        }
    }
    charge
}

/// Bisection on [0, 14] for the pH of zero net charge.
///
/// The charge curve is non-increasing in pH: positive at pH 0 (protonated
/// N-terminus) and negative at pH 14 for any ordinary composition, so the
/// zero crossing is bracketed. A sequence that stays charged across the
/// whole range converges to the nearest boundary instead.
fn bisect_isoelectric_point(seq: &[u8], pka: &PkaSet) -> Result<f64> {
    let mut lo = 0.0_f64;
    let mut hi = 14.0_f64;

    for _ in 0..PI_MAX_ITERATIONS {
        if hi - lo < PI_TOLERANCE {
            return Ok((lo + hi) / 2.0);
        }
        let mid = (lo + hi) / 2.0;
        if net_charge(seq, mid, pka) > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    if hi - lo < PI_TOLERANCE {
        Ok((lo + hi) / 2.0)
    } else {
        Err(AequoreaError::NoConvergence(format!(
            "pI bisection interval still {:.3e} wide after {} iterations",
            hi - lo,
            PI_MAX_ITERATIONS
        )))
    }
}

// ── Descriptors ─────────────────────────────────────────────────

impl ValidatedSeq<ProteinAlphabet> {
    /// Compute the amino acid composition.
    ///
    /// # Example
    ///
    /// ```
    /// use aequorea_seq::ProteinSequence;
    ///
    /// let comp = ProteinSequence::new("ACDEFGHIKLMNPQRSTVWY").unwrap().composition();
    /// assert_eq!(comp.length, 20);
    /// for (_, count, percent) in comp.iter() {
    ///     assert_eq!(count, 1);
    ///     assert!((percent - 5.0).abs() < 1e-10);
    /// }
    /// ```
    pub fn composition(&self) -> AminoAcidComposition {
        let mut counts = [0usize; 20];
        for &aa in self.as_ref() {
            counts[aa_index(aa).unwrap()] += 1;
        }
        let len = self.len() as f64;
        let mut percent = [0.0f64; 20];
        for i in 0..20 {
            percent[i] = 100.0 * counts[i] as f64 / len;
        }
        AminoAcidComposition {
            counts,
            percent,
            length: self.len(),
        }
    }

    /// Average molecular weight in g/mol.
    ///
    /// Sums the free masses of all residues and subtracts one water per
    /// peptide bond formed (`length - 1` bonds).
    ///
    /// # Example
    ///
    /// ```
    /// use aequorea_seq::ProteinSequence;
    ///
    /// let mw = ProteinSequence::new("AG").unwrap().molecular_weight();
    /// assert!((mw - 146.1448).abs() < 1e-6);
    /// ```
    pub fn molecular_weight(&self) -> f64 {
        let sum: f64 = self
            .iter()
            .map(|&aa| FREE_MASS[aa_index(aa).unwrap()])
            .sum();
        sum - (self.len() as f64 - 1.0) * WATER_MASS
    }

    /// Net charge at the given pH under the canonical (Bjellqvist) pKa set.
    ///
    /// The pH is used as given; callers wanting chemically meaningful
    /// values keep it within [0, 14].
    pub fn charge_at_ph(&self, ph: f64) -> f64 {
        self.charge_at_ph_with(ph, PkaScale::default())
    }

    /// Net charge at the given pH under an explicit pKa set.
    pub fn charge_at_ph_with(&self, ph: f64, scale: PkaScale) -> f64 {
        net_charge(self, ph, scale.values())
    }

    /// Isoelectric point under the canonical (Bjellqvist) pKa set.
    ///
    /// Bisection on [0, 14] until the interval is narrower than 1e-4 pH
    /// units, capped at 100 iterations.
    ///
    /// # Errors
    ///
    /// Returns [`AequoreaError::NoConvergence`] if the iteration cap is
    /// reached before the width tolerance. The fixed [0, 14] bracket rules
    /// this out in practice; seeing it indicates a defect rather than a
    /// retryable condition.
    ///
    /// # Example
    ///
    /// ```
    /// use aequorea_seq::ProteinSequence;
    ///
    /// let pi = ProteinSequence::new("DDDDD").unwrap().isoelectric_point().unwrap();
    /// assert!(pi < 3.5); // highly acidic
    /// ```
    pub fn isoelectric_point(&self) -> Result<f64> {
        self.isoelectric_point_with(PkaScale::default())
    }

    /// Isoelectric point under an explicit pKa set.
    ///
    /// # Errors
    ///
    /// Same contract as [`isoelectric_point`](Self::isoelectric_point).
    pub fn isoelectric_point_with(&self, scale: PkaScale) -> Result<f64> {
        bisect_isoelectric_point(self, scale.values())
    }

    /// Fraction (0.0–1.0) of aromatic residues (Phe, Trp, Tyr).
    pub fn aromaticity(&self) -> f64 {
        let aromatic = self.iter().filter(|&&aa| is_aromatic(aa)).count();
        aromatic as f64 / self.len() as f64
    }

    /// Grand average of hydropathicity: the mean Kyte-Doolittle value.
    /// Positive values indicate overall hydrophobic character.
    pub fn gravy(&self) -> f64 {
        let sum: f64 = self
            .iter()
            .map(|&aa| KYTE_DOOLITTLE[aa_index(aa).unwrap()])
            .sum();
        sum / self.len() as f64
    }

    /// Guruprasad instability index: `10 / length` times the sum of
    /// dipeptide weights over all overlapping residue pairs. Values above
    /// 40 predict a short in vivo half-life.
    ///
    /// A single-residue sequence has no dipeptides and scores 0.0.
    ///
    /// # Example
    ///
    /// ```
    /// use aequorea_seq::ProteinSequence;
    ///
    /// let index = ProteinSequence::new("LLLLLL").unwrap().instability_index();
    /// assert!(index < 40.0); // poly-leucine is stable
    /// ```
    pub fn instability_index(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }
        let sum: f64 = self
            .windows(2)
            .map(|pair| instability_weight(pair[0], pair[1]))
            .sum();
        10.0 * sum / self.len() as f64
    }

    /// Compute all scalar descriptors at once.
    ///
    /// # Errors
    ///
    /// Propagates [`AequoreaError::NoConvergence`] from the pI solver.
    pub fn stats(&self, ph: f64) -> Result<ProteinStats> {
        Ok(ProteinStats {
            length: self.len(),
            molecular_weight: self.molecular_weight(),
            isoelectric_point: self.isoelectric_point()?,
            aromaticity: self.aromaticity(),
            instability_index: self.instability_index(),
            gravy: self.gravy(),
            charge_at_ph: self.charge_at_ph(ph),
        })
    }
}

// ── Entry point ─────────────────────────────────────────────────

/// Validate raw sequence text and compute every descriptor plus the
/// composition in one call.
///
/// Whitespace (including FASTA-style line wrapping) is stripped and case
/// is folded before validation; no computation runs on invalid input.
///
/// # Errors
///
/// Returns [`AequoreaError::InvalidSequence`] for empty input or input
/// containing bytes outside the 20 standard one-letter codes, and
/// propagates [`AequoreaError::NoConvergence`] from the pI solver.
///
/// # Example
///
/// ```
/// use aequorea_seq::analyze;
///
/// let (stats, comp) = analyze("FWY", 7.0).unwrap();
/// assert_eq!(stats.length, 3);
/// assert!((stats.aromaticity - 1.0).abs() < 1e-10);
/// assert_eq!(comp.counts.iter().sum::<usize>(), 3);
/// ```
pub fn analyze(
    raw: impl AsRef<[u8]>,
    ph: f64,
) -> Result<(ProteinStats, AminoAcidComposition)> {
    let seq = ProteinSequence::new(raw)?;
    let stats = seq.stats(ph)?;
    let composition = seq.composition();
    Ok((stats, composition))
}

// ── Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn protein(s: &str) -> ProteinSequence {
        ProteinSequence::new(s).unwrap()
    }

    // ── composition ──

    #[test]
    fn composition_all_alanine() {
        let comp = protein("AAAAAAAAAA").composition();
        assert_eq!(comp.counts[0], 10);
        assert!((comp.percent[0] - 100.0).abs() < 1e-10);
        assert_eq!(comp.length, 10);
        for i in 1..20 {
            assert_eq!(comp.counts[i], 0);
            assert_eq!(comp.percent[i], 0.0);
        }
    }

    #[test]
    fn composition_each_aa_once() {
        let comp = protein("ACDEFGHIKLMNPQRSTVWY").composition();
        assert_eq!(comp.length, 20);
        for i in 0..20 {
            assert_eq!(comp.counts[i], 1);
            assert!((comp.percent[i] - 5.0).abs() < 1e-10);
        }
    }

    #[test]
    fn composition_accessors() {
        let comp = protein("MKKV").composition();
        assert_eq!(comp.count_of(b'K'), Some(2));
        assert_eq!(comp.count_of(b'k'), Some(2));
        assert_eq!(comp.count_of(b'W'), Some(0));
        assert_eq!(comp.count_of(b'X'), None);
        assert!((comp.percent_of(b'K').unwrap() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn composition_iter_in_order() {
        let comp = protein("CA").composition();
        let rows: Vec<(u8, usize, f64)> = comp.iter().collect();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].0, b'A');
        assert_eq!(rows[0].1, 1);
        assert_eq!(rows[1].0, b'C');
        assert_eq!(rows[1].1, 1);
        assert_eq!(rows[19].0, b'Y');
        assert_eq!(rows[19].1, 0);
    }

    // ── molecular weight ──

    #[test]
    fn weight_single_residue_is_free_mass() {
        // No peptide bond, no water subtracted
        let mw = protein("A").molecular_weight();
        assert!((mw - 89.0932).abs() < 1e-10);
    }

    #[test]
    fn weight_dipeptide() {
        // 89.0932 + 75.0666 - 18.015
        let mw = protein("AG").molecular_weight();
        assert!((mw - 146.1448).abs() < 1e-10);
    }

    #[test]
    fn weight_all_twenty() {
        let mw = protein("ACDEFGHIKLMNPQRSTVWY").molecular_weight();
        assert!((mw - 2395.7191).abs() < 1e-3, "got {}", mw);
    }

    // ── net charge ──

    #[test]
    fn charge_krh_fully_protonated_at_ph_0() {
        // N-terminus + K + R + H all carry nearly a full positive charge;
        // the C-terminus is mostly protonated (neutral).
        let c = protein("KRH").charge_at_ph(0.0);
        assert!(c > 3.9 && c < 4.0, "got {}", c);
    }

    #[test]
    fn charge_krh_at_ph_14() {
        // Basic groups are titrated away and the C-terminus is fully
        // deprotonated.
        let c = protein("KRH").charge_at_ph(14.0);
        assert!(c > -1.1 && c < -0.9, "got {}", c);
    }

    #[test]
    fn charge_krh_at_neutral_ph() {
        let c = protein("KRH").charge_at_ph(7.0);
        assert!((c - 1.846).abs() < 0.01, "got {}", c);
    }

    #[test]
    fn charge_acidic_sequence_negative_at_neutral_ph() {
        assert!(protein("DDEE").charge_at_ph(7.0) < -3.0);
    }

    #[test]
    fn charge_scales_disagree() {
        let seq = protein("KDHE");
        let b = seq.charge_at_ph_with(7.0, PkaScale::Bjellqvist);
        let e = seq.charge_at_ph_with(7.0, PkaScale::Emboss);
        assert!((b - e).abs() > 1e-3, "expected distinct charges, got {} vs {}", b, e);
        assert!((seq.charge_at_ph(7.0) - b).abs() < 1e-12);
    }

    // ── isoelectric point ──

    #[test]
    fn pi_no_ionizable_side_chains() {
        // Only the termini titrate: pI = (7.5 + 3.55) / 2
        let pi = protein("A").isoelectric_point().unwrap();
        assert!((pi - 5.525).abs() < 1e-3, "got {}", pi);
        let pi = protein("GGGGG").isoelectric_point().unwrap();
        assert!((pi - 5.525).abs() < 1e-3, "got {}", pi);
    }

    #[test]
    fn pi_poly_lysine_basic() {
        let pi = protein("KKKKK").isoelectric_point().unwrap();
        assert!(pi > 10.0 && pi < 11.0, "got {}", pi);
    }

    #[test]
    fn pi_poly_aspartate_acidic() {
        let pi = protein("DDDDD").isoelectric_point().unwrap();
        assert!(pi < 3.5, "got {}", pi);
    }

    #[test]
    fn pi_known_protein() {
        // Insulin B chain; ProtParam reports ~6.9
        let pi = protein("FVNQHLCGSHLVEALYLVCGERGFFYTPKT")
            .isoelectric_point()
            .unwrap();
        assert!(pi > 6.0 && pi < 7.5, "got {}", pi);
    }

    #[test]
    fn pi_charge_residual_small() {
        let seq = protein("MKWVTFISLLLLFSSAYSRGV");
        let pi = seq.isoelectric_point().unwrap();
        assert!(seq.charge_at_ph(pi).abs() < 1e-2);
    }

    #[test]
    fn pi_emboss_scale_shifts_result() {
        // Termini-only sequence under EMBOSS: (8.6 + 3.6) / 2
        let pi = protein("A").isoelectric_point_with(PkaScale::Emboss).unwrap();
        assert!((pi - 6.1).abs() < 1e-3, "got {}", pi);
    }

    // ── aromaticity ──

    #[test]
    fn aromaticity_all_aromatic() {
        assert!((protein("FWY").aromaticity() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn aromaticity_none() {
        assert_eq!(protein("A").aromaticity(), 0.0);
    }

    #[test]
    fn aromaticity_half() {
        assert!((protein("AF").aromaticity() - 0.5).abs() < 1e-10);
    }

    // ── instability index ──

    #[test]
    fn instability_single_residue_zero() {
        assert_eq!(protein("A").instability_index(), 0.0);
    }

    #[test]
    fn instability_proline_rich_unstable() {
        // A-P and P-A both weigh 20.26: (10/3) * 40.52
        let index = protein("APA").instability_index();
        assert!((index - 135.0667).abs() < 1e-3, "got {}", index);
        assert!(index > INSTABILITY_THRESHOLD);
    }

    #[test]
    fn instability_poly_leucine_stable() {
        // L-L weighs 1.0: (10/6) * 5.0
        let index = protein("LLLLLL").instability_index();
        assert!((index - 8.3333).abs() < 1e-3, "got {}", index);
        assert!(index < INSTABILITY_THRESHOLD);
    }

    #[test]
    fn unstable_classification_is_strict() {
        let mut stats = protein("A").stats(7.0).unwrap();
        stats.instability_index = INSTABILITY_THRESHOLD;
        assert!(!stats.is_unstable());
        stats.instability_index = INSTABILITY_THRESHOLD + 1e-9;
        assert!(stats.is_unstable());
    }

    // ── stats / analyze ──

    #[test]
    fn stats_single_alanine() {
        let stats = protein("A").stats(7.0).unwrap();
        assert_eq!(stats.length, 1);
        assert!((stats.molecular_weight - 89.0932).abs() < 1e-10);
        assert!((stats.isoelectric_point - 5.525).abs() < 1e-3);
        assert_eq!(stats.aromaticity, 0.0);
        assert_eq!(stats.instability_index, 0.0);
        assert!((stats.gravy - 1.8).abs() < 1e-10);
    }

    #[test]
    fn analyze_matches_componentwise_calls() {
        let seq = protein("MKWVTFISLLLLFSSAYSRGV");
        let (stats, comp) = analyze("MKWVTFISLLLLFSSAYSRGV", 7.4).unwrap();
        assert_eq!(stats, seq.stats(7.4).unwrap());
        assert_eq!(comp, seq.composition());
    }

    #[test]
    fn analyze_accepts_wrapped_lowercase_input() {
        let (stats, _) = analyze("mkwv\ntfis\n", 7.0).unwrap();
        assert_eq!(stats.length, 8);
    }

    #[test]
    fn analyze_rejects_invalid_before_computing() {
        let err = analyze("MKXV", 7.0).unwrap_err();
        assert!(matches!(err, AequoreaError::InvalidSequence(_)));
        let err = analyze("", 7.0).unwrap_err();
        assert!(matches!(err, AequoreaError::InvalidSequence(_)));
    }

    #[test]
    fn gravy_values() {
        assert!((protein("IIIII").gravy() - 4.5).abs() < 1e-10);
        // (1.8 + -4.5) / 2
        assert!((protein("AR").gravy() - (-1.35)).abs() < 1e-10);
    }

    #[test]
    fn stats_summary_renders() {
        let stats = protein("FVNQHLCGSHLVEALYLVCGERGFFYTPKT").stats(7.0).unwrap();
        let s = stats.summary();
        assert!(s.contains("30 residues"), "got {}", s);
        assert!(s.contains("pI"), "got {}", s);
    }
}
