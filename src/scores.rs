//! Published efficacy scoring functions for siRNA candidates.
//!
//! Each scorer takes a fixed-length RNA sequence of the documented strand and
//! returns a scalar on its own scale; scores from different models are not
//! comparable with each other.

use crate::encode::{one_hot_encode, RNA_BASE_INDEX};
use crate::error::{DesignError, Result};
use crate::tables::{
    DHARM_PWM, DSIR_SPARSE21, DSIR_SPECTRUM21, ISCORE_PWM, MACRO_KATOH, MICRO_KATOH,
    SBIOPREDSI_PWM,
};
use ndarray::{aview2, ArrayView2, Axis};
use statrs::function::logistic::logistic;

/// Positions covered by the siRNA duplex within a 21-mer (the remaining 2 nt
/// are the 3'-overhang).
const DUPLEX_LEN: usize = 19;

/// DSIR regression intercept.
const DSIR_OFFSET: f64 = 0.6938215;

/// sBiopredsi logistic-fit parameters.
const SBIOPREDSI_SIGMOID_OFFSET: f64 = 0.204977962358907;
const SBIOPREDSI_INTERCEPT: f64 = -2.27627506037018;
const SBIOPREDSI_SLOPE: f64 = 4.14301528286201;
const SBIOPREDSI_SCALE: f64 = 0.168285137478663;
const SBIOPREDSI_SHIFT: f64 = 0.581913382218149;

/// Homopolymer runs penalized by the Dharmacon model, 8.5 units per distinct
/// run value present in the sequence.
const HOMOPOLYMER_RUNS: [&str; 4] = ["AAAA", "CCCC", "UUUU", "GGGG"];
const HOMOPOLYMER_PENALTY: f64 = 8.5;

/// Scores an encoded sequence against a PWM of identical shape.
///
/// Computes the sum of elementwise products, i.e. for each position the weight
/// of the observed base at that position. Pure function, no side effects.
///
/// # Errors
/// * `DesignError::DimensionMismatch` - if the encoded matrix and the PWM do
///   not have the same shape
pub fn pwm_score(encoded: ArrayView2<f64>, pwm: ArrayView2<f64>) -> Result<f64> {
    if encoded.dim() != pwm.dim() {
        return Err(DesignError::DimensionMismatch {
            expected: pwm.nrows(),
            found: encoded.nrows(),
        });
    }
    Ok((&encoded * &pwm).sum())
}

/// Encodes an RNA sequence and scores it against `pwm`.
///
/// Extension point for caller-supplied matrices of the same shape as the
/// published ones.
///
/// # Errors
/// * `DesignError::EmptySequence` / `DesignError::InvalidBase` - from encoding
/// * `DesignError::DimensionMismatch` - if the sequence length does not match
///   the PWM row count
pub fn score_sequence(seq: &str, pwm: ArrayView2<f64>) -> Result<f64> {
    let encoded = one_hot_encode(seq, &RNA_BASE_INDEX)?;
    pwm_score(encoded.view(), pwm)
}

/// Counts occurrences of `motif` in `text`, allowing overlaps.
///
/// The search restarts one position past each match start, not past the match
/// end: `count_motif_overlap("AAAA", "AA")` is 3, not 2.
pub fn count_motif_overlap(text: &str, motif: &str) -> usize {
    if motif.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = text[start..].find(motif) {
        count += 1;
        start += pos + 1;
    }
    count
}

/// DSIR efficacy score. ANTISENSE 21-mer (19-mer duplex + 2 nt 3'-overhang).
///
/// Sum of the sparse PWM term and the spectrum term (motif overlap counts
/// weighted by [`DSIR_SPECTRUM21`], scanned over the 19-nt duplex region only,
/// excluding the overhang), shifted by the regression intercept and scaled to
/// a 0-100 knockdown range.
///
/// Vert et al., BMC Bioinformatics 2006, 7:520. <http://biodev.cea.fr/DSIR/>
pub fn dsir_score(anti_seq21: &str) -> Result<f64> {
    let sparse = score_sequence(anti_seq21, aview2(&DSIR_SPARSE21))?;
    // pwm_score succeeded, so the sequence is 21 ASCII bases
    let duplex = &anti_seq21[..DUPLEX_LEN];
    let spectrum: f64 = DSIR_SPECTRUM21
        .entries()
        .map(|(motif, weight)| count_motif_overlap(duplex, motif) as f64 * weight)
        .sum();
    Ok((sparse + spectrum + DSIR_OFFSET) * 100.0)
}

/// Katoh efficacy score with the published tables. SENSE 19-mer.
///
/// Katoh & Suzuki, Nucleic Acids Research 2007, 35(4):e27.
pub fn katoh_score(sense_seq19: &str) -> Result<f64> {
    katoh_score_with(sense_seq19, aview2(&MICRO_KATOH), &MACRO_KATOH)
}

/// Katoh efficacy score with caller-supplied tables.
///
/// The macro term weights whole-sequence base counts (A, C, G, U) by
/// `macro_weights`; the micro term is the positional PWM score. Other
/// published models of the same shape can be plugged in here.
pub fn katoh_score_with(
    sense_seq19: &str,
    micro_pwm: ArrayView2<f64>,
    macro_weights: &[f64; 4],
) -> Result<f64> {
    let encoded = one_hot_encode(sense_seq19, &RNA_BASE_INDEX)?;
    let micro = pwm_score(encoded.view(), micro_pwm)?;
    // per-base counts are the column sums of the indicator matrix
    let counts = encoded.sum_axis(Axis(0));
    let macro_term: f64 = counts
        .iter()
        .zip(macro_weights.iter())
        .map(|(count, weight)| count * weight)
        .sum();
    Ok(macro_term + micro)
}

/// sBiopredsi efficacy score. SENSE 21-mer (19-mer duplex + 2 nt 3'-overhang).
///
/// The raw PWM score goes through the published logistic squash
/// `1 / (1 + exp(-raw - 0.204977962358907))` followed by a linear rescaling;
/// the result is therefore bounded by the rescaling applied to the open
/// interval (0, 1).
///
/// Ichihara et al., Nucleic Acids Research 2007, 35(18):e123.
pub fn sbiopredsi_score(sense_seq21: &str) -> Result<f64> {
    let raw = score_sequence(sense_seq21, aview2(&SBIOPREDSI_PWM))?;
    let squashed = logistic(raw + SBIOPREDSI_SIGMOID_OFFSET);
    Ok((SBIOPREDSI_INTERCEPT + SBIOPREDSI_SLOPE * squashed) * SBIOPREDSI_SCALE + SBIOPREDSI_SHIFT)
}

/// iScore efficacy score. ANTISENSE 19-mer. Pure PWM score, no adjustment.
///
/// Ichihara et al., Nucleic Acids Research 2007, 35(18):e123.
pub fn iscore_score(anti_seq19: &str) -> Result<f64> {
    score_sequence(anti_seq19, aview2(&ISCORE_PWM))
}

/// Dharmacon efficacy score. ANTISENSE 19-mer.
///
/// PWM score minus 8.5 per distinct homopolymer run value (AAAA, CCCC, UUUU,
/// GGGG) present in the sequence. The penalty counts run VALUES, not
/// occurrences: two separate AAAA runs and one CCCC run cost 17.0, not 25.5.
/// This is a different counting rule from [`count_motif_overlap`].
///
/// Horizon Discovery (Dharmacon) fit, March 2025.
pub fn dharmacon_score(anti_seq19: &str) -> Result<f64> {
    let base = score_sequence(anti_seq19, aview2(&DHARM_PWM))?;
    let distinct_runs = HOMOPOLYMER_RUNS
        .iter()
        .filter(|run| anti_seq19.contains(*run))
        .count();
    Ok(base - distinct_runs as f64 * HOMOPOLYMER_PENALTY)
}
