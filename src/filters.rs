//! Tabular quality filters for siRNA/ASO candidate tables.
//!
//! Every predicate takes a DataFrame plus the name of the column to test and
//! returns the rows that pass. Range checks are inclusive at both bounds.

use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Low-complexity homopolymer runs in siRNA (RNA) candidates.
const SIRNA_REPEAT_PATTERN: &str = "A{5,16}|C{5,16}|G{5,16}|U{5,16}";

/// Immune-stimulating motifs known to trigger nonspecific silencing.
const IMMUNE_MOTIF_PATTERN: &str = "UGUGU|GUCCUUCAA|AUCGAU[ACGU]+GGGG";

/// Low-complexity runs in ASO (DNA) candidates: homopolymers plus
/// dinucleotide repeats such as ACACAC or TGTGTG.
const ASO_REPEAT_PATTERN: &str = "A{5,16}|C{5,16}|G{5,16}|T{5,16}\
    |(AC){3,8}|(AG){3,8}|(AT){3,8}|(CA){3,8}|(CG){3,8}|(CT){3,8}\
    |(GA){3,8}|(GC){3,8}|(GT){3,8}|(TA){3,8}|(TC){3,8}|(TG){3,8}";

fn exclude_matching(df: &DataFrame, col_name: &str, pattern: &str) -> Result<DataFrame> {
    let filtered = df
        .clone()
        .lazy()
        .filter(col(col_name).str().contains(lit(pattern), true).not())
        .collect()?;
    Ok(filtered)
}

fn keep_between(df: &DataFrame, col_name: &str, min: f64, max: f64) -> Result<DataFrame> {
    let filtered = df
        .clone()
        .lazy()
        .filter(col(col_name).gt_eq(lit(min)).and(col(col_name).lt_eq(lit(max))))
        .collect()?;
    Ok(filtered)
}

fn keep_at_least(df: &DataFrame, col_name: &str, threshold: f64) -> Result<DataFrame> {
    let filtered = df
        .clone()
        .lazy()
        .filter(col(col_name).gt_eq(lit(threshold)))
        .collect()?;
    Ok(filtered)
}

/// Removes siRNA candidates with low-complexity motifs such as "GGGG", "UUUU",
/// "CCCC", and "AAAA" (runs of 5-16 identical bases in `col_name`).
pub fn filter_out_repeats(df: &DataFrame, col_name: &str) -> Result<DataFrame> {
    exclude_matching(df, col_name, SIRNA_REPEAT_PATTERN)
}

/// Removes siRNA candidates vulnerable to nonspecific silencing due to
/// immune-stimulating motifs: "UGUGU", "GUCCUUCAA", and "AUCGAU(N)nGGGG".
pub fn filter_out_immune_motifs(df: &DataFrame, col_name: &str) -> Result<DataFrame> {
    exclude_matching(df, col_name, IMMUNE_MOTIF_PATTERN)
}

/// Keeps candidates whose duplex melting temperature in `col_name` lies in
/// `[tm_start, tm_end]`.
pub fn filter_tm(df: &DataFrame, col_name: &str, tm_start: f64, tm_end: f64) -> Result<DataFrame> {
    keep_between(df, col_name, tm_start, tm_end)
}

/// Keeps candidates whose GC-content fraction in `col_name` lies in
/// `[min_gc, max_gc]`.
pub fn filter_gc_content(
    df: &DataFrame,
    col_name: &str,
    min_gc: f64,
    max_gc: f64,
) -> Result<DataFrame> {
    keep_between(df, col_name, min_gc, max_gc)
}

/// Removes ASO candidates with low-complexity motifs: runs of 5-16 identical
/// nucleosides (e.g. "GGGGG", "TTTTT") or 3-8 dinucleotide repeats
/// (e.g. "TGTGTG", "ACACAC") in `col_name`.
pub fn filter_out_repeats_dna(df: &DataFrame, col_name: &str) -> Result<DataFrame> {
    exclude_matching(df, col_name, ASO_REPEAT_PATTERN)
}

/// Keeps candidates whose target-site pLfold accessibility in `col_name` is at
/// least `threshold`.
pub fn filter_plfold(df: &DataFrame, col_name: &str, threshold: f64) -> Result<DataFrame> {
    keep_at_least(df, col_name, threshold)
}

/// Keeps candidates whose ASO-ASO duplex free energy in `col_name` is at least
/// `threshold` (less negative means less self-pairing).
pub fn filter_duplex_free_energy(
    df: &DataFrame,
    col_name: &str,
    threshold: f64,
) -> Result<DataFrame> {
    keep_at_least(df, col_name, threshold)
}

/// Keeps candidates whose ASO-transcript free energy in `col_name` lies in
/// `[min_tfe, max_tfe]`.
pub fn filter_transcript_free_energy(
    df: &DataFrame,
    col_name: &str,
    min_tfe: f64,
    max_tfe: f64,
) -> Result<DataFrame> {
    keep_between(df, col_name, min_tfe, max_tfe)
}

/// Appends a `gc_content` column with the G+C fraction of the sequences in
/// `seq_col`, so the GC filter can run on raw sequence tables.
pub fn with_gc_content(df: &DataFrame, seq_col: &str) -> Result<DataFrame> {
    let annotated = df
        .clone()
        .lazy()
        .with_column(
            (col(seq_col)
                .str()
                .count_matches(lit("[GC]"), false)
                .cast(DataType::Float64)
                / col(seq_col).str().len_chars().cast(DataType::Float64))
            .alias("gc_content"),
        )
        .collect()?;
    Ok(annotated)
}

/// Threshold bundle for screening siRNA candidate tables.
///
/// Defaults follow common siRNA design guidelines and are starting points to
/// tune per project, not published constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SirnaScreen {
    pub tm_start: f64,
    pub tm_end: f64,
    pub min_gc: f64,
    pub max_gc: f64,
}

impl Default for SirnaScreen {
    fn default() -> Self {
        SirnaScreen {
            tm_start: 60.0,
            tm_end: 78.0,
            min_gc: 0.30,
            max_gc: 0.52,
        }
    }
}

impl SirnaScreen {
    /// Runs the repeat, immune-motif, Tm, and GC filters in sequence.
    pub fn apply(
        &self,
        df: &DataFrame,
        seq_col: &str,
        tm_col: &str,
        gc_col: &str,
    ) -> Result<DataFrame> {
        let df = filter_out_repeats(df, seq_col)?;
        let df = filter_out_immune_motifs(&df, seq_col)?;
        let df = filter_tm(&df, tm_col, self.tm_start, self.tm_end)?;
        filter_gc_content(&df, gc_col, self.min_gc, self.max_gc)
    }
}

/// Threshold bundle for screening ASO candidate tables.
///
/// Defaults are starting points to tune per project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsoScreen {
    pub min_gc: f64,
    pub max_gc: f64,
    pub plfold_threshold: f64,
    pub duplex_fe_threshold: f64,
    pub min_transcript_fe: f64,
    pub max_transcript_fe: f64,
}

impl Default for AsoScreen {
    fn default() -> Self {
        AsoScreen {
            min_gc: 0.40,
            max_gc: 0.60,
            plfold_threshold: 0.1,
            duplex_fe_threshold: -10.0,
            min_transcript_fe: -40.0,
            max_transcript_fe: -10.0,
        }
    }
}

impl AsoScreen {
    /// Runs the repeat, GC, pLfold, and free-energy filters in sequence.
    pub fn apply(
        &self,
        df: &DataFrame,
        seq_col: &str,
        gc_col: &str,
        plfold_col: &str,
        duplex_fe_col: &str,
        transcript_fe_col: &str,
    ) -> Result<DataFrame> {
        let df = filter_out_repeats_dna(df, seq_col)?;
        let df = filter_gc_content(&df, gc_col, self.min_gc, self.max_gc)?;
        let df = filter_plfold(&df, plfold_col, self.plfold_threshold)?;
        let df = filter_duplex_free_energy(&df, duplex_fe_col, self.duplex_fe_threshold)?;
        filter_transcript_free_energy(
            &df,
            transcript_fe_col,
            self.min_transcript_fe,
            self.max_transcript_fe,
        )
    }
}
