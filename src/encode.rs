use crate::error::{DesignError, Result};
use ndarray::{Array2, ArrayView2};
use phf::phf_map;

/// Column index of each RNA base in encoded matrices and PWMs.
///
/// The same ordering (A, C, G, U) is used by every PWM in [`crate::tables`];
/// encoding and scoring must agree on it.
pub static RNA_BASE_INDEX: phf::Map<char, usize> = phf_map! {
    'A' => 0,
    'C' => 1,
    'G' => 2,
    'U' => 3,
};

/// Column index of each DNA base, for ASO (DNA) sequences.
pub static DNA_BASE_INDEX: phf::Map<char, usize> = phf_map! {
    'A' => 0,
    'C' => 1,
    'G' => 2,
    'T' => 3,
};

/// Column index of each modified nucleoside used in gapmer ASO designs
/// (DNA core plus cEt-modified wings).
pub static MODIFIED_NUCLEOSIDE_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "dA" => 0,
    "dCm" => 1,
    "dG" => 2,
    "dT" => 3,
    "cEtA" => 4,
    "cEtCm" => 5,
    "cEtG" => 6,
    "cEtT" => 7,
};

/// One-hot encodes a nucleotide sequence into an L×4 indicator matrix.
///
/// Row `i` holds a single 1.0 in the column `alphabet` assigns to the base at
/// position `i`, and 0.0 elsewhere.
///
/// # Arguments
/// * `seq` - Nucleotide sequence (uppercase)
/// * `alphabet` - Base-to-column mapping ([`RNA_BASE_INDEX`] or [`DNA_BASE_INDEX`])
///
/// # Errors
/// * `DesignError::EmptySequence` - if `seq` is empty
/// * `DesignError::InvalidBase` - if any character is outside the alphabet;
///   out-of-alphabet bases are never silently zero-filled
pub fn one_hot_encode(seq: &str, alphabet: &phf::Map<char, usize>) -> Result<Array2<f64>> {
    if seq.is_empty() {
        return Err(DesignError::EmptySequence);
    }

    let mut encoded = Array2::zeros((seq.chars().count(), alphabet.len()));
    for (i, base) in seq.chars().enumerate() {
        let col = *alphabet
            .get(&base)
            .ok_or_else(|| DesignError::invalid_base(i, base))?;
        encoded[[i, col]] = 1.0;
    }

    Ok(encoded)
}

/// One-hot encodes a chain of modified nucleosides into an L×8 indicator matrix.
///
/// Gapmer ASO candidates mix DNA and cEt-modified nucleosides; each token must
/// be a key of [`MODIFIED_NUCLEOSIDE_INDEX`].
///
/// # Errors
/// * `DesignError::EmptySequence` - if `nucleosides` is empty
/// * `DesignError::InvalidBase` - if any token is not a known nucleoside
pub fn one_hot_encode_modified(nucleosides: &[&str]) -> Result<Array2<f64>> {
    if nucleosides.is_empty() {
        return Err(DesignError::EmptySequence);
    }

    let mut encoded = Array2::zeros((nucleosides.len(), MODIFIED_NUCLEOSIDE_INDEX.len()));
    for (i, token) in nucleosides.iter().enumerate() {
        let col = *MODIFIED_NUCLEOSIDE_INDEX
            .get(*token)
            .ok_or_else(|| DesignError::invalid_base(i, token))?;
        encoded[[i, col]] = 1.0;
    }

    Ok(encoded)
}

/// Decodes an indicator matrix back to a sequence by taking the argmax of each row.
///
/// Inverse of [`one_hot_encode`] for well-formed indicator matrices.
///
/// # Errors
/// * `DesignError::EmptySequence` - if the matrix has no rows
pub fn decode_one_hot(encoded: ArrayView2<f64>, alphabet: &phf::Map<char, usize>) -> Result<String> {
    if encoded.nrows() == 0 {
        return Err(DesignError::EmptySequence);
    }

    let mut symbols = vec![' '; alphabet.len()];
    for (base, &col) in alphabet.entries() {
        symbols[col] = *base;
    }

    let mut seq = String::with_capacity(encoded.nrows());
    for row in encoded.rows() {
        let mut best = 0;
        for (col, &value) in row.iter().enumerate() {
            if value > row[best] {
                best = col;
            }
        }
        seq.push(symbols[best]);
    }

    Ok(seq)
}

/// Generates the reverse complement of an RNA sequence (A ↔ U, C ↔ G).
///
/// # Errors
/// * Returns `DesignError::InvalidBase` if the sequence contains characters
///   other than A, C, G, or U
pub fn reverse_complement_rna(seq: &str) -> Result<String> {
    seq.chars()
        .rev()
        .enumerate()
        .map(|(i, base)| match base {
            'A' => Ok('U'),
            'U' => Ok('A'),
            'C' => Ok('G'),
            'G' => Ok('C'),
            other => Err(DesignError::invalid_base(seq.chars().count() - 1 - i, other)),
        })
        .collect()
}

/// Generates the reverse complement of a DNA sequence (A ↔ T, C ↔ G).
///
/// # Errors
/// * Returns `DesignError::InvalidBase` if the sequence contains characters
///   other than A, C, G, or T
pub fn reverse_complement_dna(seq: &str) -> Result<String> {
    seq.chars()
        .rev()
        .enumerate()
        .map(|(i, base)| match base {
            'A' => Ok('T'),
            'T' => Ok('A'),
            'C' => Ok('G'),
            'G' => Ok('C'),
            other => Err(DesignError::invalid_base(seq.chars().count() - 1 - i, other)),
        })
        .collect()
}
