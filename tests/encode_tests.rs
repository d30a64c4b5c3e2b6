use oligo_design_rs::encode::{
    decode_one_hot, one_hot_encode, one_hot_encode_modified, reverse_complement_dna,
    reverse_complement_rna, DNA_BASE_INDEX, RNA_BASE_INDEX,
};
use oligo_design_rs::error::DesignError;

#[test]
fn test_one_hot_encode() {
    let encoded = one_hot_encode("ACGU", &RNA_BASE_INDEX).unwrap();
    assert_eq!(encoded.dim(), (4, 4));
    for (i, row) in encoded.rows().into_iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            assert_eq!(value, if i == j { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn test_one_hot_round_trip() {
    let seq = "AUGGCUACGUUACGAUCGAUU";
    let encoded = one_hot_encode(seq, &RNA_BASE_INDEX).unwrap();
    assert_eq!(decode_one_hot(encoded.view(), &RNA_BASE_INDEX).unwrap(), seq);

    let seq = "ATGGCTACGTTACGATCGATT";
    let encoded = one_hot_encode(seq, &DNA_BASE_INDEX).unwrap();
    assert_eq!(decode_one_hot(encoded.view(), &DNA_BASE_INDEX).unwrap(), seq);
}

#[test]
fn test_one_hot_encode_rejects_invalid_base() {
    let err = one_hot_encode("ACGTX", &DNA_BASE_INDEX).unwrap_err();
    match err {
        DesignError::InvalidBase { position, base } => {
            assert_eq!(position, 4);
            assert_eq!(base, "X");
        }
        other => panic!("unexpected error: {other}"),
    }

    // U is RNA, not DNA
    assert!(one_hot_encode("ACGU", &DNA_BASE_INDEX).is_err());

    assert!(matches!(
        one_hot_encode("", &RNA_BASE_INDEX).unwrap_err(),
        DesignError::EmptySequence
    ));
}

#[test]
fn test_one_hot_encode_modified() {
    let encoded = one_hot_encode_modified(&["cEtA", "dG", "dCm", "cEtT"]).unwrap();
    assert_eq!(encoded.dim(), (4, 8));
    assert_eq!(encoded[[0, 4]], 1.0);
    assert_eq!(encoded[[1, 2]], 1.0);
    assert_eq!(encoded[[2, 1]], 1.0);
    assert_eq!(encoded[[3, 7]], 1.0);
    assert_eq!(encoded.sum(), 4.0);

    let err = one_hot_encode_modified(&["dA", "rU"]).unwrap_err();
    assert!(matches!(err, DesignError::InvalidBase { position: 1, .. }));
}

#[test]
fn test_reverse_complement() {
    assert_eq!(reverse_complement_rna("AUGC").unwrap(), "GCAU");
    assert_eq!(reverse_complement_rna("AAACG").unwrap(), "CGUUU");
    assert_eq!(reverse_complement_dna("ACGT").unwrap(), "ACGT");
    assert_eq!(reverse_complement_dna("AAACG").unwrap(), "CGTTT");

    assert!(reverse_complement_rna("ACGT").is_err());
    assert!(reverse_complement_dna("ACGU").is_err());
}
