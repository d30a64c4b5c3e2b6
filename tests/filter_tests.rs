use oligo_design_rs::filters;
use polars::prelude::*;

#[test]
fn test_filter_out_repeats() {
    let df = df!(
        "sequence" => [
            "AUGGCUACGUUACGAUCGAUU",
            "AAAAAGCUACGUUACGAUCGA",
            "AUGGCUACGUUUUUUACGAUC",
        ],
    )
    .unwrap();

    let filtered = filters::filter_out_repeats(&df, "sequence").unwrap();
    assert_eq!(filtered.height(), 1);

    // runs of exactly 4 are below the repeat-filter cutoff
    let df = df!("sequence" => ["AUGGAAAACGUUACGAUCGAU"]).unwrap();
    let filtered = filters::filter_out_repeats(&df, "sequence").unwrap();
    assert_eq!(filtered.height(), 1);
}

#[test]
fn test_filter_out_immune_motifs() {
    let df = df!(
        "sequence" => [
            "AUGGCUACGUUACGAUCGAUU",
            "AUGUGUCGUUACGAUCGAUUC",
            "AGUCCUUCAAUACGAUCGAUU",
            "AUCGAUCCGGGGACGAUCGAU",
        ],
    )
    .unwrap();

    let filtered = filters::filter_out_immune_motifs(&df, "sequence").unwrap();
    assert_eq!(filtered.height(), 1);
    let kept = filtered.column("sequence").unwrap().str().unwrap();
    assert_eq!(kept.get(0).unwrap(), "AUGGCUACGUUACGAUCGAUU");
}

#[test]
fn test_filter_tm_bounds_are_inclusive() {
    let df = df!(
        "label" => ["below", "at_start", "inside", "at_end", "above"],
        "tm" => [59.9, 60.0, 70.0, 78.0, 78.1],
    )
    .unwrap();

    let filtered = filters::filter_tm(&df, "tm", 60.0, 78.0).unwrap();
    assert_eq!(filtered.height(), 3);
    let labels = filtered.column("label").unwrap().str().unwrap();
    assert_eq!(labels.get(0).unwrap(), "at_start");
    assert_eq!(labels.get(2).unwrap(), "at_end");
}

#[test]
fn test_filter_gc_content() {
    let df = df!("gc" => [0.25, 0.30, 0.45, 0.52, 0.60]).unwrap();
    let filtered = filters::filter_gc_content(&df, "gc", 0.30, 0.52).unwrap();
    assert_eq!(filtered.height(), 3);
}

#[test]
fn test_filter_out_repeats_dna() {
    let df = df!(
        "sequence" => [
            "ATGGCTACGTTACGATCGAT",
            "TTTTTGCTACGTTACGATCG",
            "ACACACGCTACGTTACGATC",
            "ATGGACACGCTACGTTACGA",
        ],
    )
    .unwrap();

    let filtered = filters::filter_out_repeats_dna(&df, "sequence").unwrap();
    assert_eq!(filtered.height(), 2);
    let kept = filtered.column("sequence").unwrap().str().unwrap();
    assert_eq!(kept.get(0).unwrap(), "ATGGCTACGTTACGATCGAT");
    // two AC repeats do not reach the dinucleotide cutoff of three
    assert_eq!(kept.get(1).unwrap(), "ATGGACACGCTACGTTACGA");
}

#[test]
fn test_free_energy_filters() {
    let df = df!("plfold" => [0.05, 0.1, 0.8]).unwrap();
    let filtered = filters::filter_plfold(&df, "plfold", 0.1).unwrap();
    assert_eq!(filtered.height(), 2);

    let df = df!("duplex_fe" => [-15.0, -10.0, -2.5]).unwrap();
    let filtered = filters::filter_duplex_free_energy(&df, "duplex_fe", -10.0).unwrap();
    assert_eq!(filtered.height(), 2);

    let df = df!("transcript_fe" => [-45.0, -40.0, -20.0, -10.0, -5.0]).unwrap();
    let filtered =
        filters::filter_transcript_free_energy(&df, "transcript_fe", -40.0, -10.0).unwrap();
    assert_eq!(filtered.height(), 3);
}

#[test]
fn test_with_gc_content() {
    let df = df!("sequence" => ["GGCC", "AUAU", "GCAU"]).unwrap();
    let annotated = filters::with_gc_content(&df, "sequence").unwrap();
    let gc = annotated.column("gc_content").unwrap().f64().unwrap();
    assert_eq!(gc.get(0).unwrap(), 1.0);
    assert_eq!(gc.get(1).unwrap(), 0.0);
    assert_eq!(gc.get(2).unwrap(), 0.5);
}

#[test]
fn test_sirna_screen() {
    let df = df!(
        "sequence" => [
            "AUGGCUACGUUACGAUCGAUU", // passes everything
            "AAAAAGCUACGUUACGAUCGA", // repeat run
            "AUGUGUCGUUACGAUCGAUUC", // immune motif
            "AUGGCUACGUUACGAUCGAUC", // Tm too low
            "AUGGCUACGUUACGAUCGAUG", // GC out of range
        ],
        "tm" => [65.0, 65.0, 65.0, 55.0, 65.0],
        "gc" => [0.45, 0.45, 0.45, 0.45, 0.60],
    )
    .unwrap();

    let screen = filters::SirnaScreen::default();
    let passed = screen.apply(&df, "sequence", "tm", "gc").unwrap();
    assert_eq!(passed.height(), 1);
    let kept = passed.column("sequence").unwrap().str().unwrap();
    assert_eq!(kept.get(0).unwrap(), "AUGGCUACGUUACGAUCGAUU");
}

#[test]
fn test_aso_screen() {
    let df = df!(
        "sequence" => ["ATGGCTACGTTACGATCGGC", "TGTGTGGCTACGTTACGATC"],
        "gc" => [0.50, 0.50],
        "plfold" => [0.5, 0.5],
        "duplex_fe" => [-5.0, -5.0],
        "transcript_fe" => [-20.0, -20.0],
    )
    .unwrap();

    let screen = filters::AsoScreen::default();
    let passed = screen
        .apply(&df, "sequence", "gc", "plfold", "duplex_fe", "transcript_fe")
        .unwrap();
    assert_eq!(passed.height(), 1);
}
