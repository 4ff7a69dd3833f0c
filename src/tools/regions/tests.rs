use rstest::{
    fixture,
    rstest,
};

use super::*;
use crate::data_structs::{
    NamedSpan,
    Span,
    Strand,
};

fn gene(
    start: i64,
    end: i64,
    strand: Strand,
    name: &str,
) -> GeneRecord {
    GeneRecord::new(start, end, strand, name, format!("syn_{}", name))
        .expect("valid test record")
}

fn region_tuples(regions: &RegionSet) -> Vec<(i64, i64, Vec<String>)> {
    regions
        .iter()
        .map(|(start, end, names)| (start, end, names.to_vec()))
        .collect()
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[fixture]
fn footprint_genes() -> Vec<GeneRecord> {
    vec![
        gene(10, 20, Strand::Forward, "g1"),
        gene(15, 25, Strand::Forward, "g2"),
        gene(100, 110, Strand::Reverse, "g3"),
    ]
}

#[fixture]
fn operon_genes() -> Vec<GeneRecord> {
    vec![
        gene(1, 10, Strand::Forward, "a"),
        gene(12, 20, Strand::Forward, "b"),
        gene(30, 40, Strand::Reverse, "c"),
    ]
}

// --- Empty input ---

#[test]
fn test_every_stage_rejects_empty_gene_list() {
    let genes: Vec<GeneRecord> = vec![];
    assert_eq!(
        coding_regions_by_gene(&genes).unwrap_err(),
        RegionError::EmptyGeneList
    );
    assert_eq!(
        coding_regions_by_footprint(&genes).unwrap_err(),
        RegionError::EmptyGeneList
    );
    assert_eq!(
        intergenic_regions_by_footprint(&genes, 100, 0).unwrap_err(),
        RegionError::EmptyGeneList
    );
    assert_eq!(
        putative_operons(&genes, 1).unwrap_err(),
        RegionError::EmptyGeneList
    );
    assert_eq!(
        putative_promoters(&genes, 100, 1, 0).unwrap_err(),
        RegionError::EmptyGeneList
    );
}

#[test]
fn test_stages_reject_malformed_deserialized_record() {
    let json = r#"[{"start": 50, "end": 5, "strand": "+", "gene": "g", "synonym": "s"}]"#;
    let genes: Vec<GeneRecord> = serde_json::from_str(json).unwrap();
    assert!(matches!(
        coding_regions_by_footprint(&genes),
        Err(RegionError::MalformedRecord { .. })
    ));
    assert!(matches!(
        putative_operons(&genes, 1),
        Err(RegionError::MalformedRecord { .. })
    ));
}

// --- Coding regions ---

#[rstest]
fn test_coding_regions_by_gene(footprint_genes: Vec<GeneRecord>) {
    let regions = coding_regions_by_gene(&footprint_genes).unwrap();
    assert_eq!(region_tuples(&regions), vec![
        (9, 19, names(&["g1"])),
        (14, 24, names(&["g2"])),
        (99, 109, names(&["g3"])),
    ]);
}

#[rstest]
fn test_coding_regions_by_footprint(footprint_genes: Vec<GeneRecord>) {
    let regions = coding_regions_by_footprint(&footprint_genes).unwrap();
    assert_eq!(region_tuples(&regions), vec![
        (9, 24, names(&["g1", "g2"])),
        (99, 109, names(&["g3"])),
    ]);
}

#[test]
fn test_coding_footprint_keeps_adjacent_genes_apart() {
    let genes = vec![
        gene(1, 10, Strand::Forward, "a"),
        gene(11, 20, Strand::Reverse, "b"),
        gene(20, 30, Strand::Forward, "c"),
    ];
    let regions = coding_regions_by_footprint(&genes).unwrap();
    assert_eq!(region_tuples(&regions), vec![
        (0, 9, names(&["a"])),
        (10, 29, names(&["b", "c"])),
    ]);
}

// --- Intergenic regions ---

#[rstest]
fn test_intergenic_regions(footprint_genes: Vec<GeneRecord>) {
    let regions = intergenic_regions_by_footprint(&footprint_genes, 200, 0).unwrap();
    assert_eq!(region_tuples(&regions), vec![
        (0, 8, names(&["", "g1", "g2"])),
        (25, 98, names(&["g1", "g2", "g3"])),
        (110, 200, names(&["g3", ""])),
    ]);
}

#[rstest]
fn test_intergenic_regions_with_overlap(footprint_genes: Vec<GeneRecord>) {
    let regions = intergenic_regions_by_footprint(&footprint_genes, 200, 3).unwrap();
    assert_eq!(region_tuples(&regions), vec![
        (0, 11, names(&["", "g1", "g2"])),
        (22, 101, names(&["g1", "g2", "g3"])),
        (107, 200, names(&["g3", ""])),
    ]);
}

#[test]
fn test_intergenic_single_gene_at_chromosome_start() {
    let genes = vec![gene(1, 50, Strand::Forward, "a")];
    let regions = intergenic_regions_by_footprint(&genes, 100, 0).unwrap();
    // The leading gap of a gene starting at the first base is inverted and
    // normalized, like any other span.
    assert_eq!(region_tuples(&regions), vec![
        (-1, 0, names(&["", "a"])),
        (50, 100, names(&["a", ""])),
    ]);
}

#[test]
fn test_intergenic_abutting_footprints() {
    let genes = vec![
        gene(1, 10, Strand::Forward, "a"),
        gene(11, 20, Strand::Forward, "b"),
    ];
    let footprints = coding_regions_by_footprint(&genes).unwrap();
    assert_eq!(footprints.len(), 2);

    let regions = intergenic_regions_by_footprint(&genes, 30, 0).unwrap();
    // No base separates the genes; the inverted gap [10, 9] is normalized.
    assert_eq!(region_tuples(&regions), vec![
        (-1, 0, names(&["", "a"])),
        (9, 10, names(&["a", "b"])),
        (20, 30, names(&["b", ""])),
    ]);
}

#[test]
fn test_intergenic_duplicate_name_is_kept() {
    let genes = vec![
        gene(10, 20, Strand::Forward, "a"),
        gene(40, 50, Strand::Forward, "a"),
    ];
    let err = GeneTable::try_new(genes.clone(), 100).unwrap_err();
    assert_eq!(err, RegionError::DuplicateSynonym("syn_a".to_string()));

    let regions = intergenic_regions_by_footprint(&genes, 100, 0).unwrap();
    assert_eq!(regions.spans()[1].names(), ["a", "a"]);
}

// --- Operons ---

#[rstest]
fn test_putative_operons(operon_genes: Vec<GeneRecord>) {
    let operons = putative_operons(&operon_genes, 1).unwrap();
    assert_eq!(operons.len(), 2);

    assert_eq!(operons[0].strand(), Strand::Forward);
    assert_eq!(operons[0].span(), Span::new(0, 19));
    assert_eq!(operons[0].names(), ["a (syn_a)", "b (syn_b)"]);

    assert_eq!(operons[1].strand(), Strand::Reverse);
    assert_eq!(operons[1].span(), Span::new(29, 39));
    assert_eq!(operons[1].names(), ["c (syn_c)"]);
}

#[rstest]
#[case::touching(0, 11, 2)]
#[case::one_base_gap(1, 12, 2)]
#[case::two_base_gap(1, 13, 3)]
#[case::wide_tolerance(5, 16, 2)]
fn test_operon_tolerance(
    #[case] overlap: i64,
    #[case] second_start: i64,
    #[case] expected: usize,
) {
    let genes = vec![
        gene(1, 10, Strand::Forward, "a"),
        gene(second_start, second_start + 5, Strand::Forward, "b"),
        gene(100, 110, Strand::Reverse, "c"),
    ];
    assert_eq!(putative_operons(&genes, overlap).unwrap().len(), expected);
}

#[test]
fn test_operons_split_on_strand_change() {
    let genes = vec![
        gene(1, 10, Strand::Forward, "a"),
        gene(5, 20, Strand::Reverse, "b"),
        gene(18, 30, Strand::Forward, "c"),
    ];
    let operons = putative_operons(&genes, 1).unwrap();
    let strands = operons.iter().map(Operon::strand).collect::<Vec<_>>();
    assert_eq!(strands, vec![
        Strand::Forward,
        Strand::Reverse,
        Strand::Forward
    ]);
}

#[test]
fn test_operons_are_not_resorted() {
    let genes = vec![
        gene(100, 110, Strand::Forward, "late"),
        gene(1, 10, Strand::Forward, "early"),
    ];
    let operons = putative_operons(&genes, 1).unwrap();
    assert_eq!(operons.len(), 2);
    assert_eq!(operons[0].names(), ["late (syn_late)"]);
}

// --- Promoters ---

#[test]
fn test_promoter_claim_state_machine() {
    let forward = Operon::new(NamedSpan::new(10, 20, ["f"]), Strand::Forward);
    let reverse = Operon::new(NamedSpan::new(40, 50, ["r"]), Strand::Reverse);
    let last = Operon::new(NamedSpan::new(70, 80, ["l"]), Strand::Reverse);

    let mut assigner = PromoterAssigner::new(100, 0);
    assert_eq!(assigner.claim(), &PromoterClaim::Unclaimed);

    assigner.step(&forward);
    assert_eq!(assigner.claim(), &PromoterClaim::Unclaimed);
    assert_eq!(assigner.promoters(), [NamedSpan::new(0, 9, ["f"])]);

    assigner.step(&reverse);
    assert_eq!(assigner.claim(), &PromoterClaim::Pending(names(&["r"])));
    assert_eq!(assigner.promoters().len(), 1);

    assigner.step(&last);
    assert_eq!(assigner.claim(), &PromoterClaim::Pending(names(&["l"])));
    assert_eq!(assigner.promoters()[1], NamedSpan::new(51, 69, ["r"]));

    assert_eq!(assigner.finish(), vec![
        NamedSpan::new(0, 9, ["f"]),
        NamedSpan::new(51, 69, ["r"]),
        NamedSpan::new(81, 100, ["l"]),
    ]);
}

#[test]
fn test_putative_promoters_directions() {
    let genes = vec![
        gene(11, 20, Strand::Forward, "a"),
        gene(41, 50, Strand::Reverse, "b"),
        gene(71, 80, Strand::Forward, "c"),
        gene(101, 110, Strand::Forward, "d"),
        gene(131, 140, Strand::Reverse, "e"),
    ];
    let promoters = putative_promoters(&genes, 200, 1, 0).unwrap();
    assert_eq!(region_tuples(&promoters), vec![
        (0, 9, names(&["a (syn_a)"])),
        // divergent gap, upstream of both b and c
        (50, 69, names(&["b (syn_b)"])),
        (50, 69, names(&["c (syn_c)"])),
        (80, 99, names(&["d (syn_d)"])),
        (140, 200, names(&["e (syn_e)"])),
    ]);
}

#[test]
fn test_putative_promoters_convergent_gap_unclaimed() {
    let genes = vec![
        gene(11, 20, Strand::Forward, "a"),
        gene(41, 50, Strand::Reverse, "b"),
    ];
    let promoters = putative_promoters(&genes, 100, 1, 0).unwrap();
    assert_eq!(region_tuples(&promoters), vec![
        (0, 9, names(&["a (syn_a)"])),
        (50, 100, names(&["b (syn_b)"])),
    ]);
}

#[test]
fn test_putative_promoters_nc_overlap() {
    let genes = vec![
        gene(11, 20, Strand::Forward, "a"),
        gene(41, 50, Strand::Forward, "b"),
    ];
    let promoters = putative_promoters(&genes, 100, 1, 2).unwrap();
    assert_eq!(region_tuples(&promoters), vec![
        (0, 11, names(&["a (syn_a)"])),
        (18, 41, names(&["b (syn_b)"])),
    ]);
}

#[rstest]
fn test_putative_promoters_merge_operons(operon_genes: Vec<GeneRecord>) {
    let promoters = putative_promoters(&operon_genes, 60, 1, 0).unwrap();
    assert_eq!(region_tuples(&promoters), vec![
        (-1, 0, names(&["a (syn_a)", "b (syn_b)"])),
        (40, 60, names(&["c (syn_c)"])),
    ]);
}

// --- Config & pipeline ---

#[test]
fn test_region_config_defaults() {
    let config = RegionConfig::default();
    assert_eq!(config, RegionConfig::new(0, 1, 1, 0));
    let config = config.with_nc_overlap(3).with_operon_overlap(2);
    assert_eq!(config.nc_overlap, 3);
    assert_eq!(config.operon_overlap, 2);
}

#[test]
fn test_region_config_from_json() {
    let config =
        RegionConfig::from_json_reader(r#"{"intergenic_overlap": 5}"#.as_bytes()).unwrap();
    assert_eq!(config, RegionConfig::default().with_intergenic_overlap(5));

    let bad = RegionConfig::from_json_reader(r#"{"nc_overlap": -1}"#.as_bytes());
    assert!(bad.is_err());
}

#[rstest]
#[case::operon(RegionConfig::default().with_operon_overlap(-3))]
#[case::intergenic(RegionConfig::default().with_intergenic_overlap(-1))]
#[case::nc(RegionConfig::new(0, 1, 1, -2))]
fn test_pipeline_rejects_negative_tolerance(#[case] config: RegionConfig) {
    assert!(config.validate().is_err());
    assert!(RegionPipeline::new(config).is_err());
}

#[rstest]
fn test_pipeline_matches_stages(footprint_genes: Vec<GeneRecord>) {
    let table = GeneTable::try_new(footprint_genes.clone(), 200).unwrap();
    let pipeline =
        RegionPipeline::new(RegionConfig::default().with_intergenic_overlap(2)).unwrap();
    let derived = pipeline.derive_all(&table).unwrap();

    assert_eq!(
        derived.coding_by_footprint,
        coding_regions_by_footprint(&footprint_genes).unwrap()
    );
    assert_eq!(
        derived.intergenic,
        intergenic_regions_by_footprint(&footprint_genes, 200, 2).unwrap()
    );
    assert_eq!(
        derived.operons,
        putative_operons(&footprint_genes, 1).unwrap()
    );
    assert_eq!(
        derived.promoters,
        putative_promoters(&footprint_genes, 200, 1, 0).unwrap()
    );
    assert_eq!(pipeline.config().intergenic_overlap, 2);
}

#[test]
fn test_pipeline_on_empty_table() {
    let table = GeneTable::try_new(vec![], 100).unwrap();
    let pipeline = RegionPipeline::default();
    assert_eq!(
        pipeline.derive_all(&table).unwrap_err(),
        RegionError::EmptyGeneList
    );
}
