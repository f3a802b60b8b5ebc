/// End-to-end tests for the `select` command pipeline on temp files
mod common;

use common::{astral_sample, TestDomain, TestEnvironment};
use diverse_domains::bio::fasta::parse_fasta;
use diverse_domains::cli::commands::select::{execute, load_settings, SelectArgs};
use diverse_domains::core::selection::NoopObserver;
use diverse_domains::report::tsv::TSV_HEADER;
use diverse_domains::DiverseError;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn args_for(env: &TestEnvironment, fasta: PathBuf) -> SelectArgs {
    let hie = env.path("dir.hie.scope.txt");
    std::fs::write(&hie, "# dir.hie.scope.txt\n0\t-\t1,2\n").unwrap();

    SelectArgs {
        fasta,
        hie,
        output: Some(env.path("selected.fa")),
        info: Some(env.path("selection_info.tsv")),
        no_progress: true,
        ..Default::default()
    }
}

fn run(args: &SelectArgs) -> anyhow::Result<diverse_domains::cli::commands::select::SelectionRun> {
    let settings = load_settings(args)?;
    execute(args, settings, &mut NoopObserver)
}

#[test]
fn test_reference_scenario_end_to_end() {
    let env = TestEnvironment::new();
    let fasta = env.write_fasta(
        "astral.fa",
        &[
            TestDomain::new("s0", "a.1.1.1", "AAAA"),
            TestDomain::new("s1", "a.1.1.2", "AAAA"),
            TestDomain::new("s2", "b.1.1.1", "TTTT"),
            TestDomain::new("s3", "d.1.1.1", "AATT"),
        ],
    );

    let mut args = args_for(&env, fasta);
    args.n = Some(3);
    let result = run(&args).unwrap();

    assert_eq!(result.outcome.indices, vec![0, 2, 3]);

    let tsv = std::fs::read_to_string(env.path("selection_info.tsv")).unwrap();
    assert_eq!(
        tsv,
        format!(
            "{}\n1\ts0\ta\t4\t0.0000\n2\ts2\tb\t4\t0.0000\n3\ts3\td\t4\t0.5000\n",
            TSV_HEADER
        )
    );

    let written = parse_fasta(env.path("selected.fa")).unwrap();
    let ids: Vec<_> = written.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s0", "s2", "s3"]);
    assert_eq!(
        written[1].description.as_deref(),
        Some("b.1.1.1 (A:) Test domain {Test organism}")
    );
    // ASTRAL residues are lowercase and are written back unchanged
    assert_eq!(written[2].sequence, b"aatt");
}

#[test]
fn test_filters_by_class_and_length() {
    let env = TestEnvironment::new();
    let fasta = env.write_fasta("astral.fa", &astral_sample());

    let mut args = args_for(&env, fasta);
    args.classes = Some(vec!["A".to_string(), "A+B".to_string()]);
    args.maxlen = Some(40);
    args.n = Some(10);
    let result = run(&args).unwrap();

    // d2gb1a_ (d, 56 aa) is too long, g and b/c classes are excluded
    let ids: Vec<_> = result
        .filter
        .candidates
        .iter()
        .map(|c| c.sequence.id.as_str())
        .collect();
    assert_eq!(ids, vec!["d1dlwa_", "d1uvya_", "d1fkja_"]);
    assert_eq!(result.filter.total_sequences, 8);
    assert!(result.outcome.trivial);

    // Every candidate was kept unscored, so the report holds only its header
    let tsv = std::fs::read_to_string(env.path("selection_info.tsv")).unwrap();
    assert_eq!(tsv, format!("{}\n", TSV_HEADER));
    assert_eq!(parse_fasta(env.path("selected.fa")).unwrap().len(), 3);
}

#[test]
fn test_duplicate_domains_are_not_picked_twice() {
    let env = TestEnvironment::new();
    let fasta = env.write_fasta("astral.fa", &astral_sample());

    let mut args = args_for(&env, fasta);
    args.maxlen = Some(100);
    args.n = Some(6);
    let result = run(&args).unwrap();

    // d1dlwa_ and d1uvya_ are identical, the second can never be chosen.
    // The g-class domain is outside the default classes.
    assert_eq!(result.filter.candidates.len(), 7);
    assert_eq!(result.outcome.len(), 6);
    assert!(!result.outcome.indices.contains(&1));
    assert_eq!(result.report.rows[0].domain_id, "d1dlwa_");
}

#[test]
fn test_no_candidates_is_an_error() {
    let env = TestEnvironment::new();
    let fasta = env.write_fasta("astral.fa", &astral_sample());

    let mut args = args_for(&env, fasta);
    args.maxlen = Some(5);
    let err = run(&args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DiverseError>(),
        Some(DiverseError::NoCandidates { total: 8 })
    ));
    assert!(!env.path("selected.fa").exists());
}

#[test]
fn test_missing_hierarchy_file_is_a_config_error() {
    let env = TestEnvironment::new();
    let fasta = env.write_fasta("astral.fa", &astral_sample());

    let mut args = args_for(&env, fasta);
    args.hie = env.path("missing.hie.txt");
    let err = run(&args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DiverseError>(),
        Some(DiverseError::Config(_))
    ));
}

#[test]
fn test_config_file_supplies_defaults() {
    let env = TestEnvironment::new();
    let fasta = env.write_fasta("astral.fa", &astral_sample());
    let config = env.path("diverse.toml");
    std::fs::write(
        &config,
        "[selection]\ntarget_count = 2\nstrategy = \"recompute\"\n\n\
         [filter]\nmax_length = 100\n\n[output]\nreport_format = \"json\"\n",
    )
    .unwrap();

    let mut args = args_for(&env, fasta);
    args.config = Some(config);
    let result = run(&args).unwrap();

    assert_eq!(result.outcome.len(), 2);
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(env.path("selection_info.tsv")).unwrap())
            .unwrap();
    assert_eq!(json["requested"], 2);
    assert_eq!(json["rows"][0]["domain_id"], "d1dlwa_");
    assert!(env.root().join("selected.fa").exists());
}

#[test]
fn test_gzipped_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let env = TestEnvironment::new();
    let path = env.path("astral.fa.gz");
    let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    encoder
        .write_all(common::render_fasta(&astral_sample()).as_bytes())
        .unwrap();
    encoder.finish().unwrap();

    let mut args = args_for(&env, path);
    args.maxlen = Some(100);
    args.n = Some(3);
    let result = run(&args).unwrap();
    assert_eq!(result.outcome.len(), 3);
}
