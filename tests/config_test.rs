use clap::{CommandFactory, FromArgMatches, Parser};
use phraseforge::config::{Config, EdgePolicy, ExtractParams, OracleKind, OutputFormat};
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (cli, _) = parse(&["test"]);
    let def = Config::default();
    assert_eq!(cli.extract.search_range, def.extract.search_range);
    assert_eq!(cli.extract.ngram_sizes, def.extract.ngram_sizes);
    assert_eq!(cli.extract.edge_policy, EdgePolicy::Clamp);
    assert_eq!(cli.text.punctuation, def.text.punctuation);
    assert_eq!(cli.text.aside_pattern, def.text.aside_pattern);
    assert_eq!(cli.source.language, "en");
    assert_eq!(cli.rank.oracle, OracleKind::Table);
    assert_eq!(cli.rank.year_start, 1800);
    assert_eq!(cli.rank.format, OutputFormat::Json);
}

#[test]
fn test_enum_flags_parse() {
    let (cli, _) = parse(&[
        "test",
        "--edge-policy",
        "skip",
        "--oracle",
        "google_books",
        "--format",
        "tsv",
    ]);
    assert_eq!(cli.extract.edge_policy, EdgePolicy::Skip);
    assert_eq!(cli.rank.oracle, OracleKind::GoogleBooks);
    assert_eq!(cli.rank.format, OutputFormat::Tsv);
    assert_eq!(OracleKind::GoogleBooks.to_string(), "google_books");
}

#[test]
fn test_ngram_size_parsing() {
    let mut params = ExtractParams::default();
    assert_eq!(params.get_ngram_sizes().unwrap(), vec![2, 3]);

    params.ngram_sizes = " 4, 1 ".to_string();
    assert_eq!(params.get_ngram_sizes().unwrap(), vec![4, 1]);

    params.ngram_sizes = "2,0".to_string();
    assert!(params.get_ngram_sizes().is_err());

    params.ngram_sizes = "two".to_string();
    assert!(params.get_ngram_sizes().is_err());
}

#[test]
fn test_partial_config_file_keeps_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"extract": {{"search_range": 4, "edge_policy": "skip"}}, "rank": {{"oracle": "google_books"}}}}"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.extract.search_range, 4);
    assert_eq!(config.extract.edge_policy, EdgePolicy::Skip);
    assert_eq!(config.extract.ngram_sizes, "2,3");
    assert_eq!(config.rank.oracle, OracleKind::GoogleBooks);
    assert_eq!(config.rank.top, 25);
}

#[test]
fn test_bad_config_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());
    assert!(Config::load_from_file("/no/such/config.json").is_err());
}

#[test]
fn test_only_explicit_cli_flags_override_the_file() {
    let (cli, matches) = parse(&["test", "--search-range", "5", "--parallel"]);

    let mut config = Config::default();
    config.extract.search_range = 1;
    config.extract.ngram_sizes = "4".to_string();
    config.source.language = "de".to_string();

    config.merge_from_cli(&cli, &matches);
    assert_eq!(config.extract.search_range, 5);
    assert!(config.extract.parallel);
    assert_eq!(config.extract.ngram_sizes, "4");
    assert_eq!(config.source.language, "de");
}
