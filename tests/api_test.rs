use phraseforge::api::{build_oracle, common_ngrams, extract_candidates};
use phraseforge::config::{Config, OracleKind};
use phraseforge::ranker::{RankedEntry, TableOracle};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

const DOC: &str = "the cat sat on the cat mat near category theory";

fn test_config(ngram_sizes: &str) -> Config {
    let mut config = Config::default();
    config.extract.search_range = 1;
    config.extract.ngram_sizes = ngram_sizes.to_string();
    config
}

fn scores() -> TableOracle {
    let data = "the cat\t0.9\ncat sat\t0.7\ncat mat\t0.2\nthe cat sat\t0.05\ncategory theory\t0.3\n";
    TableOracle::from_reader(Cursor::new(data)).unwrap()
}

fn entry(score: f64, ngram: &str) -> RankedEntry {
    RankedEntry {
        score,
        ngram: ngram.to_string(),
    }
}

#[test]
fn test_extract_candidates_per_size() {
    let docs = vec![DOC.to_string()];
    let batches = extract_candidates(&docs, "cat", &test_config("2,3")).unwrap();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].ngram_size, 2);
    assert_eq!(batches[0].candidates.len(), 6);
    assert_eq!(batches[1].ngram_size, 3);
    // one full window per occurrence
    assert_eq!(batches[1].candidates.len(), 3);
}

#[test]
fn test_common_ngrams_ranks_bigrams_and_trigrams_together() {
    let docs = vec![DOC.to_string()];
    let harvest = common_ngrams(&docs, "cat", &test_config("2,3"), &scores()).unwrap();

    assert_eq!(harvest.documents, 1);
    assert_eq!(harvest.extracted, vec![(2, 6), (3, 3)]);
    assert_eq!(
        harvest.rankings,
        vec![
            entry(0.9, "the cat"),
            entry(0.7, "cat sat"),
            entry(0.3, "category theory"),
            entry(0.2, "cat mat"),
            entry(0.05, "the cat sat"),
        ]
    );
}

#[test]
fn test_parallel_pipeline_matches_sequential() {
    let docs: Vec<String> = (0..50).map(|_| DOC.to_string()).collect();
    let sequential = common_ngrams(&docs, "cat", &test_config("2,3"), &scores()).unwrap();

    let mut config = test_config("2,3");
    config.extract.parallel = true;
    let parallel = common_ngrams(&docs, "cat", &config, &scores()).unwrap();

    assert_eq!(sequential.extracted, parallel.extracted);
    assert_eq!(sequential.rankings, parallel.rankings);
}

#[test]
fn test_empty_corpus_yields_empty_ranking() {
    let harvest = common_ngrams(&[], "cat", &test_config("2,3"), &scores()).unwrap();
    assert!(harvest.rankings.is_empty());
    assert_eq!(harvest.extracted, vec![(2, 0), (3, 0)]);
}

#[test]
fn test_bad_sizes_fail_fast() {
    let docs = vec![DOC.to_string()];
    assert!(common_ngrams(&docs, "cat", &test_config("2,0"), &scores()).is_err());
}

#[test]
fn test_build_table_oracle() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "cat sat\t0.7").unwrap();

    let mut config = Config::default();
    config.rank.oracle = OracleKind::Table;
    config.rank.score_table = file.path().to_str().unwrap().to_string();

    let oracle = build_oracle(&config.rank).unwrap();
    assert_eq!(oracle.lookup("cat sat").unwrap(), Some(0.7));

    config.rank.score_table = "/no/such/table.tsv".to_string();
    assert!(build_oracle(&config.rank).is_err());
}
