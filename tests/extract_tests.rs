use phraseforge::config::EdgePolicy;
use phraseforge::error::PhraseForgeError;
use phraseforge::ngrams::{extract, extract_with, Candidate, ExtractOptions};
use rstest::rstest;

const DOC: &str = "the cat sat on the cat mat near category theory";

fn words(candidates: &[Candidate]) -> Vec<Vec<&str>> {
    candidates
        .iter()
        .map(|c| c.words.iter().map(|w| w.as_str()).collect())
        .collect()
}

#[test]
fn test_every_occurrence_yields_its_own_window() {
    let out = extract(DOC, "cat", 1, 2).unwrap();
    assert_eq!(
        words(&out),
        vec![
            vec!["the", "cat"],
            vec!["cat", "sat"],
            vec!["the", "cat"],
            vec!["cat", "mat"],
            vec!["near", "category"],
            vec!["category", "theory"],
        ]
    );
}

#[test]
fn test_first_word_occurrence_clamps_left() {
    let out = extract("cat sat on the mat", "cat", 2, 2).unwrap();
    assert_eq!(words(&out), vec![vec!["cat", "sat"]]);
}

#[test]
fn test_skip_policy_drops_edge_occurrences() {
    let opts = ExtractOptions::new(2, 2).with_edge_policy(EdgePolicy::Skip);
    assert!(extract_with("cat sat on the mat", "cat", &opts)
        .unwrap()
        .is_empty());

    let opts = ExtractOptions::new(1, 2).with_edge_policy(EdgePolicy::Skip);
    let out = extract_with("we saw a cat sit there", "cat", &opts).unwrap();
    assert_eq!(words(&out), vec![vec!["a", "cat"], vec!["cat", "sit"]]);
}

#[test]
fn test_substring_inside_longer_word() {
    let out = extract("we concatenate strings", "cat", 1, 2).unwrap();
    assert_eq!(
        words(&out),
        vec![vec!["we", "concatenate"], vec!["concatenate", "strings"]]
    );
}

#[test]
fn test_run_with_two_matches_is_emitted_once_per_window() {
    // one window per occurrence, each emitting ["cat", "cat"] once
    let out = extract("cat cat", "cat", 1, 2).unwrap();
    assert_eq!(words(&out), vec![vec!["cat", "cat"], vec!["cat", "cat"]]);
}

#[test]
fn test_multibyte_words_slice_cleanly() {
    let out = extract("naïve cat émigré", "cat", 1, 2).unwrap();
    assert_eq!(
        words(&out),
        vec![vec!["naïve", "cat"], vec!["cat", "émigré"]]
    );
}

#[test]
fn test_unigrams_keep_only_matching_words() {
    let out = extract(DOC, "cat", 1, 1).unwrap();
    assert_eq!(
        words(&out),
        vec![vec!["cat"], vec!["cat"], vec!["category"]]
    );
}

#[rstest]
#[case("the cat sat", "dog", 1, 2, 0)] // absent target
#[case("the cat sat", "cat", 1, 4, 0)] // window shorter than n
#[case("the cat sat", "cat", 1, 3, 1)] // window exactly n
#[case("cat", "cat", 3, 1, 1)] // single word document
#[case("", "cat", 2, 2, 0)] // empty document
#[case("a b cat d e", "cat", 0, 1, 1)] // zero range
#[case("a b cat d e", "cat", 0, 2, 0)] // zero range, n > 1
#[case("a b cat d e", "cat", 2, 3, 3)] // full window
#[case("a b cat d e", "cat", 5, 2, 2)] // range beyond both edges
#[case("the cat sat", "cat", usize::MAX, 2, 2)] // unbounded range
fn test_candidate_counts(
    #[case] doc: &str,
    #[case] target: &str,
    #[case] range: usize,
    #[case] n: usize,
    #[case] expected: usize,
) {
    let out = extract(doc, target, range, n).unwrap();
    assert_eq!(out.len(), expected, "doc={:?} target={:?}", doc, target);
    for c in &out {
        assert_eq!(c.len(), n);
        assert!(c.mentions(target));
    }
}

#[test]
fn test_zero_ngram_size_is_rejected() {
    let err = extract(DOC, "cat", 1, 0).unwrap_err();
    assert!(matches!(err, PhraseForgeError::InvalidArgument(_)));
}

#[test]
fn test_empty_target_is_rejected() {
    let err = extract(DOC, "", 1, 2).unwrap_err();
    assert!(matches!(err, PhraseForgeError::InvalidArgument(_)));
}

#[test]
fn test_candidate_text_and_serialization() {
    let c = Candidate::new(&["cat", "sat"]);
    assert!(!c.is_empty());
    assert!(Candidate::new::<&str>(&[]).is_empty());
    assert_eq!(c.text(), "cat sat");
    assert_eq!(c.to_string(), "cat sat");
    assert_eq!(serde_json::to_string(&c).unwrap(), r#"["cat","sat"]"#);
}
