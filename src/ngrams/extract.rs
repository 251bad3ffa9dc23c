use super::window::{scan_window, WindowScan};
use crate::config::{EdgePolicy, ExtractParams};
use crate::error::{PfResult, PhraseForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// An n-gram: `ngram_size` contiguous words lifted from one window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    pub words: Vec<String>,
}

impl Candidate {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// The words joined by single spaces; the key the oracle is asked about.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn mentions(&self, target: &str) -> bool {
        self.words.iter().any(|w| w.contains(target))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub search_range: usize,
    pub ngram_size: usize,
    pub edge_policy: EdgePolicy,
}

impl ExtractOptions {
    pub fn new(search_range: usize, ngram_size: usize) -> Self {
        Self {
            search_range,
            ngram_size,
            edge_policy: EdgePolicy::Clamp,
        }
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    pub fn from_params(params: &ExtractParams, ngram_size: usize) -> Self {
        Self::new(params.search_range, ngram_size).with_edge_policy(params.edge_policy)
    }

    pub fn validate(&self, target: &str) -> PfResult<()> {
        if target.is_empty() {
            return Err(PhraseForgeError::InvalidArgument(
                "target must not be empty".to_string(),
            ));
        }
        if self.ngram_size == 0 {
            return Err(PhraseForgeError::InvalidArgument(
                "ngram_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Every `ngram_size`-word run around each occurrence of `target` that still
/// contains `target`. Windows reaching a document edge are clamped to it.
pub fn extract(
    document: &str,
    target: &str,
    search_range: usize,
    ngram_size: usize,
) -> PfResult<Vec<Candidate>> {
    extract_with(document, target, &ExtractOptions::new(search_range, ngram_size))
}

pub fn extract_with(
    document: &str,
    target: &str,
    options: &ExtractOptions,
) -> PfResult<Vec<Candidate>> {
    options.validate(target)?;
    let mut out = Vec::new();
    extract_into(document, target, options, &mut out);
    Ok(out)
}

/// Caller has already validated `options` against `target`.
pub(crate) fn extract_into(
    document: &str,
    target: &str,
    options: &ExtractOptions,
    out: &mut Vec<Candidate>,
) {
    for (offset, _) in document.match_indices(target) {
        match scan_window(document, offset, options.search_range, options.edge_policy) {
            WindowScan::Window { start, end } => {
                emit_ngrams(&document[start..end], target, options.ngram_size, out)
            }
            WindowScan::Skipped(reason) => {
                debug!("Occurrence at byte {} skipped: {:?}", offset, reason);
            }
        }
    }
}

fn emit_ngrams(window: &str, target: &str, ngram_size: usize, out: &mut Vec<Candidate>) {
    let words: Vec<&str> = window.split_whitespace().collect();
    // slice::windows yields nothing when there are fewer words than ngram_size
    for run in words.windows(ngram_size) {
        if run.iter().any(|w| w.contains(target)) {
            out.push(Candidate::new(run));
        }
    }
}
