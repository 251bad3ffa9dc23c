pub mod books;
pub mod oracle;
pub mod output;

pub use self::oracle::{PopularityOracle, TableOracle};

use crate::error::PfResult;
use crate::ngrams::Candidate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

/// A scored n-gram. Serialized as a `[score, ngram]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "(f64, String)", from = "(f64, String)")]
pub struct RankedEntry {
    pub score: f64,
    pub ngram: String,
}

impl From<RankedEntry> for (f64, String) {
    fn from(e: RankedEntry) -> Self {
        (e.score, e.ngram)
    }
}

impl From<(f64, String)> for RankedEntry {
    fn from((score, ngram): (f64, String)) -> Self {
        Self { score, ngram }
    }
}

/// Deduplicates candidates by text and scores each distinct text once.
/// Every text that reaches the oracle is remembered, so misses are never
/// asked about again on this ranker.
#[derive(Debug, Default)]
pub struct Ranker {
    seen: HashSet<String>,
    entries: Vec<RankedEntry>,
}

impl Ranker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest<O>(&mut self, candidates: &[Candidate], oracle: &O)
    where
        O: PopularityOracle + ?Sized,
    {
        for candidate in candidates {
            let text = candidate.text();
            if !self.seen.insert(text.clone()) {
                continue;
            }
            if let Some(score) = definite_score(oracle.lookup(&text), &text) {
                self.entries.push(RankedEntry { score, ngram: text });
            }
        }
    }

    /// Concurrent variant of [`ingest`](Self::ingest). The seen-set is shared
    /// behind a mutex so each distinct text is still queried exactly once.
    pub fn ingest_par<O>(&mut self, candidates: &[Candidate], oracle: &O)
    where
        O: PopularityOracle + Sync + ?Sized,
    {
        let seen = Mutex::new(std::mem::take(&mut self.seen));

        let found: Vec<RankedEntry> = candidates
            .par_iter()
            .filter_map(|candidate| {
                let text = candidate.text();
                let fresh = seen
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(text.clone());
                if !fresh {
                    return None;
                }
                definite_score(oracle.lookup(&text), &text)
                    .map(|score| RankedEntry { score, ngram: text })
            })
            .collect();

        self.seen = seen.into_inner().unwrap_or_else(PoisonError::into_inner);
        self.entries.extend(found);
    }

    /// Distinct texts sent to the oracle so far.
    pub fn queried(&self) -> usize {
        self.seen.len()
    }

    /// Distinct texts the oracle had no usable score for.
    pub fn discarded(&self) -> usize {
        self.seen.len() - self.entries.len()
    }

    /// Entries by score, highest first; equal scores by n-gram text, highest first.
    pub fn finish(self) -> Vec<RankedEntry> {
        info!(
            "🏁 Ranked {} n-grams ({} queried, {} without data)",
            self.entries.len(),
            self.queried(),
            self.discarded()
        );
        let mut entries = self.entries;
        entries.sort_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| a.ngram.cmp(&b.ngram))
        });
        entries.reverse();
        entries
    }
}

pub fn rank<O>(candidates: &[Candidate], oracle: &O) -> Vec<RankedEntry>
where
    O: PopularityOracle + ?Sized,
{
    let mut ranker = Ranker::new();
    ranker.ingest(candidates, oracle);
    ranker.finish()
}

fn definite_score(reply: PfResult<Option<f64>>, ngram: &str) -> Option<f64> {
    match reply {
        // -0.0 and 0.0 tie, then fall back to the text
        Ok(Some(score)) if score.is_finite() => Some(if score == 0.0 { 0.0 } else { score }),
        Ok(Some(score)) => {
            debug!("Oracle gave non-finite score {} for '{}'", score, ngram);
            None
        }
        Ok(None) => {
            debug!("No data for '{}'", ngram);
            None
        }
        Err(e) => {
            debug!("Lookup failed for '{}': {}", ngram, e);
            None
        }
    }
}
