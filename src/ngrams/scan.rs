use super::extract::{extract_into, Candidate, ExtractOptions};
use crate::error::PfResult;
use rayon::prelude::*;
use tracing::{debug, warn};

/// Runs the window extractor over a whole corpus for one target and one
/// n-gram size, keeping document order.
#[derive(Debug, Clone)]
pub struct CorpusScanner {
    target: String,
    options: ExtractOptions,
    parallel: bool,
}

impl CorpusScanner {
    pub fn new(target: &str, options: ExtractOptions) -> PfResult<Self> {
        options.validate(target)?;
        Ok(Self {
            target: target.to_string(),
            options,
            parallel: false,
        })
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn scan<I, D>(&self, documents: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        let mut out = Vec::new();
        for doc in documents {
            extract_into(doc.as_ref(), &self.target, &self.options, &mut out);
        }
        out
    }

    /// Same output as [`scan`](Self::scan); documents are processed on the
    /// rayon pool.
    pub fn scan_par<D>(&self, documents: &[D]) -> Vec<Candidate>
    where
        D: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .flat_map_iter(|doc| {
                let mut out = Vec::new();
                extract_into(doc.as_ref(), &self.target, &self.options, &mut out);
                out
            })
            .collect()
    }

    /// Dispatches to [`scan`](Self::scan) or [`scan_par`](Self::scan_par).
    pub fn run<D>(&self, documents: &[D]) -> Vec<Candidate>
    where
        D: AsRef<str> + Sync,
    {
        let candidates = if self.parallel {
            self.scan_par(documents)
        } else {
            self.scan(documents)
        };
        debug!(
            "Scanned {} documents for '{}' ({}-grams): {} candidates",
            documents.len(),
            self.target,
            self.options.ngram_size,
            candidates.len()
        );
        candidates
    }

    /// Scans persisted-corpus entries, leaving out the ones that failed to load.
    pub fn scan_entries<I>(&self, entries: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = PfResult<String>>,
    {
        self.run(&usable_documents(entries))
    }
}

/// Unwraps loaded corpus entries; malformed ones are logged and dropped.
pub fn usable_documents<I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = PfResult<String>>,
{
    let mut documents = Vec::new();
    let mut skipped = 0;
    for entry in entries {
        match entry {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                warn!("⚠️  Skipping document: {}", e);
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        warn!("⚠️  {} malformed documents skipped", skipped);
    }
    documents
}

/// One-shot corpus scan with clamped windows.
pub fn scan<I, D>(
    documents: I,
    target: &str,
    search_range: usize,
    ngram_size: usize,
) -> PfResult<Vec<Candidate>>
where
    I: IntoIterator<Item = D>,
    D: AsRef<str>,
{
    let scanner = CorpusScanner::new(target, ExtractOptions::new(search_range, ngram_size))?;
    Ok(scanner.scan(documents))
}
