use crate::error::PfResult;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Maps an n-gram to a popularity score. `Ok(None)` means the oracle has no
/// data; `Err` means the lookup itself failed.
pub trait PopularityOracle {
    fn lookup(&self, ngram: &str) -> PfResult<Option<f64>>;
}

impl<F> PopularityOracle for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn lookup(&self, ngram: &str) -> PfResult<Option<f64>> {
        Ok(self(ngram))
    }
}

/// Scores read from a local TSV table: `ngram<TAB>value<TAB>value...`.
/// The score of a row is the mean of its values.
#[derive(Debug, Clone, Default)]
pub struct TableOracle {
    scores: HashMap<String, f64>,
}

impl TableOracle {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let path = path.as_ref();
        info!("📊 Loading Score Table: {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> PfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut scores = HashMap::new();
        let mut skipped = 0;

        for rec in rdr.records().flatten() {
            if rec.len() < 2 {
                skipped += 1;
                continue;
            }
            let key = rec[0].trim().to_lowercase();
            if key.is_empty() {
                skipped += 1;
                continue;
            }

            let values: Vec<f64> = rec
                .iter()
                .skip(1)
                .filter_map(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .collect();
            if values.is_empty() {
                skipped += 1;
                continue;
            }

            let mean = values.iter().sum::<f64>() / values.len() as f64;
            scores.insert(key, mean);
        }

        debug!(
            "   -> Loaded {} scored n-grams ({} rows skipped)",
            scores.len(),
            skipped
        );
        Ok(Self { scores })
    }

    pub fn insert(&mut self, ngram: &str, score: f64) {
        self.scores.insert(ngram.trim().to_lowercase(), score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl PopularityOracle for TableOracle {
    fn lookup(&self, ngram: &str) -> PfResult<Option<f64>> {
        Ok(self.scores.get(&ngram.trim().to_lowercase()).copied())
    }
}
