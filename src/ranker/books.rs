use crate::error::{PfResult, PhraseForgeError};
use serde::Deserialize;

pub const ENDPOINT: &str = "https://books.google.com/ngrams/json";

#[derive(Debug, Deserialize)]
struct Series {
    #[serde(default)]
    timeseries: Vec<f64>,
}

/// Reads a Google Books Ngram Viewer JSON body. An empty array means the
/// phrase is unknown; otherwise the score is the mean of the first series.
pub fn parse_response(body: &str) -> PfResult<Option<f64>> {
    let series: Vec<Series> = serde_json::from_str(body)?;
    let Some(first) = series.first() else {
        return Ok(None);
    };
    if first.timeseries.is_empty() {
        return Ok(None);
    }
    let mean = first.timeseries.iter().sum::<f64>() / first.timeseries.len() as f64;
    if !mean.is_finite() {
        return Err(PhraseForgeError::Oracle(format!(
            "non-finite timeseries mean {}",
            mean
        )));
    }
    Ok(Some(mean))
}

#[cfg(feature = "http")]
pub use self::client::GoogleBooksOracle;

#[cfg(feature = "http")]
mod client {
    use super::{parse_response, ENDPOINT};
    use crate::config::RankParams;
    use crate::error::{PfResult, PhraseForgeError};
    use crate::ranker::oracle::PopularityOracle;
    use reqwest::blocking::Client;
    use std::time::Duration;

    /// Popularity oracle backed by the Google Books Ngram Viewer.
    pub struct GoogleBooksOracle {
        client: Client,
        year_start: u32,
        year_end: u32,
        corpus: u32,
        smoothing: u32,
    }

    impl GoogleBooksOracle {
        pub fn new(params: &RankParams) -> PfResult<Self> {
            let client = Client::builder()
                .timeout(Duration::from_secs(params.oracle_timeout_secs))
                .build()
                .map_err(|e| PhraseForgeError::Oracle(format!("HTTP client setup: {}", e)))?;

            Ok(Self {
                client,
                year_start: params.year_start,
                year_end: params.year_end,
                corpus: params.books_corpus,
                smoothing: params.smoothing,
            })
        }
    }

    impl PopularityOracle for GoogleBooksOracle {
        fn lookup(&self, ngram: &str) -> PfResult<Option<f64>> {
            let query = [
                ("content", ngram.to_string()),
                ("year_start", self.year_start.to_string()),
                ("year_end", self.year_end.to_string()),
                ("corpus", self.corpus.to_string()),
                ("smoothing", self.smoothing.to_string()),
            ];

            let resp = self
                .client
                .get(ENDPOINT)
                .query(&query)
                .send()
                .map_err(|e| PhraseForgeError::Oracle(format!("'{}': {}", ngram, e)))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(PhraseForgeError::Oracle(format!(
                    "'{}': HTTP {}",
                    ngram, status
                )));
            }

            let body = resp
                .text()
                .map_err(|e| PhraseForgeError::Oracle(format!("'{}': {}", ngram, e)))?;
            parse_response(&body)
        }
    }
}
