use crate::config::{Config, OracleKind, RankParams};
use crate::error::PfResult;
use crate::ngrams::{Candidate, CorpusScanner, ExtractOptions};
use crate::ranker::{PopularityOracle, RankedEntry, Ranker, TableOracle};
use tracing::info;

pub type SharedOracle = Box<dyn PopularityOracle + Send + Sync>;

/// Candidates of one n-gram size, in corpus order.
#[derive(Debug, Clone)]
pub struct SizedCandidates {
    pub ngram_size: usize,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone)]
pub struct Harvest {
    pub target: String,
    pub documents: usize,
    pub extracted: Vec<(usize, usize)>,
    pub rankings: Vec<RankedEntry>,
}

/// Service: Build the popularity oracle named in the config.
pub fn build_oracle(params: &RankParams) -> PfResult<SharedOracle> {
    match params.oracle {
        OracleKind::Table => Ok(Box::new(TableOracle::load_from_file(&params.score_table)?)),
        #[cfg(feature = "http")]
        OracleKind::GoogleBooks => {
            info!("🌐 Using Google Books Ngram oracle");
            Ok(Box::new(crate::ranker::books::GoogleBooksOracle::new(
                params,
            )?))
        }
        #[cfg(not(feature = "http"))]
        OracleKind::GoogleBooks => Err(crate::error::PhraseForgeError::Config(
            "google_books oracle requires the 'http' feature".to_string(),
        )),
    }
}

/// Service: Scan the corpus once per configured n-gram size.
pub fn extract_candidates(
    documents: &[String],
    target: &str,
    config: &Config,
) -> PfResult<Vec<SizedCandidates>> {
    let sizes = config.extract.get_ngram_sizes()?;
    let mut out = Vec::with_capacity(sizes.len());

    for ngram_size in sizes {
        let options = ExtractOptions::from_params(&config.extract, ngram_size);
        let scanner =
            CorpusScanner::new(target, options)?.with_parallel(config.extract.parallel);
        let candidates = scanner.run(documents);
        info!(
            "🔎 '{}': {} {}-gram candidates",
            target,
            candidates.len(),
            ngram_size
        );
        out.push(SizedCandidates {
            ngram_size,
            candidates,
        });
    }
    Ok(out)
}

/// Service: Extract every configured n-gram size around `target`, merge the
/// candidate lists in size order and rank them with one shared seen-set.
pub fn common_ngrams<O>(
    documents: &[String],
    target: &str,
    config: &Config,
    oracle: &O,
) -> PfResult<Harvest>
where
    O: PopularityOracle + Sync + ?Sized,
{
    let batches = extract_candidates(documents, target, config)?;

    let mut ranker = Ranker::new();
    for batch in &batches {
        if config.extract.parallel {
            ranker.ingest_par(&batch.candidates, oracle);
        } else {
            ranker.ingest(&batch.candidates, oracle);
        }
    }

    Ok(Harvest {
        target: target.to_string(),
        documents: documents.len(),
        extracted: batches
            .iter()
            .map(|b| (b.ngram_size, b.candidates.len()))
            .collect(),
        rankings: ranker.finish(),
    })
}
