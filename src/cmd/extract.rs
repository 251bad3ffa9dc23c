use crate::reports;
use clap::Args;
use phraseforge::api;
use phraseforge::config::Config;
use phraseforge::corpus::load_corpus;
use phraseforge::error::PfResult;
use phraseforge::ngrams::{usable_documents, Candidate};
use std::fs::File;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub config: Config,

    /// Substring every n-gram must contain.
    pub word: String,

    #[arg(short, long, default_value = "collection/collection.json")]
    pub corpus: String,

    /// Write all candidates as a JSON array of word lists.
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, default_value_t = 20)]
    pub show: usize,
}

pub fn run(args: &ExtractArgs, config: &Config) -> PfResult<()> {
    let documents = usable_documents(load_corpus(&args.corpus)?);
    let batches = api::extract_candidates(&documents, &args.word, config)?;

    reports::print_extraction_report(&args.word, documents.len(), &batches);
    reports::print_candidates(&batches, args.show);

    if let Some(path) = &args.output {
        let all: Vec<&Candidate> = batches.iter().flat_map(|b| &b.candidates).collect();
        serde_json::to_writer(File::create(path)?, &all)?;
        info!("💾 Wrote {} candidates to {}", all.len(), path);
    }
    Ok(())
}
