use crate::reports;
use clap::Args;
use phraseforge::api;
use phraseforge::config::Config;
use phraseforge::corpus::load_corpus;
use phraseforge::error::PfResult;
use phraseforge::ngrams::usable_documents;
use phraseforge::ranker::output::save_rankings;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub config: Config,

    /// Substring every n-gram must contain.
    pub word: String,

    #[arg(short, long, default_value = "collection/collection.json")]
    pub corpus: String,

    #[arg(short, long, default_value = "collection/common_ngrams.json")]
    pub output: String,
}

pub fn run(args: &RankArgs, config: &Config) -> PfResult<()> {
    let documents = usable_documents(load_corpus(&args.corpus)?);
    let oracle = api::build_oracle(&config.rank)?;

    let harvest = api::common_ngrams(&documents, &args.word, config, &*oracle)?;
    save_rankings(&args.output, &harvest.rankings, config.rank.format)?;
    info!(
        "💾 Wrote {} ranked n-grams to {} ({})",
        harvest.rankings.len(),
        args.output,
        config.rank.format
    );

    reports::print_rankings_report(&harvest, config.rank.top);
    Ok(())
}
