use clap::Args;
use phraseforge::config::Config;
use phraseforge::corpus::{collect_documents, save_corpus, DocumentSource, JsonItemSource};
use phraseforge::error::PfResult;
use phraseforge::normalize::Normalizer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CollectArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON array of raw items ({id, title, text, category, language}).
    #[arg(short, long)]
    pub input: String,

    #[arg(short, long, default_value = "collection/collection.json")]
    pub output: String,
}

pub fn run(args: &CollectArgs, config: &Config) -> PfResult<()> {
    let normalizer = Normalizer::new(&config.text)?;
    let items = JsonItemSource::new(&args.input).items()?;

    let documents = collect_documents(items, &config.source, &normalizer);
    save_corpus(&args.output, &documents)?;

    info!("💾 Wrote {} documents to {}", documents.len(), args.output);
    println!("{}", documents.len());
    Ok(())
}
