use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use phraseforge::config::Config;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file; explicit command line flags still win.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Collect(cmd::collect::CollectArgs),
    Extract(cmd::extract::ExtractArgs),
    Rank(cmd::rank::RankArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing PhraseForge...");

    let (cli_config, sub_matches) = match &cli.command {
        Commands::Collect(args) => (&args.config, matches.subcommand_matches("collect")),
        Commands::Extract(args) => (&args.config, matches.subcommand_matches("extract")),
        Commands::Rank(args) => (&args.config, matches.subcommand_matches("rank")),
    };

    let config = match &cli.config_file {
        Some(path) => {
            info!("⚙️  Loading Config from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            if let Some(sub) = sub_matches {
                file_config.merge_from_cli(cli_config, sub);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let result = match &cli.command {
        Commands::Collect(args) => cmd::collect::run(args, &config),
        Commands::Extract(args) => cmd::extract::run(args, &config),
        Commands::Rank(args) => cmd::rank::run(args, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
