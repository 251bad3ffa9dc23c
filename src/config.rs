use crate::error::{PfResult, PhraseForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

pub const DEFAULT_PUNCTUATION: &str = "!#$%&*+,-./:;<=>?@\\^_`{|}~";
pub const DEFAULT_ASIDE_PATTERN: &str = r"[\(\[].*?[\)\]]";

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub extract: ExtractParams,
    #[command(flatten)]
    pub text: TextParams,
    #[command(flatten)]
    pub source: SourceFilter,
    #[command(flatten)]
    pub rank: RankParams,
}

/// What to do when a boundary scan runs into the document edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Bound the window by the document edge.
    #[default]
    Clamp,
    /// Drop the occurrence.
    Skip,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OracleKind {
    #[default]
    Table,
    GoogleBooks,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Tsv,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractParams {
    /// Words kept on each side of an occurrence.
    #[arg(long, default_value_t = 2)]
    pub search_range: usize,
    /// Comma separated n-gram sizes, ranked together in this order.
    #[arg(long, default_value = "2,3")]
    pub ngram_sizes: String,
    #[arg(long, default_value_t = EdgePolicy::Clamp)]
    pub edge_policy: EdgePolicy,
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            search_range: 2,
            ngram_sizes: "2,3".to_string(),
            edge_policy: EdgePolicy::Clamp,
            parallel: false,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextParams {
    /// Characters deleted from normalized text.
    #[arg(long, default_value = DEFAULT_PUNCTUATION)]
    pub punctuation: String,
    /// Regex for bracketed asides such as "[music]".
    #[arg(long, default_value = DEFAULT_ASIDE_PATTERN)]
    pub aside_pattern: String,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            aside_pattern: DEFAULT_ASIDE_PATTERN.to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFilter {
    /// Required language tag. Empty accepts every language.
    #[arg(long, default_value = "en")]
    pub language: String,
    #[arg(long, default_value = "Music")]
    pub excluded_categories: String,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            excluded_categories: "Music".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankParams {
    #[arg(long, default_value_t = OracleKind::Table)]
    pub oracle: OracleKind,
    #[arg(long, default_value = "data/ngram_scores.tsv")]
    pub score_table: String,

    // === Google Books ===
    #[arg(long, default_value_t = 1800)]
    pub year_start: u32,
    #[arg(long, default_value_t = 2000)]
    pub year_end: u32,
    #[arg(long, default_value_t = 26)]
    pub books_corpus: u32,
    #[arg(long, default_value_t = 3)]
    pub smoothing: u32,
    #[arg(long, default_value_t = 10)]
    pub oracle_timeout_secs: u64,

    // === Output ===
    #[arg(long, default_value_t = 25)]
    pub top: usize,
    #[arg(long, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            oracle: OracleKind::Table,
            score_table: "data/ngram_scores.tsv".to_string(),
            year_start: 1800,
            year_end: 2000,
            books_corpus: 26,
            smoothing: 3,
            oracle_timeout_secs: 10,
            top: 25,
            format: OutputFormat::Json,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PhraseForgeError::Config(format!("Failed to read config {:?}: {}", path, e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every argument the user typed on the command line over `self`,
    /// leaving file-provided values in place for the rest.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(extract.search_range);
        update_if_present!(extract.ngram_sizes);
        update_if_present!(extract.edge_policy);
        update_if_present!(extract.parallel);

        update_if_present!(text.punctuation);
        update_if_present!(text.aside_pattern);

        update_if_present!(source.language);
        update_if_present!(source.excluded_categories);

        update_if_present!(rank.oracle);
        update_if_present!(rank.score_table);
        update_if_present!(rank.year_start);
        update_if_present!(rank.year_end);
        update_if_present!(rank.books_corpus);
        update_if_present!(rank.smoothing);
        update_if_present!(rank.oracle_timeout_secs);
        update_if_present!(rank.top);
        update_if_present!(rank.format);
    }
}

impl ExtractParams {
    pub fn get_ngram_sizes(&self) -> PfResult<Vec<usize>> {
        parse_usize_list(&self.ngram_sizes, "ngram_sizes")
    }
}

impl SourceFilter {
    pub fn get_excluded_categories(&self) -> Vec<String> {
        self.excluded_categories
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }
}

fn parse_usize_list(s: &str, name: &str) -> PfResult<Vec<usize>> {
    let mut values = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        let value: usize = part.parse().map_err(|_| {
            PhraseForgeError::InvalidArgument(format!("Invalid number '{}' in --{}", part, name))
        })?;
        if value == 0 {
            return Err(PhraseForgeError::InvalidArgument(format!(
                "--{} values must be positive",
                name
            )));
        }
        values.push(value);
    }
    Ok(values)
}
