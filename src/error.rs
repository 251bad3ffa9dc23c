use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhraseForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern Error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed Document #{index}: {reason}")]
    MalformedDocument { index: usize, reason: String },

    #[error("Oracle Error: {0}")]
    Oracle(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type PfResult<T> = Result<T, PhraseForgeError>;
