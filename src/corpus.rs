use crate::config::SourceFilter;
use crate::error::{PfResult, PhraseForgeError};
use crate::normalize::Normalizer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One retrieved item (a video transcript, typically) before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Anything that can hand over raw items: a scraper, a cache, a fixture.
pub trait DocumentSource {
    fn items(&mut self) -> PfResult<Vec<SourceItem>>;
}

/// Items previously dumped as a JSON array.
pub struct JsonItemSource {
    path: PathBuf,
}

impl JsonItemSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSource for JsonItemSource {
    fn items(&mut self) -> PfResult<Vec<SourceItem>> {
        info!("📂 Reading source items: {:?}", self.path);
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Filters items by language and category, then normalizes the survivors.
/// Items without a language tag are kept.
pub fn collect_documents<I>(items: I, filter: &SourceFilter, normalizer: &Normalizer) -> Vec<String>
where
    I: IntoIterator<Item = SourceItem>,
{
    let excluded = filter.get_excluded_categories();
    let mut documents = Vec::new();
    let mut seen = 0;

    for item in items {
        seen += 1;

        if let Some(lang) = &item.language {
            if !filter.language.is_empty() && !lang.eq_ignore_ascii_case(&filter.language) {
                debug!("Skipping '{}': language '{}'", item.title, lang);
                continue;
            }
        }

        if let Some(category) = &item.category {
            if excluded.iter().any(|c| c.eq_ignore_ascii_case(category)) {
                debug!("Skipping '{}': category '{}'", item.title, category);
                continue;
            }
        }

        let text = normalizer.normalize(&item.text);
        if text.is_empty() {
            debug!("Skipping '{}': empty after normalization", item.title);
            continue;
        }
        documents.push(text);
    }

    info!("📚 Collected {} of {} items", documents.len(), seen);
    documents
}

pub fn save_corpus<P: AsRef<Path>>(path: P, documents: &[String]) -> PfResult<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, documents)?;
    writer.flush()?;
    Ok(())
}

/// Reads a persisted corpus. The file must be a JSON array; each element is
/// returned separately so one bad entry does not sink the rest.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> PfResult<Vec<PfResult<String>>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let values: Vec<Value> = serde_json::from_str(&content)?;
    info!("📂 Loaded corpus {:?}: {} entries", path, values.len());

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::String(doc) => Ok(doc),
            other => Err(PhraseForgeError::MalformedDocument {
                index,
                reason: format!("expected a string, found {}", kind_of(&other)),
            }),
        })
        .collect())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
