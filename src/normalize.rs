use crate::config::TextParams;
use crate::error::PfResult;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Turns raw transcript text into a Document: lower case, single-spaced,
/// without bracketed asides or punctuation.
#[derive(Debug, Clone)]
pub struct Normalizer {
    aside: Regex,
    punctuation: HashSet<char>,
}

impl Normalizer {
    pub fn new(params: &TextParams) -> PfResult<Self> {
        Ok(Self {
            aside: Regex::new(&params.aside_pattern)?,
            punctuation: params.punctuation.chars().collect(),
        })
    }

    pub fn normalize(&self, raw: &str) -> String {
        // Lower case, then strip/newline/NBSP/space runs in one pass.
        let lowered = raw.to_lowercase();
        let spaced = settle(&lowered);

        let without_asides = self.aside.replace_all(&spaced, "");

        let stripped: String = without_asides
            .chars()
            .filter(|c| !self.punctuation.contains(c))
            .collect();

        // Deleted asides and punctuation leave space runs behind.
        settle(&stripped)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            aside: default_aside(),
            punctuation: crate::config::DEFAULT_PUNCTUATION.chars().collect(),
        }
    }
}

fn default_aside() -> Regex {
    static ASIDE: OnceLock<Regex> = OnceLock::new();
    ASIDE
        .get_or_init(|| {
            Regex::new(crate::config::DEFAULT_ASIDE_PATTERN).expect("built-in aside pattern")
        })
        .clone()
}

fn settle(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes with the default aside pattern and punctuation set.
pub fn normalize(raw: &str) -> String {
    static DEFAULT: OnceLock<Normalizer> = OnceLock::new();
    DEFAULT.get_or_init(Normalizer::default).normalize(raw)
}
