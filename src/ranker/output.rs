use super::RankedEntry;
use crate::config::OutputFormat;
use crate::error::PfResult;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a finished ranking in one go, replacing any previous file.
pub fn save_rankings<P: AsRef<Path>>(
    path: P,
    entries: &[RankedEntry],
    format: OutputFormat,
) -> PfResult<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    match format {
        OutputFormat::Json => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer(&mut writer, entries)?;
            writer.flush()?;
        }
        OutputFormat::Tsv => {
            // ngram first, so the file can be loaded back as a score table
            let mut wtr = csv::WriterBuilder::new()
                .delimiter(b'\t')
                .has_headers(false)
                .quote_style(csv::QuoteStyle::Never)
                .from_path(path)?;
            for e in entries {
                let score = e.score.to_string();
                wtr.write_record([e.ngram.as_str(), score.as_str()])?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn load_rankings<P: AsRef<Path>>(path: P) -> PfResult<Vec<RankedEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
