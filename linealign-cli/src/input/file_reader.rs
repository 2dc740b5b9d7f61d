//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use linealign_core::Corpus;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a corpus, one line per input line, keeping at most `limit` lines
    pub fn read_corpus(path: &Path, limit: Option<usize>) -> Result<Corpus> {
        let text = Self::read_text(path)?;
        let corpus = Corpus::from_text(&text, limit);

        log::info!("{}: {}", path.display(), corpus.stats());

        Ok(corpus)
    }
}
