//! Output formatting module

use anyhow::Result;
use linealign_core::AlignedPair;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single aligned pair
    fn format_pair(&mut self, pair: &AlignedPair<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labeled line pairs, one line per side
    #[default]
    Text,
    /// JSON array of pairs with corpus indices
    Json,
    /// Markdown table
    Markdown,
}

/// Labels printed in front of each side of a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Label for corpus A lines
    pub a: String,
    /// Label for corpus B lines
    pub b: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            a: "ENG".to_string(),
            b: "RUS".to_string(),
        }
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    labels: Labels,
    pretty_json: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, labels)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, labels)),
    }
}
