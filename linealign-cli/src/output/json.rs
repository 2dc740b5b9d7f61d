//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use linealign_core::AlignedPair;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs pairs as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    pairs: Vec<PairData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairData {
    /// Line index in corpus A
    pub index_a: usize,
    /// Original text of the corpus A line
    pub text_a: String,
    /// Line index in corpus B
    pub index_b: usize,
    /// Original text of the corpus B line
    pub text_b: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            pairs: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_pair(&mut self, pair: &AlignedPair<'_>) -> Result<()> {
        self.pairs.push(PairData {
            index_a: pair.index_a,
            text_a: pair.line_a.text().to_string(),
            index_b: pair.index_b,
            text_b: pair.line_b.text().to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.pairs)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.pairs)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
