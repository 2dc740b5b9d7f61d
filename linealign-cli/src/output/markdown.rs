//! Markdown output formatter

use super::{Labels, OutputFormatter};
use anyhow::Result;
use linealign_core::AlignedPair;
use std::io::Write;

/// Markdown formatter - outputs pairs as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    labels: Labels,
    pair_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, labels: Labels) -> Self {
        Self {
            writer,
            labels,
            pair_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "| # | Line | {} | Line | {} |",
            self.labels.a, self.labels.b
        )?;
        writeln!(self.writer, "|---|---|---|---|---|")?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.trim().replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_pair(&mut self, pair: &AlignedPair<'_>) -> Result<()> {
        if self.pair_count == 0 {
            self.write_header()?;
        }
        self.pair_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} |",
            self.pair_count,
            pair.index_a,
            escape_cell(pair.line_a.text()),
            pair.index_b,
            escape_cell(pair.line_b.text())
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pair_count == 0 {
            self.write_header()?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total pairs: {}*", self.pair_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
