//! Plain text output formatter

use super::{Labels, OutputFormatter};
use anyhow::Result;
use linealign_core::AlignedPair;
use std::io::Write;

/// Plain text formatter - outputs each side of a pair on its own labeled line
pub struct TextFormatter<W: Write> {
    writer: W,
    labels: Labels,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, labels: Labels) -> Self {
        Self { writer, labels }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_pair(&mut self, pair: &AlignedPair<'_>) -> Result<()> {
        writeln!(self.writer, "{}: {}", self.labels.a, pair.line_a.text())?;
        writeln!(self.writer, "{}: {}", self.labels.b, pair.line_b.text())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
