//! Tokenized lines and corpora
//!
//! A corpus is read once and never mutated afterwards. The only cost signal
//! the aligner uses is the token count of each line.

use std::collections::HashSet;

/// One line of a corpus: its whitespace tokens plus the original text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    tokens: Vec<String>,
    text: String,
}

impl Line {
    /// Create a line from raw text, splitting on whitespace
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let text = text.trim_end_matches(['\n', '\r']).to_string();
        let tokens = text.split_whitespace().map(str::to_string).collect();
        Self { tokens, text }
    }

    /// The line's tokens in order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens, the "length" used by the alignment cost
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Original unsplit text without the line terminator
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Summary counts for a loaded corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorpusStats {
    /// Number of lines
    pub lines: usize,
    /// Total number of tokens over all lines
    pub words: usize,
    /// Number of distinct tokens
    pub vocabulary: usize,
}

impl std::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "words = {}, lines = {}, vocab = {}",
            self.words, self.lines, self.vocabulary
        )
    }
}

/// An ordered, zero-indexed sequence of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<Line>,
}

impl Corpus {
    /// Build a corpus from already constructed lines
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = Line>,
    {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    /// Build a corpus from text, one line per input line
    ///
    /// Reading stops after `limit` lines when a limit is given.
    pub fn from_text(text: &str, limit: Option<usize>) -> Self {
        let lines = text.lines().map(Line::new);
        match limit {
            Some(limit) => Self::from_lines(lines.take(limit)),
            None => Self::from_lines(lines),
        }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the corpus holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// All lines in order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The window `[start, start + size)`, only if it is fully available
    pub fn window(&self, start: usize, size: usize) -> Option<&[Line]> {
        let end = start.checked_add(size)?;
        self.lines.get(start..end)
    }

    /// Count lines, tokens and distinct tokens
    pub fn stats(&self) -> CorpusStats {
        let mut vocabulary = HashSet::new();
        let mut words = 0;
        for line in &self.lines {
            words += line.token_count();
            vocabulary.extend(line.tokens().iter().map(String::as_str));
        }

        CorpusStats {
            lines: self.lines.len(),
            words,
            vocabulary: vocabulary.len(),
        }
    }
}
