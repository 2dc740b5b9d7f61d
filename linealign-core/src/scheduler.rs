//! Sliding-window driver chaining local alignments into a global one
//!
//! Each round aligns a window of `window` lines from both corpora, starting
//! one full window past the cursors, then advances the cursors past the
//! last confirmed line on each side. Rounds depend on the cursors left by
//! the previous round, so they run strictly in sequence.

use std::collections::VecDeque;

use crate::config::AlignConfig;
use crate::corpus::{Corpus, Line};
use crate::error::{AlignError, Result, Side};
use crate::fixup::fixup;
use crate::pairing::{History, Pairing, Position};
use crate::recurrence::{align, Alignment};

/// A confirmed pairing of one line from each corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair<'a> {
    /// Index of the line in corpus A
    pub index_a: usize,
    /// The line from corpus A
    pub line_a: &'a Line,
    /// Index of the line in corpus B
    pub index_b: usize,
    /// The line from corpus B
    pub line_b: &'a Line,
}

/// Diagnostics for one accepted round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Zero-based round number
    pub round: usize,
    /// Cursor on corpus A before the round
    pub prev_a: usize,
    /// Cursor on corpus B before the round
    pub prev_b: usize,
    /// First corpus A line of the window
    pub start_a: usize,
    /// First corpus B line of the window
    pub start_b: usize,
    /// Alignment cost of the window
    pub cost: usize,
    /// Fixed-up pairing history, positions relative to the window
    pub history: History,
    /// Number of confirmed pairs emitted
    pub emitted: usize,
    /// Window A lines left without a partner
    pub unmatched_a: usize,
    /// Window B lines left without a partner
    pub unmatched_b: usize,
}

type Observer<'a> = Box<dyn FnMut(&RoundReport) + 'a>;

/// Lazy, forward-only producer of aligned line pairs
///
/// Yields `Err` at most once: after a stall or an invariant violation the
/// run is over and the iterator only returns `None`.
pub struct WindowScheduler<'a> {
    corpus_a: &'a Corpus,
    corpus_b: &'a Corpus,
    config: AlignConfig,
    prev_a: usize,
    prev_b: usize,
    round: usize,
    rounds: usize,
    pending: VecDeque<AlignedPair<'a>>,
    observer: Option<Observer<'a>>,
    failed: bool,
}

impl<'a> WindowScheduler<'a> {
    /// Create a scheduler over two corpora
    pub fn new(corpus_a: &'a Corpus, corpus_b: &'a Corpus, config: AlignConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            corpus_a,
            corpus_b,
            config,
            prev_a: 0,
            prev_b: 0,
            round: 0,
            rounds: config.rounds(),
            pending: VecDeque::new(),
            observer: None,
            failed: false,
        })
    }

    /// Register a callback receiving a report for every accepted round
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&RoundReport) + 'a,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Current `(prev_a, prev_b)` cursors
    pub fn cursors(&self) -> (usize, usize) {
        (self.prev_a, self.prev_b)
    }

    /// Number of rounds completed so far
    pub fn rounds_completed(&self) -> usize {
        self.round
    }

    /// Total number of rounds of a complete run
    pub fn total_rounds(&self) -> usize {
        self.rounds
    }

    /// Run one round and queue its confirmed pairs
    fn advance(&mut self) -> Result<()> {
        let window = self.config.window;
        let start_a = self.prev_a + window;
        let start_b = self.prev_b + window;

        log::debug!(
            "round {} :: a = {}, b = {}",
            self.round,
            self.prev_a,
            self.prev_b
        );

        let text_a = slice_window(self.corpus_a, Side::A, start_a, window)?;
        let text_b = slice_window(self.corpus_b, Side::B, start_b, window)?;

        let Alignment { cost, history } = align(text_a, text_b);
        let history = fixup(&history, text_a.len(), text_b.len())?;

        if log::log_enabled!(log::Level::Trace) {
            trace_round(text_a, text_b, &history);
        }

        let mut last_a = None;
        let mut last_b = None;
        let mut pairs = Vec::with_capacity(window);

        for entry in &history {
            if let Some(a) = entry.a.index() {
                last_a = Some(a);
            }
            if let Some(b) = entry.b.index() {
                last_b = Some(b);
            }
            if let (Position::Concrete(a), Position::Concrete(b)) = (entry.a, entry.b) {
                pairs.push(AlignedPair {
                    index_a: start_a + a,
                    line_a: &text_a[a],
                    index_b: start_b + b,
                    line_b: &text_b[b],
                });
            }
        }

        if last_a != Some(window - 1) {
            return Err(AlignError::IncompleteWindow { last_a, window });
        }
        let last_a = window - 1;
        let last_b = last_b.ok_or(AlignError::Stall {
            round: self.round,
            start_b,
        })?;

        let report = RoundReport {
            round: self.round,
            prev_a: self.prev_a,
            prev_b: self.prev_b,
            start_a,
            start_b,
            cost,
            emitted: pairs.len(),
            unmatched_a: text_a.len() - pairs.len(),
            unmatched_b: text_b.len() - pairs.len(),
            history,
        };
        log::debug!(
            "round {} accepted: cost = {}, pairs = {}, unmatched a = {}, unmatched b = {}",
            report.round,
            report.cost,
            report.emitted,
            report.unmatched_a,
            report.unmatched_b
        );
        if let Some(observer) = self.observer.as_mut() {
            observer(&report);
        }

        self.pending.extend(pairs);
        self.prev_a += last_a + 1;
        self.prev_b += last_b + 1;
        self.round += 1;

        if self.round == self.rounds {
            log::info!(
                "alignment finished after {} rounds, cursors a = {}, b = {}",
                self.rounds,
                self.prev_a,
                self.prev_b
            );
        }

        Ok(())
    }
}

impl<'a> Iterator for WindowScheduler<'a> {
    type Item = Result<AlignedPair<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.pending.pop_front() {
                return Some(Ok(pair));
            }
            if self.failed || self.round >= self.rounds {
                return None;
            }
            if let Err(err) = self.advance() {
                log::error!("alignment aborted in round {}: {}", self.round, err);
                self.failed = true;
                return Some(Err(err));
            }
        }
    }
}

/// Align two corpora window by window
pub fn run<'a>(
    corpus_a: &'a Corpus,
    corpus_b: &'a Corpus,
    config: AlignConfig,
) -> Result<WindowScheduler<'a>> {
    WindowScheduler::new(corpus_a, corpus_b, config)
}

fn slice_window(corpus: &Corpus, side: Side, start: usize, window: usize) -> Result<&[Line]> {
    corpus
        .window(start, window)
        .ok_or(AlignError::WindowUnavailable {
            corpus: side,
            start,
            window,
            available: corpus.len(),
        })
}

fn trace_round(text_a: &[Line], text_b: &[Line], history: &[Pairing]) {
    for (j, line) in text_a.iter().enumerate() {
        log::trace!("[A] {} :: {}", j, line);
    }
    for (j, line) in text_b.iter().enumerate() {
        log::trace!("[B] {} :: {}", j, line);
    }
    for (j, entry) in history.iter().enumerate() {
        let line_a = entry.a.index().map_or("-NONE-", |a| text_a[a].text());
        let line_b = entry.b.index().map_or("-NONE-", |b| text_b[b].text());
        log::trace!("[A] {} :: {} :: {}", j, entry.a, line_a);
        log::trace!("[B] {} :: {} :: {}", j, entry.b, line_b);
    }
}
