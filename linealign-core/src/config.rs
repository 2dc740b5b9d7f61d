//! Configuration types for the window scheduler

use crate::error::{AlignError, Result};

/// Largest accepted window size
///
/// The recurrence table grows quadratically with the window.
pub const MAX_WINDOW: usize = 64;

/// Alignment run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignConfig {
    /// Logical number of lines to process per corpus
    pub limit: usize,
    /// Lines per window and per round
    pub window: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            limit: 13_000,
            window: 8,
        }
    }
}

impl AlignConfig {
    /// Create a configuration
    pub fn new(limit: usize, window: usize) -> Self {
        Self { limit, window }
    }

    /// Set the line limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the window size
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Check that the configuration describes a runnable alignment
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(AlignError::InvalidConfig(
                "window size must be at least 1".to_string(),
            ));
        }
        if self.window > MAX_WINDOW {
            return Err(AlignError::InvalidConfig(format!(
                "window size {} exceeds the maximum of {MAX_WINDOW}",
                self.window
            )));
        }
        if self.limit < self.window {
            return Err(AlignError::InvalidConfig(format!(
                "limit {} is smaller than the window size {}",
                self.limit, self.window
            )));
        }
        Ok(())
    }

    /// Number of rounds a full run performs
    pub fn rounds(&self) -> usize {
        if self.window == 0 {
            return 0;
        }
        self.limit.saturating_sub(self.window).div_ceil(self.window)
    }

    /// Lines each corpus must hold for every round's window to be available
    ///
    /// Corpus A advances by exactly one window per round and B never
    /// advances faster, so the bound is set by A.
    pub fn required_lines(&self) -> usize {
        match self.rounds() {
            0 => 0,
            rounds => (rounds + 1) * self.window,
        }
    }
}
