//! Layered error types
//!
//! Invariant violations and stalls are unrecoverable: once the scheduler
//! reports one of them the run is over.

use thiserror::Error;

/// Which corpus an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Corpus A (the side that is always fully consumed)
    A,
    /// Corpus B (the side lines may be dropped from)
    B,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Alignment errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// An `ALL` sentinel appeared after the first history entry
    #[error("exhaustion sentinel at history position {position}, only position 0 is allowed")]
    SentinelOutOfPlace {
        /// Index of the offending entry in the history
        position: usize,
    },

    /// An `ALL` sentinel was not paired with `NONE` on the other side
    #[error("inconsistent sentinel pair at history position {position}")]
    InconsistentSentinel {
        /// Index of the offending entry in the history
        position: usize,
    },

    /// A leading `ALL` entry is followed by an entry without a concrete
    /// index on the exhausted side
    #[error("leading exhaustion on side {side} is not followed by a concrete anchor")]
    MissingAnchor {
        /// Side that carried the `ALL` sentinel
        side: Side,
    },

    /// The alignment did not reach the last line of the A window
    #[error("window A not fully consumed: last index {last_a:?}, window size {window}")]
    IncompleteWindow {
        /// Last concrete A index seen, if any
        last_a: Option<usize>,
        /// Window size of the round
        window: usize,
    },

    /// No B line was confirmed in a round, the B cursor cannot advance
    #[error("no progress on corpus B in round {round} (window starting at line {start_b})")]
    Stall {
        /// Zero-based round number
        round: usize,
        /// Corpus index the B window started at
        start_b: usize,
    },

    /// A corpus ran out before a full window could be sliced
    #[error("corpus {corpus} has {available} lines, window [{start}, {}) is unavailable", .start + .window)]
    WindowUnavailable {
        /// Corpus that ran out
        corpus: Side,
        /// First line of the requested window
        start: usize,
        /// Requested window size
        window: usize,
        /// Number of lines the corpus actually holds
        available: usize,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AlignError {
    /// Whether the error signals a logic defect in the recurrence or the
    /// scheduler rather than a problem with the inputs
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            AlignError::SentinelOutOfPlace { .. }
                | AlignError::InconsistentSentinel { .. }
                | AlignError::MissingAnchor { .. }
                | AlignError::IncompleteWindow { .. }
        )
    }
}

/// Result type for alignment operations
pub type Result<T> = std::result::Result<T, AlignError>;
