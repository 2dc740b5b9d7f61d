//! Windowed line alignment for drifting parallel corpora
//!
//! Two corpora with different line counts and line-splitting conventions
//! are aligned a window at a time. Each window pair is aligned by a
//! minimum-cost recurrence over token counts; the scheduler then uses the
//! window's own alignment to decide where the next windows start.
//!
//! # Example
//!
//! ```rust
//! use linealign_core::{run, AlignConfig, Corpus};
//!
//! let a = Corpus::from_text("skip\nskip\nthe cat\nsat down\n", None);
//! let b = Corpus::from_text("skip\nskip\nle chat\ns'est assis\n", None);
//!
//! let pairs = run(&a, &b, AlignConfig::new(4, 2))
//!     .unwrap()
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(pairs[0].line_b.text(), "le chat");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod fixup;
pub mod pairing;
pub mod recurrence;
pub mod scheduler;

// Re-export key types
pub use config::{AlignConfig, MAX_WINDOW};
pub use corpus::{Corpus, CorpusStats, Line};
pub use error::{AlignError, Result, Side};
pub use pairing::{History, Pairing, Position};
pub use recurrence::{align, Alignment};
pub use scheduler::{run, AlignedPair, RoundReport, WindowScheduler};
