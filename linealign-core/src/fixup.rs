//! Leading-sentinel validation and expansion
//!
//! The recurrence marks an exhausted window side with a single `ALL` entry.
//! Before pairs are extracted that entry is replaced by the explicit run of
//! unmatched positions it stands for.

use crate::error::{AlignError, Result, Side};
use crate::pairing::{History, Pairing, Position};

/// Check sentinel placement
///
/// An `ALL` sentinel may only appear in the first entry, on exactly one
/// side, with `NONE` on the other side.
pub fn validate(history: &[Pairing]) -> Result<()> {
    for (position, entry) in history.iter().enumerate() {
        if !entry.is_exhaustion() {
            continue;
        }
        if position != 0 {
            return Err(AlignError::SentinelOutOfPlace { position });
        }
        match (entry.a, entry.b) {
            (Position::Exhausted, Position::Dropped) | (Position::Dropped, Position::Exhausted) => {}
            _ => return Err(AlignError::InconsistentSentinel { position }),
        }
    }
    Ok(())
}

/// Replace a leading `ALL` entry by explicit `(index, NONE)` or
/// `(NONE, index)` entries
///
/// The run covers positions from 0 up to the next entry's index on the
/// exhausted side, or up to the window length when nothing follows.
pub fn expand_leading(history: &[Pairing], len_a: usize, len_b: usize) -> Result<History> {
    let Some((first, rest)) = history.split_first() else {
        return Ok(History::new());
    };

    let (side, window_len) = match (first.a, first.b) {
        (Position::Exhausted, _) => (Side::A, len_a),
        (_, Position::Exhausted) => (Side::B, len_b),
        _ => return Ok(history.iter().copied().collect()),
    };

    let stop = match rest.first() {
        Some(next) => {
            let anchor = match side {
                Side::A => next.a,
                Side::B => next.b,
            };
            anchor
                .index()
                .ok_or(AlignError::MissingAnchor { side })?
        }
        None => window_len,
    };

    let mut expanded = History::with_capacity(stop + rest.len());
    expanded.extend((0..stop).map(|index| match side {
        Side::A => Pairing {
            a: Position::Concrete(index),
            b: Position::Dropped,
        },
        Side::B => Pairing {
            a: Position::Dropped,
            b: Position::Concrete(index),
        },
    }));
    expanded.extend_from_slice(rest);
    Ok(expanded)
}

/// Validate a raw history and expand its leading sentinel
pub fn fixup(history: &[Pairing], len_a: usize, len_b: usize) -> Result<History> {
    validate(history)?;
    expand_leading(history, len_a, len_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(entries: &[Pairing]) -> History {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_sentinel_after_first_entry_is_rejected() {
        let raw = [Pairing::matched(0, 0), Pairing::exhausted_a()];
        assert_eq!(
            validate(&raw),
            Err(AlignError::SentinelOutOfPlace { position: 1 })
        );
    }

    #[test]
    fn test_inconsistent_sentinel_is_rejected() {
        let raw = [Pairing {
            a: Position::Exhausted,
            b: Position::Concrete(0),
        }];
        assert_eq!(
            validate(&raw),
            Err(AlignError::InconsistentSentinel { position: 0 })
        );

        let both = [Pairing {
            a: Position::Exhausted,
            b: Position::Exhausted,
        }];
        assert_eq!(
            validate(&both),
            Err(AlignError::InconsistentSentinel { position: 0 })
        );
    }

    #[test]
    fn test_history_without_sentinel_is_unchanged() {
        let raw = [Pairing::matched(0, 0), Pairing::drop_b(1)];
        let fixed = fixup(&raw, 2, 2).unwrap();
        assert_eq!(fixed, history(&raw));
    }

    #[test]
    fn test_exhausted_b_expands_to_unmatched_b_lines() {
        let raw = [Pairing::exhausted_b(), Pairing::matched(0, 2)];
        let fixed = fixup(&raw, 1, 3).unwrap();
        assert_eq!(
            fixed,
            history(&[
                Pairing {
                    a: Position::Dropped,
                    b: Position::Concrete(0)
                },
                Pairing {
                    a: Position::Dropped,
                    b: Position::Concrete(1)
                },
                Pairing::matched(0, 2),
            ])
        );
    }

    #[test]
    fn test_exhausted_a_expands_up_to_anchor() {
        let raw = [
            Pairing::exhausted_a(),
            Pairing::drop_b(1),
            Pairing::drop_b(1),
        ];
        let fixed = fixup(&raw, 2, 2).unwrap();
        assert_eq!(
            fixed,
            history(&[Pairing::drop_b(0), Pairing::drop_b(1), Pairing::drop_b(1)])
        );
    }

    #[test]
    fn test_lone_sentinel_spans_whole_window() {
        let fixed = fixup(&[Pairing::exhausted_a()], 3, 0).unwrap();
        assert_eq!(
            fixed,
            history(&[Pairing::drop_b(0), Pairing::drop_b(1), Pairing::drop_b(2)])
        );
    }

    #[test]
    fn test_zero_length_run_drops_sentinel() {
        let raw = [Pairing::exhausted_b(), Pairing::matched(0, 0)];
        let fixed = fixup(&raw, 1, 1).unwrap();
        assert_eq!(fixed, history(&[Pairing::matched(0, 0)]));
    }

    #[test]
    fn test_missing_anchor_is_rejected() {
        let raw = [Pairing::exhausted_b(), Pairing::drop_b(0)];
        assert_eq!(
            fixup(&raw, 1, 1),
            Err(AlignError::MissingAnchor { side: Side::B })
        );
    }

    #[test]
    fn test_empty_history() {
        assert!(fixup(&[], 0, 0).unwrap().is_empty());
    }
}
