//! Minimum-cost alignment of two short windows of lines
//!
//! The recurrence works on the last line of each window:
//!
//! - window A empty: cost is the token count of everything left in B,
//!   entry `(NONE, ALL)`
//! - window B empty: cost is the token count of everything left in A,
//!   entry `(ALL, NONE)`
//! - equal token counts: forced match at no cost
//! - otherwise the cheaper of matching with penalty `diff + 1` or dropping
//!   the last B line at the cost of its token count; ties go to the match
//!
//! Lines are never dropped from A. The table is filled bottom-up over prefix
//! lengths and a single backtrace yields the history in forward order.

use crate::corpus::Line;
use crate::pairing::{History, Pairing};

/// Penalty added to a lossy match so that an exact match is strictly
/// cheaper than a lossy one of the same numeric distance
pub const MATCH_PENALTY: usize = 1;

/// Cost and pairing history of one window alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Total cost in tokens
    pub cost: usize,
    /// Pairings ordered from the earliest window position forward
    pub history: History,
}

/// Which rule produced a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// A prefix empty
    ExhaustedB,
    /// B prefix empty
    ExhaustedA,
    /// Equal token counts
    Forced,
    /// Lossy match
    Match,
    /// Last B line dropped
    DropB,
}

/// Align two windows, returning the minimum cost and its pairing history
pub fn align(text_a: &[Line], text_b: &[Line]) -> Alignment {
    let n_a = text_a.len();
    let n_b = text_b.len();

    let mut cost = vec![vec![0usize; n_b + 1]; n_a + 1];
    let mut step = vec![vec![Step::ExhaustedB; n_b + 1]; n_a + 1];

    for j in 1..=n_b {
        cost[0][j] = cost[0][j - 1] + text_b[j - 1].token_count();
    }
    for i in 1..=n_a {
        cost[i][0] = cost[i - 1][0] + text_a[i - 1].token_count();
        step[i][0] = Step::ExhaustedA;
    }

    for i in 1..=n_a {
        let len_a = text_a[i - 1].token_count();
        for j in 1..=n_b {
            let len_b = text_b[j - 1].token_count();
            let diff = len_a.abs_diff(len_b);

            if diff == 0 {
                cost[i][j] = cost[i - 1][j - 1];
                step[i][j] = Step::Forced;
                continue;
            }

            let matched = cost[i - 1][j - 1] + diff + MATCH_PENALTY;
            let dropped = cost[i][j - 1] + len_b;
            if matched <= dropped {
                cost[i][j] = matched;
                step[i][j] = Step::Match;
            } else {
                cost[i][j] = dropped;
                step[i][j] = Step::DropB;
            }
        }
    }

    Alignment {
        cost: cost[n_a][n_b],
        history: backtrace(&step, n_a, n_b),
    }
}

/// Walk the decision table from the full windows down to a base case
fn backtrace(step: &[Vec<Step>], n_a: usize, n_b: usize) -> History {
    let mut history = History::new();
    let (mut i, mut j) = (n_a, n_b);

    loop {
        match step[i][j] {
            Step::ExhaustedB => {
                history.push(Pairing::exhausted_b());
                break;
            }
            Step::ExhaustedA => {
                history.push(Pairing::exhausted_a());
                break;
            }
            Step::Forced | Step::Match => {
                history.push(Pairing::matched(i - 1, j - 1));
                i -= 1;
                j -= 1;
            }
            Step::DropB => {
                history.push(Pairing::drop_b(i - 1));
                j -= 1;
            }
        }
    }

    history.reverse();
    history
}
