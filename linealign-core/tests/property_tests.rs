//! Property-based tests for the recurrence and the scheduler
//!
//! The table-based recurrence is checked against a direct recursive
//! evaluation of the same cost rules on small windows.

use linealign_core::{align, run, AlignConfig, Corpus, Line, Pairing, Position};
use proptest::prelude::*;

fn line_with(tokens: usize) -> Line {
    Line::new(vec!["w"; tokens].join(" "))
}

fn lines(counts: &[usize]) -> Vec<Line> {
    counts.iter().map(|&n| line_with(n)).collect()
}

/// Direct recursive evaluation, first-minimum on ties
fn reference(a: &[usize], b: &[usize]) -> (usize, Vec<Pairing>) {
    let (n_a, n_b) = (a.len(), b.len());
    if n_a == 0 {
        return (b.iter().sum(), vec![Pairing::exhausted_b()]);
    }
    if n_b == 0 {
        return (a.iter().sum(), vec![Pairing::exhausted_a()]);
    }

    let diff = a[n_a - 1].abs_diff(b[n_b - 1]);
    if diff == 0 {
        let (cost, mut history) = reference(&a[..n_a - 1], &b[..n_b - 1]);
        history.push(Pairing::matched(n_a - 1, n_b - 1));
        return (cost, history);
    }

    let (match_cost, mut match_history) = reference(&a[..n_a - 1], &b[..n_b - 1]);
    let (drop_cost, mut drop_history) = reference(a, &b[..n_b - 1]);
    let match_cost = match_cost + diff + 1;
    let drop_cost = drop_cost + b[n_b - 1];

    if match_cost <= drop_cost {
        match_history.push(Pairing::matched(n_a - 1, n_b - 1));
        (match_cost, match_history)
    } else {
        drop_history.push(Pairing::drop_b(n_a - 1));
        (drop_cost, drop_history)
    }
}

fn token_counts(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..6usize, 0..=max_len)
}

proptest! {
    #[test]
    fn table_matches_recursive_evaluation(a in token_counts(6), b in token_counts(6)) {
        let (cost, history) = reference(&a, &b);
        let result = align(&lines(&a), &lines(&b));
        prop_assert_eq!(result.cost, cost);
        prop_assert_eq!(result.history.as_slice(), history.as_slice());
    }

    #[test]
    fn identical_lengths_cost_nothing(counts in prop::collection::vec(0..8usize, 1..10)) {
        let result = align(&lines(&counts), &lines(&counts));
        prop_assert_eq!(result.cost, 0);

        let mut expected = vec![Pairing::exhausted_b()];
        expected.extend((0..counts.len()).map(|i| Pairing::matched(i, i)));
        prop_assert_eq!(result.history.as_slice(), expected.as_slice());
    }

    #[test]
    fn empty_side_costs_the_other_sides_tokens(counts in prop::collection::vec(0..8usize, 1..10)) {
        let total: usize = counts.iter().sum();

        let only_b = align(&[], &lines(&counts));
        prop_assert_eq!(only_b.cost, total);
        prop_assert_eq!(only_b.history.as_slice(), &[Pairing::exhausted_b()]);

        let only_a = align(&lines(&counts), &[]);
        prop_assert_eq!(only_a.cost, total);
        prop_assert_eq!(only_a.history.as_slice(), &[Pairing::exhausted_a()]);
    }

    #[test]
    fn sentinel_only_leads(a in token_counts(6), b in token_counts(6)) {
        let result = align(&lines(&a), &lines(&b));
        for entry in result.history.iter().skip(1) {
            prop_assert!(!entry.is_exhaustion());
            prop_assert!(entry.a != Position::Dropped);
        }
    }

    #[test]
    fn scheduler_consumes_whole_a_windows(
        window in 1..5usize,
        rounds in 1..5usize,
        seed_a in prop::collection::vec(1..5usize, 40),
        seed_b in prop::collection::vec(1..5usize, 40),
    ) {
        let config = AlignConfig::new((rounds + 1) * window, window);
        let needed = config.required_lines();
        let a = Corpus::from_lines(seed_a[..needed].iter().map(|&n| line_with(n)));
        let b = Corpus::from_lines(seed_b[..needed].iter().map(|&n| line_with(n)));

        let mut reports = Vec::new();
        let pairs: Vec<_> = run(&a, &b, config)
            .unwrap()
            .with_observer(|report| reports.push(report.clone()))
            .map(|pair| pair.map(|p| (p.index_a, p.index_b)))
            .collect::<Result<_, _>>()
            .unwrap();

        prop_assert_eq!(reports.len(), rounds);
        for (round, report) in reports.iter().enumerate() {
            prop_assert_eq!(report.prev_a, round * window);
            let last_a = report.history.iter().filter_map(|p| p.a.index()).last();
            prop_assert_eq!(last_a, Some(window - 1));
        }
        for pair in reports.windows(2) {
            prop_assert!(pair[1].prev_a > pair[0].prev_a);
            prop_assert!(pair[1].prev_b > pair[0].prev_b);
        }
        for pair in pairs.windows(2) {
            prop_assert!(pair[1].0 > pair[0].0);
            prop_assert!(pair[1].1 > pair[0].1);
        }
    }
}
