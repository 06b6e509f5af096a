//! Integration tests for order rules and bounded selection.

#![cfg(feature = "order")]

use fusor::order::{Direction, OrderRule, asc, comparator, desc, first_by, take_first_by};
use rstest::rstest;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
struct Record {
    group: &'static str,
    score: u32,
}

const fn record(group: &'static str, score: u32) -> Record {
    Record { group, score }
}

mod comparator_chaining {
    use super::*;

    #[test]
    fn test_primary_ascending_secondary_descending() {
        let animals = vec![record("cat", 1), record("cat", 2), record("dog", 3)];

        let best = first_by(
            animals,
            asc(|r: &Record| r.group),
            vec![desc(|r: &Record| r.score)],
        );

        assert_eq!(best, Some(record("cat", 2)));
    }

    #[test]
    fn test_explicit_direction_matches_shorthand() {
        let shorthand = asc(|x: &i32| *x);
        let explicit = OrderRule::new(|x: &i32| *x, Direction::Ascending);

        assert_eq!(shorthand.compare(&1, &2), explicit.compare(&1, &2));
        assert_eq!(shorthand.compare(&2, &1), explicit.compare(&2, &1));
    }

    #[test]
    fn test_later_rules_ignored_once_decided() {
        let poisoned_tie_breaker = desc(|_: &i32| panic!("tie breaker must not run"));
        let compare = comparator(asc(|x: &i32| *x), vec![poisoned_tie_breaker]);

        assert_eq!(compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn test_all_rules_equal_reports_equal() {
        let compare = comparator(
            asc(|r: &Record| r.group),
            vec![asc(|r: &Record| r.score)],
        );
        assert_eq!(
            compare(&record("cat", 1), &record("cat", 1)),
            Ordering::Equal
        );
    }
}

mod first_by_selection {
    use super::*;

    #[test]
    fn test_tie_resolves_to_earliest_maximal_element() {
        let data = vec![(1, "x"), (2, "y"), (2, "z")];
        let best = first_by(data, desc(|pair: &(i32, &str)| pair.0), vec![]);
        assert_eq!(best, Some((2, "y")));
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec![5], Some(5))]
    #[case(vec![3, 1, 2], Some(1))]
    #[case(vec![1, 1, 2], Some(1))]
    fn test_first_by_ascending(#[case] data: Vec<i32>, #[case] expected: Option<i32>) {
        assert_eq!(first_by(data, asc(|x: &i32| *x), vec![]), expected);
    }
}

mod take_first_by_selection {
    use super::*;

    #[test]
    fn test_shortest_words() {
        let mut shortest = take_first_by(
            vec!["aa", "aaaa", "a", "aaa"],
            2,
            asc(|word: &&str| word.len()),
            vec![],
        );
        shortest.sort_unstable();
        assert_eq!(shortest, vec!["a", "aa"]);
    }

    #[test]
    fn test_count_of_full_length_returns_copy_not_sorted() {
        let data = vec![3, 1, 2];
        assert_eq!(
            take_first_by(data.clone(), data.len(), asc(|x: &i32| *x), vec![]),
            data
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    #[case(8)]
    fn test_multiset_matches_sorted_prefix(#[case] count: usize) {
        let data = vec![12, 3, 44, 7, 9, 1, 30, 5];

        let mut kept = take_first_by(data.clone(), count, asc(|x: &i32| *x), vec![]);
        kept.sort_unstable();

        let mut sorted = data;
        sorted.sort_unstable();
        sorted.truncate(count);

        assert_eq!(kept, sorted);
    }

    #[test]
    fn test_tie_breakers_apply_inside_the_selection() {
        let records = vec![
            record("b", 1),
            record("a", 1),
            record("a", 9),
            record("c", 5),
        ];

        let kept = take_first_by(
            records,
            2,
            asc(|r: &Record| r.group),
            vec![desc(|r: &Record| r.score)],
        );

        assert_eq!(kept.len(), 2);
        assert!(kept.contains(&record("a", 9)));
        assert!(kept.contains(&record("a", 1)));
    }
}

mod partial_order_edge {
    use super::*;

    // NaN keys compare equal to everything; the scan keeps the earliest.
    #[test]
    fn test_nan_projection_keeps_earliest() {
        let data = vec![f64::NAN, 2.0, 1.0];
        let best = first_by(data, asc(|x: &f64| *x), vec![]);
        assert!(best.is_some_and(f64::is_nan));
    }
}
