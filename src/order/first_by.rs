//! Best-element and best-n selection under order rules.

use std::cmp::Ordering;

use super::heap::BoundedHeap;
use super::{OrderRule, comparator};

/// Returns the element of `data` ranking first under the given rules, or
/// `None` for an empty input.
///
/// One linear scan, no sort: the current best is replaced only when a
/// later element ranks *strictly* ahead, so among tied elements the
/// earliest one in the input wins.
///
/// # Examples
///
/// ```rust
/// use fusor::order::{desc, first_by};
///
/// let longest = first_by(
///     vec!["aa", "aaaa", "a", "aaa"],
///     desc(|word: &&str| word.len()),
///     vec![],
/// );
/// assert_eq!(longest, Some("aaaa"));
/// ```
///
/// ## Ties resolve to the earliest element
///
/// ```rust
/// use fusor::order::{desc, first_by};
///
/// let best = first_by(
///     vec![(1, 'x'), (2, 'y'), (2, 'z')],
///     desc(|pair: &(i32, char)| pair.0),
///     vec![],
/// );
/// assert_eq!(best, Some((2, 'y')));
/// ```
pub fn first_by<D, T>(data: D, rule: OrderRule<T>, tie_breakers: Vec<OrderRule<T>>) -> Option<T>
where
    D: IntoIterator<Item = T>,
{
    let compare = comparator(rule, tie_breakers);
    let mut elements = data.into_iter();
    let mut current_first = elements.next()?;

    for candidate in elements {
        if compare(&candidate, &current_first) == Ordering::Less {
            current_first = candidate;
        }
    }

    Some(current_first)
}

/// Returns the `count` elements of `data` ranking first under the given
/// rules, in no particular order.
///
/// Runs in `O(len * log count)`: the first `count` elements seed a bounded
/// heap whose root is the next eviction candidate, and every later element
/// either evicts the root or is discarded. Multiplicities are preserved;
/// the result is *not* sorted.
///
/// `count == 0` returns an empty vector; `count >= data.len()` returns the
/// data whole, order untouched.
///
/// # Examples
///
/// ```rust
/// use fusor::order::{asc, take_first_by};
///
/// let mut shortest = take_first_by(
///     vec!["aa", "aaaa", "a", "aaa"],
///     2,
///     asc(|word: &&str| word.len()),
///     vec![],
/// );
/// shortest.sort_unstable();
/// assert_eq!(shortest, vec!["a", "aa"]);
/// ```
pub fn take_first_by<T>(
    data: Vec<T>,
    count: usize,
    rule: OrderRule<T>,
    tie_breakers: Vec<OrderRule<T>>,
) -> Vec<T> {
    if count == 0 {
        return Vec::new();
    }
    if count >= data.len() {
        return data;
    }

    let compare = comparator(rule, tie_breakers);
    let mut elements = data.into_iter();
    let seed: Vec<T> = elements.by_ref().take(count).collect();

    let mut heap = BoundedHeap::from_seed(seed, compare);
    for candidate in elements {
        heap.offer(candidate);
    }
    heap.into_vec()
}
