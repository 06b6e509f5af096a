//! Projection-based order rules, comparator chaining, and bounded top-k
//! selection.
//!
//! # Overview
//!
//! An [`OrderRule`] pairs a projection with a direction: `asc(projection)`
//! orders by the projected key ascending, `desc(projection)` descending.
//! [`comparator`] chains a leading rule with any number of tie-breakers
//! into one total-order comparison: the first rule that discriminates
//! decides, and if every rule reports equal the elements compare equal.
//!
//! Built on top of that are the selection operations:
//!
//! - [`first_by`] — the single best element, one linear scan, earliest
//!   element wins ties.
//! - [`take_first_by`] — the best `n` elements in `O(len * log n)` via a
//!   bounded comparator-driven binary heap, without sorting the input.
//!
//! # Examples
//!
//! ```rust
//! use fusor::order::{asc, desc, first_by};
//!
//! #[derive(Debug, PartialEq, Clone)]
//! struct Animal {
//!     kind: &'static str,
//!     size: u32,
//! }
//!
//! let animals = vec![
//!     Animal { kind: "cat", size: 1 },
//!     Animal { kind: "cat", size: 2 },
//!     Animal { kind: "dog", size: 3 },
//! ];
//!
//! // Primary: kind ascending. Tie-break: size descending.
//! let best = first_by(
//!     animals,
//!     asc(|animal: &Animal| animal.kind),
//!     vec![desc(|animal: &Animal| animal.size)],
//! );
//! assert_eq!(best, Some(Animal { kind: "cat", size: 2 }));
//! ```
//!
//! # Key semantics
//!
//! Projected keys only need [`PartialOrd`]. A key that answers neither
//! less-than nor greater-than (`f64::NAN` against anything) is treated as
//! equal, which can make the chained comparator non-transitive. This
//! mirrors the behavior of comparing with the bare `<`/`>` operators and
//! is a documented limitation: avoid `NaN`-valued projections.

mod first_by;
mod heap;

use std::cmp::Ordering;

pub use first_by::{first_by, take_first_by};

/// The direction of an [`OrderRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smaller projected keys rank first.
    Ascending,
    /// Larger projected keys rank first.
    Descending,
}

/// One projection-based ordering rule.
///
/// Constructed with [`asc`] or [`desc`]; compared through
/// [`OrderRule::compare`]. Rules erase their key type, so rules over
/// different key types can be chained in one comparator.
pub struct OrderRule<T> {
    comparison: Box<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> OrderRule<T> {
    /// Builds a rule from a projection and an explicit direction.
    pub fn new<P, K>(projection: P, direction: Direction) -> Self
    where
        P: Fn(&T) -> K + 'static,
        K: PartialOrd,
    {
        let comparison = move |left: &T, right: &T| {
            let left_key = projection(left);
            let right_key = projection(right);
            let ordering = if left_key < right_key {
                Ordering::Less
            } else if left_key > right_key {
                Ordering::Greater
            } else {
                // Includes incomparable keys (NaN): treated as equal.
                Ordering::Equal
            };
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        };
        Self {
            comparison: Box::new(comparison),
        }
    }

    /// Compares two elements under this rule.
    ///
    /// `Ordering::Less` means `left` ranks ahead of `right`.
    #[must_use]
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.comparison)(left, right)
    }
}

impl<T> std::fmt::Debug for OrderRule<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("OrderRule(..)")
    }
}

/// An ascending rule: smaller projected keys rank first.
///
/// This is the default direction; a bare projection used as a rule means
/// ascending.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fusor::order::asc;
///
/// let by_length = asc(|word: &&str| word.len());
/// assert_eq!(by_length.compare(&"ab", &"abc"), Ordering::Less);
/// ```
pub fn asc<T, P, K>(projection: P) -> OrderRule<T>
where
    P: Fn(&T) -> K + 'static,
    K: PartialOrd,
{
    OrderRule::new(projection, Direction::Ascending)
}

/// A descending rule: larger projected keys rank first.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fusor::order::desc;
///
/// let by_length = desc(|word: &&str| word.len());
/// assert_eq!(by_length.compare(&"ab", &"abc"), Ordering::Greater);
/// ```
pub fn desc<T, P, K>(projection: P) -> OrderRule<T>
where
    P: Fn(&T) -> K + 'static,
    K: PartialOrd,
{
    OrderRule::new(projection, Direction::Descending)
}

/// Chains a leading rule and its tie-breakers into a single comparator.
///
/// Rules are consulted left to right; the first non-equal answer decides.
/// If every rule reports equal, the comparator reports equal, leaving any
/// remaining order to the input. Requiring the leading rule as a separate
/// argument makes an empty rule list unrepresentable.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fusor::order::{asc, comparator, desc};
///
/// let compare = comparator(
///     asc(|pair: &(u32, u32)| pair.0),
///     vec![desc(|pair: &(u32, u32)| pair.1)],
/// );
///
/// assert_eq!(compare(&(1, 5), &(2, 9)), Ordering::Less);
/// assert_eq!(compare(&(1, 5), &(1, 9)), Ordering::Greater);
/// assert_eq!(compare(&(1, 5), &(1, 5)), Ordering::Equal);
/// ```
pub fn comparator<T>(
    rule: OrderRule<T>,
    tie_breakers: Vec<OrderRule<T>>,
) -> impl Fn(&T, &T) -> Ordering {
    let mut rules = Vec::with_capacity(1 + tie_breakers.len());
    rules.push(rule);
    rules.extend(tie_breakers);

    move |left: &T, right: &T| {
        for rule in &rules {
            let ordering = rule.compare(left, right);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}
