//! Duplicate removal, first occurrence wins.

use std::collections::HashSet;
use std::hash::Hash;

use super::pipe;
use super::stage::Stage;
use super::step::Step;

/// The stage behind [`uniq`] / [`uniq_with`].
///
/// Owns the seen-set for one pipeline run; constructed fresh per
/// invocation, never shared.
pub struct Uniq<I> {
    seen: HashSet<I>,
}

impl<I> Stage for Uniq<I>
where
    I: Eq + Hash + Clone,
{
    type In = I;
    type Out = I;

    fn step(&mut self, value: I) -> Step<I> {
        if self.seen.insert(value.clone()) {
            Step::Emit(value)
        } else {
            Step::Skip
        }
    }
}

/// Data-last form of [`uniq`]: a stage that drops every element already
/// emitted earlier in the run.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::{pipe, uniq_with};
///
/// let distinct = pipe(vec![1, 2, 1, 3, 2]).then(uniq_with()).collect_vec();
/// assert_eq!(distinct, vec![1, 2, 3]);
/// ```
pub fn uniq_with<I>() -> Uniq<I>
where
    I: Eq + Hash + Clone,
{
    Uniq {
        seen: HashSet::new(),
    }
}

/// Removes duplicate elements from `data`, keeping the first occurrence of
/// each value in its original position.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::uniq;
///
/// assert_eq!(uniq(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn uniq<D, I>(data: D) -> Vec<I>
where
    D: IntoIterator<Item = I>,
    I: Eq + Hash + Clone,
{
    pipe(data).then(uniq_with()).collect_vec()
}
