//! Predicate-based element selection.

use std::marker::PhantomData;

use super::pipe;
use super::stage::Stage;
use super::step::Step;

/// The stage behind [`filter`] / [`filter_with`].
pub struct Filter<F, I> {
    predicate: F,
    _element: PhantomData<fn(I)>,
}

impl<F, I> Stage for Filter<F, I>
where
    F: FnMut(&I) -> bool,
{
    type In = I;
    type Out = I;

    fn step(&mut self, value: I) -> Step<I> {
        if (self.predicate)(&value) {
            Step::Emit(value)
        } else {
            Step::Skip
        }
    }
}

/// Data-last form of [`filter`]: a stage that keeps the elements matching
/// `predicate`.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::{filter_with, pipe};
///
/// let odds = pipe(vec![1, 2, 3, 4, 5])
///     .then(filter_with(|x: &i32| x % 2 == 1))
///     .collect_vec();
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn filter_with<F, I>(predicate: F) -> Filter<F, I>
where
    F: FnMut(&I) -> bool,
{
    Filter {
        predicate,
        _element: PhantomData,
    }
}

/// Keeps the elements of `data` matching `predicate`, eagerly.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::filter;
///
/// assert_eq!(filter(vec![1, 2, 3, 4], |x| x % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<D, F, I>(data: D, predicate: F) -> Vec<I>
where
    D: IntoIterator<Item = I>,
    F: FnMut(&I) -> bool,
{
    pipe(data).then(filter_with(predicate)).collect_vec()
}
