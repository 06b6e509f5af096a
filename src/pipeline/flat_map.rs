//! Transformation that splices a sub-sequence per element.

use std::marker::PhantomData;

use super::pipe;
use super::stage::Stage;
use super::step::{Batch, Step};

/// The stage behind [`flat_map`] / [`flat_map_with`].
pub struct FlatMap<F, I, J> {
    transform: F,
    _types: PhantomData<fn(I) -> J>,
}

impl<F, I, J> Stage for FlatMap<F, I, J>
where
    F: FnMut(I) -> J,
    J: IntoIterator,
{
    type In = I;
    type Out = J::Item;

    fn step(&mut self, value: I) -> Step<J::Item> {
        let batch: Batch<J::Item> = (self.transform)(value).into_iter().collect();
        if batch.is_empty() {
            Step::Skip
        } else {
            Step::Splice(batch)
        }
    }
}

/// Data-last form of [`flat_map`]: a stage that replaces each element with
/// the sequence `transform` produces for it, spliced in order.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::{flat_map_with, pipe};
///
/// let pairs = pipe(vec![1, 2])
///     .then(flat_map_with(|x: i32| vec![x, -x]))
///     .collect_vec();
/// assert_eq!(pairs, vec![1, -1, 2, -2]);
/// ```
pub fn flat_map_with<F, I, J>(transform: F) -> FlatMap<F, I, J>
where
    F: FnMut(I) -> J,
    J: IntoIterator,
{
    FlatMap {
        transform,
        _types: PhantomData,
    }
}

/// Replaces each element of `data` with the sequence `transform` produces,
/// eagerly, preserving order.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::flat_map;
///
/// assert_eq!(flat_map(vec![1, 3], |x| x..x + 2), vec![1, 2, 3, 4]);
/// ```
pub fn flat_map<D, F, I, J>(data: D, transform: F) -> Vec<J::Item>
where
    D: IntoIterator<Item = I>,
    F: FnMut(I) -> J,
    J: IntoIterator,
{
    pipe(data).then(flat_map_with(transform)).collect_vec()
}
