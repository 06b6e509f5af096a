//! One-in/one-out transformation.

use std::marker::PhantomData;

use super::pipe;
use super::stage::Stage;
use super::step::Step;

/// The stage behind [`map`] / [`map_with`].
pub struct Map<F, I, O> {
    transform: F,
    _types: PhantomData<fn(I) -> O>,
}

impl<F, I, O> Stage for Map<F, I, O>
where
    F: FnMut(I) -> O,
{
    type In = I;
    type Out = O;

    fn step(&mut self, value: I) -> Step<O> {
        Step::Emit((self.transform)(value))
    }
}

/// Data-last form of [`map`]: a stage that applies `transform` to every
/// element flowing through a [`pipe`].
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::{map_with, pipe};
///
/// let doubled = pipe(vec![1, 2, 3])
///     .then(map_with(|x: i32| x * 2))
///     .collect_vec();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map_with<F, I, O>(transform: F) -> Map<F, I, O>
where
    F: FnMut(I) -> O,
{
    Map {
        transform,
        _types: PhantomData,
    }
}

/// Applies `transform` to every element of `data`, eagerly.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::map;
///
/// assert_eq!(map(vec![1, 2, 3], |x| x + 10), vec![11, 12, 13]);
/// ```
pub fn map<D, F, I, O>(data: D, transform: F) -> Vec<O>
where
    D: IntoIterator<Item = I>,
    F: FnMut(I) -> O,
{
    pipe(data).then(map_with(transform)).collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_eager() {
        assert_eq!(map(vec![1, 2, 3], |x| x * x), vec![1, 4, 9]);
    }

    #[test]
    fn test_map_empty() {
        assert_eq!(map(Vec::<i32>::new(), |x| x + 1), Vec::<i32>::new());
    }

    #[test]
    fn test_map_changes_type() {
        assert_eq!(
            map(vec![1, 22, 333], |x: i32| x.to_string().len()),
            vec![1, 2, 3]
        );
    }
}
