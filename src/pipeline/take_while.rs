//! Prefix selection governed by a predicate.

use std::marker::PhantomData;

use super::pipe;
use super::stage::Stage;
use super::step::Step;

/// The stage behind [`take_while`] / [`take_while_with`].
pub struct TakeWhile<F, I> {
    predicate: F,
    _element: PhantomData<fn(I)>,
}

impl<F, I> Stage for TakeWhile<F, I>
where
    F: FnMut(&I) -> bool,
{
    type In = I;
    type Out = I;

    fn step(&mut self, value: I) -> Step<I> {
        if (self.predicate)(&value) {
            Step::Emit(value)
        } else {
            Step::Halt
        }
    }
}

/// Data-last form of [`take_while`]: a stage that passes elements through
/// until `predicate` first fails, then stops the whole pipeline. The
/// failing element is discarded.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::{pipe, take_while_with};
///
/// let ascending = pipe(vec![1, 2, 3, 1, 5])
///     .then(take_while_with(|x: &i32| *x < 3))
///     .collect_vec();
/// assert_eq!(ascending, vec![1, 2]);
/// ```
pub fn take_while_with<F, I>(predicate: F) -> TakeWhile<F, I>
where
    F: FnMut(&I) -> bool,
{
    TakeWhile {
        predicate,
        _element: PhantomData,
    }
}

/// Returns the longest prefix of `data` whose elements all match
/// `predicate`.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::take_while;
///
/// assert_eq!(take_while(vec![2, 4, 5, 6], |x| x % 2 == 0), vec![2, 4]);
/// ```
pub fn take_while<D, F, I>(data: D, predicate: F) -> Vec<I>
where
    D: IntoIterator<Item = I>,
    F: FnMut(&I) -> bool,
{
    pipe(data).then(take_while_with(predicate)).collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_while_stops_at_first_failure() {
        assert_eq!(take_while(vec![1, 2, 9, 3], |x| *x < 5), vec![1, 2]);
    }

    #[test]
    fn test_take_while_whole_input() {
        assert_eq!(take_while(vec![1, 2, 3], |_| true), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_while_does_not_consume_beyond_failure() {
        let mut visited = Vec::new();
        let taken = pipe((0..10).inspect(|x| visited.push(*x)))
            .then(take_while_with(|x: &i32| *x < 2))
            .collect_vec();

        assert_eq!(taken, vec![0, 1]);
        assert_eq!(visited, vec![0, 1, 2]);
    }
}
