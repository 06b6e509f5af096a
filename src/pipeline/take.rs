//! Prefix selection with early termination.

use std::marker::PhantomData;

use super::pipe;
use super::stage::Stage;
use super::step::Step;

/// The stage behind [`take`] / [`take_with`].
///
/// Emitting the n-th element and stopping the source happen in the same
/// step, so no element beyond the one that completes the prefix is ever
/// pulled.
pub struct Take<I> {
    remaining: usize,
    _element: PhantomData<fn(I)>,
}

impl<I> Stage for Take<I> {
    type In = I;
    type Out = I;

    fn step(&mut self, value: I) -> Step<I> {
        if self.remaining == 0 {
            return Step::Halt;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            Step::Last(value)
        } else {
            Step::Emit(value)
        }
    }
}

/// Data-last form of [`take`]: a stage that passes through the first
/// `count` elements, then stops the whole pipeline.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::{pipe, take_with};
///
/// let prefix = pipe(vec![1, 2, 3, 4]).then(take_with(2)).collect_vec();
/// assert_eq!(prefix, vec![1, 2]);
/// ```
pub fn take_with<I>(count: usize) -> Take<I> {
    Take {
        remaining: count,
        _element: PhantomData,
    }
}

/// Returns the first `count` elements of `data`.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::take;
///
/// assert_eq!(take(vec![1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(take(vec![1, 2, 3], 10), vec![1, 2, 3]);
/// assert_eq!(take(vec![1, 2, 3], 0), Vec::<i32>::new());
/// ```
pub fn take<D, I>(data: D, count: usize) -> Vec<I>
where
    D: IntoIterator<Item = I>,
{
    pipe(data).then(take_with(count)).collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_zero_halts_immediately() {
        let mut stage = take_with::<i32>(0);
        assert_eq!(stage.step(1), Step::Halt);
    }

    #[test]
    fn test_take_last_element_is_terminal() {
        let mut stage = take_with::<i32>(2);
        assert_eq!(stage.step(10), Step::Emit(10));
        assert_eq!(stage.step(20), Step::Last(20));
    }

    #[test]
    fn test_take_does_not_consume_beyond_count() {
        let mut visited = 0;
        let taken = pipe((0..100).map(|x| {
            visited += 1;
            x
        }))
        .then(take_with(3))
        .collect_vec();

        assert_eq!(taken, vec![0, 1, 2]);
        assert_eq!(visited, 3);
    }
}
