//! Multiset difference.

use std::collections::HashMap;
use std::hash::Hash;

use super::pipe;
use super::stage::Stage;
use super::step::Step;

/// The stage behind [`difference`] / [`difference_with`].
///
/// Treats `other` as a multiset: each occurrence there cancels exactly one
/// occurrence of the same value in the data.
pub struct Difference<I> {
    pending: HashMap<I, usize>,
}

impl<I> Stage for Difference<I>
where
    I: Eq + Hash,
{
    type In = I;
    type Out = I;

    fn step(&mut self, value: I) -> Step<I> {
        if let Some(count) = self.pending.get_mut(&value) {
            if *count > 0 {
                *count -= 1;
                return Step::Skip;
            }
        }
        Step::Emit(value)
    }
}

/// Data-last form of [`difference`]: a stage that removes from the stream
/// one occurrence per occurrence in `other`.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::{difference_with, pipe};
///
/// let remaining = pipe(vec![1, 2, 2, 3])
///     .then(difference_with(vec![2]))
///     .collect_vec();
/// assert_eq!(remaining, vec![1, 2, 3]);
/// ```
pub fn difference_with<D, I>(other: D) -> Difference<I>
where
    D: IntoIterator<Item = I>,
    I: Eq + Hash,
{
    let mut pending = HashMap::new();
    for value in other {
        *pending.entry(value).or_insert(0) += 1;
    }
    Difference { pending }
}

/// Returns `data` minus `other`, multiset-style: each occurrence of a value
/// in `other` cancels one occurrence in `data`. Order and the remaining
/// multiplicities of `data` are preserved.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::difference;
///
/// assert_eq!(difference(vec![1, 2, 3, 4], vec![2, 3]), vec![1, 4]);
/// assert_eq!(difference(vec![1, 1, 2], vec![1]), vec![1, 2]);
/// ```
pub fn difference<D, E, I>(data: D, other: E) -> Vec<I>
where
    D: IntoIterator<Item = I>,
    E: IntoIterator<Item = I>,
    I: Eq + Hash,
{
    pipe(data).then(difference_with(other)).collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_basic() {
        assert_eq!(
            difference(vec![1, 2, 3, 4, 5, 6], vec![2, 3]),
            vec![1, 4, 5, 6]
        );
    }

    #[test]
    fn test_difference_multiset_cancels_one_per_occurrence() {
        assert_eq!(difference(vec![1, 1, 1, 2], vec![1, 1]), vec![1, 2]);
    }

    #[test]
    fn test_difference_other_values_absent_from_data() {
        assert_eq!(difference(vec![1, 2], vec![9, 9]), vec![1, 2]);
    }

    #[test]
    fn test_difference_empty_other_is_identity() {
        assert_eq!(difference(vec![3, 1, 2], Vec::<i32>::new()), vec![3, 1, 2]);
    }
}
