//! Multiset intersection.

use std::collections::HashMap;
use std::hash::Hash;

use super::pipe;
use super::stage::Stage;
use super::step::Step;

/// The stage behind [`intersection`] / [`intersection_with`].
///
/// Treats `other` as a multiset: a data element passes through only while
/// occurrences of its value remain available in `other`.
pub struct Intersection<I> {
    available: HashMap<I, usize>,
}

impl<I> Stage for Intersection<I>
where
    I: Eq + Hash,
{
    type In = I;
    type Out = I;

    fn step(&mut self, value: I) -> Step<I> {
        if let Some(count) = self.available.get_mut(&value) {
            if *count > 0 {
                *count -= 1;
                return Step::Emit(value);
            }
        }
        Step::Skip
    }
}

/// Data-last form of [`intersection`]: a stage that keeps only elements
/// with a matching, not-yet-consumed occurrence in `other`.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::{intersection_with, pipe};
///
/// let shared = pipe(vec![1, 2, 2, 3])
///     .then(intersection_with(vec![2, 3, 4]))
///     .collect_vec();
/// assert_eq!(shared, vec![2, 3]);
/// ```
pub fn intersection_with<D, I>(other: D) -> Intersection<I>
where
    D: IntoIterator<Item = I>,
    I: Eq + Hash,
{
    let mut available = HashMap::new();
    for value in other {
        *available.entry(value).or_insert(0) += 1;
    }
    Intersection { available }
}

/// Returns the multiset intersection of `data` and `other`, in `data`
/// order: a value appears as many times as it occurs in both.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::intersection;
///
/// assert_eq!(intersection(vec![1, 2, 3], vec![2, 3, 4]), vec![2, 3]);
/// assert_eq!(intersection(vec![1, 1, 2], vec![1]), vec![1]);
/// ```
pub fn intersection<D, E, I>(data: D, other: E) -> Vec<I>
where
    D: IntoIterator<Item = I>,
    E: IntoIterator<Item = I>,
    I: Eq + Hash,
{
    pipe(data).then(intersection_with(other)).collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_basic() {
        assert_eq!(intersection(vec![5, 1, 2, 3], vec![3, 5, 9]), vec![5, 3]);
    }

    #[test]
    fn test_intersection_multiset_multiplicity() {
        assert_eq!(intersection(vec![1, 1, 1], vec![1, 1]), vec![1, 1]);
    }

    #[test]
    fn test_intersection_disjoint() {
        assert_eq!(intersection(vec![1, 2], vec![3, 4]), Vec::<i32>::new());
    }
}
