//! Fused one-pass sequence pipelines.
//!
//! This module provides the machinery for composing declarative transform
//! stages — map, filter, flat_map, take, take_while, uniq, difference,
//! intersection — and driving a source sequence through all of them in a
//! single physical traversal.
//!
//! # Overview
//!
//! Each operation comes in two forms:
//!
//! - A **data-first** function that runs eagerly: `map(data, transform)`.
//! - A **data-last** constructor whose result implements [`Stage`] and can
//!   be fused into a [`pipe`]: `map_with(transform)`.
//!
//! The stage protocol is the [`Step`] sum type: per input element a stage
//! emits nothing, one value, or a spliced batch, and may additionally
//! declare the whole pipeline finished. The runner ([`Pipe`]) pulls one
//! source element at a time, threads it through the fused stage chain, and
//! stops pulling the moment any stage answers with a terminal step.
//!
//! # Why fusion
//!
//! Applying n whole-sequence transforms in a row costs n intermediate
//! allocations and always visits every element. A fused pipe allocates no
//! intermediate sequences and consumes only as much of the source as the
//! terminal stages require:
//!
//! ```rust
//! use fusor::pipeline::{filter_with, pipe, take_with};
//!
//! let mut visited = 0;
//! let first_evens = pipe((1..=6).inspect(|_| visited += 1))
//!     .then(filter_with(|x: &i32| x % 2 == 0))
//!     .then(take_with(2))
//!     .collect_vec();
//!
//! assert_eq!(first_evens, vec![2, 4]);
//! // The pipe stopped at 4; elements 5 and 6 were never pulled.
//! assert_eq!(visited, 4);
//! ```
//!
//! # Laws
//!
//! - **Fusion is transparent**: for any source and stage chain, the fused
//!   result equals the result of applying each eager form in sequence.
//! - **Identity**: a pipe with zero stages returns its input unchanged.
//! - **Order preservation**: surviving elements keep their relative source
//!   order.
//!
//! # Failure behavior
//!
//! Stages call user-supplied closures directly. A panicking closure
//! propagates unmodified; any partially produced output is dropped during
//! unwinding. No closure is ever retried.

mod difference;
mod filter;
mod flat_map;
mod intersection;
mod map;
mod stage;
mod step;
mod take;
mod take_while;
mod uniq;

use std::collections::VecDeque;

pub use difference::{Difference, difference, difference_with};
pub use filter::{Filter, filter, filter_with};
pub use flat_map::{FlatMap, flat_map, flat_map_with};
pub use intersection::{Intersection, intersection, intersection_with};
pub use map::{Map, map, map_with};
pub use stage::{Fused, Identity, Stage};
pub use step::{Batch, Step};
pub use take::{Take, take, take_with};
pub use take_while::{TakeWhile, take_while, take_while_with};
pub use uniq::{Uniq, uniq, uniq_with};

/// A source sequence fused with a chain of stages.
///
/// Built by [`pipe`], extended with [`Pipe::then`], and consumed either
/// through the [`Iterator`] impl or all at once with
/// [`Pipe::collect_vec`]. One source element is pulled per step; a
/// terminal [`Step`] stops all further pulls.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::{map_with, pipe, uniq_with};
///
/// let labels = pipe(vec![1, 2, 1, 3])
///     .then(uniq_with())
///     .then(map_with(|x: i32| format!("#{x}")))
///     .collect_vec();
///
/// assert_eq!(labels, vec!["#1", "#2", "#3"]);
/// ```
pub struct Pipe<I, S>
where
    S: Stage,
{
    source: I,
    stage: S,
    buffer: VecDeque<S::Out>,
    exhausted: bool,
}

/// Starts a pipeline over `source`.
///
/// With no stages attached the pipe is the identity: it yields the source
/// elements unchanged, in order.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::pipe;
///
/// let unchanged = pipe(vec![3, 1, 2]).collect_vec();
/// assert_eq!(unchanged, vec![3, 1, 2]);
/// ```
pub fn pipe<D>(source: D) -> Pipe<D::IntoIter, Identity<D::Item>>
where
    D: IntoIterator,
{
    Pipe {
        source: source.into_iter(),
        stage: Identity::new(),
        buffer: VecDeque::new(),
        exhausted: false,
    }
}

impl<I, S> Pipe<I, S>
where
    I: Iterator<Item = S::In>,
    S: Stage,
{
    /// Fuses one more stage onto the chain.
    ///
    /// Output already buffered from spliced batches is threaded through the
    /// new stage first, so attaching stages mid-iteration loses nothing.
    pub fn then<S2>(self, mut next: S2) -> Pipe<I, Fused<S, S2>>
    where
        S2: Stage<In = S::Out>,
    {
        let mut buffer = VecDeque::new();
        let mut exhausted = self.exhausted;

        for value in self.buffer {
            let step = next.step(value);
            let terminal = step.is_terminal();
            match step {
                Step::Skip | Step::Halt => {}
                Step::Emit(output) | Step::Last(output) => buffer.push_back(output),
                Step::Splice(outputs) | Step::LastSplice(outputs) => buffer.extend(outputs),
            }
            if terminal {
                exhausted = true;
                break;
            }
        }

        Pipe {
            source: self.source,
            stage: Fused::new(self.stage, next),
            buffer,
            exhausted,
        }
    }

    /// Materializes the pipe so far and applies an opaque whole-sequence
    /// transform, continuing the pipeline with its output.
    ///
    /// This is the escape hatch for operations without a lazy stage form;
    /// they still compose, they just cannot fuse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fusor::pipeline::{map_with, pipe};
    ///
    /// let result = pipe(vec![3, 1, 2])
    ///     .apply(|mut values| {
    ///         values.sort_unstable();
    ///         values
    ///     })
    ///     .then(map_with(|x: i32| x * 10))
    ///     .collect_vec();
    ///
    /// assert_eq!(result, vec![10, 20, 30]);
    /// ```
    pub fn apply<F, U>(self, operation: F) -> Pipe<std::vec::IntoIter<U>, Identity<U>>
    where
        F: FnOnce(Vec<S::Out>) -> Vec<U>,
    {
        pipe(operation(self.collect_vec()))
    }

    /// Runs the pipeline to completion, collecting the surviving elements
    /// in source order.
    #[must_use]
    pub fn collect_vec(self) -> Vec<S::Out> {
        self.collect()
    }
}

impl<I, S> Iterator for Pipe<I, S>
where
    I: Iterator<Item = S::In>,
    S: Stage,
{
    type Item = S::Out;

    fn next(&mut self) -> Option<S::Out> {
        if let Some(buffered) = self.buffer.pop_front() {
            return Some(buffered);
        }
        if self.exhausted {
            return None;
        }

        while let Some(value) = self.source.next() {
            match self.stage.step(value) {
                Step::Skip => {}
                Step::Emit(output) => return Some(output),
                Step::Splice(outputs) => {
                    if outputs.is_empty() {
                        continue;
                    }
                    self.buffer.extend(outputs);
                    return self.buffer.pop_front();
                }
                Step::Last(output) => {
                    self.exhausted = true;
                    return Some(output);
                }
                Step::LastSplice(outputs) => {
                    self.exhausted = true;
                    self.buffer.extend(outputs);
                    return self.buffer.pop_front();
                }
                Step::Halt => {
                    self.exhausted = true;
                    return None;
                }
            }
        }

        self.exhausted = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_stage_pipe_is_identity() {
        let input = vec![5, 3, 5, 1];
        assert_eq!(pipe(input.clone()).collect_vec(), input);
    }

    #[test]
    fn test_pipe_is_an_iterator() {
        let mut doubled = pipe(vec![1, 2, 3]).then(map_with(|x: i32| x * 2));
        assert_eq!(doubled.next(), Some(2));
        assert_eq!(doubled.next(), Some(4));
        assert_eq!(doubled.next(), Some(6));
        assert_eq!(doubled.next(), None);
    }

    #[test]
    fn test_pipe_stops_pulling_after_terminal_step() {
        let mut pulled = Vec::new();
        let result = pipe((0..10).inspect(|x| pulled.push(*x)))
            .then(take_with(2))
            .collect_vec();

        assert_eq!(result, vec![0, 1]);
        assert_eq!(pulled, vec![0, 1]);
    }

    #[test]
    fn test_splice_batches_drain_before_next_pull() {
        let pulled = std::cell::Cell::new(0);
        let mut expanded = pipe((1..=3).inspect(|_| pulled.set(pulled.get() + 1)))
            .then(flat_map_with(|x: i32| vec![x; 2]));

        assert_eq!(expanded.next(), Some(1));
        assert_eq!(pulled.get(), 1);
        assert_eq!(expanded.next(), Some(1));
        assert_eq!(pulled.get(), 1);
        assert_eq!(expanded.next(), Some(2));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_then_mid_iteration_threads_buffered_output() {
        let mut expanded = pipe(vec![1, 2]).then(flat_map_with(|x: i32| vec![x * 10, x * 10 + 1]));
        assert_eq!(expanded.next(), Some(10));

        // 11 is buffered from the splice; the new stage must still see it.
        let rest = expanded.then(map_with(|x: i32| x + 1)).collect_vec();
        assert_eq!(rest, vec![12, 21, 22]);
    }

    #[test]
    fn test_apply_materializes_and_continues() {
        let result = pipe(vec![4, 1, 3, 2])
            .then(filter_with(|x: &i32| *x != 3))
            .apply(|mut values| {
                values.sort_unstable();
                values
            })
            .then(take_with(2))
            .collect_vec();

        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_difference_then_take_short_circuits() {
        let mut pulled = Vec::new();
        let result = pipe((1..=6).inspect(|x| pulled.push(*x)))
            .then(difference_with(vec![2, 3]))
            .then(take_with(2))
            .collect_vec();

        assert_eq!(result, vec![1, 4]);
        assert_eq!(pulled, vec![1, 2, 3, 4]);
    }
}
