//! The stage abstraction and stage composition.

use std::marker::PhantomData;

use super::step::{Batch, Step};

/// A single pipeline stage: consumes one value per step, answers with a
/// [`Step`].
///
/// Stages own whatever mutable state they need between steps (a seen-set
/// for dedup, a countdown for `take`), so each public-API invocation gets a
/// fresh, unshared evaluator. A stage is never stepped again after it
/// answers with a terminal [`Step`].
///
/// Implement this trait to plug a custom transform into
/// [`pipe`](super::pipe):
///
/// ```rust
/// use fusor::pipeline::{Stage, Step, pipe};
///
/// /// Emits a running total instead of the input values.
/// struct RunningTotal {
///     total: i32,
/// }
///
/// impl Stage for RunningTotal {
///     type In = i32;
///     type Out = i32;
///
///     fn step(&mut self, value: i32) -> Step<i32> {
///         self.total += value;
///         Step::Emit(self.total)
///     }
/// }
///
/// let totals = pipe(vec![1, 2, 3])
///     .then(RunningTotal { total: 0 })
///     .collect_vec();
/// assert_eq!(totals, vec![1, 3, 6]);
/// ```
pub trait Stage {
    /// The element type this stage consumes.
    type In;
    /// The element type this stage produces.
    type Out;

    /// Processes one input element.
    fn step(&mut self, value: Self::In) -> Step<Self::Out>;
}

/// The zero-stage pipeline: every value passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity<T> {
    _element: PhantomData<fn(T) -> T>,
}

impl<T> Identity<T> {
    pub(crate) const fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<T> Stage for Identity<T> {
    type In = T;
    type Out = T;

    fn step(&mut self, value: T) -> Step<T> {
        Step::Emit(value)
    }
}

/// Two stages fused into one: upstream outputs feed the downstream stage
/// without an intermediate array.
///
/// Spliced batches are threaded element by element; if the downstream
/// stage terminates mid-batch, the values it produced so far are emitted
/// as a final batch and the rest of the splice is dropped.
#[derive(Debug, Clone)]
pub struct Fused<A, B> {
    upstream: A,
    downstream: B,
}

impl<A, B> Fused<A, B>
where
    A: Stage,
    B: Stage<In = A::Out>,
{
    pub(crate) const fn new(upstream: A, downstream: B) -> Self {
        Self {
            upstream,
            downstream,
        }
    }

    fn splice(&mut self, batch: Batch<A::Out>, upstream_done: bool) -> Step<B::Out> {
        let mut produced: Batch<B::Out> = Batch::new();
        let mut done = upstream_done;

        for value in batch {
            match self.downstream.step(value) {
                Step::Skip => {}
                Step::Emit(output) => produced.push(output),
                Step::Splice(outputs) => produced.extend(outputs),
                Step::Last(output) => {
                    produced.push(output);
                    done = true;
                    break;
                }
                Step::LastSplice(outputs) => {
                    produced.extend(outputs);
                    done = true;
                    break;
                }
                Step::Halt => {
                    done = true;
                    break;
                }
            }
        }

        match (produced.is_empty(), done) {
            (true, true) => Step::Halt,
            (true, false) => Step::Skip,
            (false, true) => Step::LastSplice(produced),
            (false, false) => Step::Splice(produced),
        }
    }
}

impl<A, B> Stage for Fused<A, B>
where
    A: Stage,
    B: Stage<In = A::Out>,
{
    type In = A::In;
    type Out = B::Out;

    fn step(&mut self, value: A::In) -> Step<B::Out> {
        match self.upstream.step(value) {
            Step::Skip => Step::Skip,
            Step::Halt => Step::Halt,
            Step::Emit(output) => self.downstream.step(output),
            Step::Last(output) => self.downstream.step(output).into_terminal(),
            Step::Splice(batch) => self.splice(batch, false),
            Step::LastSplice(batch) => self.splice(batch, true),
        }
    }
}
