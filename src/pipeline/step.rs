//! The per-element result protocol spoken by pipeline stages.

use smallvec::SmallVec;

/// A batch of values spliced into the stream by a single stage step.
///
/// Spliced sub-sequences are usually short, so they are kept inline up to
/// four elements before spilling to the heap.
pub type Batch<T> = SmallVec<[T; 4]>;

/// What a stage produced for one input element.
///
/// A stage consumes exactly one value per step and answers with one of six
/// outcomes. The first three keep the pipeline running; the last three are
/// terminal and stop the source from being pulled any further.
///
/// # Invariants
///
/// - An empty [`Splice`](Step::Splice) batch is observationally the same as
///   [`Skip`](Step::Skip).
/// - Batch contents are emitted in order, before any later source element
///   is consumed.
/// - After a terminal step ([`Last`](Step::Last),
///   [`LastSplice`](Step::LastSplice), [`Halt`](Step::Halt)) the stage is
///   never stepped again.
///
/// # Examples
///
/// ```rust
/// use fusor::pipeline::Step;
///
/// let step: Step<i32> = Step::Emit(7);
/// assert!(!step.is_terminal());
///
/// let step: Step<i32> = Step::Halt;
/// assert!(step.is_terminal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The stage produced no output for this input.
    Skip,
    /// The stage produced a single value.
    Emit(T),
    /// The stage produced a sub-sequence to splice into the stream.
    Splice(Batch<T>),
    /// The stage produced its final value; stop pulling the source.
    Last(T),
    /// The stage produced a final sub-sequence; stop pulling the source.
    LastSplice(Batch<T>),
    /// The pipeline is exhausted; the current input is discarded.
    Halt,
}

impl<T> Step<T> {
    /// Whether this step stops the pipeline from consuming further input.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Last(_) | Self::LastSplice(_) | Self::Halt)
    }

    /// Converts a non-terminal step into its terminal counterpart.
    ///
    /// Used when an upstream stage signals completion: whatever the
    /// downstream stage produced for the final value becomes final itself.
    #[must_use]
    pub fn into_terminal(self) -> Self {
        match self {
            Self::Skip => Self::Halt,
            Self::Emit(value) => Self::Last(value),
            Self::Splice(batch) => Self::LastSplice(batch),
            terminal => terminal,
        }
    }
}
