//! # fusor
//!
//! Fused one-pass sequence pipelines with data-last calling conventions
//! and bounded top-k selection.
//!
//! ## Overview
//!
//! This library brings the "build a chain of declarative transforms, run
//! them in a single physical pass" style of sequence processing to Rust.
//! It includes:
//!
//! - **Calling-convention dispatch**: data-first (eager) and data-last
//!   (deferred) invocation resolved from a runtime argument list
//! - **Lazy stages**: map, filter, flat_map, take, take_while, uniq,
//!   difference, intersection — each usable eagerly or inside a pipe
//! - **Fused pipelines**: [`pipe`](pipeline::pipe) composes stages into one
//!   traversal with early termination and no intermediate arrays
//! - **Order rules**: projection-based comparison rules chained into a
//!   single total-order comparator
//! - **Bounded selection**: the best `n` elements under an order rule in
//!   `O(len * log n)` via a comparator-driven binary heap
//!
//! ## Feature Flags
//!
//! - `dispatch`: runtime arity dispatch (data-first vs data-last)
//! - `pipeline`: lazy stages and the fused pipeline runner
//! - `order`: order rules, comparators, and top-k selection
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fusor::prelude::*;
//!
//! let evens = pipe(vec![1, 2, 3, 4, 5, 6])
//!     .then(filter_with(|x: &i32| x % 2 == 0))
//!     .then(take_with(2))
//!     .collect_vec();
//!
//! assert_eq!(evens, vec![2, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use fusor::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;

    #[cfg(feature = "order")]
    pub use crate::order::*;
}

#[cfg(feature = "dispatch")]
pub mod dispatch;

#[cfg(feature = "pipeline")]
pub mod pipeline;

#[cfg(feature = "order")]
pub mod order;
