//! Calling-convention dispatch for data-first / data-last invocation.
//!
//! Every public operation in this library can be called two ways:
//!
//! - **data-first**: the data argument is supplied up front and the
//!   operation runs immediately — `map(data, transform)`.
//! - **data-last**: the data argument is omitted and the call produces a
//!   deferred form that runs once the data arrives — `map_with(transform)`
//!   inside a [`pipe`](crate::pipeline::pipe).
//!
//! This module provides the runtime half of that convention: a dispatcher
//! that inspects an argument list against a declared arity and decides
//! whether to invoke eagerly or to return a unary continuation awaiting the
//! final argument. An argument count that matches neither shape is a caller
//! bug and is reported as an [`ArityError`].
//!
//! The compile-time half of the convention is carried by types rather than
//! tags: the data-last form of each pipeline operation is a value
//! implementing [`Stage`](crate::pipeline::Stage), which the pipeline
//! recognizes statically and fuses into a single traversal.
//!
//! # Examples
//!
//! ```rust
//! use fusor::dispatch::{Dispatched, dispatch};
//!
//! let sum = |arguments: Vec<i32>| arguments.iter().sum::<i32>();
//!
//! // Fully applied: invoked immediately.
//! match dispatch(sum, 2, vec![3, 4]).unwrap() {
//!     Dispatched::Invoked(total) => assert_eq!(total, 7),
//!     Dispatched::Awaiting(_) => unreachable!(),
//! }
//!
//! // One argument short: a unary continuation is returned.
//! match dispatch(sum, 2, vec![3]).unwrap() {
//!     Dispatched::Awaiting(continuation) => assert_eq!(continuation(4), 7),
//!     Dispatched::Invoked(_) => unreachable!(),
//! }
//! ```

mod dispatcher;
mod error;

pub use dispatcher::{Dispatched, dispatch};
pub use error::ArityError;
