//! The runtime arity dispatcher.

use super::error::ArityError;

/// The outcome of dispatching an argument list against an implementation.
///
/// Produced by [`dispatch`]. `Invoked` carries the result of an eager,
/// fully-applied (data-first) call; `Awaiting` carries the unary
/// continuation of a one-argument-short (data-last) call.
pub enum Dispatched<T, R> {
    /// Every argument was present; the implementation already ran.
    Invoked(R),
    /// One argument short; the boxed continuation appends the final
    /// argument and runs the implementation.
    Awaiting(Box<dyn FnOnce(T) -> R>),
}

impl<T, R> Dispatched<T, R> {
    /// Returns the eager result, if the call was fully applied.
    pub fn invoked(self) -> Option<R> {
        match self {
            Self::Invoked(result) => Some(result),
            Self::Awaiting(_) => None,
        }
    }

    /// Returns the pending continuation, if the call was one short.
    pub fn awaiting(self) -> Option<Box<dyn FnOnce(T) -> R>> {
        match self {
            Self::Invoked(_) => None,
            Self::Awaiting(continuation) => Some(continuation),
        }
    }
}

impl<T, R> std::fmt::Debug for Dispatched<T, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invoked(_) => formatter.write_str("Dispatched::Invoked(..)"),
            Self::Awaiting(_) => formatter.write_str("Dispatched::Awaiting(..)"),
        }
    }
}

/// Dispatches `arguments` against an implementation of declared `arity`.
///
/// - Exactly `arity` arguments: the implementation is invoked immediately
///   and the result is returned as [`Dispatched::Invoked`] (data-first).
/// - Exactly `arity - 1` arguments: a unary continuation is returned as
///   [`Dispatched::Awaiting`]; given the final argument `x`, it behaves as
///   if the original call had been `implementation([arguments.., x])`
///   (data-last).
/// - Any other count: [`ArityError`].
///
/// The implementation receives its arguments as a single `Vec`, which is
/// what makes the argument count a runtime property rather than a
/// signature-level one.
///
/// # Errors
///
/// Returns [`ArityError`] when `arguments.len()` is neither `arity` nor
/// `arity - 1`. This is a caller bug; fix the call site.
///
/// # Examples
///
/// ## Data-first invocation
///
/// ```rust
/// use fusor::dispatch::{Dispatched, dispatch};
///
/// let join = |parts: Vec<String>| parts.join("-");
///
/// let dispatched = dispatch(join, 2, vec!["a".to_string(), "b".to_string()]).unwrap();
/// assert_eq!(dispatched.invoked(), Some("a-b".to_string()));
/// ```
///
/// ## Data-last invocation
///
/// ```rust
/// use fusor::dispatch::dispatch;
///
/// let join = |parts: Vec<String>| parts.join("-");
///
/// let pending = dispatch(join, 2, vec!["a".to_string()])
///     .unwrap()
///     .awaiting()
///     .unwrap();
/// assert_eq!(pending("b".to_string()), "a-b");
/// ```
///
/// ## Arity mismatch
///
/// ```rust
/// use fusor::dispatch::{ArityError, dispatch};
///
/// let sum = |values: Vec<i32>| values.iter().sum::<i32>();
///
/// let error = dispatch(sum, 2, vec![1, 2, 3]).unwrap_err();
/// assert_eq!(error, ArityError::new(2, 3));
/// ```
pub fn dispatch<T, R, F>(
    implementation: F,
    arity: usize,
    mut arguments: Vec<T>,
) -> Result<Dispatched<T, R>, ArityError>
where
    T: 'static,
    R: 'static,
    F: FnOnce(Vec<T>) -> R + 'static,
{
    if arguments.len() == arity {
        return Ok(Dispatched::Invoked(implementation(arguments)));
    }

    if arguments.len() + 1 == arity {
        return Ok(Dispatched::Awaiting(Box::new(move |last| {
            arguments.push(last);
            implementation(arguments)
        })));
    }

    Err(ArityError::new(arity, arguments.len()))
}
