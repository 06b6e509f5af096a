//! The error type raised by arity dispatch.

/// The supplied argument list matched neither the fully-applied nor the
/// one-short calling shape.
///
/// This is always a caller bug: dispatch sites should be fixed rather than
/// recovering from this error at runtime. The rendered message is the
/// bare `"Wrong number of arguments"`; the offending counts are kept on the
/// error for diagnostics.
///
/// # Examples
///
/// ```rust
/// use fusor::dispatch::ArityError;
///
/// let error = ArityError::new(2, 5);
/// assert_eq!(format!("{error}"), "Wrong number of arguments");
/// assert_eq!(error.expected, 2);
/// assert_eq!(error.received, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError {
    /// The declared parameter count of the implementation.
    pub expected: usize,
    /// The number of arguments actually supplied.
    pub received: usize,
}

impl ArityError {
    /// Creates an error for an implementation of arity `expected` that was
    /// called with `received` arguments.
    #[must_use]
    pub const fn new(expected: usize, received: usize) -> Self {
        Self { expected, received }
    }
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Wrong number of arguments")
    }
}

impl std::error::Error for ArityError {}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(ArityError: std::error::Error, Send, Sync, Copy);

    #[test]
    fn test_arity_error_display() {
        let error = ArityError::new(3, 1);
        assert_eq!(format!("{error}"), "Wrong number of arguments");
    }

    #[test]
    fn test_arity_error_preserves_counts() {
        let error = ArityError::new(2, 4);
        assert_eq!(error.expected, 2);
        assert_eq!(error.received, 4);
    }

    #[test]
    fn test_arity_error_equality() {
        assert_eq!(ArityError::new(2, 1), ArityError::new(2, 1));
        assert_ne!(ArityError::new(2, 1), ArityError::new(2, 3));
    }
}
