//! Case entries: a plain result or a deferred computation.

use std::fmt;

/// One entry of a pattern-matching table.
///
/// A case either holds its result directly, or defers producing it behind a
/// zero-argument computation that runs only if the case is selected. The
/// deferred form is the right choice when producing the result is expensive
/// or when eagerly evaluating every branch would be wrong.
///
/// Construct cases with [`value`] and [`thunk`].
pub enum Case<R> {
    /// A result held directly.
    Value(R),
    /// A result produced on demand, at most once.
    Thunk(Box<dyn FnOnce() -> R>),
}

impl<R> Case<R> {
    /// Resolves the case to its result, running the deferred computation if
    /// there is one.
    pub fn evaluate(self) -> R {
        match self {
            Self::Value(result) => result,
            Self::Thunk(deferred) => deferred(),
        }
    }

    /// Returns `true` when the result is deferred.
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Thunk(_))
    }
}

impl<R: fmt::Debug> fmt::Debug for Case<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(result) => formatter.debug_tuple("Value").field(result).finish(),
            Self::Thunk(_) => formatter.write_str("Thunk(..)"),
        }
    }
}

/// Wraps an already-computed result as a [`Case`].
///
/// # Examples
///
/// ```rust
/// use refold::matching::value;
///
/// assert_eq!(value(42).evaluate(), 42);
/// ```
pub fn value<R>(result: R) -> Case<R> {
    Case::Value(result)
}

/// Wraps a deferred computation as a [`Case`].
///
/// The computation runs only when the case is selected, and at most once.
///
/// # Examples
///
/// ```rust
/// use refold::matching::thunk;
///
/// let case = thunk(|| "expensive".to_string());
/// assert!(case.is_deferred());
/// assert_eq!(case.evaluate(), "expensive");
/// ```
pub fn thunk<R, F>(deferred: F) -> Case<R>
where
    F: FnOnce() -> R + 'static,
{
    Case::Thunk(Box::new(deferred))
}
