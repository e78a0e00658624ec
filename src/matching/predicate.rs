//! Ordered predicate matching without an exhaustiveness guarantee.

use super::case::Case;

/// The guard of one [`first_match`] arm.
///
/// A condition is either a literal boolean, decided before matching starts,
/// or a predicate evaluated against the subject. Literal booleans convert
/// with `From`, predicates are wrapped with [`when`].
pub enum Condition<K> {
    /// A literal boolean guard.
    Always(bool),
    /// A predicate evaluated against the subject.
    Test(Box<dyn Fn(&K) -> bool>),
}

impl<K> Condition<K> {
    fn is_satisfied_by(&self, subject: &K) -> bool {
        match self {
            Self::Always(flag) => *flag,
            Self::Test(predicate) => predicate(subject),
        }
    }
}

impl<K> From<bool> for Condition<K> {
    fn from(flag: bool) -> Self {
        Self::Always(flag)
    }
}

/// Wraps a predicate as a [`Condition`].
///
/// # Examples
///
/// ```rust
/// use refold::matching::{value, when, first_match};
///
/// let outcome = first_match(&7, vec![
///     (when(|n: &i32| n % 2 == 0), value("even")),
///     (when(|n: &i32| n % 2 == 1), value("odd")),
/// ]);
/// assert_eq!(outcome, Some("odd"));
/// ```
pub fn when<K, P>(predicate: P) -> Condition<K>
where
    P: Fn(&K) -> bool + 'static,
{
    Condition::Test(Box::new(predicate))
}

/// Evaluates ordered `(condition, case)` arms against a subject.
///
/// Returns the result of the first arm whose condition is satisfied, forcing
/// its deferred computation if present; later arms are never evaluated. When
/// no condition is satisfied the result is an explicit `None`: unlike
/// [`CaseTable`](super::CaseTable), this form promises nothing about
/// coverage.
///
/// # Examples
///
/// ```rust
/// use refold::matching::{thunk, value, when, first_match};
///
/// let age = 15;
/// let bracket = first_match(&age, vec![
///     (when(|age: &i32| *age < 20), value("young")),
///     (true.into(), thunk(|| "grown")),
/// ]);
/// assert_eq!(bracket, Some("young"));
///
/// // No arm fires: explicit absence.
/// let nothing: Option<&str> = first_match(&age, vec![
///     (false.into(), value("unreachable")),
/// ]);
/// assert_eq!(nothing, None);
/// ```
pub fn first_match<K, R>(subject: &K, arms: Vec<(Condition<K>, Case<R>)>) -> Option<R> {
    arms.into_iter()
        .find(|(condition, _)| condition.is_satisfied_by(subject))
        .map(|(_, case)| case.evaluate())
}
