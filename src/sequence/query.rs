//! Query combinators: every, some, find.
//!
//! Unlike the transformation combinators, these read the sequence through a
//! shared slice and produce a final answer, short-circuiting as soon as the
//! answer is known.

/// Returns `true` when every element satisfies the predicate.
///
/// Short-circuits on the first falsifying element. An empty sequence is
/// vacuously `true`.
///
/// # Examples
///
/// ```rust
/// use refold::sequence::every;
///
/// assert!(every(|x: &i32| *x > 0, &[1, 2, 3]));
/// assert!(!every(|x: &i32| *x > 0, &[1, -2, 3]));
/// assert!(every(|_: &i32| false, &[]));
/// ```
pub fn every<A, P>(predicate: P, items: &[A]) -> bool
where
    P: Fn(&A) -> bool,
{
    items.iter().all(|item| predicate(item))
}

/// Returns `true` when at least one element satisfies the predicate.
///
/// Short-circuits on the first satisfying element. An empty sequence is
/// `false`.
///
/// # Examples
///
/// ```rust
/// use refold::sequence::some;
///
/// assert!(some(|x: &i32| *x < 0, &[1, -2, 3]));
/// assert!(!some(|x: &i32| *x < 0, &[1, 2, 3]));
/// assert!(!some(|_: &i32| true, &[]));
/// ```
pub fn some<A, P>(predicate: P, items: &[A]) -> bool
where
    P: Fn(&A) -> bool,
{
    items.iter().any(|item| predicate(item))
}

/// Returns the first element satisfying the predicate, or `None`.
///
/// The scan is bounded by the sequence length: when no element matches, the
/// result is an explicit `None` rather than an out-of-bounds read or an
/// unterminated loop.
///
/// # Examples
///
/// ```rust
/// use refold::sequence::find;
///
/// assert_eq!(find(|x: &i32| *x > 2, &[1, 2, 3, 4]), Some(&3));
/// assert_eq!(find(|x: &i32| *x > 9, &[1, 2, 3, 4]), None);
/// assert_eq!(find(|_: &i32| true, &[]), None);
/// ```
pub fn find<A, P>(predicate: P, items: &[A]) -> Option<&A>
where
    P: Fn(&A) -> bool,
{
    items.iter().find(|&item| predicate(item))
}
