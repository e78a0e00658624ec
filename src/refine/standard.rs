//! Stock refinements for common boundary-checked values.

use std::marker::PhantomData;

use static_assertions::assert_eq_size;

use super::refinement::{Refined, Refinement};
use crate::refinement;

refinement!(
    /// An `i64` other than zero.
    ///
    /// The canonical guard for divisors and scaling factors.
    pub NonZeroInt for i64, |candidate: &i64| *candidate != 0
);

refinement!(
    /// A `String` with at least one character.
    pub NonEmptyText for String, |candidate: &String| !candidate.is_empty()
);

/// A `Vec<T>` with at least one element.
///
/// Generic refinements cannot be declared through the
/// [`refinement!`](crate::refinement) macro, so the tag and impl are written
/// out. `Refined<NonEmpty<T>>` is the type to require when a first element
/// must exist: the check happens once, at the boundary, instead of at every
/// access.
///
/// # Examples
///
/// ```rust
/// use refold::refine::{refine, NonEmpty, Refined};
///
/// fn head<T: Clone>(items: &Refined<NonEmpty<T>>) -> T {
///     items[0].clone()
/// }
///
/// let items = refine::<NonEmpty<i32>>(vec![10, 20]).expect("not empty");
/// assert_eq!(head(&items), 10);
/// assert!(refine::<NonEmpty<i32>>(vec![]).is_none());
/// ```
pub struct NonEmpty<T> {
    _never: PhantomData<T>,
}

impl<T> Refinement for NonEmpty<T> {
    type Base = Vec<T>;

    fn holds(candidate: &Self::Base) -> bool {
        !candidate.is_empty()
    }
}

// The refined wrappers are representation-free: holding one costs exactly
// the base value.
assert_eq_size!(Refined<NonZeroInt>, i64);
assert_eq_size!(Refined<NonEmptyText>, String);
assert_eq_size!(Refined<NonEmpty<u8>>, Vec<u8>);
