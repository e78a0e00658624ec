//! Narrowing whole sequences through a smart constructor.

use super::refinement::{Refined, Refinement};

/// Filters a sequence down to the elements passing a refinement, refined.
///
/// Elements rejected by the predicate are dropped; survivors come back as
/// [`Refined`] values, in their original relative order.
///
/// # Examples
///
/// ```rust
/// use refold::refine::{narrow, NonZeroInt, Refined};
///
/// let checked: Vec<Refined<NonZeroInt>> = narrow(vec![0, 1, 0, 2]);
/// let values: Vec<i64> = checked.into_iter().map(Refined::into_inner).collect();
/// assert_eq!(values, vec![1, 2]);
/// ```
pub fn narrow<P: Refinement>(candidates: Vec<P::Base>) -> Vec<Refined<P>> {
    candidates.into_iter().filter_map(Refined::new).collect()
}

/// Curried narrowing through an arbitrary smart constructor.
///
/// Generalises [`narrow`] to any constructor of shape `Fn(A) -> Option<B>`,
/// so hand-written smart constructors that are not expressed as a
/// [`Refinement`] participate too.
///
/// # Examples
///
/// ```rust
/// use refold::refine::narrow_with;
///
/// let parse_digit = |text: &str| text.parse::<u8>().ok().filter(|n| *n < 10);
/// let digits = narrow_with(parse_digit)(vec!["3", "x", "7", "42"]);
/// assert_eq!(digits, vec![3, 7]);
/// ```
pub fn narrow_with<A, B, F>(constructor: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> Option<B>,
{
    move |candidates: Vec<A>| candidates.into_iter().filter_map(&constructor).collect()
}
