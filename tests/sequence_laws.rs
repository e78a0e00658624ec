#![cfg(feature = "sequence")]
//! Property-based tests for the sequence combinator laws.
//!
//! - **Length preservation**: `map(f)(s).len() == s.len()`
//! - **Filter identity/annihilation**: `filter(true)(s) == s`,
//!   `filter(false)(s)` is empty
//! - **Reduce on empty**: `reduce(f, initial)([]) == initial`
//! - **Flat is concatenation**: `flat([a, b]) == concat(a, b)`
//! - **The `flat_map` law**: `flat_map(f)(s) == flat(map(f)(s))`, exactly
//!
//! Using proptest, we generate random sequences to verify these laws across
//! a wide range of values.

use proptest::collection::vec;
use proptest::prelude::*;
use refold::sequence::{filter, flat, flat_map, map, reduce};

proptest! {
    /// Length preservation: map never grows or shrinks its input.
    #[test]
    fn prop_map_preserves_length(items in vec(any::<i32>(), 0..64)) {
        let length = items.len();
        let mapped = map(|x: i32| x.wrapping_mul(3))(items);
        prop_assert_eq!(mapped.len(), length);
    }

    /// Mapping the identity function changes nothing.
    #[test]
    fn prop_map_identity(items in vec(any::<i32>(), 0..64)) {
        let mapped = map(|x: i32| x)(items.clone());
        prop_assert_eq!(mapped, items);
    }

    /// An always-true predicate keeps the input intact.
    #[test]
    fn prop_filter_always_true_is_input(items in vec(any::<i32>(), 0..64)) {
        let kept = filter(|_: &i32| true)(items.clone());
        prop_assert_eq!(kept, items);
    }

    /// An always-false predicate keeps nothing.
    #[test]
    fn prop_filter_always_false_is_empty(items in vec(any::<i32>(), 0..64)) {
        let kept = filter(|_: &i32| false)(items);
        prop_assert!(kept.is_empty());
    }

    /// The output of filter is never longer than the input.
    #[test]
    fn prop_filter_never_grows(items in vec(any::<i32>(), 0..64)) {
        let length = items.len();
        let kept = filter(|x: &i32| x % 3 == 0)(items);
        prop_assert!(kept.len() <= length);
    }

    /// Reducing an empty sequence yields the initial accumulator unchanged.
    #[test]
    fn prop_reduce_empty_is_initial(initial in any::<i64>()) {
        let fold = reduce(|accumulator: i64, element: i64| accumulator.wrapping_add(element), initial);
        prop_assert_eq!(fold(vec![]), initial);
    }

    /// Reduce with push-to-vec reconstructs the input, proving order.
    #[test]
    fn prop_reduce_threads_in_order(items in vec(any::<i32>(), 0..64)) {
        let rebuild = reduce(
            |mut accumulator: Vec<i32>, element: i32| {
                accumulator.push(element);
                accumulator
            },
            Vec::new(),
        );
        prop_assert_eq!(rebuild(items.clone()), items);
    }

    /// Flattening two sequences is exactly their concatenation.
    #[test]
    fn prop_flat_is_concatenation(
        first in vec(any::<i32>(), 0..32),
        second in vec(any::<i32>(), 0..32),
    ) {
        let flattened = flat(vec![first.clone(), second.clone()]);
        let concatenated: Vec<i32> = first.into_iter().chain(second).collect();
        prop_assert_eq!(flattened, concatenated);
    }

    /// The definitional law: flat_map(f) == flat . map(f), exactly.
    #[test]
    fn prop_flat_map_law(items in vec(any::<i32>(), 0..32)) {
        let expand = |x: i32| vec![x, x.wrapping_neg()];
        let direct = flat_map(expand)(items.clone());
        let definitional = flat(map(expand)(items));
        prop_assert_eq!(direct, definitional);
    }
}
