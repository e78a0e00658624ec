#![cfg(feature = "sequence")]
//! Unit tests for the sequence combinators.

use refold::sequence::{every, filter, find, flat, flat_map, map, reduce, some};
use rstest::rstest;

// =============================================================================
// map
// =============================================================================

#[rstest]
fn map_transforms_every_element() {
    let squared = map(|x: i32| x * x)(vec![1, 2, 3]);
    assert_eq!(squared, vec![1, 4, 9]);
}

#[rstest]
fn map_over_empty_is_empty() {
    let mapped: Vec<String> = map(|x: i32| x.to_string())(vec![]);
    assert!(mapped.is_empty());
}

#[rstest]
fn map_changes_element_type() {
    let lengths = map(|word: &str| word.len())(vec!["uno", "dos", "tres"]);
    assert_eq!(lengths, vec![3, 3, 4]);
}

#[rstest]
fn map_closure_is_reusable() {
    let double = map(|x: i32| x * 2);
    assert_eq!(double(vec![1]), vec![2]);
    assert_eq!(double(vec![2, 3]), vec![4, 6]);
}

// =============================================================================
// filter
// =============================================================================

#[rstest]
fn filter_keeps_satisfying_elements_in_order() {
    let adults = filter(|age: &u32| *age >= 18)(vec![3, 27, 38, 11, 29]);
    assert_eq!(adults, vec![27, 38, 29]);
}

#[rstest]
fn filter_always_true_is_input() {
    let unchanged = filter(|_: &i32| true)(vec![1, 2, 3]);
    assert_eq!(unchanged, vec![1, 2, 3]);
}

#[rstest]
fn filter_always_false_is_empty() {
    let none = filter(|_: &i32| false)(vec![1, 2, 3]);
    assert!(none.is_empty());
}

// =============================================================================
// reduce
// =============================================================================

#[rstest]
fn reduce_sums_left_to_right() {
    let sum = reduce(|accumulator, element: i32| accumulator + element, 0);
    assert_eq!(sum(vec![1, 2, 3, 4]), 10);
}

#[rstest]
fn reduce_on_empty_returns_initial() {
    let sum = reduce(|accumulator, element: i32| accumulator + element, 42);
    assert_eq!(sum(vec![]), 42);
}

#[rstest]
fn reduce_initial_is_fresh_per_invocation() {
    let collect_evens = reduce(
        |mut evens: Vec<i32>, element: i32| {
            if element % 2 == 0 {
                evens.push(element);
            }
            evens
        },
        Vec::new(),
    );
    assert_eq!(collect_evens(vec![1, 2, 3, 4]), vec![2, 4]);
    // A second run must not see the first run's accumulator.
    assert_eq!(collect_evens(vec![6]), vec![6]);
}

#[rstest]
fn reduce_order_is_observable_with_non_commutative_combiner() {
    let subtract_all = reduce(|accumulator, element: i32| accumulator - element, 100);
    // ((100 - 1) - 2) - 3
    assert_eq!(subtract_all(vec![1, 2, 3]), 94);
}

// =============================================================================
// every / some
// =============================================================================

#[rstest]
#[case(vec![2, 4, 6], true)]
#[case(vec![2, 5, 6], false)]
#[case(vec![], true)]
fn every_checks_all_elements(#[case] input: Vec<i32>, #[case] expected: bool) {
    assert_eq!(every(|x: &i32| x % 2 == 0, &input), expected);
}

#[rstest]
#[case(vec![1, 3, 4], true)]
#[case(vec![1, 3, 5], false)]
#[case(vec![], false)]
fn some_checks_any_element(#[case] input: Vec<i32>, #[case] expected: bool) {
    assert_eq!(some(|x: &i32| x % 2 == 0, &input), expected);
}

// =============================================================================
// find
// =============================================================================

#[rstest]
fn find_returns_first_satisfying_element() {
    let words = ["uno", "dos", "tres"];
    assert_eq!(find(|word: &&str| word.len() == 3, &words), Some(&"uno"));
}

#[rstest]
fn find_without_match_is_none() {
    assert_eq!(find(|x: &i32| *x > 100, &[1, 2, 3]), None);
}

#[rstest]
fn find_on_empty_is_none() {
    assert_eq!(find(|_: &i32| true, &[]), None);
}

// =============================================================================
// flat / flat_map
// =============================================================================

#[rstest]
fn flat_concatenates_in_order() {
    assert_eq!(flat(vec![vec![1, 2], vec![3], vec![4, 5]]), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn flat_skips_empty_inner_sequences() {
    assert_eq!(flat(vec![vec![], vec![1], vec![]]), vec![1]);
}

#[rstest]
fn flat_of_empty_outer_is_empty() {
    assert!(flat(Vec::<Vec<i32>>::new()).is_empty());
}

#[rstest]
fn flat_map_can_grow_the_sequence() {
    let doubled_up = flat_map(|x: i32| vec![x, -x])(vec![1, 2]);
    assert_eq!(doubled_up, vec![1, -1, 2, -2]);
}

#[rstest]
fn flat_map_can_shrink_the_sequence() {
    let evens_only = flat_map(|x: i32| if x % 2 == 0 { vec![x] } else { vec![] });
    assert_eq!(evens_only(vec![1, 2, 3, 4]), vec![2, 4]);
}
