#![cfg(feature = "record")]
//! Unit tests for record projection and subsetting.

use std::collections::BTreeMap;

use refold::field;
use refold::record::{omit, pick, Field};
use rstest::rstest;

#[derive(Clone, Debug, PartialEq)]
struct User {
    name: String,
    age: u32,
}

fn laura() -> User {
    User {
        name: "Laura".to_string(),
        age: 27,
    }
}

// =============================================================================
// Field projection
// =============================================================================

#[rstest]
fn field_view_borrows_without_cloning() {
    let name = field!(User, name);
    let user = laura();
    assert_eq!(name.view(&user), "Laura");
    // user is still intact after viewing
    assert_eq!(user.age, 27);
}

#[rstest]
fn field_get_clones_the_value() {
    let age = field!(User, age);
    assert_eq!(age.get(&laura()), 27);
}

#[cfg(feature = "sequence")]
#[rstest]
fn field_extract_slots_into_map_chains() {
    use refold::sequence::map;

    let users = vec![
        User { name: "Marcos".to_string(), age: 3 },
        laura(),
    ];
    let names = map(field!(User, name).extract())(users);
    assert_eq!(names, vec!["Marcos", "Laura"]);
}

#[rstest]
fn field_new_with_custom_getter() {
    let first: Field<Vec<i32>, i32, _> = Field::new(|source: &Vec<i32>| &source[0]);
    assert_eq!(*first.view(&vec![9, 8]), 9);
}

// =============================================================================
// pick / omit
// =============================================================================

fn record() -> BTreeMap<&'static str, i32> {
    BTreeMap::from([("one", 1), ("two", 2), ("three", 3)])
}

#[rstest]
fn pick_selects_named_keys_only() {
    let picked = pick(&record(), &["one", "two"]);
    assert_eq!(picked, BTreeMap::from([("one", 1), ("two", 2)]));
}

#[rstest]
fn pick_of_no_keys_is_empty() {
    assert!(pick(&record(), &[]).is_empty());
}

#[rstest]
fn pick_skips_keys_the_record_lacks() {
    let picked = pick(&record(), &["one", "ninety"]);
    assert_eq!(picked, BTreeMap::from([("one", 1)]));
}

#[rstest]
fn omit_drops_named_keys_only() {
    let omitted = omit(&record(), &["two"]);
    assert_eq!(omitted, BTreeMap::from([("one", 1), ("three", 3)]));
}

#[rstest]
fn omit_of_no_keys_is_the_whole_record() {
    assert_eq!(omit(&record(), &[]), record());
}

#[rstest]
fn pick_and_omit_leave_the_source_untouched() {
    let source = record();
    let _ = pick(&source, &["one"]);
    let _ = omit(&source, &["one"]);
    assert_eq!(source, record());
}
