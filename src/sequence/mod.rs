//! Sequence combinators - higher-order operations over finite ordered sequences.
//!
//! This module provides the classic sequence vocabulary as plain functions,
//! curried where that helps composition:
//!
//! - [`map`]: transform every element, preserving length and order
//! - [`filter`]: keep the elements satisfying a predicate, preserving order
//! - [`reduce`]: left fold with an explicit initial accumulator
//! - [`flat`]: concatenate a sequence of sequences
//! - [`flat_map`]: map to sequences, then flatten
//! - [`every`] / [`some`]: short-circuiting universal/existential queries
//! - [`find`]: first element satisfying a predicate, as an explicit `Option`
//!
//! All operations are pure: inputs are either consumed by value to build a
//! fresh output, or read through a shared reference. Nothing is mutated in
//! place.
//!
//! # Curried and plain forms
//!
//! The transformation combinators ([`map`], [`filter`], [`reduce`],
//! [`flat_map`]) are curried: they take the function first and return a
//! reusable closure over sequences, which slots directly into `pipe!` and
//! `flow!` chains. The queries ([`every`], [`some`], [`find`]) take the
//! predicate and the sequence together, since they produce a final answer
//! rather than another sequence.
//!
//! # Examples
//!
//! ```rust
//! use refold::sequence::{filter, flat_map, map, reduce};
//!
//! let names = map(|n: i32| n.to_string())(vec![1, 2, 3]);
//! assert_eq!(names, vec!["1", "2", "3"]);
//!
//! let evens = filter(|n: &i32| n % 2 == 0)(vec![1, 2, 3, 4]);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let total = reduce(|accumulator, element: i32| accumulator + element, 0)(vec![1, 2, 3]);
//! assert_eq!(total, 6);
//!
//! let pairs = flat_map(|n: i32| vec![n, n])(vec![1, 2]);
//! assert_eq!(pairs, vec![1, 1, 2, 2]);
//! ```

mod query;
mod transform;

pub use query::{every, find, some};
pub use transform::{filter, flat, flat_map, map, reduce};
