//! # refold
//!
//! Functional programming utilities for Rust: curried sequence combinators,
//! first-class pattern matching, and refinement types.
//!
//! ## Overview
//!
//! This library packages a small set of pure, stateless building blocks:
//!
//! - **Sequence combinators**: curried `map`, `filter`, `reduce`, `flat`,
//!   `flat_map`, plus the short-circuiting queries `every`, `some`, `find`
//! - **Record projection**: first-class field access with [`record::Field`]
//!   and `field!`, and `pick`/`omit` over map-shaped records
//! - **Pattern matching**: [`matching::CaseTable`], a lookup table usable as
//!   an expression, with construction-time exhaustiveness checking over
//!   closed discriminant enums
//! - **Refinement types**: [`refine::Refined`] smart-constructor newtypes
//!   that make "checked" values a distinct type from unchecked ones
//! - **Function composition**: `compose!`, `flow!`, `pipe!`, `curry2!`
//!   through `curry4!`, and `partial!`
//!
//! Every operation is synchronous and side-effect-free on its inputs; there
//! is no shared state and nothing to schedule or coordinate.
//!
//! ## Feature Flags
//!
//! - `sequence`: Sequence combinators
//! - `record`: Record projection and subsetting
//! - `matching`: Pattern-matching tables
//! - `refine`: Refinement types and smart constructors
//! - `compose`: Function composition macros and helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use refold::sequence::{filter, map};
//!
//! let doubled = map(|x: i32| x * 2)(vec![1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let odd = filter(|x: &i32| x % 2 == 1)(vec![1, 2, 3]);
//! assert_eq!(odd, vec![1, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use refold::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "record")]
    pub use crate::record::*;

    #[cfg(feature = "matching")]
    pub use crate::matching::*;

    #[cfg(feature = "refine")]
    pub use crate::refine::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "record")]
pub mod record;

#[cfg(feature = "matching")]
pub mod matching;

#[cfg(feature = "refine")]
pub mod refine;

#[cfg(feature = "compose")]
pub mod compose;
