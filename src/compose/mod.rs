//! Function composition and currying.
//!
//! Macros and helper combinators for building functions out of functions:
//!
//! - [`compose!`]: variadic right-to-left composition (mathematical order)
//! - [`flow!`]: variadic left-to-right composition (data-flow order)
//! - [`pipe!`]: thread a value through functions left to right, immediately
//! - [`curry2!`] / [`curry3!`] / [`curry4!`]: one-argument-at-a-time currying
//! - [`partial!`]: fix some arguments now, take the rest later
//! - [`identity`], [`constant`], [`flip`]: the basic combinators
//!
//! # Composition order
//!
//! `compose!` reads like mathematics and `flow!` reads like a pipeline; the
//! two are mirror images:
//!
//! ```text
//! compose!(f, g)(x) = f(g(x))
//! flow!(f, g)(x)    = g(f(x))
//! ```
//!
//! `pipe!` is `flow!` with the value supplied up front:
//!
//! ```text
//! pipe!(x, f, g) = g(f(x))
//! ```
//!
//! # Laws
//!
//! Composition is associative and [`identity`] is its neutral element, in
//! both directions:
//!
//! - `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - `compose!(identity, f) == f == compose!(f, identity)`
//! - `flow!()` and `compose!()` are the identity function
//!
//! Currying is equivalent to direct application however the arguments are
//! split: `curry2!(f)(a)(b) == f(a, b)`, and `partial!(f, a, __)(b)` covers
//! the batched splits.
//!
//! # Examples
//!
//! ```rust
//! use refold::{compose, flow, pipe};
//!
//! fn double(x: i32) -> i32 { x * 2 }
//! fn add_one(x: i32) -> i32 { x + 1 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(flow!(add_one, double)(5), 12);
//! assert_eq!(pipe!(5, add_one, double), 12);
//! ```

mod compose_macro;
mod curry_macro;
mod flow_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

// Re-export helper functions
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::flow;
pub use crate::partial;
pub use crate::pipe;
