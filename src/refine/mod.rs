//! Refinement types and smart constructors.
//!
//! A *refinement* is a predicate over a base type that licenses treating
//! values satisfying it as a narrower type. In a structurally erased type
//! system that narrowing is a compile-time-only brand; in Rust it becomes a
//! newtype: [`Refined<P>`] owns a validated base value and can only be
//! produced by a smart constructor that re-runs the predicate. There is no
//! public unchecked constructor, so holding a `Refined<P>` is proof the
//! predicate held when the value was minted.
//!
//! Two failure-signalling policies are supported:
//!
//! - [`Refined::new`] / [`refine`] return `Option`: absence for the caller
//!   to handle as it sees fit;
//! - [`Refined::try_new`] / [`try_refine`] return `Result` with a
//!   [`RefinementError`] carrying the rejected value back to the caller.
//!
//! [`narrow`] filters a whole sequence through a smart constructor, and the
//! [`refinement!`](crate::refinement) macro declares a refinement from a
//! predicate expression. A few stock refinements live in this module for the
//! common boundary cases: [`NonZeroInt`], [`NonEmptyText`], [`NonEmpty`].
//!
//! # Examples
//!
//! ```rust
//! use refold::refinement;
//! use refold::refine::{narrow, Refined};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! pub struct Person { name: String, age: u32 }
//!
//! refinement!(
//!     /// A person aged 18 or over.
//!     pub Adult for Person, |person: &Person| person.age >= 18
//! );
//!
//! let marcos = Person { name: "Marcos".to_string(), age: 3 };
//! let laura = Person { name: "Laura".to_string(), age: 27 };
//!
//! assert!(Refined::<Adult>::new(marcos.clone()).is_none());
//! let adults: Vec<Refined<Adult>> = narrow(vec![marcos, laura]);
//! assert_eq!(adults.len(), 1);
//! assert_eq!(adults[0].name, "Laura");
//! ```

mod narrow;
mod refinement;
mod standard;

pub use narrow::{narrow, narrow_with};
pub use refinement::{refine, try_refine, Refined, Refinement, RefinementError};
pub use standard::{NonEmpty, NonEmptyText, NonZeroInt};
