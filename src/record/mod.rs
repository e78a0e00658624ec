//! Record projection and subsetting.
//!
//! Two shapes of "record" show up in practice and this module covers both:
//!
//! - **Statically shaped records** (plain structs): projected with
//!   [`Field`], a first-class, reusable accessor built by the
//!   [`field!`](crate::field) macro. Naming a field that does not exist on
//!   the struct is a compile error, so a projection can never silently miss.
//! - **Dynamically keyed records** (ordered maps): subset with [`pick`] and
//!   [`omit`], which build a new map containing only, or all but, the named
//!   keys. The source map is never mutated.
//!
//! # Examples
//!
//! ```rust
//! use refold::field;
//!
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let age = field!(User, age);
//! let user = User { name: "Laura".to_string(), age: 27 };
//! assert_eq!(*age.view(&user), 27);
//! ```

mod field;
mod subset;

pub use field::Field;
pub use subset::{omit, pick};
