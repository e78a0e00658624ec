//! First-class pattern matching over closed discriminant sets.
//!
//! A `match` expression is a statement-level construct; this module provides
//! the same dispatch as a value. A [`CaseTable`] maps every discriminant of a
//! closed enum to a [`Case`] (a plain result or a deferred computation), and
//! [`CaseTable::select`] resolves one discriminant to its result, forcing the
//! deferred computation only for the case actually selected.
//!
//! # Exhaustiveness
//!
//! The table is validated when it is built, not when it is consulted:
//!
//! - without a catch-all, [`CaseTableBuilder::build`] fails with
//!   [`TableError::MissingCases`] unless every discriminant has an entry;
//! - installing a catch-all with [`CaseTableBuilder::otherwise`] explicitly
//!   waives that guarantee, and any uncovered discriminant resolves to the
//!   catch-all.
//!
//! The discriminant type itself must be a closed, enumerable set: any
//! `Copy + Eq + Hash` enum deriving [`strum::VariantArray`] qualifies via the
//! blanket [`Discriminant`] impl.
//!
//! # Examples
//!
//! ```rust
//! use refold::matching::{thunk, value, CaseTable};
//! use strum::VariantArray;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, VariantArray)]
//! enum Direction { North, East, South, West }
//!
//! let table = CaseTable::builder()
//!     .case(Direction::North, thunk(|| "cold".to_string()))
//!     .case(Direction::East, value("sunrise".to_string()))
//!     .case(Direction::South, value("warm".to_string()))
//!     .case(Direction::West, value("sunset".to_string()))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.select(Direction::East), "sunrise");
//! ```
//!
//! For open-ended conditions there is [`first_match`], which evaluates an
//! ordered list of predicate arms and makes no exhaustiveness promise:
//!
//! ```rust
//! use refold::matching::{value, when, first_match};
//!
//! let age = 35;
//! let bracket = first_match(&age, vec![
//!     (when(|age: &i32| *age < 20), value("under twenty")),
//!     (when(|age: &i32| *age <= 30), value("twenty to thirty")),
//!     (true.into(), value("over thirty")),
//! ]);
//! assert_eq!(bracket, Some("over thirty"));
//! ```

mod case;
mod predicate;
mod table;

pub use case::{thunk, value, Case};
pub use predicate::{first_match, when, Condition};
pub use table::{CaseTable, CaseTableBuilder, Discriminant, TableError};
