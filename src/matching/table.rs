//! The case table: exhaustiveness-checked dispatch over a closed enum.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use strum::VariantArray;

use super::case::Case;

/// A closed, finite, enumerable discriminant type.
///
/// A discriminant is the key a [`CaseTable`] dispatches on. The full set of
/// possible keys must be known so the table can be checked for coverage when
/// it is built.
///
/// A blanket impl covers every `Copy + Eq + Hash` enum that derives
/// [`strum::VariantArray`]:
///
/// ```rust
/// use refold::matching::Discriminant;
/// use strum::VariantArray;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, VariantArray)]
/// enum Role { Free, Paid, Enterprise, Admin }
///
/// assert_eq!(Role::variants().len(), 4);
/// ```
pub trait Discriminant: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every possible value of the discriminant, in declaration order.
    fn variants() -> &'static [Self];
}

impl<K> Discriminant for K
where
    K: VariantArray + Copy + Eq + Hash + fmt::Debug + 'static,
{
    fn variants() -> &'static [Self] {
        Self::VARIANTS
    }
}

/// Errors detected while building a [`CaseTable`].
#[derive(Debug, PartialEq, Eq)]
pub enum TableError<K: Discriminant> {
    /// No catch-all was installed and at least one discriminant has no entry.
    MissingCases {
        /// The uncovered discriminants, in declaration order.
        missing: Vec<K>,
    },
    /// The same discriminant was bound more than once.
    DuplicateCase {
        /// The discriminant bound twice.
        key: K,
    },
}

impl<K: Discriminant> fmt::Display for TableError<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCases { missing } => {
                write!(
                    formatter,
                    "case table has no entry for {missing:?} and no catch-all"
                )
            }
            Self::DuplicateCase { key } => {
                write!(formatter, "case table binds {key:?} more than once")
            }
        }
    }
}

impl<K: Discriminant> std::error::Error for TableError<K> {}

/// A pattern-matching lookup table over a closed discriminant set.
///
/// Built through [`CaseTable::builder`]; see the
/// [module documentation](crate::matching) for the exhaustiveness rules.
///
/// # Examples
///
/// Partial table with a catch-all:
///
/// ```rust
/// use refold::matching::{value, CaseTable};
/// use strum::VariantArray;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, VariantArray)]
/// enum Status { Dev, Pre, Pro }
///
/// let table = CaseTable::builder()
///     .case(Status::Pro, value("deployed"))
///     .otherwise(value("in progress"))
///     .build()
///     .unwrap();
///
/// assert_eq!(table.select(Status::Dev), "in progress");
/// ```
pub struct CaseTable<K: Discriminant, R> {
    cases: HashMap<K, Case<R>>,
    fallback: Option<Case<R>>,
}

impl<K: Discriminant, R> CaseTable<K, R> {
    /// Starts building a table.
    #[must_use]
    pub fn builder() -> CaseTableBuilder<K, R> {
        CaseTableBuilder {
            cases: HashMap::new(),
            fallback: None,
            duplicate: None,
        }
    }

    /// Resolves a discriminant to its result.
    ///
    /// The table is consumed: entries for unselected discriminants are
    /// dropped without their deferred computations ever running.
    pub fn select(mut self, key: K) -> R {
        match self.cases.remove(&key) {
            Some(case) => case.evaluate(),
            None => match self.fallback {
                Some(fallback) => fallback.evaluate(),
                // build() rejects tables that are neither exhaustive nor
                // given a catch-all, so a miss always lands on the fallback.
                None => unreachable!("case table built without full coverage"),
            },
        }
    }

    /// Returns `true` when a catch-all entry is installed.
    pub const fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

impl<K: Discriminant, R: fmt::Debug> fmt::Debug for CaseTable<K, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CaseTable")
            .field("cases", &self.cases)
            .field("fallback", &self.fallback)
            .finish()
    }
}

/// Builder for [`CaseTable`].
///
/// Collects entries with [`case`](Self::case), optionally installs a
/// catch-all with [`otherwise`](Self::otherwise), and validates the whole
/// table in [`build`](Self::build).
pub struct CaseTableBuilder<K: Discriminant, R> {
    cases: HashMap<K, Case<R>>,
    fallback: Option<Case<R>>,
    duplicate: Option<K>,
}

impl<K: Discriminant, R> CaseTableBuilder<K, R> {
    /// Binds one discriminant to a case.
    ///
    /// Binding the same discriminant twice is remembered and reported by
    /// [`build`](Self::build) as [`TableError::DuplicateCase`].
    #[must_use]
    pub fn case(mut self, key: K, case: Case<R>) -> Self {
        if self.cases.insert(key, case).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(key);
        }
        self
    }

    /// Installs a catch-all entry for discriminants without a specific case.
    ///
    /// With a catch-all present, exhaustiveness checking is waived.
    #[must_use]
    pub fn otherwise(mut self, case: Case<R>) -> Self {
        self.fallback = Some(case);
        self
    }

    /// Validates the table and finishes building it.
    ///
    /// # Errors
    ///
    /// - [`TableError::DuplicateCase`] when a discriminant was bound twice.
    /// - [`TableError::MissingCases`] when no catch-all is installed and at
    ///   least one discriminant has no entry.
    pub fn build(self) -> Result<CaseTable<K, R>, TableError<K>> {
        if let Some(key) = self.duplicate {
            return Err(TableError::DuplicateCase { key });
        }

        if self.fallback.is_none() {
            let missing: Vec<K> = K::variants()
                .iter()
                .copied()
                .filter(|variant| !self.cases.contains_key(variant))
                .collect();
            if !missing.is_empty() {
                return Err(TableError::MissingCases { missing });
            }
        }

        Ok(CaseTable {
            cases: self.cases,
            fallback: self.fallback,
        })
    }
}
