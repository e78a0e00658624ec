//! The `Refinement` trait, the `Refined` newtype, and its smart constructors.

use std::fmt;
use std::ops::Deref;

/// A type-level predicate over a base type.
///
/// Implementors are tag types: they carry no data and are never
/// instantiated; they exist to name the predicate and to brand
/// [`Refined`] values with it. The [`refinement!`](crate::refinement)
/// macro writes the tag and the impl in one step.
pub trait Refinement {
    /// The unrefined type the predicate ranges over.
    type Base;

    /// Whether the predicate holds for a candidate value.
    fn holds(candidate: &Self::Base) -> bool;
}

/// A base value that passed its refinement's predicate.
///
/// The wrapped value is private: the only constructors are [`Refined::new`]
/// and [`Refined::try_new`], both of which re-run the predicate. The wrapper
/// adds no runtime representation on top of the base value.
///
/// `Refined` dereferences to the base type, so read access is transparent;
/// mutation is deliberately impossible without going back through a smart
/// constructor, since an arbitrary edit could silently break the predicate.
pub struct Refined<P: Refinement> {
    value: P::Base,
}

impl<P: Refinement> Refined<P> {
    /// Mints a refined value when the predicate holds, `None` otherwise.
    ///
    /// The predicate is evaluated on every call; nothing is cached or
    /// carried over from previous mints.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::refine::{NonZeroInt, Refined};
    ///
    /// assert!(Refined::<NonZeroInt>::new(3).is_some());
    /// assert!(Refined::<NonZeroInt>::new(0).is_none());
    /// ```
    pub fn new(candidate: P::Base) -> Option<Self> {
        if P::holds(&candidate) {
            Some(Self { value: candidate })
        } else {
            None
        }
    }

    /// Mints a refined value when the predicate holds, or returns the
    /// rejected value inside a [`RefinementError`].
    ///
    /// # Errors
    ///
    /// [`RefinementError`] when the predicate does not hold; the error owns
    /// the rejected value so the caller can recover it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::refine::{NonEmptyText, Refined};
    ///
    /// let error = Refined::<NonEmptyText>::try_new(String::new()).unwrap_err();
    /// assert_eq!(error.rejected, "");
    /// assert_eq!(error.refinement, "NonEmptyText");
    /// ```
    pub fn try_new(candidate: P::Base) -> Result<Self, RefinementError<P::Base>> {
        if P::holds(&candidate) {
            Ok(Self { value: candidate })
        } else {
            Err(RefinementError {
                rejected: candidate,
                refinement: refinement_name::<P>(),
            })
        }
    }

    /// Borrows the underlying base value.
    pub const fn as_inner(&self) -> &P::Base {
        &self.value
    }

    /// Unwraps back to the base type, giving up the refinement.
    pub fn into_inner(self) -> P::Base {
        self.value
    }
}

fn refinement_name<P: Refinement>() -> &'static str {
    let full = std::any::type_name::<P>();
    full.rsplit("::").next().unwrap_or(full)
}

impl<P: Refinement> Deref for Refined<P> {
    type Target = P::Base;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<P: Refinement> Clone for Refined<P>
where
    P::Base: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<P: Refinement> fmt::Debug for Refined<P>
where
    P::Base: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Refined")
            .field(&self.value)
            .finish()
    }
}

impl<P: Refinement> PartialEq for Refined<P>
where
    P::Base: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<P: Refinement> Eq for Refined<P> where P::Base: Eq {}

/// A smart constructor rejected its input.
///
/// Owns the rejected value so callers choosing the error-signalling policy
/// can still recover what they passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementError<B> {
    /// The value the predicate rejected.
    pub rejected: B,
    /// The name of the refinement whose predicate failed.
    pub refinement: &'static str,
}

impl<B: fmt::Debug> fmt::Display for RefinementError<B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "value {:?} does not satisfy refinement {}",
            self.rejected, self.refinement
        )
    }
}

impl<B: fmt::Debug> std::error::Error for RefinementError<B> {}

/// Point-free alias for [`Refined::new`].
///
/// # Examples
///
/// ```rust
/// use refold::refine::{refine, NonZeroInt};
///
/// let checked = refine::<NonZeroInt>(5);
/// assert_eq!(checked.map(|n| *n), Some(5));
/// ```
pub fn refine<P: Refinement>(candidate: P::Base) -> Option<Refined<P>> {
    Refined::new(candidate)
}

/// Point-free alias for [`Refined::try_new`].
///
/// # Errors
///
/// [`RefinementError`] when the predicate does not hold.
pub fn try_refine<P: Refinement>(
    candidate: P::Base,
) -> Result<Refined<P>, RefinementError<P::Base>> {
    Refined::try_new(candidate)
}

/// Declares a refinement: an uninhabited tag type plus its
/// [`Refinement`](crate::refine::Refinement) impl.
///
/// The predicate is any expression callable as `Fn(&Base) -> bool`.
///
/// # Examples
///
/// ```rust
/// use refold::refinement;
/// use refold::refine::refine;
///
/// refinement!(
///     /// An even integer.
///     pub Even for i64, |candidate: &i64| candidate % 2 == 0
/// );
///
/// assert!(refine::<Even>(4).is_some());
/// assert!(refine::<Even>(5).is_none());
/// ```
#[macro_export]
macro_rules! refinement {
    ($(#[$attribute:meta])* $visibility:vis $name:ident for $base:ty, $predicate:expr) => {
        $(#[$attribute])*
        $visibility enum $name {}

        impl $crate::refine::Refinement for $name {
            type Base = $base;

            fn holds(candidate: &Self::Base) -> bool {
                let predicate = $predicate;
                predicate(candidate)
            }
        }
    };
}
