//! First-class field projection for statically shaped records.
//!
//! A [`Field`] packages "access to one named field of a struct" as a value
//! that can be passed around, stored, and slotted into sequence pipelines.
//! It is the read-only half of a lens: there is no setter because nothing in
//! this library mutates records.

use std::marker::PhantomData;

/// A first-class projection from a record type to one of its fields.
///
/// # Type Parameters
///
/// - `S`: The record type
/// - `A`: The projected field type
/// - `G`: The getter function
///
/// Construct one with the [`field!`](crate::field) macro, which wires the
/// getter to an actual struct field so that a misspelled field name fails to
/// compile:
///
/// ```rust
/// use refold::field;
///
/// struct Point { x: i32, y: i32 }
///
/// let x = field!(Point, x);
/// assert_eq!(*x.view(&Point { x: 3, y: 4 }), 3);
/// ```
pub struct Field<S, A, G>
where
    G: Fn(&S) -> &A,
{
    getter: G,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G> Field<S, A, G>
where
    G: Fn(&S) -> &A,
{
    /// Creates a `Field` from a getter function.
    ///
    /// Prefer the [`field!`](crate::field) macro, which derives the getter
    /// from a field name.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }

    /// Borrows the projected field from a record.
    pub fn view<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    /// Clones the projected field out of a record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::field;
    ///
    /// struct User { name: String }
    ///
    /// let name = field!(User, name);
    /// let user = User { name: "Marcos".to_string() };
    /// assert_eq!(name.get(&user), "Marcos");
    /// ```
    pub fn get(&self, source: &S) -> A
    where
        A: Clone,
    {
        (self.getter)(source).clone()
    }

    /// Converts the projection into a standalone closure.
    ///
    /// The result has the shape sequence pipelines expect, so a field access
    /// can be dropped straight into a `map` or `flat_map` chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::field;
    /// use refold::sequence::map;
    ///
    /// #[derive(Clone)]
    /// struct User { age: u32 }
    ///
    /// let ages = map(field!(User, age).extract())(vec![
    ///     User { age: 3 },
    ///     User { age: 27 },
    /// ]);
    /// assert_eq!(ages, vec![3, 27]);
    /// ```
    pub fn extract(self) -> impl Fn(S) -> A
    where
        A: Clone,
    {
        move |source: S| (self.getter)(&source).clone()
    }
}

/// Builds a [`Field`] for a named struct field.
///
/// `field!(Type, name)` expands to a [`Field`] whose getter borrows
/// `source.name`, so the field name is checked by the compiler. Generic
/// record types take their parameters explicitly:
/// `field!(Wrapper<i32>, inner)`.
///
/// # Examples
///
/// ```rust
/// use refold::field;
///
/// struct User { name: String, age: u32 }
///
/// let age = field!(User, age);
/// let user = User { name: "Javi".to_string(), age: 29 };
/// assert_eq!(*age.view(&user), 29);
/// ```
#[macro_export]
macro_rules! field {
    ($record_type:ident, $field:ident) => {
        $crate::record::Field::new(|source: &$record_type| &source.$field)
    };
    ($record_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::record::Field::new(|source: &$record_type<$($generic),+>| &source.$field)
    };
    ($record_type:path, $field:ident) => {
        $crate::record::Field::new(|source: &$record_type| &source.$field)
    };
}
