//! The curry macro family: one-argument-at-a-time application.
//!
//! Currying turns a function of several positional arguments into nested
//! single-argument closures. Each intermediate closure is a reusable value,
//! so a partial application can be named once and applied many times.
//!
//! The macros share the function and the already-supplied arguments through
//! `std::rc::Rc`, which is what lets the intermediate closures implement
//! [`Fn`] (not just [`FnOnce`]) and work for argument types that are not
//! [`Copy`]. The final argument is passed straight through without cloning.
//!
//! For supplying several arguments in one step, see
//! [`partial!`](crate::partial).

/// Curries a 2-argument function.
///
/// `curry2!(f)(a)(b)` equals `f(a, b)` for every `a` and `b`, and
/// `curry2!(f)(a)` is a reusable single-argument function.
///
/// # Type Requirements
///
/// The function must implement [`Fn`]; every argument but the last must
/// implement [`Clone`].
///
/// # Examples
///
/// ```rust
/// use refold::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// assert_eq!(curried(5)(3), 8);
///
/// let add_five = curried(5);
/// assert_eq!(add_five(1), 6);
/// assert_eq!(add_five(2), 7);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Curries a 3-argument function.
///
/// `curry3!(f)(a)(b)(c)` equals `f(a, b, c)`; every intermediate step is a
/// reusable closure.
///
/// # Examples
///
/// ```rust
/// use refold::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let percent = curry3!(clamp)(0)(100);
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

/// Curries a 4-argument function.
///
/// `curry4!(f)(a)(b)(c)(d)` equals `f(a, b, c, d)`.
///
/// # Examples
///
/// ```rust
/// use refold::curry4;
///
/// fn weigh(a: i32, b: i32, c: i32, d: i32) -> i32 {
///     a * 1000 + b * 100 + c * 10 + d
/// }
///
/// assert_eq!(curry4!(weigh)(1)(2)(3)(4), 1234);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            arg4,
                        )
                    }
                }
            }
        }
    }};
}
