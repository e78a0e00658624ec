//! The `partial!` macro: fix some arguments now, take the rest later.
//!
//! Partial application complements currying: where `curry2!` and friends
//! hand over arguments strictly one at a time, `partial!` fixes any subset
//! of positions in a single step and returns a function of the remaining
//! ones. Write `__` (double underscore) for each position left open; it is
//! matched as a literal token, so it must not be imported or defined.
//!
//! Fixed arguments are cloned on each call of the resulting closure, which
//! keeps it reusable; arguments supplied at call time are passed through
//! without cloning.

/// Partially applies a function using `__` as the placeholder for open
/// positions.
///
/// Supports functions of 2 and 3 arguments, with any combination of fixed
/// and open positions.
///
/// # Examples
///
/// ## Fixing the first argument
///
/// ```rust
/// use refold::partial;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let from_ten = partial!(subtract, 10, __);
/// assert_eq!(from_ten(3), 7);
/// ```
///
/// ## Fixing the second argument
///
/// ```rust
/// use refold::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 { numerator / denominator }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
///
/// ## Batching two of three arguments
///
/// ```rust
/// use refold::partial;
///
/// fn interpolate(prefix: &str, middle: &str, suffix: &str) -> String {
///     format!("{prefix}{middle}{suffix}")
/// }
///
/// let bracket = partial!(interpolate, "[", __, "]");
/// assert_eq!(bracket("core"), "[core]");
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 3-argument functions (placeholder arms before expression arms)
    // =========================================================================

    // (f, __, __, __) -> |a, b, c| f(a, b, c)
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    // (f, v1, __, __) -> |b, c| f(v1, b, c)
    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};

    // (f, __, v2, __) -> |a, c| f(a, v2, c)
    ($function:expr, __, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3)
    }};

    // (f, __, __, v3) -> |a, b| f(a, b, v3)
    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};

    // (f, v1, v2, __) -> |c| f(v1, v2, c)
    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};

    // (f, v1, __, v3) -> |b| f(v1, b, v3)
    ($function:expr, $arg1:expr, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2| function(arg1.clone(), arg2, arg3.clone())
    }};

    // (f, __, v2, v3) -> |a| f(a, v2, v3)
    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================

    // (f, __, __) -> |a, b| f(a, b)
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    // (f, v1, __) -> |b| f(v1, b)
    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};

    // (f, __, v2) -> |a| f(a, v2)
    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};
}
