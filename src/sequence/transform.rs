//! Transformation combinators: map, filter, reduce, flat, `flat_map`.
//!
//! These are the curried halves of the sequence vocabulary. Each constructor
//! takes the per-element function first and returns a reusable closure over
//! whole sequences, so partially applied transformations can be named, stored,
//! and composed.

/// Transforms every element of a sequence, preserving length and order.
///
/// `map(function)` returns a closure that consumes a `Vec<A>` and produces a
/// `Vec<B>` where the element at each position is `function` applied to the
/// input element at that position.
///
/// # Laws
///
/// - **Length preservation**: `map(f)(items).len() == items.len()`
/// - **Identity**: `map(identity)(items) == items`
///
/// # Examples
///
/// ```rust
/// use refold::sequence::map;
///
/// let doubled = map(|x: i32| x * 2)(vec![1, 2, 3]);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
///
/// The returned closure is reusable:
///
/// ```rust
/// use refold::sequence::map;
///
/// let stringify = map(|x: i32| x.to_string());
/// assert_eq!(stringify(vec![1, 2]), vec!["1", "2"]);
/// assert_eq!(stringify(vec![]), Vec::<String>::new());
/// ```
pub fn map<A, B, F>(function: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> B,
{
    move |items: Vec<A>| items.into_iter().map(&function).collect()
}

/// Keeps exactly the elements satisfying a predicate, in original order.
///
/// `filter(predicate)` returns a closure that consumes a `Vec<A>` and
/// produces a `Vec<A>` containing the elements for which `predicate` holds,
/// in their original relative order. The output is never longer than the
/// input.
///
/// # Laws
///
/// - `filter(|_| true)(items) == items`
/// - `filter(|_| false)(items)` is empty
///
/// # Examples
///
/// ```rust
/// use refold::sequence::filter;
///
/// let odd = filter(|x: &i32| x % 2 == 1)(vec![1, 2, 3, 4, 5]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn filter<A, P>(predicate: P) -> impl Fn(Vec<A>) -> Vec<A>
where
    P: Fn(&A) -> bool,
{
    move |items: Vec<A>| items.into_iter().filter(|item| predicate(item)).collect()
}

/// Folds a sequence left to right into a single accumulated value.
///
/// `reduce(combine, initial)` returns a closure that consumes a `Vec<A>` and
/// threads an accumulator through `combine(accumulator, element)` for each
/// element in order. An empty sequence yields `initial` unchanged.
///
/// The initial accumulator is cloned on each invocation so the returned
/// closure stays reusable.
///
/// # Examples
///
/// ```rust
/// use refold::sequence::reduce;
///
/// let sum = reduce(|accumulator, element: i32| accumulator + element, 0);
/// assert_eq!(sum(vec![1, 2, 3, 4]), 10);
/// assert_eq!(sum(vec![]), 0);
/// ```
///
/// Left-to-right order is observable with a non-commutative combiner:
///
/// ```rust
/// use refold::sequence::reduce;
///
/// let joined = reduce(|text: String, word: &str| text + word, String::new());
/// assert_eq!(joined(vec!["a", "b", "c"]), "abc");
/// ```
pub fn reduce<A, Acc, F>(combine: F, initial: Acc) -> impl Fn(Vec<A>) -> Acc
where
    Acc: Clone,
    F: Fn(Acc, A) -> Acc,
{
    move |items: Vec<A>| items.into_iter().fold(initial.clone(), &combine)
}

/// Concatenates a sequence of sequences into one flat sequence.
///
/// Inner sequences are appended in order, so `flat(vec![a, b])` is the
/// concatenation of `a` and `b`.
///
/// # Examples
///
/// ```rust
/// use refold::sequence::flat;
///
/// let flattened = flat(vec![vec![1, 2], vec![], vec![3]]);
/// assert_eq!(flattened, vec![1, 2, 3]);
/// ```
pub fn flat<A>(nested: Vec<Vec<A>>) -> Vec<A> {
    nested.into_iter().fold(Vec::new(), |mut flattened, inner| {
        flattened.extend(inner);
        flattened
    })
}

/// Maps every element to a sequence, then flattens the results.
///
/// `flat_map(function)(items)` is definitionally `flat(map(function)(items))`
/// and the implementation is exactly that composition. The output may be
/// shorter or longer than the input.
///
/// # Examples
///
/// ```rust
/// use refold::sequence::flat_map;
///
/// let repeated = flat_map(|x: i32| vec![x; x as usize])(vec![1, 2, 3]);
/// assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
///
/// // Mapping to empty sequences shrinks the output.
/// let none = flat_map(|_: i32| Vec::<i32>::new())(vec![1, 2, 3]);
/// assert!(none.is_empty());
/// ```
pub fn flat_map<A, B, F>(function: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> Vec<B>,
{
    move |items: Vec<A>| flat(map(&function)(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_length() {
        let input = vec![1, 2, 3, 4];
        let length = input.len();
        assert_eq!(map(|x: i32| x + 1)(input).len(), length);
    }

    #[test]
    fn test_map_empty() {
        let mapped: Vec<i32> = map(|x: i32| x * 2)(vec![]);
        assert!(mapped.is_empty());
    }

    #[test]
    fn test_filter_keeps_order() {
        let kept = filter(|x: &i32| *x > 1)(vec![3, 1, 2]);
        assert_eq!(kept, vec![3, 2]);
    }

    #[test]
    fn test_reduce_empty_returns_initial() {
        let fold = reduce(|accumulator, element: i32| accumulator + element, 7);
        assert_eq!(fold(vec![]), 7);
    }

    #[test]
    fn test_reduce_is_left_to_right() {
        let fold = reduce(|accumulator: String, element: i32| format!("({accumulator}-{element})"), "0".to_string());
        assert_eq!(fold(vec![1, 2]), "((0-1)-2)");
    }

    #[test]
    fn test_flat_concatenates() {
        assert_eq!(flat(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
    }

    #[test]
    fn test_flat_map_matches_definition() {
        let duplicate = |x: i32| vec![x, x];
        let direct = flat_map(duplicate)(vec![1, 2]);
        let definitional = flat(map(duplicate)(vec![1, 2]));
        assert_eq!(direct, definitional);
    }
}
