//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! Every collector accumulator is a monoid: `empty` is the state before any
//! element was seen, and `combine` merges two partial folds.
//!
//! # Examples
//!
//! ```rust
//! use twofold::typeclass::{Semigroup, Monoid};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//!
//! let vec: Vec<i32> = Vec::empty();
//! assert!(vec.is_empty());
//! ```

use super::semigroup::Semigroup;
use crate::container::Maybe;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::typeclass::Monoid;
    /// use twofold::{Maybe, some, none};
    ///
    /// let parts: Vec<Maybe<String>> = vec![some("a".into()), none(), some("b".into())];
    /// assert_eq!(Maybe::combine_all(parts), some("ab".to_string()));
    ///
    /// let nothing: Vec<Maybe<String>> = vec![];
    /// assert_eq!(Maybe::combine_all(nothing), none());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `Absent` is the identity: it never contributes to the combination.
impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::Present(String::from("x")))]
    #[case(Maybe::Absent)]
    fn test_maybe_identity(#[case] value: Maybe<String>) {
        assert_eq!(Maybe::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Maybe::empty()), value);
    }

    #[rstest]
    fn test_vec_combine_all() {
        let chunks = vec![vec![1], vec![], vec![2, 3]];
        assert_eq!(Vec::combine_all(chunks), vec![1, 2, 3]);
    }
}
