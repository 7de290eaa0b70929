//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! The collector accumulators rely on this law: a fork-join reduction may
//! regroup partial results arbitrarily, but never reorders them.
//!
//! # Examples
//!
//! ```rust
//! use twofold::typeclass::Semigroup;
//! use twofold::{Maybe, some, none};
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//!
//! let left: Maybe<String> = some("ab".to_string());
//! assert_eq!(left.combine(none()), some("ab".to_string()));
//! ```

use crate::container::{Maybe, Outcome};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative. `self` is the left operand and
    /// keeps its position relative to `other`.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. See
    /// [`Monoid::combine_all`](super::Monoid::combine_all) for the total version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::typeclass::Semigroup;
    ///
    /// let chunks = vec![vec![1], vec![2, 3]];
    /// assert_eq!(Vec::reduce_all(chunks), Some(vec![1, 2, 3]));
    ///
    /// let empty: Vec<Vec<i32>> = vec![];
    /// assert_eq!(Vec::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Container Implementations
// =============================================================================

/// `Maybe` forms a semigroup when its payload type is a semigroup.
///
/// - `Present(a).combine(Present(b))` = `Present(a.combine(b))`
/// - `Present(a).combine(Absent)` = `Present(a)`
/// - `Absent.combine(Present(b))` = `Present(b)`
/// - `Absent.combine(Absent)` = `Absent`
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            (Self::Absent, Self::Absent) => Self::Absent,
        }
    }
}

/// `Outcome` forms a semigroup when its success type is a semigroup.
///
/// - `Success(a).combine(Success(b))` = `Success(a.combine(b))`
/// - `Failure(e).combine(_)` = `Failure(e)` (first failure wins)
/// - `Success(_).combine(Failure(e))` = `Failure(e)`
impl<T: Semigroup, E> Semigroup for Outcome<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => Self::Success(left.combine(right)),
            (Self::Failure(error), _) | (_, Self::Failure(error)) => Self::Failure(error),
        }
    }
}
