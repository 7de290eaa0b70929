//! Deep flattening over arbitrarily nested containers.
//!
//! Whether a payload is "another container" or "the value" is decided at the
//! type level rather than by inspecting values at runtime. The innermost
//! payload is wrapped in a [`Leaf`]; each container layer around it
//! implements [`NestedMaybe`] or [`NestedOutcome`], and `flatten_deep`
//! recurses through the layers until it reaches the `Leaf` or the first
//! `Absent`/`Failure`.
//!
//! # Examples
//!
//! ```rust
//! use twofold::{Leaf, Maybe, some, none};
//!
//! let deep = some(some(some(Leaf(7))));
//! assert_eq!(deep.flatten_deep(), some(7));
//!
//! let hollow: Maybe<Maybe<Maybe<Leaf<i32>>>> = some(some(none()));
//! assert_eq!(hollow.flatten_deep(), none());
//! ```

use super::error::Describable;
use super::maybe::Maybe;
use super::outcome::Outcome;

/// Marks the innermost, non-container payload of a nested container.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Leaf<T>(pub T);

impl<T> Leaf<T> {
    /// Wraps a terminal payload.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the terminal payload.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// A `Maybe` layer, or the [`Leaf`] that terminates the nesting.
pub trait NestedMaybe {
    /// The payload found below every layer.
    type Terminal;

    /// Collapses every layer into a single `Maybe`.
    fn collapse(self) -> Maybe<Self::Terminal>;
}

impl<T> NestedMaybe for Leaf<T> {
    type Terminal = T;

    #[inline]
    fn collapse(self) -> Maybe<T> {
        Maybe::Present(self.0)
    }
}

impl<N: NestedMaybe> NestedMaybe for Maybe<N> {
    type Terminal = N::Terminal;

    #[inline]
    fn collapse(self) -> Maybe<N::Terminal> {
        self.flat_map(NestedMaybe::collapse)
    }
}

/// An `Outcome` layer sharing the failure type `E`, or the terminating [`Leaf`].
pub trait NestedOutcome<E> {
    /// The payload found below every layer.
    type Terminal;

    /// Collapses every layer into a single `Outcome`.
    fn collapse(self) -> Outcome<Self::Terminal, E>;
}

impl<T, E> NestedOutcome<E> for Leaf<T> {
    type Terminal = T;

    #[inline]
    fn collapse(self) -> Outcome<T, E> {
        Outcome::Success(self.0)
    }
}

impl<N, E> NestedOutcome<E> for Outcome<N, E>
where
    N: NestedOutcome<E>,
    E: Describable,
{
    type Terminal = N::Terminal;

    #[inline]
    fn collapse(self) -> Outcome<N::Terminal, E> {
        self.flat_map(NestedOutcome::collapse)
    }
}

impl<N: NestedMaybe> Maybe<N> {
    /// Unwraps every nested layer down to the [`Leaf`] payload.
    ///
    /// Stops at the first `Absent` layer.
    #[inline]
    pub fn flatten_deep(self) -> Maybe<N::Terminal> {
        NestedMaybe::collapse(self)
    }
}

impl<N, E> Outcome<N, E>
where
    N: NestedOutcome<E>,
    E: Describable,
{
    /// Unwraps every nested layer down to the [`Leaf`] payload.
    ///
    /// Stops at the first `Failure` layer and returns that failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Leaf, Outcome, ok, err};
    ///
    /// let deep: Outcome<Outcome<Outcome<Leaf<i32>, &str>, &str>, &str> = ok(ok(ok(Leaf(1))));
    /// assert_eq!(deep.flatten_deep(), ok(1));
    ///
    /// let broken: Outcome<Outcome<Leaf<i32>, &str>, &str> = ok(err("middle"));
    /// assert_eq!(broken.flatten_deep(), err("middle"));
    /// ```
    #[inline]
    pub fn flatten_deep(self) -> Outcome<N::Terminal, E> {
        NestedOutcome::collapse(self)
    }
}
