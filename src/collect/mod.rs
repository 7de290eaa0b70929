//! Collector strategies reducing a sequence of containers to one container.
//!
//! - [`AllOrNothing`]: all payloads if every element is positive, otherwise
//!   the first negative element
//! - [`AnyOrLast`]: all positive payloads if there is at least one,
//!   otherwise the last negative element
//!
//! Both strategies are written once against [`Polarity`], which is
//! implemented by `Maybe` and `Outcome`. Each is a single-pass fold with an
//! associative merge step, so the same collector runs sequentially through
//! [`collect_with`] or as a fork-join reduction through `par_collect_with`
//! (`rayon` feature).
//!
//! # Examples
//!
//! ```rust
//! use twofold::{Maybe, some, none};
//!
//! assert_eq!(Maybe::all_or_nothing(vec![some(1), some(2), some(3)]), some(vec![1, 2, 3]));
//! assert_eq!(Maybe::all_or_nothing(vec![some(1), none(), some(3)]), none());
//! assert_eq!(Maybe::any_or_last(vec![some(1), none(), some(3)]), some(vec![1, 3]));
//! assert_eq!(Maybe::<i32>::any_or_last(vec![none(), none()]), none());
//!
//! // `collect` uses the all-or-nothing strategy.
//! let collected: Maybe<Vec<i32>> = vec![some(1), some(2)].into_iter().collect();
//! assert_eq!(collected, some(vec![1, 2]));
//! ```

mod all_or_nothing;
mod any_or_last;
mod collector;
mod polarity;

pub use all_or_nothing::{AllOrNothing, AllOrNothingState};
pub use any_or_last::{AnyOrLast, AnyOrLastState};
pub use collector::{Collector, collect_with};
pub use polarity::{Exhaustible, Polarity};

#[cfg(feature = "rayon")]
pub use collector::par_collect_with;

use crate::container::{Describable, GenericFailure, Maybe, Outcome};

impl<T> Maybe<T> {
    /// Collects every payload, or returns `Absent` if any element is absent.
    #[inline]
    pub fn all_or_nothing<I>(items: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        collect_with(items, &AllOrNothing::new())
    }

    /// Collects the present payloads, or returns `Absent` if there are none.
    #[inline]
    pub fn any_or_last<I>(items: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        collect_with(items, &AnyOrLast::new())
    }
}

impl<T, E: Describable> Outcome<T, E> {
    /// Collects every success payload, or returns the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, ok, err};
    ///
    /// let outcomes: Vec<Outcome<i32, &str>> = vec![ok(1), err("a"), ok(3), err("b")];
    /// assert_eq!(Outcome::all_or_nothing(outcomes), err("a"));
    /// ```
    #[inline]
    pub fn all_or_nothing<I>(items: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        collect_with(items, &AllOrNothing::new())
    }

    /// Collects the success payloads, or returns the last failure if there
    /// are none.
    ///
    /// An empty input yields `Failure(E::from(GenericFailure))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{GenericFailure, Outcome, err};
    ///
    /// let nothing: Vec<Outcome<i32, GenericFailure>> = vec![];
    /// assert_eq!(Outcome::any_or_last(nothing), err(GenericFailure));
    /// ```
    #[inline]
    pub fn any_or_last<I>(items: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
        E: From<GenericFailure>,
    {
        collect_with(items, &AnyOrLast::new())
    }
}

impl<T> FromIterator<Maybe<T>> for Maybe<Vec<T>> {
    /// Uses [`AllOrNothing`].
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(items: I) -> Self {
        Maybe::all_or_nothing(items)
    }
}

impl<T, E: Describable> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    /// Uses [`AllOrNothing`].
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(items: I) -> Self {
        Outcome::all_or_nothing(items)
    }
}
