//! Positive/negative view shared by both container families.
//!
//! A collector does not care whether it folds `Maybe`s or `Outcome`s; it
//! only needs to split each element into a positive payload or a negative
//! one, and to rebuild a container of the same family around the result.

use crate::container::{GenericFailure, Maybe, Outcome};
use crate::typeclass::TypeConstructor;

/// Splits a container into its positive payload or its negative remainder.
///
/// For `Maybe` the negative side carries nothing (`()`); for `Outcome` it is
/// the failure payload.
pub trait Polarity: TypeConstructor + Sized {
    /// What a negative element carries.
    type Negative;

    /// `Ok` for `Present`/`Success`, `Err` for `Absent`/`Failure`.
    fn into_polarity(self) -> Result<Self::Inner, Self::Negative>;

    /// Builds a positive container of the same family.
    fn positive<B>(value: B) -> Self::WithType<B>;

    /// Builds a negative container of the same family.
    fn negative<B>(negative: Self::Negative) -> Self::WithType<B>;
}

/// Families that can express "no element was ever seen" as a negative.
///
/// Used by the any-or-last collector when its input is empty.
pub trait Exhaustible: Polarity {
    /// The canonical negative reported for an empty input.
    fn exhausted<B>() -> Self::WithType<B>;
}

impl<T> Polarity for Maybe<T> {
    type Negative = ();

    #[inline]
    fn into_polarity(self) -> Result<T, ()> {
        self.into_option().ok_or(())
    }

    #[inline]
    fn positive<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn negative<B>((): ()) -> Maybe<B> {
        Maybe::Absent
    }
}

impl<T> Exhaustible for Maybe<T> {
    #[inline]
    fn exhausted<B>() -> Maybe<B> {
        Maybe::Absent
    }
}

impl<T, E> Polarity for Outcome<T, E> {
    type Negative = E;

    #[inline]
    fn into_polarity(self) -> Result<T, E> {
        self.into()
    }

    #[inline]
    fn positive<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn negative<B>(negative: E) -> Outcome<B, E> {
        Outcome::Failure(negative)
    }
}

/// An empty input becomes `Failure(E::from(GenericFailure))`.
impl<T, E: From<GenericFailure>> Exhaustible for Outcome<T, E> {
    #[inline]
    fn exhausted<B>() -> Outcome<B, E> {
        Outcome::Failure(E::from(GenericFailure))
    }
}
