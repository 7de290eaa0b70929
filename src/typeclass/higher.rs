//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` and `Outcome<_, E>` as type
//! constructors directly. [`TypeConstructor`] uses a GAT to recover that
//! ability, which lets the collector strategies be written once for both
//! container families.
//!
//! # Example
//!
//! ```rust
//! use twofold::typeclass::TypeConstructor;
//! use twofold::Maybe;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Maybe<i32> = Maybe::Present(42);
//! let absent: Maybe<String> = transform_type(present);
//! assert_eq!(absent, Maybe::Absent);
//! ```

use crate::container::{Maybe, Outcome};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Outcome<i32, E>` it is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The failure channel of `Outcome` is part of the constructor, so
    /// `Outcome<i32, E>::WithType<String>` is `Outcome<String, E>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::GenericFailure;
    use rstest::rstest;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn maybe_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Maybe<String> = transform(Maybe::Present(42));
        assert_eq!(result, Maybe::Absent);
    }

    /// `Outcome<T, E>::WithType<B>` keeps the failure channel.
    #[test]
    fn outcome_with_type_preserves_error_type() {
        fn assert_outcome_with_type<T, E, B>()
        where
            Outcome<T, E>: TypeConstructor<Inner = T, WithType<B> = Outcome<B, E>>,
        {
        }

        assert_outcome_with_type::<i32, String, bool>();
        assert_outcome_with_type::<String, GenericFailure, i32>();
        assert_outcome_with_type::<Vec<u8>, std::io::Error, String>();
    }

    #[test]
    fn vec_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Vec<i32>>();
    }

    #[rstest]
    #[case(Maybe::Present(42))]
    #[case(Maybe::Absent)]
    fn maybe_with_type_inner_roundtrip(#[case] original: Maybe<i32>) {
        fn roundtrip<T: TypeConstructor>(value: T) -> T::WithType<T::Inner>
        where
            T: Into<T::WithType<T::Inner>>,
        {
            value.into()
        }

        let result: Maybe<i32> = roundtrip(original);
        assert_eq!(result, original);
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Outcome<i32, String> as TypeConstructor>::WithType<Vec<i32>>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_outcome_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_outcome_bool::<Step2>();
    }
}
