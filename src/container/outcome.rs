//! Outcome type - a value or a typed failure.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. It mirrors
//! [`Maybe`] combinator for combinator, with a second axis for the failure
//! channel: every success-side operation has a failure-side twin, and each
//! call transforms exactly one channel.
//!
//! The primitives are [`Outcome::unwrap`], [`Outcome::unwrap_err`],
//! [`Outcome::flat_map`] and [`Outcome::flat_map_err`].
//!
//! # Examples
//!
//! ```rust
//! use twofold::{Outcome, ok, err, some, none};
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! assert_eq!(parse("5").map(|n| n * 2), ok(10));
//! assert_eq!(parse("5").ok_to_option(), some(5));
//! assert_eq!(parse("x").ok_to_option(), none());
//! assert!(parse("x").err_to_option().is_present());
//! ```

use super::error::{Describable, GenericFailure, UnexpectedFailure, UnexpectedSuccess, raise};
use super::maybe::{IntoIter, Iter, Maybe};

/// The outcome of a fallible computation: `Success(T)` or `Failure(E)`.
///
/// Library code only builds `Outcome`s whose failure type is
/// [`Describable`]. Equality and hashing are structural on the active payload.
///
/// # Examples
///
/// ```rust
/// use twofold::{Outcome, ok, err};
///
/// let success: Outcome<i32, &str> = ok(42);
/// let failure: Outcome<i32, &str> = err("boom");
///
/// assert_eq!(success.map(|x| x + 1), Outcome::Success(43));
/// assert_eq!(failure.map_err(str::len), Outcome::Failure(4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation succeeded.
    Success(T),
    /// The computation failed.
    Failure(E),
}

/// Constructs `Success(value)`.
#[inline]
pub const fn ok<T, E: Describable>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Constructs a success that carries no meaningful payload.
///
/// # Examples
///
/// ```rust
/// use twofold::{Outcome, ok_unit};
///
/// let done: Outcome<(), String> = ok_unit();
/// assert_eq!(done, Outcome::Success(()));
/// ```
#[inline]
pub const fn ok_unit<E: Describable>() -> Outcome<(), E> {
    Outcome::Success(())
}

/// Constructs `Failure(error)`.
#[inline]
pub const fn err<T, E: Describable>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Constructs a failure carrying the canonical [`GenericFailure`].
#[inline]
pub const fn err_generic<T>() -> Outcome<T, GenericFailure> {
    Outcome::Failure(GenericFailure)
}

impl<T, E: Describable> Outcome<T, E> {
    // =========================================================================
    // Primitives
    // =========================================================================

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UnexpectedFailure`] wrapping the failure payload if this
    /// is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use twofold::{Outcome, err};
    ///
    /// let failed: Outcome<i32, &str> = err("timeout");
    /// failed.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => raise(UnexpectedFailure {
                reason: None,
                failure,
            }),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UnexpectedSuccess`] if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Success(_) => raise(UnexpectedSuccess::default()),
            Self::Failure(failure) => failure,
        }
    }

    /// Applies `function` to the success payload; failures pass through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, ok, err};
    ///
    /// let checked = |n: i32| if n >= 0 { ok(n) } else { err("negative") };
    /// assert_eq!(ok(3).flat_map(checked), ok(3));
    /// assert_eq!(ok(-3).flat_map(checked), err("negative"));
    /// assert_eq!(err::<i32, _>("earlier").flat_map(checked), err("earlier"));
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Applies `function` to the failure payload; successes pass through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, ok, err};
    ///
    /// let recovered: Outcome<i32, String> =
    ///     err::<i32, &str>("missing").flat_map_err(|_| ok(0));
    /// assert_eq!(recovered, ok(0));
    /// ```
    #[inline]
    pub fn flat_map_err<F, G>(self, function: G) -> Outcome<T, F>
    where
        F: Describable,
        G: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => function(failure),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success payload or [`UnexpectedFailure`] without panicking.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnexpectedFailure<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(UnexpectedFailure {
                reason: None,
                failure,
            }),
        }
    }

    /// Returns the failure payload or [`UnexpectedSuccess`] without panicking.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnexpectedSuccess> {
        match self {
            Self::Success(_) => Err(UnexpectedSuccess::default()),
            Self::Failure(failure) => Ok(failure),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UnexpectedFailure`] carrying `reason` and the failure payload.
    #[inline]
    #[track_caller]
    pub fn expect(self, reason: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => raise(UnexpectedFailure {
                reason: Some(reason.to_owned()),
                failure,
            }),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`UnexpectedSuccess`] carrying `reason` if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, reason: &str) -> E {
        match self {
            Self::Success(_) => raise(UnexpectedSuccess {
                reason: Some(reason.to_owned()),
            }),
            Self::Failure(failure) => failure,
        }
    }

    /// Returns the success payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.unwrap_or_else(|_| default)
    }

    /// Returns the success payload, or derives one from the failure.
    ///
    /// `function` runs only for `Failure`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.matches(|value| value, function)
    }

    /// Returns the success payload or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` for a success whose payload satisfies `predicate`.
    #[inline]
    pub fn is_success_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` for a failure whose payload satisfies `predicate`.
    #[inline]
    pub fn is_failure_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(failure) => predicate(failure),
        }
    }

    /// Returns `true` for a success equal to `candidate`.
    #[inline]
    pub fn contains(&self, candidate: &T) -> bool
    where
        T: PartialEq,
    {
        self.is_success_and(|value| value == candidate)
    }

    /// Returns `true` for a failure equal to `candidate`.
    #[inline]
    pub fn contains_err(&self, candidate: &E) -> bool
    where
        E: PartialEq,
    {
        self.is_failure_and(|failure| failure == candidate)
    }

    /// Borrows both payloads: `Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to the success payload.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        self.flat_map(|value| Outcome::Success(function(value)))
    }

    /// Applies `function` to the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, ok, err};
    ///
    /// let failure: Outcome<i32, &str> = err("bad input");
    /// assert_eq!(failure.map_err(|e| format!("parse: {e}")), err("parse: bad input".to_string()));
    ///
    /// let success: Outcome<i32, &str> = ok(1);
    /// assert_eq!(success.map_err(str::len), ok(1));
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, function: G) -> Outcome<T, F>
    where
        F: Describable,
        G: FnOnce(E) -> F,
    {
        self.flat_map_err(|failure| Outcome::Failure(function(failure)))
    }

    /// Applies `function` to the success payload, or returns `default`.
    #[inline]
    pub fn map_or<R, F>(self, default: R, function: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        self.matches(function, |_| default)
    }

    /// Folds both channels: `on_failure` for failures, `on_success` for successes.
    #[inline]
    pub fn map_or_else<R, D, F>(self, on_failure: D, on_success: F) -> R
    where
        D: FnOnce(E) -> R,
        F: FnOnce(T) -> R,
    {
        self.matches(on_success, on_failure)
    }

    /// Exhaustive fold over both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, ok, err};
    ///
    /// let render = |o: Outcome<i32, &str>| o.matches(|n| n.to_string(), |e| e.to_uppercase());
    /// assert_eq!(render(ok(7)), "7");
    /// assert_eq!(render(err("late")), "LATE");
    /// ```
    #[inline]
    pub fn matches<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Returns `other` if `self` succeeded, otherwise the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, ok, err};
    ///
    /// assert_eq!(ok::<i32, &str>(1).and(ok::<&str, &str>("two")), ok("two"));
    /// assert_eq!(err::<i32, &str>("first").and(err::<i32, &str>("second")), err("first"));
    /// ```
    #[inline]
    pub fn and<R>(self, other: Outcome<R, E>) -> Outcome<R, E> {
        self.flat_map(|_| other)
    }

    /// Alias for [`Outcome::flat_map`].
    #[inline]
    pub fn and_then<R, F>(self, function: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> Outcome<R, E>,
    {
        self.flat_map(function)
    }

    /// Returns `self` if it succeeded, otherwise `other`.
    ///
    /// When both failed the second failure is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, ok, err};
    ///
    /// assert_eq!(err::<i32, &str>("first").or(ok::<i32, &str>(2)), ok(2));
    /// assert_eq!(err::<i32, &str>("first").or(err::<i32, &str>("second")), err("second"));
    /// assert_eq!(ok::<i32, &str>(1).or(err::<i32, &str>("second")), ok(1));
    /// ```
    #[inline]
    pub fn or<F: Describable>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        self.flat_map_err(|_| other)
    }

    /// Alias for [`Outcome::flat_map_err`]; `function` runs only for `Failure`.
    #[inline]
    pub fn or_else<F, G>(self, function: G) -> Outcome<T, F>
    where
        F: Describable,
        G: FnOnce(E) -> Outcome<T, F>,
    {
        self.flat_map_err(function)
    }

    // =========================================================================
    // Taps
    // =========================================================================

    /// Runs `action` on the success payload and returns `self` unchanged.
    #[inline]
    pub fn if_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the failure payload and returns `self` unchanged.
    #[inline]
    pub fn if_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(failure) = &self {
            action(failure);
        }
        self
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// `Success(v)` becomes `Present(v)`, a failure becomes `Absent`.
    #[inline]
    pub fn ok_to_option(self) -> Maybe<T> {
        self.matches(Maybe::Present, |_| Maybe::Absent)
    }

    /// `Failure(e)` becomes `Present(e)`, a success becomes `Absent`.
    #[inline]
    pub fn err_to_option(self) -> Maybe<E> {
        self.matches(|_| Maybe::Absent, Maybe::Present)
    }

    /// Converts to a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.matches(Ok, Err)
    }

    /// Iterates over the success payload: one item for `Success`, none for `Failure`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Success(value) => Iter::new(Some(value)),
            Self::Failure(_) => Iter::new(None),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T, E: Describable> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// For deeper nesting see [`Outcome::flatten_deep`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, ok, err};
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = ok(ok(3));
    /// assert_eq!(nested.flatten(), ok(3));
    ///
    /// let inner_failure: Outcome<Outcome<i32, &str>, &str> = ok(err("inner"));
    /// assert_eq!(inner_failure.flatten(), err("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Success(value) => Maybe::Present(value),
            Self::Failure(_) => Maybe::Absent,
        }
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_unwrap_success() {
        assert_eq!(ok::<_, &str>("value").unwrap(), "value");
    }

    #[rstest]
    #[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value: boom")]
    fn test_unwrap_failure_panics_with_payload() {
        err::<i32, _>("boom").unwrap();
    }

    #[rstest]
    #[should_panic(expected = "called `Outcome::unwrap_err()` on a `Success` value")]
    fn test_unwrap_err_success_panics() {
        ok::<i32, &str>(1).unwrap_err();
    }

    #[rstest]
    #[should_panic(expected = "reading config: generic failure")]
    fn test_expect_failure_panics_with_reason() {
        err_generic::<i32>().expect("reading config");
    }

    #[rstest]
    fn test_try_unwrap_keeps_failure_as_context() {
        let error = err::<i32, _>("boom").try_unwrap().unwrap_err();
        assert_eq!(error.failure, "boom");
        assert_eq!(error.reason, None);
    }

    #[rstest]
    fn test_map_touches_only_success_channel() {
        let failure: Outcome<i32, &str> = err("e");
        assert_eq!(failure.map(|n| n + 1), err("e"));
        let success: Outcome<i32, &str> = ok(1);
        assert_eq!(success.map_err(str::len), ok(1));
    }

    #[rstest]
    fn test_or_else_is_lazy_for_success() {
        let called = Cell::new(false);
        let result: Outcome<i32, &str> = ok::<i32, &str>(1).or_else(|_| {
            called.set(true);
            ok(2)
        });
        assert_eq!(result, ok(1));
        assert!(!called.get());
    }

    #[rstest]
    fn test_cross_conversion() {
        assert_eq!(ok::<i32, &str>(5).ok_to_option(), Maybe::Present(5));
        assert_eq!(err::<i32, &str>("e").ok_to_option(), Maybe::Absent);
        assert_eq!(err::<i32, &str>("e").err_to_option(), Maybe::Present("e"));
        assert_eq!(ok::<i32, &str>(5).err_to_option(), Maybe::Absent);
    }

    #[rstest]
    fn test_taps_return_self() {
        let seen = Cell::new(0);
        let success = ok::<i32, &str>(3)
            .if_success(|v| seen.set(*v))
            .if_failure(|_| seen.set(-1));
        assert_eq!(success, ok(3));
        assert_eq!(seen.get(), 3);

        let failure = err::<i32, &str>("e")
            .if_success(|_| seen.set(0))
            .if_failure(|e| seen.set(-(e.len() as i32)));
        assert_eq!(failure, err("e"));
        assert_eq!(seen.get(), -1);
    }

    #[rstest]
    fn test_ok_unit_is_success_of_unit() {
        assert_eq!(ok_unit::<GenericFailure>(), Outcome::Success(()));
    }

    #[rstest]
    fn test_result_roundtrip() {
        let outcome: Outcome<i32, String> = Err::<i32, String>("e".into()).into();
        assert_eq!(outcome, err("e".to_string()));
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Err("e".to_string()));
    }
}
