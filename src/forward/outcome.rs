//! Delegation of the `Outcome` capability set to a wrapped container.

use crate::container::{
    Describable, Iter, Maybe, Outcome, UnexpectedFailure, UnexpectedSuccess,
};

/// A wrapper around an [`Outcome`] that exposes the same operations.
///
/// Implementors declare one accessor, [`ForwardingOutcome::inner`]; every
/// other method delegates to the wrapped container, working on a clone
/// where the operation consumes its receiver.
///
/// # Examples
///
/// ```rust
/// use twofold::forward::ForwardingOutcome;
/// use twofold::{Outcome, ok};
///
/// struct Validated(Outcome<u32, String>);
///
/// impl ForwardingOutcome for Validated {
///     type Item = u32;
///     type Error = String;
///
///     fn inner(&self) -> &Outcome<u32, String> {
///         &self.0
///     }
/// }
///
/// let age = Validated(ok(30));
/// assert_eq!(age.unwrap(), 30);
/// assert_eq!(age.map(|years| years * 12), ok(360));
/// ```
pub trait ForwardingOutcome {
    /// The success payload type of the wrapped container.
    type Item;
    /// The failure payload type of the wrapped container.
    type Error: Describable;

    /// The wrapped container.
    fn inner(&self) -> &Outcome<Self::Item, Self::Error>;

    /// A copy of the wrapped container.
    fn to_outcome(&self) -> Outcome<Self::Item, Self::Error>
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.inner().clone()
    }

    /// See [`Outcome::unwrap`].
    ///
    /// # Panics
    ///
    /// Panics if the wrapped container is a `Failure`.
    #[track_caller]
    fn unwrap(&self) -> Self::Item
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().unwrap()
    }

    /// See [`Outcome::try_unwrap`].
    fn try_unwrap(&self) -> Result<Self::Item, UnexpectedFailure<Self::Error>>
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().try_unwrap()
    }

    /// See [`Outcome::unwrap_err`].
    ///
    /// # Panics
    ///
    /// Panics if the wrapped container is a `Success`.
    #[track_caller]
    fn unwrap_err(&self) -> Self::Error
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().unwrap_err()
    }

    /// See [`Outcome::try_unwrap_err`].
    fn try_unwrap_err(&self) -> Result<Self::Error, UnexpectedSuccess>
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().try_unwrap_err()
    }

    /// See [`Outcome::expect`].
    ///
    /// # Panics
    ///
    /// Panics with `reason` and the failure payload if the wrapped container
    /// is a `Failure`.
    #[track_caller]
    fn expect(&self, reason: &str) -> Self::Item
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().expect(reason)
    }

    /// See [`Outcome::expect_err`].
    ///
    /// # Panics
    ///
    /// Panics with `reason` if the wrapped container is a `Success`.
    #[track_caller]
    fn expect_err(&self, reason: &str) -> Self::Error
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().expect_err(reason)
    }

    /// See [`Outcome::unwrap_or_default`].
    fn unwrap_or_default(&self) -> Self::Item
    where
        Self::Item: Clone + Default,
        Self::Error: Clone,
    {
        self.to_outcome().unwrap_or_default()
    }

    /// See [`Outcome::flat_map`].
    fn flat_map<R, F>(&self, function: F) -> Outcome<R, Self::Error>
    where
        Self::Item: Clone,
        Self::Error: Clone,
        F: FnOnce(Self::Item) -> Outcome<R, Self::Error>,
    {
        self.to_outcome().flat_map(function)
    }

    /// See [`Outcome::flat_map_err`].
    fn flat_map_err<F, G>(&self, function: G) -> Outcome<Self::Item, F>
    where
        Self::Item: Clone,
        Self::Error: Clone,
        F: Describable,
        G: FnOnce(Self::Error) -> Outcome<Self::Item, F>,
    {
        self.to_outcome().flat_map_err(function)
    }

    /// See [`Outcome::and_then`].
    fn and_then<R, F>(&self, function: F) -> Outcome<R, Self::Error>
    where
        Self::Item: Clone,
        Self::Error: Clone,
        F: FnOnce(Self::Item) -> Outcome<R, Self::Error>,
    {
        self.flat_map(function)
    }

    /// See [`Outcome::or_else`].
    fn or_else<F, G>(&self, function: G) -> Outcome<Self::Item, F>
    where
        Self::Item: Clone,
        Self::Error: Clone,
        F: Describable,
        G: FnOnce(Self::Error) -> Outcome<Self::Item, F>,
    {
        self.flat_map_err(function)
    }

    /// See [`Outcome::map`].
    fn map<R, F>(&self, function: F) -> Outcome<R, Self::Error>
    where
        Self::Item: Clone,
        Self::Error: Clone,
        F: FnOnce(Self::Item) -> R,
    {
        self.to_outcome().map(function)
    }

    /// See [`Outcome::map_err`].
    fn map_err<F, G>(&self, function: G) -> Outcome<Self::Item, F>
    where
        Self::Item: Clone,
        Self::Error: Clone,
        F: Describable,
        G: FnOnce(Self::Error) -> F,
    {
        self.to_outcome().map_err(function)
    }

    /// See [`Outcome::map_or`].
    fn map_or<R, F>(&self, default: R, function: F) -> R
    where
        Self::Item: Clone,
        Self::Error: Clone,
        F: FnOnce(Self::Item) -> R,
    {
        self.to_outcome().map_or(default, function)
    }

    /// See [`Outcome::map_or_else`].
    fn map_or_else<R, D, F>(&self, on_failure: D, on_success: F) -> R
    where
        Self::Item: Clone,
        Self::Error: Clone,
        D: FnOnce(Self::Error) -> R,
        F: FnOnce(Self::Item) -> R,
    {
        self.to_outcome().map_or_else(on_failure, on_success)
    }

    /// See [`Outcome::and`].
    fn and<R>(&self, other: Outcome<R, Self::Error>) -> Outcome<R, Self::Error>
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().and(other)
    }

    /// See [`Outcome::or`].
    fn or<F: Describable>(&self, other: Outcome<Self::Item, F>) -> Outcome<Self::Item, F>
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().or(other)
    }

    /// See [`Outcome::unwrap_or`].
    fn unwrap_or(&self, default: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().unwrap_or(default)
    }

    /// See [`Outcome::unwrap_or_else`].
    fn unwrap_or_else<F>(&self, function: F) -> Self::Item
    where
        Self::Item: Clone,
        Self::Error: Clone,
        F: FnOnce(Self::Error) -> Self::Item,
    {
        self.to_outcome().unwrap_or_else(function)
    }

    /// See [`Outcome::matches`].
    fn matches<R, S, F>(&self, on_success: S, on_failure: F) -> R
    where
        Self::Item: Clone,
        Self::Error: Clone,
        S: FnOnce(Self::Item) -> R,
        F: FnOnce(Self::Error) -> R,
    {
        self.to_outcome().matches(on_success, on_failure)
    }

    /// See [`Outcome::if_success`]. Returns the wrapper itself.
    fn if_success<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&Self::Item),
    {
        if let Outcome::Success(value) = self.inner() {
            action(value);
        }
        self
    }

    /// See [`Outcome::if_failure`]. Returns the wrapper itself.
    fn if_failure<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&Self::Error),
    {
        if let Outcome::Failure(failure) = self.inner() {
            action(failure);
        }
        self
    }

    /// See [`Outcome::ok_to_option`].
    fn ok_to_option(&self) -> Maybe<Self::Item>
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().ok_to_option()
    }

    /// See [`Outcome::err_to_option`].
    fn err_to_option(&self) -> Maybe<Self::Error>
    where
        Self::Item: Clone,
        Self::Error: Clone,
    {
        self.to_outcome().err_to_option()
    }

    /// See [`Outcome::is_success`].
    fn is_success(&self) -> bool {
        self.inner().is_success()
    }

    /// See [`Outcome::is_failure`].
    fn is_failure(&self) -> bool {
        self.inner().is_failure()
    }

    /// See [`Outcome::is_success_and`].
    fn is_success_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&Self::Item) -> bool,
    {
        self.inner().is_success_and(predicate)
    }

    /// See [`Outcome::is_failure_and`].
    fn is_failure_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&Self::Error) -> bool,
    {
        self.inner().is_failure_and(predicate)
    }

    /// See [`Outcome::contains`].
    fn contains(&self, candidate: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.inner().contains(candidate)
    }

    /// See [`Outcome::contains_err`].
    fn contains_err(&self, candidate: &Self::Error) -> bool
    where
        Self::Error: PartialEq,
    {
        self.inner().contains_err(candidate)
    }

    /// See [`Outcome::iter`].
    fn iter(&self) -> Iter<'_, Self::Item> {
        self.inner().iter()
    }
}
