//! Delegation of the `Maybe` capability set to a wrapped container.

use crate::container::{Describable, EmptyContainerAccessed, Iter, Maybe, Outcome};

/// A wrapper around a [`Maybe`] that exposes the same operations.
///
/// Implementors declare one accessor, [`ForwardingMaybe::inner`]; every
/// other method delegates to the wrapped container. Value-producing methods
/// work on a clone of the wrapped container and leave the wrapper intact.
///
/// # Examples
///
/// ```rust
/// use twofold::forward::ForwardingMaybe;
/// use twofold::{Maybe, some};
///
/// /// A user id that may not have been assigned yet.
/// struct PendingId {
///     id: Maybe<u64>,
/// }
///
/// impl ForwardingMaybe for PendingId {
///     type Item = u64;
///
///     fn inner(&self) -> &Maybe<u64> {
///         &self.id
///     }
/// }
///
/// let pending = PendingId { id: some(7) };
/// assert_eq!(pending.unwrap(), 7);
/// assert_eq!(pending.map(|id| id * 2), some(14));
/// assert!(pending.is_present());
/// ```
pub trait ForwardingMaybe {
    /// The payload type of the wrapped container.
    type Item;

    /// The wrapped container.
    fn inner(&self) -> &Maybe<Self::Item>;

    /// A copy of the wrapped container.
    fn to_maybe(&self) -> Maybe<Self::Item>
    where
        Self::Item: Clone,
    {
        self.inner().clone()
    }

    /// See [`Maybe::unwrap`].
    ///
    /// # Panics
    ///
    /// Panics if the wrapped container is `Absent`.
    #[track_caller]
    fn unwrap(&self) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.to_maybe().unwrap()
    }

    /// See [`Maybe::try_unwrap`].
    fn try_unwrap(&self) -> Result<Self::Item, EmptyContainerAccessed>
    where
        Self::Item: Clone,
    {
        self.to_maybe().try_unwrap()
    }

    /// See [`Maybe::expect`].
    ///
    /// # Panics
    ///
    /// Panics with `reason` if the wrapped container is `Absent`.
    #[track_caller]
    fn expect(&self, reason: &str) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.to_maybe().expect(reason)
    }

    /// See [`Maybe::unwrap_or_default`].
    fn unwrap_or_default(&self) -> Self::Item
    where
        Self::Item: Clone + Default,
    {
        self.to_maybe().unwrap_or_default()
    }

    /// See [`Maybe::flat_map`].
    fn flat_map<R, F>(&self, function: F) -> Maybe<R>
    where
        Self::Item: Clone,
        F: FnOnce(Self::Item) -> Maybe<R>,
    {
        self.to_maybe().flat_map(function)
    }

    /// See [`Maybe::or_else`].
    fn or_else<F>(&self, supplier: F) -> Maybe<Self::Item>
    where
        Self::Item: Clone,
        F: FnOnce() -> Maybe<Self::Item>,
    {
        self.to_maybe().or_else(supplier)
    }

    /// See [`Maybe::map`].
    fn map<R, F>(&self, function: F) -> Maybe<R>
    where
        Self::Item: Clone,
        F: FnOnce(Self::Item) -> R,
    {
        self.to_maybe().map(function)
    }

    /// See [`Maybe::map_or`].
    fn map_or<R, F>(&self, default: R, function: F) -> R
    where
        Self::Item: Clone,
        F: FnOnce(Self::Item) -> R,
    {
        self.to_maybe().map_or(default, function)
    }

    /// See [`Maybe::map_or_else`].
    fn map_or_else<R, D, F>(&self, default: D, function: F) -> R
    where
        Self::Item: Clone,
        D: FnOnce() -> R,
        F: FnOnce(Self::Item) -> R,
    {
        self.to_maybe().map_or_else(default, function)
    }

    /// See [`Maybe::filter`].
    fn filter<P>(&self, predicate: P) -> Maybe<Self::Item>
    where
        Self::Item: Clone,
        P: FnOnce(&Self::Item) -> bool,
    {
        self.to_maybe().filter(predicate)
    }

    /// See [`Maybe::or`].
    fn or(&self, other: Maybe<Self::Item>) -> Maybe<Self::Item>
    where
        Self::Item: Clone,
    {
        self.to_maybe().or(other)
    }

    /// See [`Maybe::xor`].
    fn xor(&self, other: Maybe<Self::Item>) -> Maybe<Self::Item>
    where
        Self::Item: Clone,
    {
        self.to_maybe().xor(other)
    }

    /// See [`Maybe::and`].
    fn and<R>(&self, other: Maybe<R>) -> Maybe<R> {
        self.inner().as_ref().and(other)
    }

    /// See [`Maybe::and_then`].
    fn and_then<R, F>(&self, function: F) -> Maybe<R>
    where
        Self::Item: Clone,
        F: FnOnce(Self::Item) -> Maybe<R>,
    {
        self.flat_map(function)
    }

    /// See [`Maybe::unwrap_or`].
    fn unwrap_or(&self, default: Self::Item) -> Self::Item
    where
        Self::Item: Clone,
    {
        self.to_maybe().unwrap_or(default)
    }

    /// See [`Maybe::unwrap_or_else`].
    fn unwrap_or_else<F>(&self, supplier: F) -> Self::Item
    where
        Self::Item: Clone,
        F: FnOnce() -> Self::Item,
    {
        self.to_maybe().unwrap_or_else(supplier)
    }

    /// See [`Maybe::matches`].
    fn matches<R, P, A>(&self, on_present: P, on_absent: A) -> R
    where
        Self::Item: Clone,
        P: FnOnce(Self::Item) -> R,
        A: FnOnce() -> R,
    {
        self.to_maybe().matches(on_present, on_absent)
    }

    /// See [`Maybe::if_present`]. Returns the wrapper itself.
    fn if_present<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&Self::Item),
    {
        if let Maybe::Present(value) = self.inner() {
            action(value);
        }
        self
    }

    /// See [`Maybe::if_absent`]. Returns the wrapper itself.
    fn if_absent<F>(&self, action: F) -> &Self
    where
        F: FnOnce(),
    {
        if self.inner().is_absent() {
            action();
        }
        self
    }

    /// See [`Maybe::ok_or`].
    fn ok_or<E: Describable>(&self, error: E) -> Outcome<Self::Item, E>
    where
        Self::Item: Clone,
    {
        self.to_maybe().ok_or(error)
    }

    /// See [`Maybe::ok_or_else`].
    fn ok_or_else<E, F>(&self, error: F) -> Outcome<Self::Item, E>
    where
        Self::Item: Clone,
        E: Describable,
        F: FnOnce() -> E,
    {
        self.to_maybe().ok_or_else(error)
    }

    /// See [`Maybe::is_present`].
    fn is_present(&self) -> bool {
        self.inner().is_present()
    }

    /// See [`Maybe::is_absent`].
    fn is_absent(&self) -> bool {
        self.inner().is_absent()
    }

    /// See [`Maybe::is_present_and`].
    fn is_present_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&Self::Item) -> bool,
    {
        self.inner().is_present_and(predicate)
    }

    /// See [`Maybe::contains`].
    fn contains(&self, candidate: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.inner().contains(candidate)
    }

    /// See [`Maybe::iter`].
    fn iter(&self) -> Iter<'_, Self::Item> {
        self.inner().iter()
    }
}
