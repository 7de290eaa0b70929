//! Maybe type - a value or nothing.
//!
//! `Maybe<T>` is either `Present(T)` or `Absent`. Absence is a variant, not a
//! sentinel payload, so `Present` always holds a real value.
//!
//! Three operations are primitive: [`Maybe::unwrap`], [`Maybe::flat_map`]
//! and [`Maybe::or_else`]. Every transformation (`map`, `filter`, `and`,
//! `and_then`, `flatten`) is expressed through `flat_map`.
//!
//! # Examples
//!
//! ```rust
//! use twofold::{Maybe, some, none};
//!
//! let port = some("8080")
//!     .flat_map(|text| Maybe::from(text.parse::<u16>().ok()))
//!     .filter(|port| *port > 1024);
//! assert_eq!(port, some(8080));
//!
//! let label = none::<u16>().matches(|port| format!("port {port}"), || "unset".to_string());
//! assert_eq!(label, "unset");
//! ```

use super::error::{Describable, EmptyContainerAccessed, raise};
use super::outcome::Outcome;

/// An optional value: `Present(T)` or `Absent`.
///
/// Equality and hashing are structural: two `Present` values are equal iff
/// their payloads are equal, and all `Absent` values are equal.
///
/// # Examples
///
/// ```rust
/// use twofold::{Maybe, some, none};
///
/// let doubled = some(21).map(|x| x * 2);
/// assert_eq!(doubled, Maybe::Present(42));
/// assert_eq!(none::<i32>().unwrap_or(7), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

/// Constructs `Present(value)`.
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// Constructs `Absent`.
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::Absent
}

impl<T> Maybe<T> {
    // =========================================================================
    // Primitives
    // =========================================================================

    /// Returns the payload, consuming the container.
    ///
    /// # Panics
    ///
    /// Panics with [`EmptyContainerAccessed`] if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::some;
    ///
    /// assert_eq!(some("thing").unwrap(), "thing");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => raise(EmptyContainerAccessed::default()),
        }
    }

    /// Applies `function` to the payload and returns its result; `Absent`
    /// passes through without calling it.
    ///
    /// This is the monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Maybe, some, none};
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { some(n / 2) } else { none() }
    /// }
    ///
    /// assert_eq!(some(8).flat_map(half), some(4));
    /// assert_eq!(some(3).flat_map(half), none());
    /// assert_eq!(none().flat_map(half), none());
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns `self` if present, otherwise evaluates `supplier`.
    ///
    /// `supplier` runs only for `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{some, none};
    ///
    /// assert_eq!(some("one").or_else(|| some("other")), some("one"));
    /// assert_eq!(none().or_else(|| some("other")), some("other"));
    /// ```
    #[inline]
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => supplier(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the payload or [`EmptyContainerAccessed`] without panicking.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, EmptyContainerAccessed> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyContainerAccessed::default()),
        }
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with [`EmptyContainerAccessed`] carrying `reason` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use twofold::{Maybe, none};
    ///
    /// let missing: Maybe<u16> = none();
    /// missing.expect("port must be configured");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, reason: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => raise(EmptyContainerAccessed {
                reason: Some(reason.to_owned()),
            }),
        }
    }

    /// Returns the payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.unwrap_or_else(|| default)
    }

    /// Returns the payload or the result of `supplier`, which runs only for `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{some, none};
    ///
    /// assert_eq!(some(1).unwrap_or_else(|| unreachable!()), 1);
    /// assert_eq!(none().unwrap_or_else(|| 2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.matches(|value| value, supplier)
    }

    /// Returns the payload or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` for `Present`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if present and the payload satisfies `predicate`.
    #[inline]
    pub fn is_present_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.as_ref().map_or(false, predicate)
    }

    /// Returns `true` if present and the payload equals `candidate`.
    #[inline]
    pub fn contains(&self, candidate: &T) -> bool
    where
        T: PartialEq,
    {
        self.is_present_and(|value| value == candidate)
    }

    /// Borrows the payload: `Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Maybe, some, none};
    ///
    /// assert_eq!(some("four").map(str::len), some(4));
    /// assert_eq!(none::<&str>().map(str::len), none());
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        self.flat_map(|value| Maybe::Present(function(value)))
    }

    /// Applies `function` to the payload, or returns `default` for `Absent`.
    #[inline]
    pub fn map_or<R, F>(self, default: R, function: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        self.map(function).unwrap_or(default)
    }

    /// Applies `function` to the payload, or evaluates `default` for `Absent`.
    #[inline]
    pub fn map_or_else<R, D, F>(self, default: D, function: F) -> R
    where
        D: FnOnce() -> R,
        F: FnOnce(T) -> R,
    {
        self.matches(function, default)
    }

    /// Keeps the payload only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{some, none};
    ///
    /// assert_eq!(some(4).filter(|n| n % 2 == 0), some(4));
    /// assert_eq!(some(3).filter(|n| n % 2 == 0), none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.flat_map(|value| {
            if predicate(&value) {
                Maybe::Present(value)
            } else {
                Maybe::Absent
            }
        })
    }

    /// Exhaustive fold over both variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{some, none};
    ///
    /// assert_eq!(some(2).matches(|n| n * 10, || 0), 20);
    /// assert_eq!(none::<i32>().matches(|n| n * 10, || 0), 0);
    /// ```
    #[inline]
    pub fn matches<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Returns `self` if present, otherwise `other`.
    ///
    /// `other` is already evaluated; use [`Maybe::or_else`] to defer it.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        self.or_else(|| other)
    }

    /// Returns whichever side is present when exactly one is, otherwise `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Maybe, some, none};
    ///
    /// assert_eq!(some(1).xor(none()), some(1));
    /// assert_eq!(none().xor(some(2)), some(2));
    /// assert_eq!(some(1).xor(some(2)), none());
    /// assert_eq!(none::<i32>().xor(none()), none());
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        if self.is_present() ^ other.is_present() {
            self.or(other)
        } else {
            Self::Absent
        }
    }

    /// Returns `other` if `self` is present, discarding the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{some, none};
    ///
    /// assert_eq!(some("one").and(some("other")), some("other"));
    /// assert_eq!(some("one").and(none::<&str>()), none());
    /// assert_eq!(none::<&str>().and(some("other")), none());
    /// ```
    #[inline]
    pub fn and<R>(self, other: Maybe<R>) -> Maybe<R> {
        self.flat_map(|_| other)
    }

    /// Alias for [`Maybe::flat_map`].
    #[inline]
    pub fn and_then<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Taps
    // =========================================================================

    /// Runs `action` on the payload if present and returns `self` unchanged.
    #[inline]
    pub fn if_present<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` if absent and returns `self` unchanged.
    #[inline]
    pub fn if_absent<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            action();
        }
        self
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts to an [`Outcome`]: `Present` becomes `Success`, `Absent`
    /// becomes `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, some, none};
    ///
    /// assert_eq!(some(5).ok_or("missing"), Outcome::Success(5));
    /// assert_eq!(none::<i32>().ok_or("missing"), Outcome::Failure("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E: Describable>(self, error: E) -> Outcome<T, E> {
        self.ok_or_else(|| error)
    }

    /// Converts to an [`Outcome`], evaluating `error` only for `Absent`.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        E: Describable,
        F: FnOnce() -> E,
    {
        self.matches(Outcome::Success, || Outcome::Failure(error()))
    }

    /// Converts to a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.matches(Some, || None)
    }

    /// Builds a `Maybe` from a standard [`Option`].
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Present)
    }

    /// Iterates over the payload: one item for `Present`, none for `Absent`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_option())
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// For deeper nesting see [`Maybe::flatten_deep`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Maybe, some, none};
    ///
    /// assert_eq!(some(some(3)).flatten(), some(3));
    /// assert_eq!(some(none::<i32>()).flatten(), none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(v)` becomes `Present(v)`, `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

/// Borrowing iterator over a [`Maybe`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`Maybe`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
