//! The "or" collector: every positive payload, or the last negative.

use std::fmt;
use std::marker::PhantomData;

use super::collector::Collector;
use super::polarity::Exhaustible;
use crate::typeclass::{Monoid, Semigroup};

/// Partial state of an any-or-last fold.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AnyOrLastState<T, N> {
    /// Positive payloads in encounter order.
    pub positives: Vec<T>,
    /// The most recent negative seen, if any.
    pub last_negative: Option<N>,
}

/// Positives concatenate; the right side's negative is the more recent one.
impl<T, N> Semigroup for AnyOrLastState<T, N> {
    fn combine(self, other: Self) -> Self {
        Self {
            positives: self.positives.combine(other.positives),
            last_negative: other.last_negative.or(self.last_negative),
        }
    }
}

impl<T, N> Monoid for AnyOrLastState<T, N> {
    fn empty() -> Self {
        Self {
            positives: Vec::new(),
            last_negative: None,
        }
    }
}

/// Succeeds with every positive payload iff at least one element is
/// positive, dropping the negatives. Otherwise returns the last negative.
///
/// An empty input has no last negative; it yields the family's canonical
/// empty failure ([`Exhaustible::exhausted`]): `Absent` for `Maybe`, and
/// `Failure(E::from(GenericFailure))` for `Outcome`.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::{AnyOrLast, collect_with};
/// use twofold::{Outcome, ok, err};
///
/// let mixed: Vec<Outcome<i32, &str>> = vec![err("a"), ok(2), err("b")];
/// assert_eq!(collect_with(mixed, &AnyOrLast::new()), ok(vec![2]));
///
/// let failures: Vec<Outcome<i32, &str>> = vec![err("a"), err("b")];
/// assert_eq!(collect_with(failures, &AnyOrLast::new()), err("b"));
/// ```
pub struct AnyOrLast<C> {
    marker: PhantomData<fn() -> C>,
}

impl<C> AnyOrLast<C> {
    /// Creates the collector.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<C> Default for AnyOrLast<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for AnyOrLast<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for AnyOrLast<C> {}

impl<C> fmt::Debug for AnyOrLast<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("AnyOrLast")
    }
}

impl<C: Exhaustible> Collector<C> for AnyOrLast<C> {
    type Accumulator = AnyOrLastState<C::Inner, C::Negative>;
    type Output = C::WithType<Vec<C::Inner>>;

    fn accumulate(&self, mut accumulator: Self::Accumulator, item: C) -> Self::Accumulator {
        match item.into_polarity() {
            Ok(payload) => accumulator.positives.push(payload),
            Err(negative) => accumulator.last_negative = Some(negative),
        }
        accumulator
    }

    fn finish(&self, accumulator: Self::Accumulator) -> Self::Output {
        let AnyOrLastState {
            positives,
            last_negative,
        } = accumulator;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "twofold::collect",
            strategy = "any_or_last",
            positives = positives.len(),
            saw_negative = last_negative.is_some(),
            exhausted = positives.is_empty() && last_negative.is_none(),
            "collector finished"
        );

        if !positives.is_empty() {
            return C::positive(positives);
        }
        match last_negative {
            Some(negative) => C::negative(negative),
            None => C::exhausted(),
        }
    }
}
