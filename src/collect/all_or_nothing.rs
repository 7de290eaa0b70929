//! The "and" collector: every element positive, or the first negative.

use std::fmt;
use std::marker::PhantomData;

use super::collector::Collector;
use super::polarity::Polarity;
use crate::typeclass::{Monoid, Semigroup};

/// Partial state of an all-or-nothing fold.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllOrNothingState<T, N> {
    /// Every element so far was positive; payloads in encounter order.
    Collecting(Vec<T>),
    /// A negative element was seen; later elements are ignored.
    Stopped(N),
}

/// The leftmost `Stopped` wins, which keeps the first negative after any
/// regrouping of partial folds.
impl<T, N> Semigroup for AllOrNothingState<T, N> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Stopped(negative), _) | (Self::Collecting(_), Self::Stopped(negative)) => {
                Self::Stopped(negative)
            }
            (Self::Collecting(left), Self::Collecting(right)) => {
                Self::Collecting(left.combine(right))
            }
        }
    }
}

impl<T, N> Monoid for AllOrNothingState<T, N> {
    fn empty() -> Self {
        Self::Collecting(Vec::new())
    }
}

/// Succeeds with all payloads iff every element is positive, otherwise
/// returns the first negative element of a left-to-right scan.
///
/// An empty input succeeds with an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::{AllOrNothing, collect_with};
/// use twofold::{Outcome, ok, err};
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![ok(1), err("first"), err("second")];
/// let collected = collect_with(outcomes, &AllOrNothing::new());
/// assert_eq!(collected, err("first"));
/// ```
pub struct AllOrNothing<C> {
    marker: PhantomData<fn() -> C>,
}

impl<C> AllOrNothing<C> {
    /// Creates the collector.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<C> Default for AllOrNothing<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for AllOrNothing<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for AllOrNothing<C> {}

impl<C> fmt::Debug for AllOrNothing<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("AllOrNothing")
    }
}

impl<C: Polarity> Collector<C> for AllOrNothing<C> {
    type Accumulator = AllOrNothingState<C::Inner, C::Negative>;
    type Output = C::WithType<Vec<C::Inner>>;

    fn accumulate(&self, accumulator: Self::Accumulator, item: C) -> Self::Accumulator {
        match accumulator {
            AllOrNothingState::Collecting(mut payloads) => match item.into_polarity() {
                Ok(payload) => {
                    payloads.push(payload);
                    AllOrNothingState::Collecting(payloads)
                }
                Err(negative) => AllOrNothingState::Stopped(negative),
            },
            stopped @ AllOrNothingState::Stopped(_) => stopped,
        }
    }

    fn finish(&self, accumulator: Self::Accumulator) -> Self::Output {
        match accumulator {
            AllOrNothingState::Collecting(payloads) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    target: "twofold::collect",
                    strategy = "all_or_nothing",
                    positives = payloads.len(),
                    "collector finished with every element positive"
                );
                C::positive(payloads)
            }
            AllOrNothingState::Stopped(negative) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    target: "twofold::collect",
                    strategy = "all_or_nothing",
                    "collector stopped at the first negative element"
                );
                C::negative(negative)
            }
        }
    }
}
