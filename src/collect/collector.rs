//! The reduction abstraction behind both collector strategies.
//!
//! A [`Collector`] is a fold with an explicit merge step:
//!
//! ```text
//! supply     : ()                       -> Accumulator
//! accumulate : (Accumulator, Item)      -> Accumulator
//! combine    : (Accumulator, Accumulator) -> Accumulator
//! finish     : Accumulator              -> Output
//! ```
//!
//! Accumulators are [`Monoid`]s, so `combine` is associative with `supply`
//! as its identity, and partial folds may be merged in any grouping. They
//! must however be merged in order: the left partial result always covers
//! earlier elements than the right one.

use crate::typeclass::{Monoid, Semigroup};

/// A fold strategy reducing a sequence of items into one output.
pub trait Collector<Item> {
    /// Intermediate state of a partial fold.
    type Accumulator: Monoid;

    /// The final result.
    type Output;

    /// Folds one more item into a partial result.
    fn accumulate(&self, accumulator: Self::Accumulator, item: Item) -> Self::Accumulator;

    /// Turns a complete fold into the output.
    fn finish(&self, accumulator: Self::Accumulator) -> Self::Output;

    /// The state before any item was seen.
    #[inline]
    fn supply(&self) -> Self::Accumulator {
        Self::Accumulator::empty()
    }

    /// Merges two adjacent partial results; `left` precedes `right`.
    #[inline]
    fn combine(&self, left: Self::Accumulator, right: Self::Accumulator) -> Self::Accumulator {
        left.combine(right)
    }
}

/// Runs `collector` sequentially over `items`.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::{AllOrNothing, collect_with};
/// use twofold::{Maybe, some};
///
/// let all = collect_with(vec![some(1), some(2)], &AllOrNothing::<Maybe<i32>>::new());
/// assert_eq!(all, some(vec![1, 2]));
/// ```
pub fn collect_with<I, C>(items: I, collector: &C) -> C::Output
where
    I: IntoIterator,
    C: Collector<I::Item>,
{
    let accumulator = items
        .into_iter()
        .fold(collector.supply(), |accumulator, item| {
            collector.accumulate(accumulator, item)
        });
    collector.finish(accumulator)
}

/// Runs `collector` as a fork-join reduction on the rayon thread pool.
///
/// Each worker folds a contiguous chunk with `accumulate`, and the partial
/// results are merged in order with `combine`. The output equals that of
/// [`collect_with`] over the same sequence.
///
/// # Examples
///
/// ```rust
/// use twofold::collect::{AnyOrLast, par_collect_with};
/// use twofold::{Maybe, some, none};
///
/// let items: Vec<Maybe<i32>> = vec![some(1), none(), some(3)];
/// let any = par_collect_with(items, &AnyOrLast::<Maybe<i32>>::new());
/// assert_eq!(any, some(vec![1, 3]));
/// ```
#[cfg(feature = "rayon")]
pub fn par_collect_with<I, C>(items: I, collector: &C) -> C::Output
where
    I: rayon::iter::IntoParallelIterator,
    C: Collector<I::Item> + Sync,
    C::Accumulator: Send,
{
    use rayon::iter::ParallelIterator;

    let accumulator = items
        .into_par_iter()
        .fold(
            || collector.supply(),
            |accumulator, item| collector.accumulate(accumulator, item),
        )
        .reduce(
            || collector.supply(),
            |left, right| collector.combine(left, right),
        );
    collector.finish(accumulator)
}
