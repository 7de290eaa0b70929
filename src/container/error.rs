//! Failure-channel capability and programmer-misuse errors.
//!
//! Two kinds of failure exist in this crate:
//!
//! - **Domain failures** are data: the `Absent` and `Failure(E)` variants.
//!   They flow through combinators and are never raised.
//! - **Misuse** is calling a terminal extractor on the wrong variant. The
//!   panicking extractors (`unwrap`, `expect`, ...) raise the typed errors
//!   below as a panic; the `try_*` extractors hand them back as a `Result`.
//!
//! # Examples
//!
//! ```rust
//! use twofold::{EmptyContainerAccessed, Maybe};
//!
//! let absent: Maybe<i32> = Maybe::Absent;
//! assert_eq!(
//!     absent.try_unwrap(),
//!     Err(EmptyContainerAccessed { reason: None })
//! );
//! ```

use std::fmt;

use thiserror::Error;

/// Capability required of an `Outcome` failure payload.
///
/// A failure only has to be describable: printable for humans through
/// `Display` and for diagnostics through `Debug`. Every such type qualifies,
/// including `String`, `&str` and any `std::error::Error`.
pub trait Describable: fmt::Debug + fmt::Display {}

impl<T: fmt::Debug + fmt::Display + ?Sized> Describable for T {}

/// The canonical failure carried by [`err_generic`](crate::err_generic).
///
/// It also stands in for "no failure was observed" when the any-or-last
/// collector runs over an empty input. All values are equal.
///
/// Converts into `String` and `&'static str` as its display text, so
/// textual failure types can absorb it.
///
/// # Examples
///
/// ```rust
/// use twofold::{GenericFailure, err_generic, Outcome};
///
/// let failed: Outcome<i32, GenericFailure> = err_generic();
/// assert_eq!(failed.unwrap_err().to_string(), "generic failure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("generic failure")]
pub struct GenericFailure;

const GENERIC_FAILURE_TEXT: &str = "generic failure";

impl From<GenericFailure> for String {
    fn from(_: GenericFailure) -> Self {
        Self::from(GENERIC_FAILURE_TEXT)
    }
}

impl From<GenericFailure> for &'static str {
    fn from(_: GenericFailure) -> Self {
        GENERIC_FAILURE_TEXT
    }
}

/// Raised when a value is extracted from an `Absent` [`Maybe`](crate::Maybe).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Error)]
#[error("{}", .reason.as_deref().unwrap_or("called `Maybe::unwrap()` on an `Absent` value"))]
pub struct EmptyContainerAccessed {
    /// Caller supplied reason, set by `expect`.
    pub reason: Option<String>,
}

/// Raised when a success value is extracted from a `Failure`
/// [`Outcome`](crate::Outcome).
///
/// The original failure payload travels with the error as context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error(
    "{}: {failure}",
    .reason.as_deref().unwrap_or("called `Outcome::unwrap()` on a `Failure` value")
)]
pub struct UnexpectedFailure<E> {
    /// Caller supplied reason, set by `expect`.
    pub reason: Option<String>,
    /// The failure payload that was found instead of a success.
    pub failure: E,
}

/// Raised when a failure is extracted from a `Success`
/// [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Error)]
#[error("{}", .reason.as_deref().unwrap_or("called `Outcome::unwrap_err()` on a `Success` value"))]
pub struct UnexpectedSuccess {
    /// Caller supplied reason, set by `expect_err`.
    pub reason: Option<String>,
}

/// Raises a misuse error as a panic at the caller's location.
#[cold]
#[track_caller]
pub(crate) fn raise<X: fmt::Display>(error: X) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(target: "twofold::container", %error, "container misuse");
    panic!("{error}")
}
