//! # twofold
//!
//! Two algebraic container families with a shared combinator vocabulary:
//!
//! - [`Maybe<T>`]: a value that is either `Present(T)` or `Absent`
//! - [`Outcome<T, E>`]: a computation that ended in `Success(T)` or
//!   `Failure(E)`
//!
//! ## Overview
//!
//! - **Containers**: immutable values with construction, inspection,
//!   transformation, chaining, fallback, extraction and conversion
//!   operations. Combinators never mutate their receiver.
//! - **Collectors**: reduce a sequence of containers to one container with
//!   the all-or-nothing or any-or-last strategy, sequentially or in parallel
//! - **Forwarding**: build wrapper types that expose the full combinator
//!   surface by naming the wrapped container once
//! - **Type classes**: [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid) and
//!   [`TypeConstructor`](typeclass::TypeConstructor), shared by the
//!   containers and the collectors
//!
//! ## Feature Flags
//!
//! - `collect` (default): the collector strategies
//! - `forward` (default): the forwarding traits
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `rayon`: parallel collection (implies `collect`)
//! - `tracing`: diagnostic events for misuse and collector completion
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! fn parse_port(text: &str) -> Outcome<u16, String> {
//!     Maybe::from(text.parse::<u16>().ok()).ok_or_else(|| format!("not a port: {text}"))
//! }
//!
//! assert_eq!(parse_port("8080").map(|port| port + 1), ok(8081));
//! assert!(parse_port("http").is_failure());
//!
//! let ports = Outcome::all_or_nothing(["80", "443"].into_iter().map(parse_port));
//! assert_eq!(ports, ok(vec![80, 443]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their factory functions and the traits
/// needed to call every combinator.
///
/// # Usage
///
/// ```rust
/// use twofold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::{
        Describable, GenericFailure, Leaf, Maybe, Outcome, err, err_generic, none, ok, ok_unit,
        some,
    };
    pub use crate::typeclass::*;

    #[cfg(feature = "collect")]
    pub use crate::collect::{AllOrNothing, AnyOrLast, Collector, collect_with};

    #[cfg(feature = "rayon")]
    pub use crate::collect::par_collect_with;

    #[cfg(feature = "forward")]
    pub use crate::forward::*;
}

pub mod container;
pub mod typeclass;

#[cfg(feature = "collect")]
pub mod collect;

#[cfg(feature = "forward")]
pub mod forward;

pub use container::{
    Describable, EmptyContainerAccessed, GenericFailure, Leaf, Maybe, NestedMaybe, NestedOutcome,
    Outcome, UnexpectedFailure, UnexpectedSuccess, err, err_generic, none, ok, ok_unit, some,
};
