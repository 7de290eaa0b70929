//! Forwarding traits for building wrapper types.
//!
//! A wrapper that holds a container implements [`ForwardingMaybe`] or
//! [`ForwardingOutcome`] by naming the wrapped container once; the whole
//! combinator surface is then available on the wrapper through the traits'
//! default methods, with no re-implementation.
//!
//! Forwarding adds no state and no behavior of its own: for a wrapper `w`
//! over a container `c`, `w.unwrap() == c.unwrap()` and
//! `w.map(f) == c.map(f)` for every `f`.

mod maybe;
mod outcome;

pub use maybe::ForwardingMaybe;
pub use outcome::ForwardingOutcome;
