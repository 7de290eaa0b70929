//! Type class traits shared by both container families.
//!
//! - [`TypeConstructor`]: GAT-based higher-kinded type emulation, used by the
//!   collectors to rebuild "the same container with a `Vec` payload"
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! # Examples
//!
//! ```rust
//! use twofold::typeclass::{Semigroup, Monoid};
//!
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//!
//! let numbers: Vec<Vec<i32>> = vec![vec![1], vec![2], vec![3]];
//! assert_eq!(Vec::combine_all(numbers), vec![1, 2, 3]);
//! ```

mod higher;
mod monoid;
mod semigroup;

pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
