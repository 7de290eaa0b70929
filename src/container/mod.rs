//! The two container families and their failure model.
//!
//! - [`Maybe`]: a value or nothing (`Present` / `Absent`)
//! - [`Outcome`]: a value or a typed failure (`Success` / `Failure`)
//! - [`Leaf`]: terminal marker for [`Maybe::flatten_deep`] and
//!   [`Outcome::flatten_deep`]
//! - Misuse errors: [`EmptyContainerAccessed`], [`UnexpectedFailure`],
//!   [`UnexpectedSuccess`]
//!
//! Both containers are immutable values. Every combinator consumes its
//! receiver and returns a new container, so a container can be shared across
//! threads whenever its payload can.
//!
//! # Examples
//!
//! ```rust
//! use twofold::container::{Maybe, Outcome};
//! use twofold::{some, ok};
//!
//! let name: Maybe<&str> = some("ferris");
//! let greeting: Outcome<String, &str> = name
//!     .ok_or("anonymous")
//!     .map(|name| format!("hello, {name}"));
//! assert_eq!(greeting, ok("hello, ferris".to_string()));
//! ```

mod error;
mod maybe;
mod nesting;
mod outcome;

pub use error::{
    Describable, EmptyContainerAccessed, GenericFailure, UnexpectedFailure, UnexpectedSuccess,
};
pub use maybe::{IntoIter, Iter, Maybe, none, some};
pub use nesting::{Leaf, NestedMaybe, NestedOutcome};
pub use outcome::{Outcome, err, err_generic, ok, ok_unit};
