//! # lambars-outcome
//!
//! Optional values and dual-channel outcomes for Rust, with a functional
//! combinator algebra on top.
//!
//! ## Overview
//!
//! The crate is built around two data types:
//!
//! - [`Maybe<T>`](maybe::Maybe): a value that is either present (`Just`) or
//!   absent (`Nothing`).
//! - [`Outcome<T, E>`](outcome::Outcome): either a `Success` carrying a value
//!   or a `Failure` carrying an error, never both.
//!
//! Both types come with map / bind / match / apply / filter / or combinators,
//! conversions between each other and the standard library's `Option` and
//! `Result`, and multi-outcome aggregation. The [`typeclass`] module exposes
//! the same algebra through `Functor`, `Applicative`, `Monad` and
//! `Semigroup` so it can be used generically.
//!
//! ## Feature Flags
//!
//! - `async`: Lifted combinators over futures (`MaybeTask`, `OutcomeTask`)
//! - `derive`: `#[derive(Semigroup)]` for error aggregates
//! - `serde`: Serialization support
//! - `tracing`: Debug events when `attempt` converts a panic into a failure
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_outcome::prelude::*;
//!
//! let squared = Maybe::just(5).map(|x| x * x);
//! assert_eq!(squared.unwrap_value(), 25);
//!
//! let parsed: Outcome<i32> = Maybe::from("42".parse::<i32>().ok())
//!     .to_outcome("not a number".to_string())
//!     .ensure(|n| *n > 0, "must be positive".to_string());
//! assert_eq!(parsed.to_string(), "Success(42)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the data types, the sequence helpers and the type classes.
///
/// # Usage
///
/// ```rust
/// use lambars_outcome::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ContractViolation, ErrorList, Fault};
    pub use crate::iter::MaybeIterator;
    pub use crate::maybe::{AsMaybe, Maybe};
    pub use crate::outcome::{Outcome, UnitOutcome};
    pub use crate::typeclass::*;
    pub use crate::unit::Unit;

    #[cfg(feature = "async")]
    pub use crate::task::*;
}

pub mod config;
pub mod error;
pub mod iter;
pub mod maybe;
pub mod outcome;
pub mod typeclass;
pub mod unit;

#[cfg(feature = "async")]
pub mod task;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "derive")]
pub use lambars_outcome_derive::Semigroup;

pub use maybe::Maybe;
pub use outcome::{Outcome, UnitOutcome};
pub use unit::Unit;
