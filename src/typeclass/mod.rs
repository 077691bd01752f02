//! Type class traits implemented by [`Maybe`](crate::Maybe) and
//! [`Outcome`](crate::Outcome).
//!
//! - [`Functor`]: Mapping over the present or successful value
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative merging, used to aggregate failing errors
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. The traits
//! here use Generic Associated Types through [`TypeConstructor`], so generic
//! code can be written once over both containers.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::typeclass::{Applicative, Monad};
//! use lambars_outcome::{Maybe, Outcome};
//!
//! fn add_all<M>(first: M, second: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Applicative<Inner = i32>,
//! {
//!     first.map2(second, |a, b| a + b)
//! }
//!
//! assert_eq!(add_all(Maybe::just(1), Maybe::just(2)), Maybe::just(3));
//!
//! let chained: Outcome<i32> = Outcome::success(2).flat_map(|n| Outcome::success(n * 10));
//! assert_eq!(chained, Outcome::success(20));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use semigroup::Semigroup;
